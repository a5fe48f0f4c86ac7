//! Page image preparation: shrink the rendered bitmap and encode PNG.
//!
//! ## Why PNG?
//! Lossless compression preserves text crispness. JPEG artefacts on
//! rendered text look smeared the moment a projector scales the slide.
//!
//! ## Two sizes per page
//! The *physical* size placed on the slide is computed from the original
//! pixel dimensions (`px / dpi × shrink`) so the geometry is exact; the
//! *pixel* size of the embedded image is the rounded `px × shrink`. The
//! two agree to within a pixel, and PowerPoint stretches the picture to
//! the physical frame anyway.

use crate::geometry::scaled_page_size;
use image::{imageops::FilterType, DynamicImage};
use std::io::Cursor;
use tracing::debug;

/// A page image ready to drop into the deck: PNG bytes plus the physical
/// frame it should occupy.
#[derive(Debug, Clone)]
pub struct PreparedPage {
    /// Encoded PNG of the shrunk page bitmap.
    pub png: Vec<u8>,
    /// Frame width in inches.
    pub width_in: f64,
    /// Frame height in inches.
    pub height_in: f64,
}

/// Shrink a rendered page and encode it as PNG.
///
/// `dpi` must be the DPI the page was rendered at — it anchors the
/// pixel-to-inch conversion. A `shrink` of 1.0 skips the resample and
/// encodes the bitmap as-is.
pub fn prepare_page(
    img: &DynamicImage,
    dpi: u32,
    shrink: f64,
) -> Result<PreparedPage, image::ImageError> {
    let (width_in, height_in) = scaled_page_size(img.width(), img.height(), dpi, shrink);

    let target_w = ((f64::from(img.width()) * shrink) as u32).max(1);
    let target_h = ((f64::from(img.height()) * shrink) as u32).max(1);

    let png = if shrink < 1.0 {
        let resized = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
        encode_png(&resized)?
    } else {
        encode_png(img)?
    };

    debug!(
        "Prepared page: {}x{} px → {:.2}x{:.2} in, {} bytes PNG",
        target_w,
        target_h,
        width_in,
        height_in,
        png.len()
    );

    Ok(PreparedPage {
        png,
        width_in,
        height_in,
    })
}

/// Encode an image as PNG bytes.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}
