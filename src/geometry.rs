//! Slide geometry: size presets and picture placement.
//!
//! Everything in this module is a pure function of its arguments — no I/O,
//! no shared state — so the pipeline can call it per page, in any order,
//! without coordination.
//!
//! ## Units
//!
//! All widths, heights, and offsets are physical **inches**. The deck
//! writer converts to EMU (914 400 per inch) at the last moment; keeping
//! the arithmetic in inches keeps the placement table readable against the
//! PowerPoint UI, which also shows inches.
//!
//! ## No bounds clamping
//!
//! When the image plus its 0.5 in margin does not fit the slide, the
//! offsets go negative and the picture hangs off the slide edge. That is
//! the documented contract: callers who want the image to fit choose a
//! smaller shrink ratio.

use crate::error::Pdf2DeckError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed margin, in inches, between an edge-anchored picture and the slide
/// edge. Centered anchors ignore it on the centered axis.
pub const EDGE_MARGIN_IN: f64 = 0.5;

/// English Metric Units per inch — the native unit of OOXML drawing.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert inches to EMU, rounding to the nearest unit.
///
/// Negative values survive the conversion: an unclamped off-slide offset
/// stays off-slide in the XML.
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

// ── Slide size presets ───────────────────────────────────────────────────

/// A named slide-size preset.
///
/// The set is closed; each variant maps to a fixed (width, height) pair in
/// inches. `SixteenByNine` is exactly 13.33 in wide — the value PowerPoint
/// shows for the classic on-screen 16:9 page, not the 13⅓ in it stores
/// internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideSize {
    /// 10 × 7.5 in (default).
    #[default]
    FourByThree,
    /// 13.33 × 7.5 in.
    SixteenByNine,
    /// 16 × 9 in.
    Widescreen,
}

impl SlideSize {
    /// All presets, in presentation order.
    pub const ALL: [SlideSize; 3] = [
        SlideSize::FourByThree,
        SlideSize::SixteenByNine,
        SlideSize::Widescreen,
    ];

    /// Slide (width, height) in inches.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            SlideSize::FourByThree => (10.0, 7.5),
            SlideSize::SixteenByNine => (13.33, 7.5),
            SlideSize::Widescreen => (16.0, 9.0),
        }
    }

    /// The user-facing label, as it appears in pickers and on the CLI.
    pub fn label(self) -> &'static str {
        match self {
            SlideSize::FourByThree => "4:3",
            SlideSize::SixteenByNine => "16:9",
            SlideSize::Widescreen => "Widescreen",
        }
    }

    /// Resolve a label to a preset.
    ///
    /// Matching is case-insensitive on the word form (`widescreen`); the
    /// ratio forms (`4:3`, `16:9`) must be exact.
    pub fn from_label(label: &str) -> Result<Self, Pdf2DeckError> {
        match label.trim() {
            "4:3" => Ok(SlideSize::FourByThree),
            "16:9" => Ok(SlideSize::SixteenByNine),
            s if s.eq_ignore_ascii_case("widescreen") => Ok(SlideSize::Widescreen),
            other => Err(Pdf2DeckError::UnknownPreset {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SlideSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a slide-size label to (width, height) in inches.
///
/// String-keyed convenience over [`SlideSize::from_label`] +
/// [`SlideSize::dimensions`], for callers that carry the preset as text
/// (forms, config files).
///
/// # Errors
/// [`Pdf2DeckError::UnknownPreset`] when the label is not one of
/// `4:3`, `16:9`, `Widescreen`.
pub fn resolve_slide_size(label: &str) -> Result<(f64, f64), Pdf2DeckError> {
    SlideSize::from_label(label).map(SlideSize::dimensions)
}

// ── Placement anchors ────────────────────────────────────────────────────

/// A named picture-placement policy on the slide.
///
/// Seven anchors: the four corners sit [`EDGE_MARGIN_IN`] in from both
/// edges; `TopMiddle` / `BottomMiddle` center horizontally and keep the
/// margin vertically; `Center` centers both axes with no margin at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Exact arithmetic centering on both axes (default).
    #[default]
    Center,
    TopMiddle,
    BottomMiddle,
}

impl Placement {
    /// All anchors, in presentation order.
    pub const ALL: [Placement; 7] = [
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomRight,
        Placement::Center,
        Placement::TopMiddle,
        Placement::BottomMiddle,
    ];

    /// The user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Placement::TopLeft => "Top Left",
            Placement::TopRight => "Top Right",
            Placement::BottomLeft => "Bottom Left",
            Placement::BottomRight => "Bottom Right",
            Placement::Center => "Center",
            Placement::TopMiddle => "Top Middle",
            Placement::BottomMiddle => "Bottom Middle",
        }
    }

    /// Resolve a label to an anchor.
    ///
    /// Accepts the display form (`Top Left`) and the CLI form
    /// (`top-left`), case-insensitively.
    pub fn from_label(label: &str) -> Result<Self, Pdf2DeckError> {
        let key = label.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.as_str() {
            "top left" => Ok(Placement::TopLeft),
            "top right" => Ok(Placement::TopRight),
            "bottom left" => Ok(Placement::BottomLeft),
            "bottom right" => Ok(Placement::BottomRight),
            "center" => Ok(Placement::Center),
            "top middle" => Ok(Placement::TopMiddle),
            "bottom middle" => Ok(Placement::BottomMiddle),
            _ => Err(Pdf2DeckError::UnknownAnchor {
                label: label.trim().to_string(),
            }),
        }
    }

    /// Top-left (x, y) offset, in inches, at which to draw an
    /// `img_w × img_h` picture on a `slide_w × slide_h` slide so that it
    /// sits at this anchor.
    ///
    /// No clamping: an image wider than `slide_w − 2 × 0.5` produces a
    /// negative or off-slide x on the edge anchors.
    pub fn offset(self, img_w: f64, img_h: f64, slide_w: f64, slide_h: f64) -> (f64, f64) {
        let m = EDGE_MARGIN_IN;
        match self {
            Placement::TopLeft => (m, m),
            Placement::TopRight => (slide_w - img_w - m, m),
            Placement::BottomLeft => (m, slide_h - img_h - m),
            Placement::BottomRight => (slide_w - img_w - m, slide_h - img_h - m),
            Placement::Center => ((slide_w - img_w) / 2.0, (slide_h - img_h) / 2.0),
            Placement::TopMiddle => ((slide_w - img_w) / 2.0, m),
            Placement::BottomMiddle => ((slide_w - img_w) / 2.0, slide_h - img_h - m),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the top-left placement offset for an image on a slide.
///
/// String-keyed convenience over [`Placement::from_label`] +
/// [`Placement::offset`]. All dimensions in inches.
///
/// # Errors
/// [`Pdf2DeckError::UnknownAnchor`] when the label names no anchor.
pub fn compute_placement(
    label: &str,
    image_width: f64,
    image_height: f64,
    slide_width: f64,
    slide_height: f64,
) -> Result<(f64, f64), Pdf2DeckError> {
    Placement::from_label(label)
        .map(|p| p.offset(image_width, image_height, slide_width, slide_height))
}

/// Physical size, in inches, of a page rendered at `dpi` and scaled by
/// `shrink`.
///
/// This is the bridge from the rasteriser's pixel world into the placement
/// arithmetic above: `px / dpi` inches at native size, then the shrink
/// ratio applied to both axes so aspect ratio is preserved.
pub fn scaled_page_size(px_w: u32, px_h: u32, dpi: u32, shrink: f64) -> (f64, f64) {
    let dpi = f64::from(dpi);
    (
        f64::from(px_w) / dpi * shrink,
        f64::from(px_h) / dpi * shrink,
    )
}
