//! PDF rasterisation: render selected pages to `DynamicImage` via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` moves the work onto a dedicated
//! thread pool thread designed for blocking operations, preventing the
//! Tokio worker threads from stalling during CPU-heavy rendering.
//!
//! ## Why scale by DPI, not cap pixels?
//!
//! The placement arithmetic downstream converts pixels back to inches as
//! `px / dpi`. That round-trip is only exact when every page is rendered
//! at one uniform scale factor (`dpi / 72`, pdfium's page units being
//! points). A pixel cap would silently change the physical size of large
//! pages and shift them on the slide.

use crate::config::DeckConfig;
use crate::error::{PageError, Pdf2DeckError};
use crate::output::DocumentMetadata;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Points per inch, pdfium's native page unit.
const POINTS_PER_INCH: f32 = 72.0;

/// Rasterise selected pages of a PDF into images.
///
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
///
/// Failing to open the document is fatal; failing to render one page is
/// not — that page comes back as `Err(PageError)` and the rest of the
/// document still converts.
///
/// # Returns
/// One `(page_index_0based, Result<DynamicImage, PageError>)` per
/// requested index, in page order.
pub async fn render_pages(
    pdf_path: &Path,
    config: &DeckConfig,
    page_indices: &[usize],
) -> Result<Vec<(usize, Result<DynamicImage, PageError>)>, Pdf2DeckError> {
    let path = pdf_path.to_path_buf();
    let dpi = config.dpi;
    let password = config.password.clone();
    let indices = page_indices.to_vec();

    tokio::task::spawn_blocking(move || {
        render_pages_blocking(&path, dpi, password.as_deref(), &indices)
    })
    .await
    .map_err(|e| Pdf2DeckError::Internal(format!("Render task panicked: {}", e)))?
}

/// Blocking implementation of page rendering.
fn render_pages_blocking(
    pdf_path: &Path,
    dpi: u32,
    password: Option<&str>,
    page_indices: &[usize],
) -> Result<Vec<(usize, Result<DynamicImage, PageError>)>, Pdf2DeckError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(e, pdf_path, password.is_some()))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    // Uniform scale so that rendered px / dpi equals the page size in inches.
    let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / POINTS_PER_INCH);

    let mut results = Vec::with_capacity(page_indices.len());

    for &idx in page_indices {
        if idx >= total_pages {
            return Err(Pdf2DeckError::PageOutOfRange {
                page: idx + 1,
                total: total_pages,
            });
        }

        let rendered = render_one(&pages, idx, &render_config);
        if let Err(ref e) = rendered {
            warn!("Skipping page {}: {}", idx + 1, e);
        }
        results.push((idx, rendered));
    }

    Ok(results)
}

/// Render a single page, mapping any pdfium error to a `PageError`.
fn render_one(
    pages: &PdfPages<'_>,
    idx: usize,
    render_config: &PdfRenderConfig,
) -> Result<DynamicImage, PageError> {
    let page = pages.get(idx as u16).map_err(|e| PageError::RenderFailed {
        page: idx + 1,
        detail: format!("{:?}", e),
    })?;

    let bitmap = page
        .render_with_config(render_config)
        .map_err(|e| PageError::RenderFailed {
            page: idx + 1,
            detail: format!("{:?}", e),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        idx + 1,
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Map a pdfium load failure onto the password/corrupt error taxonomy.
fn map_load_error(e: PdfiumError, pdf_path: &Path, had_password: bool) -> Pdf2DeckError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        if had_password {
            Pdf2DeckError::WrongPassword {
                path: pdf_path.to_path_buf(),
            }
        } else {
            Pdf2DeckError::PasswordRequired {
                path: pdf_path.to_path_buf(),
            }
        }
    } else {
        Pdf2DeckError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: err_str,
        }
    }
}

/// Extract document metadata from a PDF without rendering pages.
pub async fn extract_metadata(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2DeckError> {
    let path = pdf_path.to_path_buf();
    let pwd = password.map(|s| s.to_string());

    tokio::task::spawn_blocking(move || extract_metadata_blocking(&path, pwd.as_deref()))
        .await
        .map_err(|e| Pdf2DeckError::Internal(format!("Metadata task panicked: {}", e)))?
}

/// Blocking implementation of metadata extraction.
fn extract_metadata_blocking(
    pdf_path: &Path,
    password: Option<&str>,
) -> Result<DocumentMetadata, Pdf2DeckError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(e, pdf_path, password.is_some()))?;

    let metadata = document.metadata();
    let pages = document.pages();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    Ok(DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: pages.len() as usize,
        pdf_version: format!("{:?}", document.version()),
    })
}
