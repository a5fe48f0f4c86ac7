//! Conversion entry points: PDFs in, one deck out.
//!
//! ## Why eager only?
//!
//! The deck is a single indivisible artifact — a half-written `.pptx` is
//! useless — so there is nothing meaningful to stream. The pipeline
//! collects every page into memory, assembles once, and returns. Peak
//! memory is one shrunk PNG per page, which even for a 500-page document
//! stays far below what the rasteriser itself needs per page.

use crate::config::DeckConfig;
use crate::error::{PageError, Pdf2DeckError};
use crate::output::{DeckOutput, DeckStats, DocumentMetadata, PageResult};
use crate::pipeline::deck::{self, SlideImage};
use crate::pipeline::resize::{self, PreparedPage};
use crate::pipeline::{input, render};
use futures::stream::{self, StreamExt};
use image::DynamicImage;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert one or more PDF files or URLs into a single deck.
///
/// This is the primary entry point for the library. Documents are merged
/// in input order; each selected page becomes one slide.
///
/// # Arguments
/// * `inputs` — Local file paths and/or HTTP/HTTPS URLs to PDFs
/// * `config` — Conversion configuration
///
/// # Returns
/// `Ok(DeckOutput)` on success, even if some pages failed
/// (check `output.stats.failed_pages`).
///
/// # Errors
/// Returns `Err(Pdf2DeckError)` only for fatal errors:
/// - No inputs, file not found, permission denied
/// - Not a valid PDF, wrong password
/// - All pages failed and the deck would be empty
pub async fn convert(
    inputs: &[impl AsRef<str>],
    config: &DeckConfig,
) -> Result<DeckOutput, Pdf2DeckError> {
    let total_start = Instant::now();

    if inputs.is_empty() {
        return Err(Pdf2DeckError::InvalidConfig(
            "At least one input PDF is required".into(),
        ));
    }
    info!("Starting conversion of {} document(s)", inputs.len());

    // ── Step 1: Resolve inputs ───────────────────────────────────────────
    let resolved = input::resolve_inputs(inputs, config.download_timeout_secs).await?;

    // ── Step 2: Page counts and per-document selections ──────────────────
    let mut selections: Vec<Vec<usize>> = Vec::with_capacity(resolved.len());
    for (i, doc) in resolved.iter().enumerate() {
        let meta = render::extract_metadata(doc.path(), config.password.as_deref()).await?;
        let indices = config.pages.to_indices(meta.page_count);
        if indices.is_empty() {
            return Err(Pdf2DeckError::PageOutOfRange {
                page: 0,
                total: meta.page_count,
            });
        }
        debug!(
            "Document {}: {} pages, {} selected",
            i + 1,
            meta.page_count,
            indices.len()
        );
        selections.push(indices);
    }
    let total_pages: usize = selections.iter().map(Vec::len).sum();

    if let Some(ref cb) = config.progress {
        cb.on_conversion_start(total_pages);
    }

    // ── Step 3: Rasterise, document by document ──────────────────────────
    // pdfium holds thread-local state, so documents render sequentially;
    // the shrink/encode stage below restores parallelism where it pays.
    let render_start = Instant::now();
    let mut work: Vec<RenderedPage> = Vec::with_capacity(total_pages);
    for (doc_index, (doc, indices)) in resolved.iter().zip(&selections).enumerate() {
        let rendered = render::render_pages(doc.path(), config, indices).await?;
        for (page_idx, result) in rendered {
            work.push(RenderedPage {
                deck_num: work.len() + 1,
                doc_index,
                source: inputs[doc_index].as_ref().to_string(),
                page_num: page_idx + 1,
                result,
            });
        }
    }
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    info!("Rendered {} pages in {}ms", work.len(), render_duration_ms);

    // ── Step 4: Shrink + encode concurrently, then place ─────────────────
    let parallelism = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    let mut prepared: Vec<PreparedResult> = stream::iter(work.into_iter().map(|page| {
        let config = config.clone();
        async move { prepare_one(page, &config, total_pages).await }
    }))
    .buffer_unordered(parallelism)
    .collect()
    .await;

    // buffer_unordered scrambles completion order; slides must follow
    // input order.
    prepared.sort_by_key(|p| (p.doc_index, p.page_num));

    let placed = prepared.iter().filter(|p| p.error.is_none()).count();
    let failed = prepared.len() - placed;

    if let Some(ref cb) = config.progress {
        cb.on_conversion_complete(total_pages, placed);
    }

    if placed == 0 {
        let first_error = prepared
            .iter()
            .find_map(|p| p.error.as_ref())
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(Pdf2DeckError::AllPagesFailed {
            total: prepared.len(),
            first_error,
        });
    }

    // ── Step 5: Assemble the deck ────────────────────────────────────────
    let assemble_start = Instant::now();
    let slides: Vec<SlideImage> = prepared
        .iter()
        .filter(|p| p.error.is_none())
        .map(|p| SlideImage {
            png: p.png.clone(),
            offset_x_in: p.offset_x_in,
            offset_y_in: p.offset_y_in,
            width_in: p.image_width_in,
            height_in: p.image_height_in,
        })
        .collect();
    let pptx = deck::assemble_deck(&slides, config.slide_size, config.background)?;
    let assemble_duration_ms = assemble_start.elapsed().as_millis() as u64;

    // ── Step 6: Stats ────────────────────────────────────────────────────
    let stats = DeckStats {
        documents: resolved.len(),
        total_pages,
        placed_pages: placed,
        failed_pages: failed,
        output_bytes: pptx.len(),
        render_duration_ms,
        assemble_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Deck complete: {}/{} pages, {} bytes, {}ms total",
        placed, total_pages, stats.output_bytes, stats.total_duration_ms
    );

    Ok(DeckOutput {
        pptx,
        pages: prepared.into_iter().map(PageResult::from).collect(),
        stats,
    })
}

/// A rendered (or failed) page waiting for the shrink/encode stage.
struct RenderedPage {
    /// 1-indexed position in the deck, across all documents.
    deck_num: usize,
    doc_index: usize,
    source: String,
    page_num: usize,
    result: Result<DynamicImage, PageError>,
}

/// Internal page record: the public [`PageResult`] plus the PNG bytes the
/// deck writer needs.
struct PreparedResult {
    doc_index: usize,
    source: String,
    page_num: usize,
    image_width_in: f64,
    image_height_in: f64,
    offset_x_in: f64,
    offset_y_in: f64,
    png: Vec<u8>,
    error: Option<PageError>,
}

impl From<PreparedResult> for PageResult {
    fn from(p: PreparedResult) -> Self {
        PageResult {
            doc_index: p.doc_index,
            source: p.source,
            page_num: p.page_num,
            image_width_in: p.image_width_in,
            image_height_in: p.image_height_in,
            offset_x_in: p.offset_x_in,
            offset_y_in: p.offset_y_in,
            png_bytes: p.png.len(),
            error: p.error,
        }
    }
}

/// Shrink, encode, and place one rendered page.
async fn prepare_one(page: RenderedPage, config: &DeckConfig, total: usize) -> PreparedResult {
    let RenderedPage {
        deck_num,
        doc_index,
        source,
        page_num,
        result,
    } = page;
    let (slide_w, slide_h) = config.slide_size.dimensions();

    if let Some(ref cb) = config.progress {
        cb.on_page_start(deck_num, total);
    }

    let failed = |err: PageError| PreparedResult {
        doc_index,
        source: source.clone(),
        page_num,
        image_width_in: 0.0,
        image_height_in: 0.0,
        offset_x_in: 0.0,
        offset_y_in: 0.0,
        png: Vec::new(),
        error: Some(err),
    };

    let image = match result {
        Ok(img) => img,
        Err(e) => {
            if let Some(ref cb) = config.progress {
                cb.on_page_error(deck_num, total, &e.to_string());
            }
            return failed(e);
        }
    };

    let dpi = config.dpi;
    let shrink = config.shrink;
    let prepared = tokio::task::spawn_blocking(move || resize::prepare_page(&image, dpi, shrink))
        .await
        .map_err(|e| PageError::EncodeFailed {
            page: page_num,
            detail: format!("encode task panicked: {e}"),
        })
        .and_then(|r| {
            r.map_err(|e| PageError::EncodeFailed {
                page: page_num,
                detail: e.to_string(),
            })
        });

    let PreparedPage {
        png,
        width_in,
        height_in,
    } = match prepared {
        Ok(p) => p,
        Err(e) => {
            warn!("Skipping page {}: {}", page_num, e);
            if let Some(ref cb) = config.progress {
                cb.on_page_error(deck_num, total, &e.to_string());
            }
            return failed(e);
        }
    };

    let (x, y) = config.placement.offset(width_in, height_in, slide_w, slide_h);

    if let Some(ref cb) = config.progress {
        cb.on_page_complete(deck_num, total, png.len());
    }

    PreparedResult {
        doc_index,
        source,
        page_num,
        image_width_in: width_in,
        image_height_in: height_in,
        offset_x_in: x,
        offset_y_in: y,
        png,
        error: None,
    }
}

/// Convert PDFs and write the deck directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn convert_to_file(
    inputs: &[impl AsRef<str>],
    output_path: impl AsRef<Path>,
    config: &DeckConfig,
) -> Result<DeckStats, Pdf2DeckError> {
    let output = convert(inputs, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Pdf2DeckError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("pptx.tmp");
    tokio::fs::write(&tmp_path, &output.pptx)
        .await
        .map_err(|e| Pdf2DeckError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Pdf2DeckError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(output.stats)
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    inputs: &[impl AsRef<str>],
    config: &DeckConfig,
) -> Result<DeckOutput, Pdf2DeckError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2DeckError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(inputs, config))
}

/// Convert in-memory PDF documents into a deck.
///
/// Avoids the need for the caller to create temporary files: each byte
/// buffer is written to a managed [`tempfile`] and cleaned up
/// automatically on return or panic.
///
/// This is the recommended API when PDF data comes from an upload
/// handler, database, or network stream rather than files on disk.
pub async fn convert_from_bytes(
    documents: &[Vec<u8>],
    config: &DeckConfig,
) -> Result<DeckOutput, Pdf2DeckError> {
    let mut tmps = Vec::with_capacity(documents.len());
    let mut paths = Vec::with_capacity(documents.len());
    for bytes in documents {
        let mut tmp = tempfile::NamedTempFile::new()
            .map_err(|e| Pdf2DeckError::Internal(format!("tempfile: {e}")))?;
        tmp.write_all(bytes)
            .map_err(|e| Pdf2DeckError::Internal(format!("tempfile write: {e}")))?;
        paths.push(tmp.path().to_string_lossy().to_string());
        tmps.push(tmp);
    }
    // `tmps` is dropped (and the files deleted) when `convert` returns
    convert(&paths, config).await
}

/// Extract PDF metadata without converting content.
pub async fn inspect(input_str: impl AsRef<str>) -> Result<DocumentMetadata, Pdf2DeckError> {
    let resolved = input::resolve_input(input_str.as_ref(), 120).await?;
    render::extract_metadata(resolved.path(), None).await
}
