//! Output types: the assembled deck, per-page placement records, and
//! run statistics.
//!
//! [`DeckOutput`] carries the finished `.pptx` bytes plus one
//! [`PageResult`] per selected page — including the pages that failed, so
//! callers can report partial success instead of guessing which slides are
//! missing. Everything except the raw deck bytes is serde-serialisable for
//! `--json` reporting.

use crate::error::PageError;
use serde::{Deserialize, Serialize};

/// Result of a full conversion run.
#[derive(Debug)]
pub struct DeckOutput {
    /// The finished PowerPoint file, ready to write to disk or stream out.
    pub pptx: Vec<u8>,

    /// One entry per selected page across all input documents, in deck
    /// order. Pages with `error: Some(..)` have no slide in the output.
    pub pages: Vec<PageResult>,

    /// Aggregate statistics for the run.
    pub stats: DeckStats,
}

impl DeckOutput {
    /// Treat any failed page as a fatal error.
    ///
    /// Convenience for callers with zero tolerance: returns the first
    /// page's error if any page failed, otherwise `self` unchanged.
    pub fn into_strict(self) -> Result<DeckOutput, PageError> {
        match self.pages.iter().find_map(|p| p.error.clone()) {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Placement record for a single page.
///
/// Offsets can be negative when the shrunk page plus margin exceeds the
/// slide; the slide then shows the image partially off-edge, exactly as
/// the placement table dictates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// 0-based index of the source document on the command line.
    pub doc_index: usize,

    /// The input path or URL the page came from.
    pub source: String,

    /// 1-indexed page number within its source document.
    pub page_num: usize,

    /// Placed image width in inches (after shrink).
    pub image_width_in: f64,

    /// Placed image height in inches (after shrink).
    pub image_height_in: f64,

    /// Resolved top-left x offset in inches.
    pub offset_x_in: f64,

    /// Resolved top-left y offset in inches.
    pub offset_y_in: f64,

    /// Encoded PNG size in bytes (0 when the page failed).
    pub png_bytes: usize,

    /// Set when the page failed to render or encode; such pages have no
    /// slide in the deck.
    pub error: Option<PageError>,
}

/// Aggregate statistics for a conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckStats {
    /// Number of input documents.
    pub documents: usize,

    /// Pages selected across all documents.
    pub total_pages: usize,

    /// Pages that made it onto a slide.
    pub placed_pages: usize,

    /// Pages that failed to render or encode.
    pub failed_pages: usize,

    /// Size of the finished .pptx in bytes.
    pub output_bytes: usize,

    /// Wall-clock time spent rasterising, in milliseconds.
    pub render_duration_ms: u64,

    /// Wall-clock time spent assembling the ZIP container, in milliseconds.
    pub assemble_duration_ms: u64,

    /// End-to-end wall-clock time, in milliseconds.
    pub total_duration_ms: u64,
}

/// Document metadata extracted from a PDF's info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}
