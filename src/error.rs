//! Error types for the pdf2deck library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2DeckError`] — **Fatal**: the conversion cannot proceed at all
//!   (bad input file, wrong password, unknown preset label). Returned as
//!   `Err(Pdf2DeckError)` from the top-level `convert*` functions.
//!
//! * [`PageError`] — **Non-fatal**: a single page failed (render glitch,
//!   encoder hiccup) but all other pages are fine. Stored inside
//!   [`crate::output::PageResult`] so callers can inspect partial success
//!   rather than losing the whole deck to one bad page.
//!
//! The separation lets callers decide their own tolerance: abort on the
//! first page failure, log and continue, or collect all errors for a
//! post-run report.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2deck library.
///
/// Page-level failures use [`PageError`] and are stored in
/// [`crate::output::PageResult`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Pdf2DeckError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input string is not a valid file path or URL.
    #[error("Invalid input '{input}': not a file path or a valid HTTP/HTTPS URL")]
    InvalidInput { input: String },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'\nIncrease --download-timeout.")]
    DownloadTimeout { url: String, secs: u64 },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// Selected page numbers exceed the actual page count.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium-render returned an error for a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    // ── Geometry errors ───────────────────────────────────────────────────
    /// Slide-size label is not in the preset table.
    #[error("Unknown slide size '{label}'\nValid presets: 4:3, 16:9, Widescreen")]
    UnknownPreset { label: String },

    /// Placement label names no anchor.
    #[error("Unknown placement '{label}'\nValid anchors: Top Left, Top Right, Bottom Left, Bottom Right, Center, Top Middle, Bottom Middle")]
    UnknownAnchor { label: String },

    /// Background-color label is neither a named color nor RRGGBB hex.
    #[error("Unknown background color '{label}'\nValid colors: White, LightGray, LightBlue, Yellow, or RRGGBB hex")]
    UnknownColor { label: String },

    // ── Deck errors ───────────────────────────────────────────────────────
    /// Every page failed; the deck would be empty.
    #[error("All {total} pages failed to render.\nFirst error: {first_error}")]
    AllPagesFailed { total: usize, first_error: String },

    /// The ZIP container or an OOXML part could not be written.
    #[error("Failed to assemble the deck: {detail}")]
    DeckWriteFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output .pptx file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Install pdfium and point PDFIUM_LIB_PATH at it, or place libpdfium next to\n\
the executable. Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single page.
///
/// Stored alongside [`crate::output::PageResult`] when a page fails.
/// The overall conversion continues unless ALL pages fail.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// Page rasterisation failed.
    #[error("Page {page}: rasterisation failed: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// Shrinking or PNG-encoding the rendered bitmap failed.
    #[error("Page {page}: image encoding failed: {detail}")]
    EncodeFailed { page: usize, detail: String },
}
