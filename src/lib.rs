//! # pdf2deck
//!
//! Merge PDF documents into a single PowerPoint deck, one page per slide.
//!
//! ## Why this crate?
//!
//! Reviewing a stack of PDFs in a meeting means either screen-sharing a
//! PDF reader or pasting screenshots into slides by hand. This crate does
//! the pasting: every page is rasterised, shrunk to leave room for
//! annotations, and placed at a fixed anchor on a colored slide — so the
//! result drops straight into an existing presentation workflow.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDFs
//!  │
//!  ├─ 1. Input   resolve local files or download from URLs
//!  ├─ 2. Render  rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 3. Resize  shrink ratio + lossless PNG encode
//!  ├─ 4. Place   preset slide size + anchor → top-left offset in inches
//!  └─ 5. Deck    one slide per page, solid background, single .pptx out
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2deck::{convert_to_file, DeckConfig, Placement, SlideSize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeckConfig::builder()
//!         .slide_size(SlideSize::SixteenByNine)
//!         .placement(Placement::TopLeft)
//!         .shrink(0.5)
//!         .build()?;
//!     let stats = convert_to_file(&["a.pdf", "b.pdf"], "merged_deck.pptx", &config).await?;
//!     eprintln!("{} slides written", stats.placed_pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Placement model
//!
//! The slide is sized by a named preset (`4:3` → 10 × 7.5 in, `16:9` →
//! 13.33 × 7.5 in, `Widescreen` → 16 × 9 in). Each page image keeps its
//! aspect ratio and occupies `pixels / dpi × shrink` inches; the anchor
//! then fixes its top-left corner — corners sit 0.5 in from the edges,
//! centered anchors split the leftover space exactly. Offsets are never
//! clamped: a page too large for its slide hangs off the edge rather than
//! being silently rescaled.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2deck` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2deck = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BackgroundColor, DeckConfig, DeckConfigBuilder, PageSelection};
pub use convert::{convert, convert_from_bytes, convert_sync, convert_to_file, inspect};
pub use error::{PageError, Pdf2DeckError};
pub use geometry::{compute_placement, resolve_slide_size, Placement, SlideSize};
pub use output::{DeckOutput, DeckStats, DocumentMetadata, PageResult};
pub use progress::{DeckProgressCallback, NoopProgressCallback, ProgressCallback};
