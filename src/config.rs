//! Configuration types for PDF-to-deck conversion.
//!
//! All conversion behaviour is controlled through [`DeckConfig`], built via
//! its [`DeckConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across threads, serialise them for logging, and
//! diff two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! A ten-field constructor is unreadable and breaks on every new field.
//! The builder pattern lets callers set only what they care about and rely
//! on well-documented defaults for the rest.

use crate::error::Pdf2DeckError;
use crate::geometry::{Placement, SlideSize};
use crate::progress::DeckProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Configuration for a PDF-to-deck conversion.
///
/// Built via [`DeckConfig::builder()`] or using [`DeckConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2deck::{DeckConfig, Placement, SlideSize};
///
/// let config = DeckConfig::builder()
///     .slide_size(SlideSize::SixteenByNine)
///     .placement(Placement::TopLeft)
///     .shrink(0.75)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DeckConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–400. Default: 150.
    ///
    /// 150 DPI keeps a letter page around 1275 × 1650 px — sharp on a
    /// projector without bloating the .pptx. The DPI also fixes the
    /// pixel-to-inch conversion, so changing it does not change where a
    /// page lands on the slide, only how crisp it looks.
    pub dpi: u32,

    /// Shrink ratio in (0, 1] applied to each page before placement. Default: 0.5.
    ///
    /// A page rendered at `dpi` occupies `px / dpi` inches at ratio 1.0;
    /// the ratio scales both axes equally, so aspect ratio is always
    /// preserved. At 0.5 a letter page becomes 4.25 × 5.5 in, leaving room
    /// for annotations around it — the point of this tool.
    pub shrink: f64,

    /// Slide-size preset for every slide in the deck. Default: 4:3.
    pub slide_size: SlideSize,

    /// Anchor at which each page image is placed. Default: Center.
    pub placement: Placement,

    /// Solid background fill behind the page image. Default: White.
    pub background: BackgroundColor,

    /// Page selection, applied to each input document. Default: All pages.
    pub pages: PageSelection,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Download timeout for URL inputs in seconds. Default: 120.
    pub download_timeout_secs: u64,

    /// Progress callback fired per page. Default: none.
    pub progress: Option<Arc<dyn DeckProgressCallback>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            dpi: 150,
            shrink: 0.5,
            slide_size: SlideSize::default(),
            placement: Placement::default(),
            background: BackgroundColor::default(),
            pages: PageSelection::default(),
            password: None,
            download_timeout_secs: 120,
            progress: None,
        }
    }
}

impl fmt::Debug for DeckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckConfig")
            .field("dpi", &self.dpi)
            .field("shrink", &self.shrink)
            .field("slide_size", &self.slide_size)
            .field("placement", &self.placement)
            .field("background", &self.background)
            .field("pages", &self.pages)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn DeckProgressCallback>"))
            .finish()
    }
}

impl DeckConfig {
    /// Create a new builder for `DeckConfig`.
    pub fn builder() -> DeckConfigBuilder {
        DeckConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`DeckConfig`].
#[derive(Debug)]
pub struct DeckConfigBuilder {
    config: DeckConfig,
}

impl DeckConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 400);
        self
    }

    pub fn shrink(mut self, ratio: f64) -> Self {
        self.config.shrink = ratio;
        self
    }

    /// Shrink expressed as a percentage (the form the original UI used).
    pub fn shrink_percent(mut self, percent: u32) -> Self {
        self.config.shrink = f64::from(percent) / 100.0;
        self
    }

    pub fn slide_size(mut self, size: SlideSize) -> Self {
        self.config.slide_size = size;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn background(mut self, color: BackgroundColor) -> Self {
        self.config.background = color;
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = secs;
        self
    }

    pub fn progress(mut self, cb: Arc<dyn DeckProgressCallback>) -> Self {
        self.config.progress = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<DeckConfig, Pdf2DeckError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 400 {
            return Err(Pdf2DeckError::InvalidConfig(format!(
                "DPI must be 72–400, got {}",
                c.dpi
            )));
        }
        if !(c.shrink > 0.0 && c.shrink <= 1.0) {
            return Err(Pdf2DeckError::InvalidConfig(format!(
                "Shrink ratio must be in (0, 1], got {}",
                c.shrink
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Solid background fill behind each placed page.
///
/// The named variants are the original tool's fixed palette; `Custom`
/// admits any RGB triple so the CLI can accept raw hex without growing the
/// named set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundColor {
    /// FFFFFF (default).
    #[default]
    White,
    /// D3D3D3.
    LightGray,
    /// ADD8E6.
    LightBlue,
    /// FFFF99.
    Yellow,
    /// Any RGB triple.
    Custom([u8; 3]),
}

impl BackgroundColor {
    /// Uppercase RRGGBB hex, as OOXML `srgbClr` wants it.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("{r:02X}{g:02X}{b:02X}")
    }

    /// The RGB triple.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            BackgroundColor::White => [0xFF, 0xFF, 0xFF],
            BackgroundColor::LightGray => [0xD3, 0xD3, 0xD3],
            BackgroundColor::LightBlue => [0xAD, 0xD8, 0xE6],
            BackgroundColor::Yellow => [0xFF, 0xFF, 0x99],
            BackgroundColor::Custom(rgb) => rgb,
        }
    }

    /// Parse a color label: a named color (case-insensitive) or an
    /// `RRGGBB` / `#RRGGBB` hex string.
    pub fn from_label(label: &str) -> Result<Self, Pdf2DeckError> {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(BackgroundColor::White),
            "lightgray" | "lightgrey" => return Ok(BackgroundColor::LightGray),
            "lightblue" => return Ok(BackgroundColor::LightBlue),
            "yellow" => return Ok(BackgroundColor::Yellow),
            _ => {}
        }
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
            return Ok(BackgroundColor::Custom([
                parse(&hex[0..2]),
                parse(&hex[2..4]),
                parse(&hex[4..6]),
            ]));
        }
        Err(Pdf2DeckError::UnknownColor {
            label: trimmed.to_string(),
        })
    }
}

/// Specifies which pages of each input PDF to convert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum PageSelection {
    /// Convert all pages (default).
    #[default]
    All,
    /// Convert a single page (1-indexed).
    Single(usize),
    /// Convert a contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Convert specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed
    /// page numbers for a document of `total_pages`.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = match self {
            PageSelection::All => (0..total_pages).collect(),
            PageSelection::Single(p) => {
                if *p >= 1 && *p <= total_pages {
                    vec![p - 1]
                } else {
                    vec![]
                }
            }
            PageSelection::Range(start, end) => {
                let s = (*start).max(1) - 1;
                let e = (*end).min(total_pages);
                (s..e).collect()
            }
            PageSelection::Set(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total_pages)
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
