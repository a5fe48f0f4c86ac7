//! CLI binary for pdf2deck.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `DeckConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2deck::{
    convert_to_file, inspect, BackgroundColor, DeckConfig, DeckProgressCallback, PageSelection,
    Placement, ProgressCallback, SlideSize,
};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar fed by the
/// per-page events. Pages can complete out-of-order (the shrink/encode
/// stage is concurrent), so the bar only ever increments.
struct CliProgressCallback {
    /// The single progress bar anchored at the bottom of the terminal.
    bar: ProgressBar,
    /// Count of pages that errored out.
    errors: AtomicUsize,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically
    /// by `on_conversion_start` (called before any pages are processed).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_conversion_start

        // Initial style: spinner only (no counter until we know the total).
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDFs…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  \
             ⏱ {elapsed_precise}  ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Placing");
        self.bar.reset_eta();
    }
}

impl DeckProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        // Switch from spinner-only style to full progress bar now that we
        // know the actual page count.
        self.activate_bar(total_pages);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Placing {total_pages} pages onto slides…"))
        ));
    }

    fn on_page_start(&self, page_num: usize, _total: usize) {
        self.bar.set_message(format!("page {page_num}"));
    }

    fn on_page_complete(&self, page_num: usize, total: usize, png_bytes: usize) {
        self.bar.println(format!(
            "  {} Slide {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total,
            dim(&format!("{:>6} KiB image", png_bytes / 1024)),
        ));
        self.bar.inc(1);
    }

    fn on_page_error(&self, page_num: usize, total: usize, error: &str) {
        self.errors.fetch_add(1, Ordering::SeqCst);

        // Truncate very long error messages to keep output tidy.
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error.to_string()
        };

        self.bar.println(format!(
            "  {} Slide {:>3}/{:<3}  {}",
            red("✗"),
            page_num,
            total,
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, total_pages: usize, success_count: usize) {
        let failed = total_pages.saturating_sub(success_count);
        self.bar.finish_and_clear();

        if failed == 0 {
            eprintln!(
                "{} {} pages placed successfully",
                green("✔"),
                bold(&success_count.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} pages placed  ({} failed)",
                if failed == total_pages {
                    red("✘")
                } else {
                    cyan("⚠")
                },
                bold(&success_count.to_string()),
                total_pages,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Merge two PDFs into one deck, defaults (4:3, centered, 50% shrink)
  pdf2deck report.pdf appendix.pdf -o review.pptx

  # Widescreen slides, pages pinned top-left on light gray
  pdf2deck --slide-size widescreen --placement top-left --background lightgray notes.pdf

  # Keep pages large: 75% shrink on a 16:9 slide
  pdf2deck --slide-size 16:9 --shrink 75 handout.pdf -o handout.pptx

  # Specific pages only
  pdf2deck --pages 1-5 paper.pdf -o intro.pptx

  # Convert from a URL
  pdf2deck https://arxiv.org/pdf/1706.03762 -o attention.pptx

  # Inspect PDF metadata (no conversion)
  pdf2deck --inspect-only document.pdf

SLIDE SIZES:
  4:3          10   × 7.5 in
  16:9         13.33 × 7.5 in
  widescreen   16   × 9 in

PLACEMENTS:
  top-left, top-right, bottom-left, bottom-right,
  center, top-middle, bottom-middle

  Corner and middle anchors keep a fixed 0.5 in margin from the slide
  edge; center splits the free space exactly. Offsets are never clamped:
  a page too large for the slide hangs off the edge.

BACKGROUND COLORS:
  white, lightgray, lightblue, yellow, or any RRGGBB hex value

SETUP:
  pdfium is loaded at startup. If it is not found, point PDFIUM_LIB_PATH
  at a libpdfium build (https://github.com/bblanchon/pdfium-binaries).
"#;

/// Merge PDF files and URLs into a single PowerPoint deck.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2deck",
    version,
    about = "Merge PDF files and URLs into a single PowerPoint deck",
    long_about = "Merge PDF documents (local files or URLs) into one .pptx slide deck. Every \
selected page is rasterised, shrunk, and placed at a fixed anchor on a colored slide, ready \
for annotation in PowerPoint, Keynote, or LibreOffice.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file paths or HTTP/HTTPS URLs, merged in order.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Write the deck to this file.
    #[arg(short, long, env = "PDF2DECK_OUTPUT", default_value = "merged_deck.pptx")]
    output: PathBuf,

    /// Slide size: 4:3, 16:9, or widescreen.
    #[arg(long, env = "PDF2DECK_SLIDE_SIZE", default_value = "4:3")]
    slide_size: String,

    /// Placement anchor: top-left, top-right, bottom-left, bottom-right,
    /// center, top-middle, bottom-middle.
    #[arg(long, env = "PDF2DECK_PLACEMENT", default_value = "center")]
    placement: String,

    /// Background color: white, lightgray, lightblue, yellow, or RRGGBB hex.
    #[arg(long, env = "PDF2DECK_BACKGROUND", default_value = "white")]
    background: String,

    /// Shrink each page to this percentage of its rendered size (25–100).
    #[arg(long, env = "PDF2DECK_SHRINK", default_value_t = 50,
          value_parser = clap::value_parser!(u32).range(25..=100))]
    shrink: u32,

    /// Rendering DPI (72–400).
    #[arg(long, env = "PDF2DECK_DPI", default_value_t = 150,
          value_parser = clap::value_parser!(u32).range(72..=400))]
    dpi: u32,

    /// Page selection per document: all, 5, 3-15, or 1,3,5,7.
    #[arg(long, env = "PDF2DECK_PAGES", default_value = "all")]
    pages: String,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDF2DECK_PASSWORD")]
    password: Option<String>,

    /// Print run statistics as JSON to stdout.
    #[arg(long, env = "PDF2DECK_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDF2DECK_NO_PROGRESS")]
    no_progress: bool,

    /// Print PDF metadata only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2DECK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2DECK_QUIET")]
    quiet: bool,

    /// HTTP download timeout in seconds.
    #[arg(long, env = "PDF2DECK_DOWNLOAD_TIMEOUT", default_value_t = 120)]
    download_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        for input in &cli.inputs {
            let meta = inspect(input)
                .await
                .with_context(|| format!("Failed to inspect '{input}'"))?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?
                );
            } else {
                println!("File:         {}", input);
                if let Some(ref t) = meta.title {
                    println!("Title:        {}", t);
                }
                if let Some(ref a) = meta.author {
                    println!("Author:       {}", a);
                }
                if let Some(ref s) = meta.subject {
                    println!("Subject:      {}", s);
                }
                println!("Pages:        {}", meta.page_count);
                println!("PDF Version:  {}", meta.pdf_version);
                if let Some(ref p) = meta.producer {
                    println!("Producer:     {}", p);
                }
                if let Some(ref c) = meta.creator {
                    println!("Creator:      {}", c);
                }
                println!();
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    // The progress bar is initialised with a spinner (no page count yet);
    // `on_conversion_start` resizes it to the correct total once every
    // document has been inspected.
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        Some(cb as Arc<dyn DeckProgressCallback>)
    } else {
        None
    };

    let config = build_config(&cli, progress_cb)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert_to_file(&cli.inputs, &cli.output, &config)
        .await
        .context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
        );
    }

    if !cli.quiet {
        eprintln!(
            "{}  {}/{} pages  {}ms  →  {}",
            if stats.failed_pages == 0 {
                green("✔")
            } else {
                cyan("⚠")
            },
            stats.placed_pages,
            stats.total_pages,
            stats.total_duration_ms,
            bold(&cli.output.display().to_string()),
        );
        eprintln!(
            "   {} documents  /  {} output",
            dim(&stats.documents.to_string()),
            dim(&format!("{} KiB", stats.output_bytes / 1024)),
        );
    }

    Ok(())
}

/// Map CLI args to `DeckConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<DeckConfig> {
    let slide_size = SlideSize::from_label(&cli.slide_size)?;
    let placement = Placement::from_label(&cli.placement)?;
    let background = BackgroundColor::from_label(&cli.background)?;
    let pages = parse_pages(&cli.pages)?;

    let mut builder = DeckConfig::builder()
        .dpi(cli.dpi)
        .shrink_percent(cli.shrink)
        .slide_size(slide_size)
        .placement(placement)
        .background(background)
        .pages(pages)
        .download_timeout_secs(cli.download_timeout);

    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--pages` string into `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    // Range: "3-15"
    if let Some((start, end)) = s.split_once('-') {
        let start: usize = start
            .trim()
            .parse()
            .context("Invalid start page in range")?;
        let end: usize = end.trim().parse().context("Invalid end page in range")?;

        if start < 1 {
            anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", start);
        }
        if start > end {
            anyhow::bail!(
                "Invalid page range '{}-{}': start must be <= end",
                start,
                end
            );
        }

        return Ok(PageSelection::Range(start, end));
    }

    // Set: "1,3,5,7"
    if s.contains(',') {
        let pages: Vec<usize> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .context(format!("Invalid page number: '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        for &p in &pages {
            if p < 1 {
                anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", p);
            }
        }

        return Ok(PageSelection::Set(pages));
    }

    // Single page: "5"
    let page: usize = s.parse().context("Invalid page number")?;
    if page < 1 {
        anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", page);
    }

    Ok(PageSelection::Single(page))
}
