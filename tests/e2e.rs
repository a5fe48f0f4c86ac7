//! End-to-end integration tests for pdf2deck.
//!
//! These tests use real PDF files in `./test_cases/` and require a
//! working pdfium binding. They are gated behind the `E2E_ENABLED`
//! environment variable so they do not run in CI unless explicitly
//! requested.
//!
//! Run with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture
//!
//! To restrict to a specific test:
//!   E2E_ENABLED=1 cargo test --test e2e test_inspect -- --nocapture

use pdf2deck::{
    convert, convert_to_file, inspect, BackgroundColor, DeckConfig, PageSelection, Placement,
    SlideSize,
};
use std::io::{Cursor, Read};
use std::path::PathBuf;
use zip::ZipArchive;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

fn output_dir() -> PathBuf {
    let d = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases/output");
    std::fs::create_dir_all(&d).ok();
    d
}

/// Skip this test if E2E_ENABLED is not set *or* no PDF file at `path`.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP — test file not found: {}", p.display());
            return;
        }
        p
    }};
}

/// Assert the bytes are a structurally sound deck with `slides` slides.
fn assert_deck_quality(pptx: &[u8], slides: usize, context: &str) {
    assert!(!pptx.is_empty(), "[{context}] deck is empty");
    assert_eq!(&pptx[..2], b"PK", "[{context}] deck is not a ZIP");

    let mut archive = ZipArchive::new(Cursor::new(pptx.to_vec())).expect("deck must be a ZIP");
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    assert!(
        names.iter().any(|n| n == "ppt/presentation.xml"),
        "[{context}] missing presentation part"
    );
    for i in 1..=slides {
        assert!(
            names.iter().any(|n| n == &format!("ppt/slides/slide{i}.xml")),
            "[{context}] missing slide {i}"
        );
        assert!(
            names.iter().any(|n| n == &format!("ppt/media/image{i}.png")),
            "[{context}] missing image {i}"
        );
    }

    // Every media part must carry the PNG magic.
    for i in 1..=slides {
        let mut part = archive
            .by_name(&format!("ppt/media/image{i}.png"))
            .expect("media part");
        let mut magic = [0u8; 4];
        part.read_exact(&mut magic).expect("read media magic");
        assert_eq!(&magic, &[0x89, b'P', b'N', b'G'], "[{context}] image {i} not PNG");
    }

    println!("[{context}] ✓  {} slides, {} bytes, structure checks passed", slides, pptx.len());
}

fn read_part(pptx: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(pptx.to_vec())).expect("valid zip");
    let mut part = archive.by_name(name).expect(name);
    let mut s = String::new();
    part.read_to_string(&mut s).expect("utf-8 part");
    s
}

// ── Inspect tests (no conversion, instant) ───────────────────────────────────

#[tokio::test]
async fn test_inspect_sample() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let meta = inspect(path.to_str().unwrap())
        .await
        .expect("inspect() should succeed");

    assert!(meta.page_count >= 1);
    assert!(!meta.pdf_version.is_empty());

    println!("Metadata: {:?}", meta);
}

#[tokio::test]
async fn test_inspect_nonexistent() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP");
        return;
    }

    let result = inspect("/definitely/not/a/real/file.pdf").await;
    assert!(
        result.is_err(),
        "inspect() should return Err for nonexistent file"
    );
}

// ── Conversion tests ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_convert_single_document_defaults() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let meta = inspect(path.to_str().unwrap()).await.expect("inspect");
    let config = DeckConfig::default();
    let output = convert(&[path.to_str().unwrap()], &config)
        .await
        .expect("convert() should succeed");

    assert_eq!(output.stats.placed_pages, meta.page_count);
    assert_eq!(output.stats.failed_pages, 0);
    assert_deck_quality(&output.pptx, meta.page_count, "single-defaults");

    // Default preset is 4:3 → 9 144 000 × 6 858 000 EMU.
    let pres = read_part(&output.pptx, "ppt/presentation.xml");
    assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
}

#[tokio::test]
async fn test_convert_merges_documents_in_order() {
    let a = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));
    let b = e2e_skip_unless_ready!(test_cases_dir().join("second.pdf"));

    let meta_a = inspect(a.to_str().unwrap()).await.expect("inspect a");
    let meta_b = inspect(b.to_str().unwrap()).await.expect("inspect b");

    let config = DeckConfig::default();
    let output = convert(&[a.to_str().unwrap(), b.to_str().unwrap()], &config)
        .await
        .expect("convert() should succeed");

    let total = meta_a.page_count + meta_b.page_count;
    assert_eq!(output.stats.documents, 2);
    assert_eq!(output.stats.placed_pages, total);
    assert_deck_quality(&output.pptx, total, "merge");

    // The report preserves document order.
    assert_eq!(output.pages.first().unwrap().doc_index, 0);
    assert_eq!(output.pages.last().unwrap().doc_index, 1);
}

#[tokio::test]
async fn test_convert_top_left_keeps_the_fixed_margin() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let config = DeckConfig::builder()
        .slide_size(SlideSize::SixteenByNine)
        .placement(Placement::TopLeft)
        .background(BackgroundColor::LightGray)
        .build()
        .expect("config");
    let output = convert(&[path.to_str().unwrap()], &config)
        .await
        .expect("convert() should succeed");

    for page in &output.pages {
        assert_eq!(page.offset_x_in, 0.5);
        assert_eq!(page.offset_y_in, 0.5);
    }

    // 0.5 in == 457 200 EMU, and the background made it into the slide.
    let slide = read_part(&output.pptx, "ppt/slides/slide1.xml");
    assert!(slide.contains(r#"<a:off x="457200" y="457200"/>"#), "{slide}");
    assert!(slide.contains(r#"<a:srgbClr val="D3D3D3"/>"#), "{slide}");
}

#[tokio::test]
async fn test_convert_page_selection_limits_slides() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let config = DeckConfig::builder()
        .pages(PageSelection::Single(1))
        .build()
        .expect("config");
    let output = convert(&[path.to_str().unwrap()], &config)
        .await
        .expect("convert() should succeed");

    assert_eq!(output.stats.placed_pages, 1);
    assert_deck_quality(&output.pptx, 1, "single-page");
}

#[tokio::test]
async fn test_convert_to_file_writes_atomically() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));
    let out = output_dir().join("e2e_deck.pptx");

    let stats = convert_to_file(&[path.to_str().unwrap()], &out, &DeckConfig::default())
        .await
        .expect("convert_to_file() should succeed");

    let bytes = std::fs::read(&out).expect("output file exists");
    assert_eq!(bytes.len(), stats.output_bytes);
    assert!(!out.with_extension("pptx.tmp").exists(), "temp file left behind");
    assert_deck_quality(&bytes, stats.placed_pages, "to-file");
}

#[tokio::test]
async fn test_convert_with_no_inputs_fails() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP");
        return;
    }

    let inputs: [&str; 0] = [];
    let result = convert(&inputs, &DeckConfig::default()).await;
    assert!(result.is_err(), "convert() with no inputs should fail");
}

// ── Shrink geometry against a real render ────────────────────────────────────

#[tokio::test]
async fn test_shrink_halves_the_placed_frame() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let full = DeckConfig::builder().shrink(1.0).build().expect("config");
    let half = DeckConfig::builder().shrink(0.5).build().expect("config");

    let at_full = convert(&[path.to_str().unwrap()], &full).await.expect("full");
    let at_half = convert(&[path.to_str().unwrap()], &half).await.expect("half");

    let f = &at_full.pages[0];
    let h = &at_half.pages[0];
    assert!((h.image_width_in - f.image_width_in / 2.0).abs() < 1e-9);
    assert!((h.image_height_in - f.image_height_in / 2.0).abs() < 1e-9);
}
