//! Black-box tests for the public geometry contract: preset resolution
//! and placement arithmetic through the crate's re-exported API.

use pdf2deck::{compute_placement, resolve_slide_size, Pdf2DeckError, Placement, SlideSize};

const EPS: f64 = 1e-9;

fn close(got: (f64, f64), want: (f64, f64)) -> bool {
    (got.0 - want.0).abs() < EPS && (got.1 - want.1).abs() < EPS
}

#[test]
fn resolve_all_three_presets() {
    assert_eq!(resolve_slide_size("4:3").unwrap(), (10.0, 7.5));
    assert_eq!(resolve_slide_size("16:9").unwrap(), (13.33, 7.5));
    assert_eq!(resolve_slide_size("Widescreen").unwrap(), (16.0, 9.0));
}

#[test]
fn resolve_rejects_unknown_preset() {
    assert!(matches!(
        resolve_slide_size("bogus"),
        Err(Pdf2DeckError::UnknownPreset { .. })
    ));
    assert!(matches!(
        resolve_slide_size("21:9"),
        Err(Pdf2DeckError::UnknownPreset { .. })
    ));
}

#[test]
fn placement_matches_the_published_table() {
    // The documented scenarios, verbatim.
    assert!(close(
        compute_placement("Top Left", 4.0, 3.0, 10.0, 7.5).unwrap(),
        (0.5, 0.5)
    ));
    assert!(close(
        compute_placement("Bottom Right", 4.0, 3.0, 10.0, 7.5).unwrap(),
        (5.5, 4.0)
    ));
    assert!(close(
        compute_placement("Center", 4.0, 3.0, 10.0, 7.5).unwrap(),
        (3.0, 2.25)
    ));
    assert!(close(
        compute_placement("Top Middle", 6.0, 3.0, 10.0, 7.5).unwrap(),
        (2.0, 0.5)
    ));
}

#[test]
fn placement_rejects_unknown_anchor() {
    assert!(matches!(
        compute_placement("Somewhere", 4.0, 3.0, 10.0, 7.5),
        Err(Pdf2DeckError::UnknownAnchor { .. })
    ));
}

#[test]
fn every_anchor_keeps_a_fitting_image_on_slide() {
    // An image that fits with margin to spare must never be placed
    // outside [0, slide] on any axis, for any preset.
    for size in SlideSize::ALL {
        let (sw, sh) = size.dimensions();
        let (iw, ih) = (sw / 2.0, sh / 2.0);
        for anchor in Placement::ALL {
            let (x, y) = anchor.offset(iw, ih, sw, sh);
            assert!(x >= 0.0 && x + iw <= sw + EPS, "{anchor} x on {size}");
            assert!(y >= 0.0 && y + ih <= sh + EPS, "{anchor} y on {size}");
        }
    }
}

#[test]
fn centering_property_holds_within_tolerance() {
    let (x, y) = compute_placement("Center", 3.7, 2.9, 13.33, 7.5).unwrap();
    assert!((x + 3.7 / 2.0 - 13.33 / 2.0).abs() < EPS);
    assert!((y + 2.9 / 2.0 - 7.5 / 2.0).abs() < EPS);
}

#[test]
fn horizontal_symmetry_between_left_and_right_anchors() {
    // Left x + right x == slide_w − img_w − 1.0 (two 0.5 in margins).
    for (sw, sh) in [(10.0, 7.5), (13.33, 7.5), (16.0, 9.0)] {
        let (xl, _) = compute_placement("Top Left", 5.0, 2.0, sw, sh).unwrap();
        let (xr, _) = compute_placement("Top Right", 5.0, 2.0, sw, sh).unwrap();
        assert!((xl + xr - (sw - 5.0 - 1.0)).abs() < EPS);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let first = compute_placement("Bottom Left", 4.4, 3.3, 16.0, 9.0).unwrap();
    for _ in 0..100 {
        assert_eq!(
            compute_placement("Bottom Left", 4.4, 3.3, 16.0, 9.0).unwrap(),
            first
        );
    }
}

#[test]
fn oversized_images_are_not_clamped() {
    // Wider than the slide: centered x goes negative by half the overhang.
    let (x, _) = compute_placement("Center", 12.0, 3.0, 10.0, 7.5).unwrap();
    assert!((x - (-1.0)).abs() < EPS);

    // Edge-anchored: the margin arithmetic is applied as-is.
    let (x, y) = compute_placement("Bottom Right", 12.0, 8.0, 10.0, 7.5).unwrap();
    assert!((x - (-2.5)).abs() < EPS);
    assert!((y - (-1.0)).abs() < EPS);
}
