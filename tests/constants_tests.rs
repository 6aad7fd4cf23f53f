// Host-side tests for page constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_fractions() {
    assert!(SLIDE_THRESHOLD > 0.0 && SLIDE_THRESHOLD <= 1.0);
    assert!(HEADER_THRESHOLD > 0.0 && HEADER_THRESHOLD <= 1.0);
    // Slides need more of themselves on screen than the header anchor
    assert!(SLIDE_THRESHOLD > HEADER_THRESHOLD);
}

#[test]
fn slide_margin_leaves_central_band() {
    // "-20% 0px -20% 0px": top and bottom shrink the viewport by 20% each
    let parts: Vec<&str> = SLIDE_ROOT_MARGIN.split_whitespace().collect();
    assert_eq!(parts.len(), 4);
    let top: f64 = parts[0].trim_end_matches('%').parse().unwrap();
    let bottom: f64 = parts[2].trim_end_matches('%').parse().unwrap();
    assert_eq!(100.0 + top + bottom, 60.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        HEADER_ID,
        HEADER_ANCHOR_ID,
        HEATMAP_GRID_ID,
        HEATMAP_TITLE_ID,
        TOTAL_SUBMISSIONS_ID,
        CURRENT_YEAR_ID,
        PREV_YEAR_ID,
        NEXT_YEAR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "{a} should be a bare id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn tooltip_starts_hidden_and_ignores_pointer() {
    assert!(TOOLTIP_STYLE.contains("display: none"));
    assert!(TOOLTIP_STYLE.contains("pointer-events: none"));
    assert!(TOOLTIP_STYLE.contains("position: absolute"));
    assert!(TOOLTIP_OFFSET_X > 0);
    assert!(TOOLTIP_OFFSET_Y < 0);
}

#[test]
fn slide_classes_differ() {
    assert_ne!(ACTIVE_CLASS, FADED_CLASS);
    assert!(SLIDE_SELECTOR.starts_with('.'));
}
