// Host-side tests for one-shot panel reveals.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

const VH: f32 = 800.0;

fn rect(top: f32, bottom: f32) -> PanelRect {
    PanelRect { top, bottom }
}

#[test]
fn in_view_requires_overlap() {
    assert!(in_view(rect(100.0, 400.0), VH));
    assert!(in_view(rect(-200.0, 10.0), VH));
    assert!(in_view(rect(799.0, 1200.0), VH));

    assert!(!in_view(rect(800.0, 1200.0), VH));
    assert!(!in_view(rect(-300.0, 0.0), VH));
}

#[test]
fn panel_reveals_once() {
    let mut r = RevealTracker::new();
    assert!(r.is_empty());
    assert!(r.observe("reveal-about", rect(100.0, 400.0), VH));
    assert!(!r.observe("reveal-about", rect(100.0, 400.0), VH));
    assert_eq!(r.len(), 1);
}

#[test]
fn revealed_panel_stays_revealed_offscreen() {
    let mut r = RevealTracker::new();
    r.observe("reveal-hero", rect(0.0, 600.0), VH);
    assert!(!r.observe("reveal-hero", rect(-2000.0, -1400.0), VH));
    assert!(r.is_revealed("reveal-hero"));
}

#[test]
fn offscreen_panel_waits() {
    let mut r = RevealTracker::new();
    assert!(!r.observe("reveal-contact", rect(3000.0, 3600.0), VH));
    assert!(!r.is_revealed("reveal-contact"));
    assert!(r.observe("reveal-contact", rect(500.0, 1100.0), VH));
}

#[test]
fn rerendered_cards_keep_their_state() {
    let mut r = RevealTracker::new();
    r.observe("reveal-project-2", rect(200.0, 500.0), VH);
    // grid re-rendered under a new filter: same id, new element
    assert!(r.is_revealed("reveal-project-2"));
    assert!(r.observe("reveal-project-3", rect(200.0, 500.0), VH));
    assert_eq!(r.len(), 2);
}
