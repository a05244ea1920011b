//! Theme toggle parity/persistence and the copy-link confirmation guard.

use super::*;
use std::time::{Duration, Instant};

fn complete_toggle(h: &mut TestHarness, start: Instant) {
    h.app.toggle_theme(start);
    h.app.advance_animations(start + Duration::from_millis(300));
}

#[test]
fn toggle_flips_at_midpoint_and_persists() {
    let mut h = harness();
    assert_eq!(h.app.theme, ThemeVariant::Dark);

    let start = Instant::now();
    h.app.toggle_theme(start);
    assert_eq!(h.app.theme, ThemeVariant::Dark);

    h.app.advance_animations(start + Duration::from_millis(150));
    assert_eq!(h.app.theme, ThemeVariant::Light);
    assert_eq!(h.app.theme_store.load(), ThemeVariant::Light);
    assert!(h.app.theme_fade.is_some());

    h.app.advance_animations(start + Duration::from_millis(300));
    assert!(h.app.theme_fade.is_none());
}

#[test]
fn toggle_is_ignored_while_fade_runs() {
    let mut h = harness();
    let start = Instant::now();
    h.app.toggle_theme(start);
    h.app.toggle_theme(start + Duration::from_millis(10));
    h.app.advance_animations(start + Duration::from_millis(300));

    assert_eq!(h.app.theme, ThemeVariant::Light);
    assert!(h.app.theme_fade.is_none());
}

#[test]
fn odd_and_even_toggle_counts_land_on_the_right_variant() {
    let mut h = harness();
    let mut start = Instant::now();
    for _ in 0..3 {
        complete_toggle(&mut h, start);
        start += Duration::from_secs(1);
    }
    assert_eq!(h.app.theme, ThemeVariant::Light);
    assert_eq!(h.app.theme_store.load(), ThemeVariant::Light);

    complete_toggle(&mut h, start);
    assert_eq!(h.app.theme, ThemeVariant::Dark);
    assert_eq!(h.app.theme_store.load(), ThemeVariant::Dark);
}

#[test]
fn copy_link_queues_share_url_once() {
    let mut h = harness();
    h.app.apply_event(ClientEvent::Saved {
        document: document("abc123", "print(1)"),
    });

    let start = Instant::now();
    h.app.trigger_copy_link(start);
    assert_eq!(
        h.app.clipboard_outgoing.as_deref(),
        Some("http://paste.test/abc123")
    );
    assert!(h.app.copy_animation.is_some());

    // Re-entry while the confirmation plays is a no-op.
    h.app.clipboard_outgoing = None;
    h.app.trigger_copy_link(start + Duration::from_millis(500));
    assert!(h.app.clipboard_outgoing.is_none());
}

#[test]
fn copy_animation_clears_after_its_full_run() {
    let mut h = harness();
    h.app.apply_event(ClientEvent::Saved {
        document: document("abc123", "print(1)"),
    });
    let start = Instant::now();
    h.app.trigger_copy_link(start);

    h.app.advance_animations(start + Duration::from_millis(1949));
    assert!(h.app.copy_animation.is_some());
    h.app.advance_animations(start + Duration::from_millis(1950));
    assert!(h.app.copy_animation.is_none());

    // A fresh run may start once the previous one has finished.
    h.app.trigger_copy_link(start + Duration::from_secs(2));
    assert!(h.app.copy_animation.is_some());
}

#[test]
fn copy_link_outside_viewer_does_nothing() {
    let mut h = harness();
    h.app.trigger_copy_link(Instant::now());
    assert!(h.app.clipboard_outgoing.is_none());
    assert!(h.app.copy_animation.is_none());
}
