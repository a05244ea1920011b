//! Initial-load wiring and load-failure policies.

use super::*;

#[test]
fn initial_path_requests_a_load() {
    let h = harness_with_initial(Some("xyz.py"));
    assert!(h.app.load_in_flight);
    match h.cmd_rx.try_recv() {
        Ok(ClientCmd::Load { path }) => assert_eq!(path, "xyz.py"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn no_initial_path_makes_no_request() {
    let h = harness();
    assert!(!h.app.load_in_flight);
    assert!(matches!(h.cmd_rx.try_recv(), Err(TryRecvError::Empty)));
    assert!(h.app.buffer.is_empty());
    assert!(h.app.view.is_none());
}

#[test]
fn load_success_enters_readonly_view_with_language_hint() {
    let mut h = harness_with_initial(Some("xyz.py"));
    h.app.apply_event(ClientEvent::Loaded {
        path: "xyz.py".to_string(),
        document: document("xyz", "hello"),
    });

    assert!(!h.app.load_in_flight);
    assert_eq!(h.app.buffer, "hello");
    assert_eq!(h.app.window_title, "pastepad - xyz");
    let view = h.app.view.as_ref().expect("viewer state");
    assert_eq!(view.language_ext.as_deref(), Some("py"));
    assert!(h.app.can_view_raw());
    assert!(!h.app.can_save());
}

#[test]
fn about_document_keeps_raw_disabled() {
    let mut h = harness();
    h.app.apply_event(ClientEvent::Loaded {
        path: "about".to_string(),
        document: document("about", "welcome"),
    });
    assert!(h.app.view.is_some());
    assert!(!h.app.can_view_raw());
}

#[test]
fn rate_limited_load_reports_without_reset() {
    let mut h = harness();
    h.app.buffer = "draft".to_string();
    h.app.load_in_flight = true;

    h.app.apply_event(ClientEvent::LoadRateLimited {
        message: "slow down".to_string(),
    });

    assert_eq!(h.app.status.as_deref(), Some("Error: slow down"));
    assert_eq!(h.app.buffer, "draft");
    assert!(h.app.view.is_none());
    assert!(!h.app.load_in_flight);
}

#[test]
fn other_load_failure_resets_silently() {
    let mut h = harness();
    h.app.buffer = "draft".to_string();
    h.app.status = Some("Error: earlier".to_string());
    h.app.load_in_flight = true;

    h.app.apply_event(ClientEvent::LoadFailed {
        path: "gone".to_string(),
    });

    assert!(h.app.buffer.is_empty());
    assert!(h.app.status.is_none());
    assert!(h.app.view.is_none());
    assert_eq!(h.app.window_title, WINDOW_TITLE);
}
