//! Headless app tests driving state transitions without an eframe window.

use super::*;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tempfile::TempDir;

mod load_behaviors;
mod theme_and_copy;

struct TestHarness {
    _dir: TempDir,
    app: PastepadApp,
    cmd_rx: Receiver<ClientCmd>,
    /// Kept alive so the app's event receiver stays connected.
    _evt_tx: Sender<ClientEvent>,
}

fn harness() -> TestHarness {
    harness_with_initial(None)
}

/// Build an app wired to in-process channels instead of a worker thread, so
/// tests can observe outgoing commands and inject events directly.
fn harness_with_initial(initial: Option<&str>) -> TestHarness {
    let dir = TempDir::new().expect("temp dir");
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    let client = ApiClient::new("http://paste.test").expect("client");
    let theme_store = ThemeStore::new(dir.path().join("theme"));
    let theme = theme_store.load();
    let mut app = PastepadApp {
        client,
        backend: BackendHandle { cmd_tx, evt_rx },
        theme_store,
        theme,
        theme_applied: None,
        buffer: String::new(),
        view: None,
        save_in_flight: false,
        load_in_flight: false,
        status: None,
        window_title: WINDOW_TITLE.to_string(),
        applied_title: None,
        copy_animation: None,
        theme_fade: None,
        clipboard_outgoing: None,
        focus_editor_next: true,
    };
    if let Some(path) = initial {
        app.request_load(path.to_string());
    }
    TestHarness {
        _dir: dir,
        app,
        cmd_rx,
        _evt_tx: evt_tx,
    }
}

fn document(key: &str, content: &str) -> Document {
    Document {
        key: key.to_string(),
        title: None,
        author: None,
        date: 0,
        views: 0,
        length: content.len(),
        content: content.to_string(),
    }
}
