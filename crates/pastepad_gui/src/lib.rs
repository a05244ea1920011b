//! Pastepad desktop client library entry point.
//!
//! Exposes a `run` helper so the binary stays a thin wrapper around app
//! construction and `eframe` startup.

mod app;
/// Backend worker + protocol types used by the UI and headless tests.
pub mod backend;

use app::PastepadApp;
use eframe::egui;
use pastepad_core::constants::WINDOW_TITLE;
use pastepad_core::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("pastepad=warn,pastepad_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the desktop client with tracing enabled.
///
/// The first CLI argument, when present, names the document to open (`xyz` or
/// `xyz.py`); without it the app starts as a blank composer and performs no
/// network request.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the configured server URL is invalid.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let initial = std::env::args().nth(1);
    let config = Config::from_env();
    let app = PastepadApp::new(config, initial)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
}
