//! Protocol types for the GUI backend worker.

use pastepad_core::models::Document;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum ClientCmd {
    /// POST the composer buffer as a new document.
    Save { content: String },
    /// GET a document by URL path (key plus optional display extension).
    Load { path: String },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum ClientEvent {
    /// A document was created; the app enters viewer state for it.
    Saved { document: Document },
    /// A document was fetched; `path` is the originally requested path, kept
    /// for the syntax hint its extension may carry.
    Loaded { path: String, document: Document },
    /// The save was refused by the server or never reached it.
    SaveFailed { message: String },
    /// Load refused with HTTP 429; composer state must stay untouched.
    LoadRateLimited { message: String },
    /// Any other load failure; the app silently resets to the composer.
    LoadFailed { path: String },
}
