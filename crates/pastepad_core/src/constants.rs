//! Shared constants used across Pastepad crates.

use std::time::Duration;

/// Default base URL for the paste server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Key of the server-seeded about document. Its raw view stays disabled.
pub const ABOUT_KEY: &str = "about";

/// Placeholder hint shown in the empty composer.
pub const EDITOR_PLACEHOLDER: &str = "Paste code, save and share the link!";

/// Base window title; viewer state appends ` - <key>`.
pub const WINDOW_TITLE: &str = "pastepad";

/// Fade duration used by the copy-link confirmation and the theme switch.
pub const FADE_DURATION: Duration = Duration::from_millis(150);

/// How long the "Copied!" confirmation stays fully visible.
pub const COPY_HOLD_DURATION: Duration = Duration::from_millis(1500);

/// Timeout applied to every API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
