//! Core domain library for Pastepad (config, API client, theme state).

/// Blocking HTTP client for the paste API.
pub mod api;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Filename-based language hints for syntax highlighting.
pub mod detect;
/// Client error types.
pub mod error;
/// Wire models and response envelope decoding.
pub mod models;
/// Small text helpers shared by the clients.
pub mod text;
/// Theme preference state and persistence.
pub mod theme;

pub use api::ApiClient;
pub use config::Config;
pub use constants::{ABOUT_KEY, DEFAULT_SERVER_URL};
pub use error::ClientError;
pub use models::Document;
pub use theme::{ThemeStore, ThemeVariant};
