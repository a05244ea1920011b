//! Configuration loading from environment variables.

use crate::constants::DEFAULT_SERVER_URL;
use std::env;
use std::path::PathBuf;

/// Runtime configuration shared by the Pastepad clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the paste server.
    pub server_url: String,
    /// Directory holding persisted client state (theme preference).
    pub state_dir: PathBuf,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    // Windows legacy HOMEDRIVE + HOMEPATH
    if let (Ok(drive), Ok(path)) = (env::var("HOMEDRIVE"), env::var("HOMEPATH")) {
        if !drive.trim().is_empty() && !path.trim().is_empty() {
            return Some(PathBuf::from(format!("{}{}", drive, path)));
        }
    }

    // Fallback to current directory if available
    std::env::current_dir().ok()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing:
    /// `PASTEPAD_SERVER` for the server URL, `PASTEPAD_STATE_DIR` for the
    /// state directory (default `~/.config/pastepad`).
    pub fn from_env() -> Self {
        Self {
            server_url: env::var("PASTEPAD_SERVER")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            state_dir: env::var("PASTEPAD_STATE_DIR")
                .map(expand_tilde)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
                    home.join(".config").join("pastepad")
                }),
        }
    }

    /// Path of the persisted theme preference file.
    pub fn theme_file(&self) -> PathBuf {
        self.state_dir.join("theme")
    }
}
