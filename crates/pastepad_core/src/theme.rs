//! Theme preference state and persistence.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Visual variant applied to the whole UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// The opposite variant.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stable string form persisted to the state file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(()),
        }
    }
}

/// File-backed store for the theme preference.
///
/// The file holds the literal string `dark` or `light`. Anything else, or a
/// missing file, resolves to the dark default.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted preference.
    pub fn load(&self) -> ThemeVariant {
        match fs::read_to_string(&self.path) {
            Ok(raw) => raw.parse().unwrap_or_default(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => ThemeVariant::Dark,
            Err(err) => {
                warn!("failed to read theme preference: {}", err);
                ThemeVariant::Dark
            }
        }
    }

    /// Persist the preference, creating the state directory on first use.
    ///
    /// Persistence failures are logged and swallowed; losing the preference
    /// only costs the user a toggle on next launch.
    pub fn store(&self, variant: ThemeVariant) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("failed to create state dir {}: {}", parent.display(), err);
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, variant.as_str()) {
            warn!("failed to persist theme preference: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join("theme"))
    }

    #[test]
    fn missing_file_defaults_to_dark() {
        let dir = TempDir::new().expect("temp dir");
        assert_eq!(store_in(&dir).load(), ThemeVariant::Dark);
    }

    #[test]
    fn garbage_content_defaults_to_dark() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        std::fs::write(dir.path().join("theme"), "solarized").expect("write");
        assert_eq!(store.load(), ThemeVariant::Dark);
    }

    #[test]
    fn odd_toggle_count_flips_and_persists() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut theme = ThemeVariant::Dark;
        for _ in 0..3 {
            theme = theme.toggled();
            store.store(theme);
        }
        assert_eq!(theme, ThemeVariant::Light);
        assert_eq!(store.load(), ThemeVariant::Light);
    }

    #[test]
    fn even_toggle_count_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut theme = ThemeVariant::Light;
        for _ in 0..4 {
            theme = theme.toggled();
            store.store(theme);
        }
        assert_eq!(theme, ThemeVariant::Light);
        assert_eq!(store.load(), ThemeVariant::Light);
    }

    #[test]
    fn variant_strings_round_trip() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            assert_eq!(variant.as_str().parse::<ThemeVariant>(), Ok(variant));
        }
        assert!(" light\n".parse::<ThemeVariant>().is_ok());
        assert!("LIGHT".parse::<ThemeVariant>().is_err());
    }
}
