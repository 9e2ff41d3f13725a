//! Light/dark theme preference.

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "neo.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button, naming the theme it switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Storage(String),
}

/// Where the theme preference lives. The browser implementation is backed by
/// `localStorage`; tests use [`MemoryPreferenceStore`].
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read the stored theme. Unknown stored values read as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn load_theme(&self) -> Result<Option<Theme>, Self::Error>;

    /// Persist the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error>;
}

/// Parse a raw stored value, discarding anything that is not a theme.
#[must_use]
pub fn parse_stored(raw: Option<String>) -> Option<Theme> {
    let raw = raw?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("discarding stored theme: {err}");
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    type Error = Infallible;

    fn load_theme(&self) -> Result<Option<Theme>, Self::Error> {
        Ok(parse_stored(self.raw()))
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// Pick the theme for first paint: stored preference, then the system colour
/// scheme, then dark.
#[must_use]
pub fn resolve_initial_theme(stored: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    stored
        .or_else(|| prefers_dark.map(|dark| if dark { Theme::Dark } else { Theme::Light }))
        .unwrap_or_default()
}

/// Flip the theme and persist the new value.
///
/// # Errors
///
/// Returns the store's error if the new value cannot be saved.
pub fn toggle_theme<S: PreferenceStore>(store: &S, current: Theme) -> Result<Theme, S::Error> {
    let next = current.toggled();
    store.save_theme(next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_only() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn initial_theme_prefers_storage_then_system() {
        assert_eq!(resolve_initial_theme(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(resolve_initial_theme(None, Some(false)), Theme::Light);
        assert_eq!(resolve_initial_theme(None, None), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_preference() {
        let store = MemoryPreferenceStore::with_raw("light");
        let start = store.load_theme().unwrap().unwrap();
        let once = toggle_theme(&store, start).unwrap();
        assert_eq!(store.raw().as_deref(), Some("dark"));
        let twice = toggle_theme(&store, once).unwrap();
        assert_eq!(twice, start);
        assert_eq!(store.raw().as_deref(), Some("light"));
    }

    #[test]
    fn garbage_in_storage_reads_as_unset() {
        let store = MemoryPreferenceStore::with_raw("neon");
        assert_eq!(store.load_theme().unwrap(), None);
    }
}
