//! Browser-backed preference storage.

use neo_site_core::theme::parse_stored;
use neo_site_core::{PreferenceError, PreferenceStore, THEME_STORAGE_KEY, Theme};

use crate::dom;

/// Theme preference kept in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    type Error = PreferenceError;

    fn load_theme(&self) -> Result<Option<Theme>, Self::Error> {
        let storage = dom::local_storage().ok_or(PreferenceError::Unavailable)?;
        let raw = storage
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| PreferenceError::Storage(dom::js_error_message(&e)))?;
        Ok(parse_stored(raw))
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error> {
        let storage = dom::local_storage().ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|e| PreferenceError::Storage(dom::js_error_message(&e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_unavailable_off_the_web() {
        let store = LocalPreferenceStore;
        assert!(matches!(
            store.load_theme(),
            Err(PreferenceError::Unavailable)
        ));
        assert!(matches!(
            store.save_theme(Theme::Light),
            Err(PreferenceError::Unavailable)
        ));
    }
}
