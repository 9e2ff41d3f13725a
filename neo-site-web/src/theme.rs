//! Applying the theme to the document.

use neo_site_core::{PreferenceStore, Theme, resolve_initial_theme, toggle_theme};

use crate::dom;
use crate::storage::LocalPreferenceStore;

/// Set `<html data-theme>`.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme currently written on the document element, if any.
#[must_use]
pub fn document_theme() -> Option<Theme> {
    dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|raw| raw.parse().ok())
}

/// Resolve the starting theme from storage and the system colour scheme.
#[must_use]
pub fn initial_theme() -> Theme {
    let stored = LocalPreferenceStore.load_theme().unwrap_or_else(|err| {
        if dom::window().is_some() {
            log::warn!("theme preference unreadable: {err}");
        }
        None
    });
    resolve_initial_theme(stored, dom::prefers_dark())
}

/// Flip the theme, persist it, and apply it to the document.
///
/// Persistence failures are logged; the document still switches.
pub fn switch_theme(current: Theme) -> Theme {
    let next = toggle_theme(&LocalPreferenceStore, current).unwrap_or_else(|err| {
        log::warn!("theme preference not saved: {err}");
        current.toggled()
    });
    apply_theme(next);
    next
}
