use neo_site_core::THEME_STORAGE_KEY;
use wasm_bindgen_test::wasm_bindgen_test;

use crate::common::{click, render_app, settle};
use neo_site_web::dom;

fn document_theme() -> Option<String> {
    dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
}

fn stored_theme() -> Option<String> {
    dom::local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

#[wasm_bindgen_test]
async fn toggling_twice_restores_theme_and_preference() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, "dark");
    }
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.remove_attribute("data-theme");
    }
    render_app();
    settle().await;
    assert_eq!(document_theme().as_deref(), Some("dark"));

    click("themeToggle");
    settle().await;
    assert_eq!(document_theme().as_deref(), Some("light"));
    assert_eq!(stored_theme().as_deref(), Some("light"));

    click("themeToggle");
    settle().await;
    assert_eq!(document_theme().as_deref(), Some("dark"));
    assert_eq!(stored_theme().as_deref(), Some("dark"));
}
