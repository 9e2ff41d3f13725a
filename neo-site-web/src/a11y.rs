// Accessibility helpers

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "site-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid var(--color-neon-blue,#00D9FF);outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region for screen readers.
pub fn set_status(msg: &str) {
    if let Some(node) = dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID)) {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the element with `id`, if it exists and is focusable.
pub fn focus_element(id: &str) {
    if let Some(el) = dom::element_by_id::<HtmlElement>(id) {
        let _ = el.focus();
    }
}

/// Toggle `aria-invalid` on a form control.
pub fn mark_invalid(el: &Element, invalid: bool) {
    let _ = if invalid {
        el.set_attribute("aria-invalid", "true")
    } else {
        el.remove_attribute("aria-invalid")
    };
}

/// Install (or clear, with `""`) the message the native validation bubble shows.
pub fn set_custom_validity(el: &Element, message: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_custom_validity(message);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_custom_validity(message);
    }
}
