use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{HtmlDialogElement, HtmlFormElement, HtmlInputElement};

use crate::common::{by_id, click, query, render_app, settle, type_into};
use neo_site_web::dom;

#[wasm_bindgen_test]
async fn phone_field_is_masked_while_typing() {
    render_app();
    settle().await;

    type_into("contactForm-phone", "8999");
    assert_eq!(by_id::<HtmlInputElement>("contactForm-phone").value(), "+7 (999)");

    type_into("contactForm-phone", "89991234567");
    assert_eq!(
        by_id::<HtmlInputElement>("contactForm-phone").value(),
        "+7 (999) 123-45-67"
    );

    type_into("contactForm-phone", "");
    assert_eq!(by_id::<HtmlInputElement>("contactForm-phone").value(), "");
}

#[wasm_bindgen_test]
async fn empty_submit_is_rejected_and_marked_invalid() {
    render_app();
    settle().await;
    click("cta");
    settle().await;
    assert!(by_id::<HtmlDialogElement>("contactModal").open());

    by_id::<HtmlFormElement>("contactForm")
        .request_submit()
        .expect("submit");
    settle().await;

    let name: HtmlInputElement = by_id("contactForm-name");
    assert_eq!(name.get_attribute("aria-invalid").as_deref(), Some("true"));
    assert!(!name.validation_message().unwrap_or_default().is_empty());
    assert!(query(".toast").is_none(), "no confirmation for a rejected submit");
    assert!(by_id::<HtmlDialogElement>("contactModal").open());
}

#[wasm_bindgen_test]
async fn valid_submit_confirms_resets_and_closes() {
    render_app();
    settle().await;
    click("cta");
    settle().await;

    type_into("contactForm-name", "Ada");
    type_into("contactForm-email", "ada@example.com");
    type_into("contactForm-phone", "89991234567");
    by_id::<HtmlFormElement>("contactForm")
        .request_submit()
        .expect("submit");
    settle().await;

    assert!(query(".toast").is_some(), "confirmation shown");
    assert_eq!(by_id::<HtmlInputElement>("contactForm-name").value(), "");
    assert!(!by_id::<HtmlDialogElement>("contactModal").open());
    assert_eq!(dom::active_element_id().as_deref(), Some("cta"));
}
