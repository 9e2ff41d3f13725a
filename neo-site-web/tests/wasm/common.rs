use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};
use yew::Renderer;

use neo_site_web::app::App;
use neo_site_web::dom;

/// Replace any previous mount point and render a fresh app into it.
pub fn render_app() {
    let doc = dom::document().expect("document");
    if let Some(old) = doc.get_element_by_id("app") {
        old.remove();
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    Renderer::<App>::with_root(root).render();
}

pub async fn settle() {
    dom::sleep_ms(50).await.expect("timer");
}

pub fn by_id<T: JsCast>(id: &str) -> T {
    dom::element_by_id::<T>(id).unwrap_or_else(|| panic!("#{id} should exist"))
}

pub fn query(selector: &str) -> Option<Element> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
}

pub fn type_into(id: &str, value: &str) {
    let input: HtmlInputElement = by_id(id);
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&event).expect("dispatch input");
}

/// Focus then click, the way a keyboard or pointer user would.
pub fn click(id: &str) {
    let el = by_id::<HtmlElement>(id);
    el.focus().expect("focusable");
    el.click();
}
