//! Browser-observing hooks shared by the page sections.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom;

/// Becomes `true` the first time `node` scrolls into view, then stays `true`.
///
/// Off the web (SSR, native tests) the node is reported hidden.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let observer = observe_once(node, threshold, move || visible.set(true));
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }
    *visible
}

type Observed = (
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
);

fn observe_once(node: &NodeRef, threshold: f64, on_visible: impl Fn() + 'static) -> Option<Observed> {
    dom::window()?;
    let target = node.cast::<web_sys::Element>()?;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    init.set_root_margin("0px 0px -50px 0px");
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("reveal observer unavailable: {}", dom::js_error_message(&err));
                return None;
            }
        };
    observer.observe(&target);
    Some((observer, callback))
}

/// Current vertical scroll offset, updated on every `scroll` event.
#[hook]
pub fn use_window_scroll() -> f64 {
    let scroll = use_state_eq(dom::scroll_y);
    {
        let scroll = scroll.clone();
        use_effect_with((), move |()| {
            let listener = dom::window().map(|win| {
                let callback = Closure::<dyn FnMut()>::new(move || scroll.set(dom::scroll_y()));
                let _ = win
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                (win, callback)
            });
            move || {
                if let Some((win, callback)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }
    *scroll
}

/// Document and viewport heights, for the scroll progress bar.
#[must_use]
pub fn page_extent() -> (f64, f64) {
    let Some(win) = dom::window() else {
        return (0.0, 0.0);
    };
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document = dom::document()
        .and_then(|doc| doc.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    (document, viewport)
}
