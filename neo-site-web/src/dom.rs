use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Storage, Window};

/// Retrieve the global `window` object.
///
/// Returns `None` outside a browser, including native test and SSR builds, so
/// every caller degrades to a no-op instead of panicking.
#[must_use]
pub fn window() -> Option<Window> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it to the expected interface.
#[must_use]
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Id of the focused element, if it has one.
#[must_use]
pub fn active_element_id() -> Option<String> {
    document()
        .and_then(|doc| doc.active_element())
        .map(|el| el.id())
        .filter(|id| !id.is_empty())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Milliseconds since the epoch; `0.0` off the web.
#[must_use]
pub fn now_ms() -> f64 {
    if cfg!(target_arch = "wasm32") {
        js_sys::Date::now()
    } else {
        0.0
    }
}

/// Seed for decorative randomness. Fixed off the web so renders are stable.
#[must_use]
pub fn entropy_seed() -> u64 {
    if cfg!(target_arch = "wasm32") {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bits = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        bits ^ now_ms().to_bits()
    } else {
        0x00C0_FFEE
    }
}

/// Whether the user agent asks for a dark colour scheme; `None` if unknown.
#[must_use]
pub fn prefers_dark() -> Option<bool> {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let list = body.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}

/// Nearest ancestor (or self) of an event target matching `selector`.
#[must_use]
pub fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<Element> {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Viewport rectangle of `el` in the shape the effect maths expects.
#[must_use]
pub fn client_rect(el: &Element) -> neo_site_core::Rect {
    let r = el.get_bounding_client_rect();
    neo_site_core::Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Set inline style properties on an element, ignoring rejected values.
pub fn set_styles(el: &web_sys::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Run `f` after `duration_ms` on the browser event loop. Fire-and-forget.
pub fn after_ms(duration_ms: u32, f: impl FnOnce() + 'static) {
    if window().is_none() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        match sleep_ms(duration_ms).await {
            Ok(()) => f(),
            Err(err) => log::warn!("timer failed: {}", js_error_message(&err)),
        }
    });
}

/// Access the browser `localStorage` handle, if the page may use it.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Route uncaught errors and promise rejections to the logger.
pub fn install_error_logging() {
    let Some(win) = window() else {
        return;
    };

    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|e: web_sys::ErrorEvent| {
        log::error!("uncaught error: {}", js_error_message(&e.error()));
    });
    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(
        |e: web_sys::PromiseRejectionEvent| {
            log::error!("unhandled promise rejection: {}", js_error_message(&e.reason()));
        },
    );
    let _ = win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    let _ = win.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    );
    on_error.forget();
    on_rejection.forget();
}

/// Register the offline service worker. Failures are logged and ignored.
pub fn register_service_worker(script_url: &str) {
    let Some(win) = window() else {
        return;
    };
    let container = win.navigator().service_worker();
    let promise = container.register(script_url);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::warn!("service worker registration failed: {}", js_error_message(&err));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_are_inert_off_the_web() {
        assert!(window().is_none());
        assert!(document().is_none());
        assert!(active_element_id().is_none());
        assert!(prefers_dark().is_none());
        assert!(local_storage().is_none());
        assert!(scroll_y().abs() < f64::EPSILON);
        assert_eq!(entropy_seed(), 0x00C0_FFEE);
    }
}
