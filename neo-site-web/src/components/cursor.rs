use std::cell::Cell;
use std::rc::Rc;

use neo_site_core::{CursorMode, MagneticConfig, Point, SoundCue, SoundState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use super::magnetic_button::update_magnetic;
use crate::context::use_site;
use crate::{dom, sound};

/// Elements that enlarge the cursor and play the hover cue.
pub const INTERACTIVE_SELECTOR: &str =
    "button, a, [data-modal-open], .video-card, .feature-3d-card";

fn apply_mode(cursor: &HtmlElement, mode: CursorMode) {
    dom::set_styles(
        cursor,
        &[
            ("transform", mode.transform()),
            ("background", mode.background()),
        ],
    );
}

type Listener = Closure<dyn FnMut(MouseEvent)>;

struct PointerListeners {
    doc: Document,
    handlers: Vec<(&'static str, Listener)>,
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for (event, handler) in &self.handlers {
            let _ = self
                .doc
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

fn install(
    cursor: NodeRef,
    magnetic: MagneticConfig,
    sound_pref: Rc<Cell<SoundState>>,
) -> Option<PointerListeners> {
    let doc = dom::document()?;

    let on_move = {
        let cursor = cursor.clone();
        Listener::new(move |e: MouseEvent| {
            let (x, y) = (e.client_x(), e.client_y());
            if let Some(el) = cursor.cast::<HtmlElement>() {
                let (left, top) = (format!("{x}px"), format!("{y}px"));
                dom::set_styles(&el, &[("left", left.as_str()), ("top", top.as_str())]);
            }
            update_magnetic(Point::new(f64::from(x), f64::from(y)), magnetic);
        })
    };
    let on_over = {
        let cursor = cursor.clone();
        Listener::new(move |e: MouseEvent| {
            let now = dom::closest(e.target(), INTERACTIVE_SELECTOR);
            let before = dom::closest(e.related_target(), INTERACTIVE_SELECTOR);
            if now.is_some() && now != before {
                if let Some(el) = cursor.cast::<HtmlElement>() {
                    apply_mode(&el, CursorMode::Hover);
                }
                sound::play(sound_pref.get(), SoundCue::Hover);
            }
        })
    };
    let on_out = Listener::new(move |e: MouseEvent| {
        let left = dom::closest(e.target(), INTERACTIVE_SELECTOR);
        let entered = dom::closest(e.related_target(), INTERACTIVE_SELECTOR);
        if left.is_some() && entered.is_none()
            && let Some(el) = cursor.cast::<HtmlElement>()
        {
            apply_mode(&el, CursorMode::Idle);
        }
    });

    let handlers = vec![("mousemove", on_move), ("mouseover", on_over), ("mouseout", on_out)];
    for (event, handler) in &handlers {
        let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
    Some(PointerListeners { doc, handlers })
}

/// Custom cursor dot. Also drives the magnetic buttons from the same
/// pointer stream.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let ctx = use_site();
    let magnetic = ctx.as_ref().map(|c| c.config.magnetic).unwrap_or_default();
    let current_sound = ctx.as_ref().map(|c| c.sound).unwrap_or_default();
    // Listeners live across renders; they read the latest preference from here.
    let sound_cell = use_memo((), move |()| Cell::new(current_sound));
    sound_cell.set(current_sound);
    let cursor = use_node_ref();

    {
        let cursor = cursor.clone();
        let sound_cell = sound_cell.clone();
        use_effect_with(magnetic, move |magnetic| {
            let listeners = install(cursor, *magnetic, sound_cell);
            move || drop(listeners)
        });
    }

    html! {
        <div id="cursor" class="cursor" aria-hidden="true" ref={cursor}></div>
    }
}
