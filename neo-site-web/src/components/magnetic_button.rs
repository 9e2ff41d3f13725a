use neo_site_core::effects::{MAGNETIC_ENTER_TRANSITION, MAGNETIC_LEAVE_TRANSITION, MAGNETIC_RESET};
use neo_site_core::{MagneticConfig, Point, magnetic_offset, magnetic_transform};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom;

pub const MAGNETIC_SELECTOR: &str = ".btn--magnetic, .nav__item--magnetic";

/// Pull every magnetic element on the page toward `pointer`.
pub fn update_magnetic(pointer: Point, cfg: MagneticConfig) {
    let Some(nodes) = dom::document().and_then(|doc| doc.query_selector_all(MAGNETIC_SELECTOR).ok())
    else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let transform = magnetic_transform(magnetic_offset(pointer, dom::client_rect(&el), cfg));
        dom::set_styles(&el, &[("transform", transform.as_str())]);
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button that drifts toward the pointer while it is close.
///
/// The offset itself is applied by the page-wide pointer listener through
/// [`update_magnetic`]; the button only switches easing on enter and leave.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &Props) -> Html {
    let node = use_node_ref();

    let on_enter = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = node.cast::<HtmlElement>() {
                dom::set_styles(&el, &[("transition", MAGNETIC_ENTER_TRANSITION)]);
            }
        })
    };
    let on_leave = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = node.cast::<HtmlElement>() {
                dom::set_styles(
                    &el,
                    &[
                        ("transition", MAGNETIC_LEAVE_TRANSITION),
                        ("transform", MAGNETIC_RESET),
                    ],
                );
            }
        })
    };

    html! {
        <button
            id={props.id.clone()}
            type="button"
            class={classes!("btn", "btn--magnetic", props.class.clone())}
            aria-label={props.label.clone()}
            onclick={props.onclick.clone()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            ref={node}
        >
            { for props.children.iter() }
        </button>
    }
}
