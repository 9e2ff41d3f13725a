use neo_site_core::effects::{TILT_LEAVE_TRANSITION, TILT_RESET};
use neo_site_core::{Point, card_tilt, reveal_delay_ms};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Position in the grid; drives the reveal stagger.
    pub index: usize,
    pub icon: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
}

/// Feature card that tilts toward the pointer and fades in on first view.
#[function_component(FeatureCard)]
pub fn feature_card(props: &Props) -> Html {
    let ctx = use_site();
    let (divisor, threshold, stagger) = ctx.as_ref().map_or((25.0, 0.1, 100), |c| {
        (c.config.tilt_divisor, c.config.reveal_threshold, c.config.stagger_ms)
    });
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), threshold);

    let on_move = {
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = node.cast::<HtmlElement>() else {
                return;
            };
            let pointer = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
            let tilt = card_tilt(pointer, dom::client_rect(&el), divisor);
            let transform = tilt.transform();
            dom::set_styles(&el, &[("transition", "none"), ("transform", transform.as_str())]);
        })
    };
    let on_leave = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = node.cast::<HtmlElement>() {
                dom::set_styles(
                    &el,
                    &[("transform", TILT_RESET), ("transition", TILT_LEAVE_TRANSITION)],
                );
            }
        })
    };

    let delay = format!("animation-delay: {}ms;", reveal_delay_ms(props.index, stagger));
    html! {
        <article
            class={classes!("feature-3d-card", visible.then_some("visible"))}
            style={delay}
            onmousemove={on_move}
            onmouseleave={on_leave}
            ref={node}
        >
            <div class="feature-3d-card__icon" aria-hidden="true">{ props.icon.clone() }</div>
            <h3 class="feature-3d-card__title">{ props.title.clone() }</h3>
            <p class="feature-3d-card__body">{ props.body.clone() }</p>
        </article>
    }
}
