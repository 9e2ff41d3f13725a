use neo_site_core::{CounterAnimation, parse_count};
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Raw target, as it would appear in a `data-count` attribute.
    pub count: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

/// Statistic that counts up from zero the first time it scrolls into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &Props) -> Html {
    let ctx = use_site();
    let (duration, frame, threshold) = ctx.as_ref().map_or((2000, 16, 0.1), |c| {
        (c.config.counter_ms, c.config.frame_ms, c.config.reveal_threshold)
    });
    let target = parse_count(&props.count);
    let shown = use_state_eq(|| 0_u32);
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), threshold);

    {
        let shown = shown.clone();
        use_effect_with((visible, target), move |&(visible, target)| {
            let alive = std::rc::Rc::new(std::cell::Cell::new(true));
            if let (true, Some(target), Some(_)) = (visible, target, dom::window()) {
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut anim = CounterAnimation::new(target, duration, frame);
                    loop {
                        let step = anim.advance();
                        if !alive.get() {
                            break;
                        }
                        shown.set(step.value);
                        if step.done || dom::sleep_ms(frame).await.is_err() {
                            break;
                        }
                    }
                });
            }
            move || alive.set(false)
        });
    }

    let value = match target {
        Some(_) => shown.to_string(),
        None => props.count.to_string(),
    };
    html! {
        <div class="stat" ref={node}>
            <span class="stat__value" data-count={props.count.clone()}>
                { value }
                { props.suffix.clone().unwrap_or_default() }
            </span>
            <span class="stat__label">{ props.label.clone() }</span>
        </div>
    }
}
