use std::cell::Cell;
use std::rc::Rc;

use neo_site_core::Typewriter;
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;

/// Hero tagline that types, holds, deletes and cycles through the configured texts.
#[function_component(TypingText)]
pub fn typing_text() -> Html {
    let typing = use_site()
        .map(|ctx| ctx.config.typing.clone())
        .unwrap_or_default();
    let text = use_state_eq(String::new);

    {
        let text = text.clone();
        use_effect_with(typing, move |typing| {
            let alive = Rc::new(Cell::new(true));
            if dom::window().is_some() {
                let alive = alive.clone();
                let mut writer = Typewriter::new(typing);
                wasm_bindgen_futures::spawn_local(async move {
                    let mut delay = writer.start_delay_ms();
                    loop {
                        if dom::sleep_ms(delay).await.is_err() || !alive.get() {
                            break;
                        }
                        let Some(step) = writer.step() else {
                            break;
                        };
                        text.set(step.text);
                        delay = step.delay_ms;
                    }
                });
            }
            move || alive.set(false)
        });
    }

    html! {
        <span id="typingText" class="typing-text" aria-live="off">{ (*text).clone() }</span>
    }
}
