use neo_site_core::SoundCue;
use yew::prelude::*;

use crate::context::{SiteAction, use_site};
use crate::sound;

#[function_component(SoundToggle)]
pub fn sound_toggle() -> Html {
    let Some(ctx) = use_site() else {
        return Html::default();
    };
    let state = ctx.sound;
    let onclick = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let next = ctx.sound.toggled();
            ctx.dispatch(SiteAction::ToggleSound);
            sound::play(next, SoundCue::Click);
        })
    };
    html! {
        <button
            id="soundToggle"
            type="button"
            class={classes!("sound-toggle", (!state.enabled()).then_some("sound-toggle--muted"))}
            aria-label={state.label()}
            aria-pressed={(!state.enabled()).to_string()}
            {onclick}
        >
            <span class="sound-toggle__icon" aria-hidden="true">{ state.icon() }</span>
        </button>
    }
}
