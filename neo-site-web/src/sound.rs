//! Interface sound playback.

use neo_site_core::{SoundCue, SoundState};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;

/// Rewind and play the `<audio>` element for `cue` when sound is on.
///
/// Browsers reject playback before the first user gesture; that rejection is
/// logged at debug level and otherwise ignored.
pub fn play(state: SoundState, cue: SoundCue) {
    if !state.should_play(cue) {
        return;
    }
    let Some(audio) = dom::element_by_id::<HtmlAudioElement>(cue.element_id()) else {
        return;
    };
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("audio play failed: {}", dom::js_error_message(&err));
            }
        }),
        Err(err) => log::debug!("audio play failed: {}", dom::js_error_message(&err)),
    }
}

/// Callback that plays a cue using the current sound preference.
#[hook]
pub fn use_sound() -> Callback<SoundCue> {
    let sound = use_site().map(|ctx| ctx.sound).unwrap_or_default();
    Callback::from(move |cue| play(sound, cue))
}
