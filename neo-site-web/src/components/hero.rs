use neo_site_core::{DEMO_DIALOG, DialogPayload, SoundCue};
use yew::prelude::*;

use super::hero_canvas::HeroCanvas;
use super::magnetic_button::MagneticButton;
use super::particles::Particles;
use super::typing_text::TypingText;
use crate::context::{open_dialog, use_site};
use crate::sound::use_sound;

pub const DEMO_VIDEO_URL: &str = "https://player.vimeo.com/video/76979871?autoplay=1";

#[function_component(Hero)]
pub fn hero() -> Html {
    let ctx = use_site();
    let play = use_sound();

    let on_demo = Callback::from(move |_: MouseEvent| {
        if let Some(ctx) = ctx.as_ref() {
            open_dialog(
                ctx,
                DEMO_DIALOG,
                DialogPayload::Video {
                    url: DEMO_VIDEO_URL.to_string(),
                },
            );
        }
        play.emit(SoundCue::Click);
    });

    html! {
        <section id="top" class="hero">
            <HeroCanvas />
            <Particles />
            <div class="hero__content">
                <h1 class="hero__title">{"Design that moves"}</h1>
                <p class="hero__subtitle"><TypingText /></p>
                <div class="hero__actions">
                    <MagneticButton
                        id={AttrValue::from("demoButton")}
                        class={classes!("btn--primary")}
                        onclick={on_demo}
                    >
                        <span data-video={DEMO_VIDEO_URL}>{"Watch the demo"}</span>
                    </MagneticButton>
                    <a href="#projects" class="btn btn--ghost btn--magnetic">{"See our work"}</a>
                </div>
            </div>
        </section>
    }
}
