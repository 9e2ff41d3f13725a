use neo_site_core::{CONTACT_DIALOG, DialogPayload, SoundCue, header_scrolled, scroll_progress};
use yew::prelude::*;

use super::magnetic_button::MagneticButton;
use super::sound_toggle::SoundToggle;
use super::theme_toggle::ThemeToggle;
use crate::context::{open_dialog, use_site};
use crate::hooks::{page_extent, use_window_scroll};
use crate::sound::use_sound;

const NAV: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#projects", "Projects"),
    ("#stats", "Numbers"),
    ("#contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_site();
    let play = use_sound();
    let scroll = use_window_scroll();
    let threshold = ctx
        .as_ref()
        .map_or(100.0, |c| c.config.header_scroll_threshold);
    let (doc_height, viewport) = page_extent();
    let progress = scroll_progress(scroll, doc_height, viewport);

    let on_contact = Callback::from(move |_: MouseEvent| {
        if let Some(ctx) = ctx.as_ref() {
            open_dialog(ctx, CONTACT_DIALOG, DialogPayload::None);
        }
        play.emit(SoundCue::Click);
    });

    html! {
        <header
            class={classes!("header", "header--enhanced", header_scrolled(scroll, threshold).then_some("scrolled"))}
            role="banner"
        >
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="header__inner">
                <a href="#top" class="header__logo">{"NEO"}</a>
                <nav class="nav" aria-label="Primary">
                    { for NAV.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav__item nav__item--magnetic">{ *label }</a>
                    }) }
                </nav>
                <div class="header__actions">
                    <ThemeToggle />
                    <SoundToggle />
                    <MagneticButton id={AttrValue::from("cta")} class={classes!("btn--primary")} onclick={on_contact}>
                        {"Get in touch"}
                    </MagneticButton>
                </div>
            </div>
            <div
                class="scroll-progress"
                role="presentation"
                style={format!("transform: scaleX({progress:.3});")}
            ></div>
        </header>
    }
}
