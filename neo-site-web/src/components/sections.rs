use neo_site_core::{CONTACT_DIALOG, DialogPayload, SoundCue};
use yew::prelude::*;

use super::counter::StatCounter;
use super::feature_card::FeatureCard;
use super::magnetic_button::MagneticButton;
use super::projects::ProjectCard;
use crate::context::{open_dialog, use_site};
use crate::sound::use_sound;

const FEATURES: [(&str, &str, &str); 4] = [
    ("✦", "Motion design", "Interfaces that respond to every gesture."),
    ("◈", "3D experiences", "Depth and perspective without plugins."),
    ("⚡", "Performance", "Fast first paint on every device."),
    ("◎", "Accessibility", "Keyboard and screen reader friendly by default."),
];

const PROJECTS: [(&str, &str, &str); 3] = [
    ("1", "Aurora banking", "A calm, animated mobile bank."),
    ("2", "Pulse analytics", "Realtime dashboards for product teams."),
    ("3", "Orbit commerce", "A storefront built around 3D product views."),
];

const STATS: [(&str, &str, &str); 4] = [
    ("150", "Projects shipped", "+"),
    ("98", "Client satisfaction", "%"),
    ("12", "Design awards", ""),
    ("24", "Team members", ""),
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="section features">
            <h2 class="section__title fade-in">{"What we do"}</h2>
            <div class="features__grid">
                { for FEATURES.iter().enumerate().map(|(index, (icon, title, body))| html! {
                    <FeatureCard {index} icon={*icon} title={*title} body={*body} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="section projects">
            <h2 class="section__title fade-in">{"Selected work"}</h2>
            <div class="projects__grid">
                { for PROJECTS.iter().enumerate().map(|(index, (id, title, summary))| html! {
                    <ProjectCard {index} project_id={*id} title={*title} summary={*summary} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section id="stats" class="section stats">
            { for STATS.iter().map(|(count, label, suffix)| html! {
                <StatCounter
                    count={*count}
                    label={*label}
                    suffix={(!suffix.is_empty()).then(|| AttrValue::from(*suffix))}
                />
            }) }
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let ctx = use_site();
    let play = use_sound();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(ctx) = ctx.as_ref() {
            open_dialog(ctx, CONTACT_DIALOG, DialogPayload::None);
        }
        play.emit(SoundCue::Click);
    });
    html! {
        <section id="contact" class="section contact fade-in">
            <h2 class="section__title">{"Have a project in mind?"}</h2>
            <p class="contact__lead">{"Leave your details and we will call you back within a day."}</p>
            <MagneticButton id={AttrValue::from("contactOpen")} class={classes!("btn--primary")} {onclick}>
                {"Start a conversation"}
            </MagneticButton>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer" role="contentinfo">
            <p>{"© NEO Design Studio"}</p>
        </footer>
    }
}
