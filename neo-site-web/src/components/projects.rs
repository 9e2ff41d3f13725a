use neo_site_core::{DialogPayload, PROJECT_DIALOG, SoundCue, reveal_delay_ms};
use yew::prelude::*;

use crate::context::{open_dialog, use_site};
use crate::hooks::use_reveal;
use crate::sound::use_sound;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: usize,
    pub project_id: AttrValue,
    pub title: AttrValue,
    pub summary: AttrValue,
}

/// Portfolio card with a details button that opens the project dialog.
#[function_component(ProjectCard)]
pub fn project_card(props: &Props) -> Html {
    let ctx = use_site();
    let play = use_sound();
    let (threshold, stagger) = ctx
        .as_ref()
        .map_or((0.1, 100), |c| (c.config.reveal_threshold, c.config.stagger_ms));
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), threshold);

    let on_details = {
        let project_id = props.project_id.to_string();
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = ctx.as_ref() {
                open_dialog(
                    ctx,
                    PROJECT_DIALOG,
                    DialogPayload::Project {
                        id: project_id.clone(),
                    },
                );
            }
            play.emit(SoundCue::Click);
        })
    };

    let button_id = format!("project-{}-details", props.project_id);
    html! {
        <article
            class={classes!("project-3d-card", "fade-in", visible.then_some("visible"))}
            style={format!("animation-delay: {}ms;", reveal_delay_ms(props.index, stagger))}
            ref={node}
        >
            <h3 class="project-3d-card__title">{ props.title.clone() }</h3>
            <p class="project-3d-card__summary">{ props.summary.clone() }</p>
            <button
                id={button_id}
                type="button"
                class="btn btn--ghost"
                data-project={props.project_id.clone()}
                onclick={on_details}
            >
                {"View details"}
            </button>
        </article>
    }
}
