use neo_site_core::dialog::project_detail_title;
use neo_site_core::{CONTACT_DIALOG, DEMO_DIALOG, DialogPayload, FormSpec, PROJECT_DIALOG};
use yew::prelude::*;

use super::contact_form::ContactForm;
use super::modal::Modal;
use crate::context::{SiteContext, close_dialog, use_site};

fn closer(ctx: &SiteContext, id: &'static str) -> Callback<()> {
    let ctx = ctx.clone();
    Callback::from(move |()| close_dialog(&ctx, id))
}

/// Demo video, project details and contact dialogs, driven by the site state.
#[function_component(Dialogs)]
pub fn dialogs() -> Html {
    let Some(ctx) = use_site() else {
        return Html::default();
    };
    let dialogs = &ctx.dialogs;

    // The iframe only exists while open so closing stops playback.
    let video = match dialogs.payload_for(DEMO_DIALOG) {
        Some(DialogPayload::Video { url }) => html! {
            <iframe
                class="modal__video"
                src={url.clone()}
                title="Product demo"
                allow="autoplay; fullscreen"
                allowfullscreen={true}
            ></iframe>
        },
        _ => Html::default(),
    };
    let project = match dialogs.payload_for(PROJECT_DIALOG) {
        Some(DialogPayload::Project { id }) => html! {
            <div id="projectModalContent" class="project-detail">
                <h3>{ project_detail_title(id) }</h3>
                <p>{"A full case study for this project is on its way."}</p>
            </div>
        },
        _ => html! { <div id="projectModalContent" class="project-detail"></div> },
    };
    let contact = FormSpec::contact().inside_dialog(CONTACT_DIALOG);

    html! {
        <>
            <Modal
                id={DEMO_DIALOG}
                title="Product demo"
                open={dialogs.is_open(DEMO_DIALOG)}
                on_close={closer(&ctx, DEMO_DIALOG)}
                class={classes!("modal--video")}
            >
                { video }
            </Modal>
            <Modal
                id={PROJECT_DIALOG}
                title="Project details"
                open={dialogs.is_open(PROJECT_DIALOG)}
                on_close={closer(&ctx, PROJECT_DIALOG)}
            >
                { project }
            </Modal>
            <Modal
                id={CONTACT_DIALOG}
                title="Tell us about your project"
                open={dialogs.is_open(CONTACT_DIALOG)}
                on_close={closer(&ctx, CONTACT_DIALOG)}
            >
                <ContactForm spec={contact} />
            </Modal>
        </>
    }
}
