use futures::executor::block_on;
use neo_site_core::{
    CONTACT_DIALOG, DialogPayload, FormSpec, Notice, PROJECT_DIALOG, SiteConfig, Theme,
};
use neo_site_web::app::App;
use neo_site_web::components::contact_form::ContactForm;
use neo_site_web::components::counter::StatCounter;
use neo_site_web::components::dialogs::Dialogs;
use neo_site_web::components::loading_screen::LoadingScreen;
use neo_site_web::components::modal::Modal;
use neo_site_web::components::phone_input::PhoneInput;
use neo_site_web::components::sound_toggle::SoundToggle;
use neo_site_web::components::theme_toggle::ThemeToggle;
use neo_site_web::components::toast::Toasts;
use neo_site_web::context::{SiteAction, SiteContext, SiteState};
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[derive(Properties, PartialEq)]
struct SiteHarnessProps {
    actions: Vec<SiteAction>,
}

/// Provides a site context seeded by replaying `actions`.
#[function_component(SiteHarness)]
fn site_harness(props: &SiteHarnessProps) -> Html {
    let actions = props.actions.clone();
    let site = use_reducer(move || {
        let mut state = std::rc::Rc::new(SiteState::new(SiteConfig::default(), Theme::Dark));
        for action in actions {
            state = yew::Reducible::reduce(state, action);
        }
        (*state).clone()
    });
    html! {
        <ContextProvider<SiteContext> context={site}>
            <ThemeToggle />
            <SoundToggle />
            <Dialogs />
        </ContextProvider<SiteContext>>
    }
}

fn render_site(actions: Vec<SiteAction>) -> String {
    block_on(LocalServerRenderer::<SiteHarness>::with_props(SiteHarnessProps { actions }).render())
}

#[test]
fn app_renders_page_shell() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("loadingScreen"));
    assert!(html.contains("id=\"main\""));
    assert!(html.contains("id=\"contactForm\""));
    assert!(html.contains("id=\"demoModal\""));
    assert!(html.contains("id=\"projectModal\""));
    assert!(html.contains("id=\"contactModal\""));
    assert!(html.contains("id=\"hoverSound\""));
    assert!(html.contains("id=\"clickSound\""));
    assert!(html.contains("site-status"));
    assert!(html.contains("feature-3d-card"));
    assert!(html.contains("data-count=\"150\""));
    assert!(!html.contains("loading-screen--hidden"));
}

#[test]
fn contact_form_renders_fields_without_errors() {
    let props = neo_site_web::components::contact_form::Props {
        spec: FormSpec::contact(),
        submit_label: AttrValue::from("Send"),
    };
    let html = block_on(LocalServerRenderer::<ContactForm>::with_props(props).render());
    assert!(html.contains("novalidate"));
    assert!(html.contains("contactForm-name"));
    assert!(html.contains("contactForm-email"));
    assert!(html.contains("contactForm-phone"));
    assert!(html.contains("<textarea"));
    assert!(html.contains("type=\"email\""));
    assert!(!html.contains("aria-invalid"));
    assert!(!html.contains("form__group--invalid"));
}

#[test]
fn phone_input_advertises_mask() {
    let props = neo_site_web::components::phone_input::Props {
        id: AttrValue::from("phone"),
        name: AttrValue::from("phone"),
        required: true,
        invalid: true,
        described_by: Some(AttrValue::from("phone-error")),
        on_input: Callback::noop(),
        on_blur: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PhoneInput>::with_props(props).render());
    assert!(html.contains("type=\"tel\""));
    assert!(html.contains("+7 (900) 000-00-00"));
    assert!(html.contains("aria-invalid=\"true\""));
    assert!(html.contains("aria-describedby=\"phone-error\""));
}

#[test]
fn modal_reflects_open_state() {
    let render = |open: bool| {
        let props = neo_site_web::components::modal::Props {
            id: AttrValue::from("demoModal"),
            open,
            title: AttrValue::from("Demo"),
            on_close: Callback::noop(),
            class: Classes::new(),
            children: ChildrenRenderer::default(),
        };
        block_on(LocalServerRenderer::<Modal>::with_props(props).render())
    };
    let open = render(true);
    assert!(open.contains("<dialog"));
    assert!(open.contains("data-state=\"open\""));
    assert!(open.contains("demoModal-title"));
    assert!(render(false).contains("data-state=\"closed\""));
}

#[test]
fn dialogs_render_payloads_for_the_open_dialog_only() {
    let html = render_site(vec![SiteAction::OpenDialog {
        id: PROJECT_DIALOG.into(),
        payload: DialogPayload::Project { id: "2".into() },
        return_focus: None,
    }]);
    assert!(html.contains("Project #2 details"));
    assert!(!html.contains("<iframe"));

    let html = render_site(vec![SiteAction::OpenDialog {
        id: neo_site_core::DEMO_DIALOG.into(),
        payload: DialogPayload::Video {
            url: "https://example.com/embed".into(),
        },
        return_focus: None,
    }]);
    assert!(html.contains("<iframe"));
    assert!(html.contains("https://example.com/embed"));
    assert!(!html.contains("Project #"));

    let html = render_site(vec![
        SiteAction::OpenDialog {
            id: CONTACT_DIALOG.into(),
            payload: DialogPayload::None,
            return_focus: Some("cta".into()),
        },
        SiteAction::CloseDialog(CONTACT_DIALOG.into()),
    ]);
    assert!(!html.contains("data-state=\"open\""));
}

#[test]
fn toggles_reflect_site_state() {
    let html = render_site(Vec::new());
    assert!(html.contains("themeToggle"));
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("🔊"));
    assert!(!html.contains("sound-toggle--muted"));

    let html = render_site(vec![
        SiteAction::ToggleSound,
        SiteAction::SetTheme(Theme::Light),
    ]);
    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains("🔇"));
    assert!(html.contains("sound-toggle--muted"));
}

#[test]
fn toasts_render_each_notice() {
    let props = neo_site_web::components::toast::Props {
        notices: vec![Notice {
            id: 7,
            message: "Thanks!".into(),
            expires_at_ms: 3000.0,
        }],
        on_dismiss: Some(Callback::noop()),
    };
    let html = block_on(LocalServerRenderer::<Toasts>::with_props(props).render());
    assert!(html.contains("Thanks!"));
    assert!(html.contains("toast--success"));
    assert!(html.contains("Dismiss"));
}

#[test]
fn loading_screen_hides_when_loaded() {
    let render = |visible: bool| {
        block_on(
            LocalServerRenderer::<LoadingScreen>::with_props(
                neo_site_web::components::loading_screen::Props { visible },
            )
            .render(),
        )
    };
    assert!(!render(true).contains("loading-screen--hidden"));
    assert!(render(false).contains("loading-screen--hidden"));
}

#[test]
fn counter_starts_at_zero_and_passes_through_unparsable_targets() {
    let render = |count: &'static str| {
        block_on(
            LocalServerRenderer::<StatCounter>::with_props(
                neo_site_web::components::counter::Props {
                    count: AttrValue::from(count),
                    label: AttrValue::from("Projects"),
                    suffix: Some(AttrValue::from("+")),
                },
            )
            .hydratable(false)
            .render(),
        )
    };
    let html = render("150");
    assert!(html.contains(">0"));
    assert!(html.contains("Projects"));
    assert!(render("n/a").contains("n/a"));
}
