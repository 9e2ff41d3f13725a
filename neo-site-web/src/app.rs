use neo_site_core::SoundCue;
use yew::prelude::*;

use crate::a11y;
use crate::components::cursor::CustomCursor;
use crate::components::dialogs::Dialogs;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::loading_screen::LoadingScreen;
use crate::components::sections::{ContactSection, Features, Footer, Projects, Stats};
use crate::components::toast::Toasts;
use crate::config::load_site_config;
use crate::context::{SiteAction, SiteContext, SiteState};
use crate::dom;
use crate::paths;
use crate::theme::{apply_theme, document_theme, initial_theme};

/// One-time page setup: theme, service worker, and the loading-screen timers.
#[hook]
fn use_bootstrap(site: &SiteContext) {
    let site = site.clone();
    use_effect_with((), move |()| {
        apply_theme(site.theme);
        dom::register_service_worker(&paths::service_worker_path());

        let loading_ms = site.config.loading_ms;
        let failsafe_ms = site.config.loading_failsafe_ms;
        {
            let site = site.clone();
            dom::after_ms(loading_ms, move || site.dispatch(SiteAction::Loaded));
        }
        // Hides the loading screen even if the regular timer never fires.
        dom::after_ms(failsafe_ms, move || site.dispatch(SiteAction::Loaded));
        || {}
    });
}

/// Hand focus back after a dialog closes, once the dialog is out of the way.
#[hook]
fn use_focus_restore(site: &SiteContext) {
    use_effect_with(site.focus.clone(), |focus| {
        if let Some(request) = focus {
            let target = request.target.clone();
            dom::after_ms(0, move || a11y::focus_element(&target));
        }
        || {}
    });
}

/// Root component: owns the site reducer and lays out the page.
#[function_component(App)]
pub fn app() -> Html {
    let site = use_reducer(|| {
        let theme = document_theme().unwrap_or_else(initial_theme);
        SiteState::new(load_site_config(), theme)
    });
    use_bootstrap(&site);
    use_focus_restore(&site);

    use_effect_with(site.loaded, |&loaded| {
        dom::set_body_class("loaded", loaded);
        if loaded {
            log::debug!("loading screen dismissed");
        }
        || {}
    });

    let on_dismiss = {
        let site = site.clone();
        Callback::from(move |id: u64| site.dispatch(SiteAction::DismissNotice(id)))
    };

    html! {
        <ContextProvider<SiteContext> context={site.clone()}>
            <style>{ a11y::visible_focus_css() }</style>
            <LoadingScreen visible={!site.loaded} />
            <CustomCursor />
            <Header />
            <main id="main" role="main">
                <Hero />
                <Features />
                <Projects />
                <Stats />
                <ContactSection />
            </main>
            <Footer />
            <Dialogs />
            <Toasts notices={site.notices.clone()} on_dismiss={Some(on_dismiss)} />
            <div id={a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
            <audio id={SoundCue::Hover.element_id()} src={paths::asset_path("audio/hover.mp3")} preload="auto"></audio>
            <audio id={SoundCue::Click.element_id()} src={paths::asset_path("audio/click.mp3")} preload="auto"></audio>
        </ContextProvider<SiteContext>>
    }
}
