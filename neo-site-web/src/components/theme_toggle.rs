use yew::prelude::*;

use crate::context::{SiteAction, use_site};
use crate::theme::switch_theme;

/// Light/dark switch. Persists the choice and updates `<html data-theme>`.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(ctx) = use_site() else {
        return Html::default();
    };
    let theme = ctx.theme;
    let onclick = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let next = switch_theme(ctx.theme);
            ctx.dispatch(SiteAction::SetTheme(next));
        })
    };
    html! {
        <button
            id="themeToggle"
            type="button"
            class="theme-toggle"
            aria-label={theme.toggle_label()}
            aria-pressed={(theme == neo_site_core::Theme::Light).to_string()}
            data-theme={theme.as_str()}
            {onclick}
        >
            <span class="theme-toggle__icon" aria-hidden="true">
                { if theme == neo_site_core::Theme::Dark { "☀" } else { "☾" } }
            </span>
        </button>
    }
}
