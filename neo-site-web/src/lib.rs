#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod hooks;
pub mod paths;
pub mod sound;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    dom::install_error_logging();
    // Set data-theme before the first paint so there is no flash of the wrong palette.
    theme::apply_theme(theme::initial_theme());
    yew::Renderer::<app::App>::new().render();
}
