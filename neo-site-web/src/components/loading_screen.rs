use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &Props) -> Html {
    html! {
        <div
            id="loadingScreen"
            class={classes!("loading-screen", (!props.visible).then_some("loading-screen--hidden"))}
            aria-hidden={(!props.visible).to_string()}
            aria-busy={props.visible.to_string()}
        >
            <div class="loading-screen__logo">{"NEO"}</div>
            <div class="loading-screen__bar"><span class="loading-screen__progress"></span></div>
        </div>
    }
}
