use neo_site_core::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notices: Vec<Notice>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<u64>>,
}

/// Stack of transient confirmations, newest last.
#[function_component(Toasts)]
pub fn toasts(props: &Props) -> Html {
    html! {
        <div class="toast-stack" aria-live="polite">
            { for props.notices.iter().map(|notice| {
                let dismiss = props.on_dismiss.as_ref().map(|cb| {
                    let id = notice.id;
                    let on_click = cb.reform(move |_: MouseEvent| id);
                    html! {
                        <button type="button" class="toast__close" aria-label="Dismiss" onclick={on_click}>{"✕"}</button>
                    }
                }).unwrap_or_default();
                html! {
                    <div key={notice.id} class="toast toast--success" role="status">
                        <span class="toast__message">{ notice.message.clone() }</span>
                        { dismiss }
                    </div>
                }
            }) }
        </div>
    }
}
