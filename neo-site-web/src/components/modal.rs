use wasm_bindgen::JsCast;
use web_sys::HtmlDialogElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Native `<dialog>` driven by the `open` prop.
///
/// The element is always rendered so it can be targeted by id; opening calls
/// `showModal()`, which gives the platform focus trap and Escape handling.
/// Escape, a click on the backdrop, and the close button all report through
/// `on_close`; the owner decides whether the dialog actually closes.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let dialog_ref = use_node_ref();

    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with(props.open, move |open| {
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                if *open && !dialog.open() {
                    if let Err(err) = dialog.show_modal() {
                        log::warn!("dialog failed to open: {}", crate::dom::js_error_message(&err));
                    }
                } else if !*open && dialog.open() {
                    dialog.close();
                }
            }
            || {}
        });
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Escape fires `cancel`; keep the element open until state says otherwise.
    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |e: Event| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let on_backdrop = {
        let cb = props.on_close.clone();
        let dialog_ref = dialog_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_self = dialog_ref.get().is_some_and(|dialog| {
                e.target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|t| dialog.is_same_node(Some(&t)))
            });
            if on_self {
                cb.emit(());
            }
        })
    };

    let title_id = format!("{}-title", props.id);
    let state = if props.open { "open" } else { "closed" };
    html! {
        <dialog
            id={props.id.clone()}
            class={classes!("modal", props.class.clone())}
            aria-labelledby={title_id.clone()}
            data-state={state}
            oncancel={on_cancel}
            onclick={on_backdrop}
            ref={dialog_ref}
        >
            <div class="modal__content">
                <div class="modal__header">
                    <h2 id={title_id} class="modal__title">{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={close}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </dialog>
    }
}
