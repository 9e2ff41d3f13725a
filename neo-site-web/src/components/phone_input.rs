use neo_site_core::{PHONE_PATTERN, PHONE_PLACEHOLDER, format_after_delete, format_phone};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::TargetCast;
use yew::prelude::*;

/// Re-derive the masked display from whatever is in `input` and write it back.
///
/// The caret jumps to the end after a rewrite; mid-string edits are not
/// position-preserving.
pub fn apply_mask(input: &HtmlInputElement, deleting: bool) -> String {
    let raw = input.value();
    let formatted = if deleting {
        format_after_delete(&raw)
    } else {
        format_phone(&raw)
    };
    if raw != formatted {
        input.set_value(&formatted);
    }
    formatted
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub described_by: Option<AttrValue>,
    /// Masked value after every keystroke.
    #[prop_or_default]
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<String>,
}

/// Telephone input that keeps its value in `+7 (XXX) XXX-XX-XX` form.
#[function_component(PhoneInput)]
pub fn phone_input(props: &Props) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                // Synthetic `input` events are plain `Event`s without `inputType`.
                let deleting = e
                    .dyn_ref::<InputEvent>()
                    .is_some_and(|ie| ie.input_type().starts_with("delete"));
                cb.emit(apply_mask(&input, deleting));
            }
        })
    };
    let on_blur = {
        let cb = props.on_blur.clone();
        Callback::from(move |e: FocusEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            type="tel"
            class="form__input"
            inputmode="tel"
            autocomplete="tel"
            placeholder={PHONE_PLACEHOLDER}
            pattern={PHONE_PATTERN}
            required={props.required}
            aria-required={props.required.to_string()}
            aria-invalid={props.invalid.then_some("true")}
            aria-describedby={props.described_by.clone()}
            oninput={on_input}
            onblur={on_blur}
        />
    }
}
