use neo_site_core::{FieldKind, FieldSpec, FieldState};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::phone_input::PhoneInput;

/// Current value of an `<input>` or `<textarea>`.
#[must_use]
pub fn element_value(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
}

fn target_value(target: Option<EventTarget>) -> Option<String> {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| element_value(&el))
}

/// DOM id of a field's control.
#[must_use]
pub fn control_id(form_id: &str, name: &str) -> String {
    format!("{form_id}-{name}")
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub form_id: AttrValue,
    pub spec: FieldSpec,
    #[prop_or_default]
    pub state: FieldState,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    /// `(name, value)` when the control loses focus.
    #[prop_or_default]
    pub on_blur: Callback<(String, String)>,
    /// `(name, value)` after every edit.
    #[prop_or_default]
    pub on_input: Callback<(String, String)>,
}

#[function_component(FormField)]
pub fn form_field(props: &Props) -> Html {
    let spec = &props.spec;
    let id = control_id(&props.form_id, &spec.name);
    let error_id = format!("{id}-error");
    let invalid = props.state == FieldState::Invalid;

    let emit_with_name = |cb: &Callback<(String, String)>| {
        let cb = cb.clone();
        let name = spec.name.clone();
        Callback::from(move |value: String| cb.emit((name.clone(), value)))
    };
    let on_blur = emit_with_name(&props.on_blur);
    let on_input = emit_with_name(&props.on_input);

    let class = classes!(
        "form__group",
        match props.state {
            FieldState::Untouched => None,
            FieldState::Valid => Some("form__group--valid"),
            FieldState::Invalid => Some("form__group--invalid"),
        }
    );
    let aria_invalid = invalid.then_some("true");
    let described_by = invalid.then(|| AttrValue::from(error_id.clone()));
    let placeholder = spec.placeholder.clone();

    let control = match spec.kind {
        FieldKind::Tel => html! {
            <PhoneInput
                id={AttrValue::from(id.clone())}
                name={AttrValue::from(spec.name.clone())}
                required={spec.required}
                invalid={invalid}
                described_by={described_by}
                on_input={on_input}
                on_blur={on_blur}
            />
        },
        FieldKind::TextArea => {
            let oninput = on_input.reform(|e: InputEvent| target_value(e.target()).unwrap_or_default());
            let onblur = on_blur.reform(|e: FocusEvent| target_value(e.target()).unwrap_or_default());
            html! {
                <textarea
                    id={id.clone()}
                    name={spec.name.clone()}
                    class="form__input form__textarea"
                    rows="4"
                    placeholder={placeholder}
                    required={spec.required}
                    minlength={spec.min_length.map(|n| n.to_string())}
                    aria-invalid={aria_invalid}
                    aria-describedby={described_by}
                    {oninput}
                    {onblur}
                />
            }
        }
        FieldKind::Text | FieldKind::Email => {
            let oninput = on_input.reform(|e: InputEvent| target_value(e.target()).unwrap_or_default());
            let onblur = on_blur.reform(|e: FocusEvent| target_value(e.target()).unwrap_or_default());
            html! {
                <input
                    id={id.clone()}
                    name={spec.name.clone()}
                    type={spec.kind.input_type()}
                    class="form__input"
                    placeholder={placeholder}
                    required={spec.required}
                    minlength={spec.min_length.map(|n| n.to_string())}
                    pattern={spec.pattern.clone()}
                    autocomplete={(spec.kind == FieldKind::Email).then_some("email")}
                    aria-invalid={aria_invalid}
                    aria-describedby={described_by}
                    {oninput}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class={class}>
            <label for={id} class="form__label">
                { spec.label.clone() }
                if spec.required {
                    <span class="form__required" aria-hidden="true">{"*"}</span>
                }
            </label>
            { control }
            <span id={error_id} class="form__error" role="alert">
                { if invalid { props.message.clone().unwrap_or_default() } else { AttrValue::default() } }
            </span>
        </div>
    }
}
