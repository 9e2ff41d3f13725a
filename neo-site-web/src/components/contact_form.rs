use std::collections::{BTreeMap, BTreeSet};

use neo_site_core::{
    FieldSpec, FieldState, FormReport, FormSpec, FormValues, SoundCue, Submission, SubmissionGuard,
    SubmitOutcome, check_field, display_message, field_state, validate_form,
};
use web_sys::HtmlFormElement;
use yew::prelude::*;

use super::form_field::{FormField, element_value};
use crate::a11y;
use crate::context::{SiteAction, SiteContext, close_dialog, use_site};
use crate::dom;
use crate::sound::use_sound;

/// What a field shows right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldView {
    pub state: FieldState,
    pub message: Option<&'static str>,
}

#[must_use]
pub fn field_view(spec: &FieldSpec, value: &str, touched: bool) -> FieldView {
    let validity = check_field(spec, value);
    let state = field_state(validity, touched);
    let message = if state == FieldState::Invalid {
        display_message(spec.kind, validity)
    } else {
        None
    };
    FieldView { state, message }
}

/// Views after a submit attempt, where every field counts as touched.
#[must_use]
pub fn views_from_report(report: &FormReport) -> BTreeMap<String, FieldView> {
    report
        .fields
        .iter()
        .map(|f| {
            let view = FieldView {
                state: field_state(f.validity, true),
                message: f.display_message(),
            };
            (f.name.clone(), view)
        })
        .collect()
}

fn read_values(form: &HtmlFormElement, spec: &FormSpec) -> FormValues {
    spec.fields
        .iter()
        .filter_map(|field| {
            let el = form
                .query_selector(&format!("[name=\"{}\"]", field.name))
                .ok()
                .flatten()?;
            Some((field.name.clone(), element_value(&el)?))
        })
        .collect()
}

/// Hand the report to the native validation UI.
fn sync_custom_validity(form: &HtmlFormElement, report: &FormReport) {
    for field in &report.fields {
        let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", field.name)) else {
            continue;
        };
        let message = if field.is_valid() {
            ""
        } else {
            field.display_message().unwrap_or_default()
        };
        a11y::set_custom_validity(&el, message);
        a11y::mark_invalid(&el, !field.is_valid());
    }
}

fn log_submission(submission: &Submission) {
    match serde_json::to_string(submission) {
        Ok(json) => log::info!("form submitted: {json}"),
        Err(err) => log::warn!("form {} submitted but not serialisable: {err}", submission.form),
    }
}

fn announce(ctx: Option<&SiteContext>, notice: neo_site_core::Notice, close: Option<String>) {
    a11y::set_status(&notice.message);
    let Some(ctx) = ctx else {
        return;
    };
    let id = notice.id;
    let ttl = ctx.config.notice_ms;
    ctx.dispatch(SiteAction::PushNotice(notice));
    {
        let ctx = ctx.clone();
        dom::after_ms(ttl, move || ctx.dispatch(SiteAction::DismissNotice(id)));
    }
    if let Some(dialog) = close {
        close_dialog(ctx, &dialog);
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub spec: FormSpec,
    #[prop_or(AttrValue::from("Send message"))]
    pub submit_label: AttrValue,
}

/// Contact form with masked phone input and inline constraint feedback.
///
/// Native validation is switched off (`novalidate`); checks run in
/// `neo_site_core` and their messages are pushed back into the platform
/// bubble with `setCustomValidity` + `reportValidity`.
#[function_component(ContactForm)]
pub fn contact_form(props: &Props) -> Html {
    let ctx = use_site();
    let play = use_sound();
    let notice_ms = ctx.as_ref().map_or(3000, |c| c.config.notice_ms);
    let guard = use_mut_ref(move || SubmissionGuard::new(notice_ms));
    let touched = use_mut_ref(BTreeSet::<String>::new);
    let views = use_state(BTreeMap::<String, FieldView>::new);
    let form_ref = use_node_ref();

    let refresh = {
        let spec = props.spec.clone();
        let touched = touched.clone();
        let views = views.clone();
        move |name: &str, value: &str, touch: bool| {
            if touch {
                touched.borrow_mut().insert(name.to_string());
            }
            let Some(field) = spec.field(name) else {
                return;
            };
            let is_touched = touched.borrow().contains(name);
            let mut next = (*views).clone();
            next.insert(name.to_string(), field_view(field, value, is_touched));
            views.set(next);
        }
    };
    let on_blur = {
        let refresh = refresh.clone();
        Callback::from(move |(name, value): (String, String)| refresh(&name, &value, true))
    };
    let on_input = Callback::from(move |(name, value): (String, String)| refresh(&name, &value, false));

    let on_submit = {
        let spec = props.spec.clone();
        let form_ref = form_ref.clone();
        let views = views.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let values = read_values(&form, &spec);
            let report = validate_form(&spec, &values);
            sync_custom_validity(&form, &report);

            let outcome = guard.borrow_mut().submit(&spec, &report, dom::now_ms());
            match outcome {
                SubmitOutcome::Rejected { invalid } => {
                    log::debug!("{} rejected: {}", spec.id, invalid.join(", "));
                    touched
                        .borrow_mut()
                        .extend(spec.fields.iter().map(|f| f.name.clone()));
                    views.set(views_from_report(&report));
                    let _ = form.report_validity();
                }
                SubmitOutcome::Accepted {
                    notice,
                    close_dialog,
                } => {
                    log_submission(&Submission::from_values(&spec, &values));
                    form.reset();
                    touched.borrow_mut().clear();
                    views.set(BTreeMap::new());
                    play.emit(SoundCue::Click);
                    announce(ctx.as_ref(), notice, close_dialog);
                }
                SubmitOutcome::Pending { until_ms } => {
                    log::debug!("{} submit ignored until {until_ms}", spec.id);
                }
            }
        })
    };

    let form_id = AttrValue::from(props.spec.id.clone());
    html! {
        <form
            id={form_id.clone()}
            class="form"
            novalidate={true}
            onsubmit={on_submit}
            ref={form_ref}
        >
            { for props.spec.fields.iter().map(|field| {
                let view = views.get(&field.name).copied().unwrap_or_default();
                html! {
                    <FormField
                        key={field.name.clone()}
                        form_id={form_id.clone()}
                        spec={field.clone()}
                        state={view.state}
                        message={view.message.map(AttrValue::from)}
                        on_blur={on_blur.clone()}
                        on_input={on_input.clone()}
                    />
                }
            }) }
            <button type="submit" class="btn btn--primary btn--magnetic form__submit">
                { props.submit_label.clone() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_site_core::FieldKind;

    #[test]
    fn untouched_fields_show_nothing() {
        let spec = FieldSpec::new("name", "Name", FieldKind::Text).required();
        assert_eq!(field_view(&spec, "", false), FieldView::default());
    }

    #[test]
    fn touched_phone_shows_the_format_hint() {
        let form = FormSpec::contact();
        let phone = form.field("phone").cloned().expect("contact form has a phone field");
        let view = field_view(&phone, "+7 (999) 12", true);
        assert_eq!(view.state, FieldState::Invalid);
        assert_eq!(view.message, Some(neo_site_core::validation::PHONE_MESSAGE));

        let view = field_view(&phone, "+7 (999) 123-45-67", true);
        assert_eq!(view, FieldView {
            state: FieldState::Valid,
            message: None
        });
    }

    #[test]
    fn report_marks_every_field_touched() {
        let form = FormSpec::contact();
        let report = validate_form(&form, &FormValues::new());
        let views = views_from_report(&report);
        assert_eq!(views["name"].state, FieldState::Invalid);
        assert!(views["name"].message.is_some());
        assert_eq!(views["message"].state, FieldState::Valid);
    }
}
