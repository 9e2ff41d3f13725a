//! Simulated form submission.
//!
//! No backend exists: an accepted submission produces a transient
//! confirmation notice and a request to close the enclosing dialog. While a
//! confirmation is showing, further valid submits are ignored; invalid ones
//! are still rejected.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::validation::{FormReport, FormSpec, FormValues};

pub const SUCCESS_MESSAGE: &str = "Thank you! We will get back to you shortly.";

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Constraint violations; carries the invalid field names in form order.
    Rejected { invalid: Vec<String> },
    Accepted {
        notice: Notice,
        close_dialog: Option<String>,
    },
    /// A confirmation from an earlier submit is still on screen.
    Pending { until_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    notice_ms: u32,
    pending_until: Option<f64>,
    next_id: u64,
}

impl SubmissionGuard {
    #[must_use]
    pub const fn new(notice_ms: u32) -> Self {
        Self {
            notice_ms,
            pending_until: None,
            next_id: 1,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_until.is_some()
    }

    pub fn submit(&mut self, spec: &FormSpec, report: &FormReport, now_ms: f64) -> SubmitOutcome {
        self.tick(now_ms);
        // Constraint feedback is never debounced; only acceptance is.
        if !report.is_valid() {
            return SubmitOutcome::Rejected {
                invalid: report.invalid_fields().map(|f| f.name.clone()).collect(),
            };
        }
        if let Some(until_ms) = self.pending_until {
            return SubmitOutcome::Pending { until_ms };
        }

        let expires_at_ms = now_ms + f64::from(self.notice_ms);
        self.pending_until = Some(expires_at_ms);
        let id = self.next_id;
        self.next_id += 1;
        SubmitOutcome::Accepted {
            notice: Notice {
                id,
                message: SUCCESS_MESSAGE.to_string(),
                expires_at_ms,
            },
            close_dialog: spec.dialog.clone(),
        }
    }

    /// Clear an expired confirmation. Returns `true` when one expired on this call.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.pending_until {
            Some(until) if now_ms >= until => {
                self.pending_until = None;
                true
            }
            _ => false,
        }
    }
}

/// What gets written to the console for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: String,
    pub fields: BTreeMap<String, String>,
}

impl Submission {
    #[must_use]
    pub fn from_values(spec: &FormSpec, values: &FormValues) -> Self {
        let fields = spec
            .fields
            .iter()
            .map(|f| {
                let value = values.get(&f.name).cloned().unwrap_or_default();
                (f.name.clone(), value.trim().to_string())
            })
            .collect();
        Self {
            form: spec.id.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_form;

    fn filled() -> FormValues {
        [
            ("name", "Anna"),
            ("email", "anna@example.com"),
            ("phone", "+7 (999) 123-45-67"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn rejected_submit_lists_fields_and_shows_nothing() {
        let spec = FormSpec::contact();
        let report = validate_form(&spec, &FormValues::new());
        let mut guard = SubmissionGuard::new(3000);
        let outcome = guard.submit(&spec, &report, 0.0);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                invalid: vec!["name".into(), "email".into(), "phone".into()]
            }
        );
        assert!(!guard.is_pending());
    }

    #[test]
    fn accepted_submit_closes_enclosing_dialog() {
        let spec = FormSpec::contact().inside_dialog("contactModal");
        let report = validate_form(&spec, &filled());
        let mut guard = SubmissionGuard::new(3000);
        match guard.submit(&spec, &report, 1000.0) {
            SubmitOutcome::Accepted {
                notice,
                close_dialog,
            } => {
                assert_eq!(notice.expires_at_ms, 4000.0);
                assert_eq!(close_dialog.as_deref(), Some("contactModal"));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn second_submit_during_confirmation_is_ignored() {
        let spec = FormSpec::contact();
        let report = validate_form(&spec, &filled());
        let mut guard = SubmissionGuard::new(3000);
        assert!(matches!(
            guard.submit(&spec, &report, 0.0),
            SubmitOutcome::Accepted { .. }
        ));
        assert_eq!(
            guard.submit(&spec, &report, 1500.0),
            SubmitOutcome::Pending { until_ms: 3000.0 }
        );
        assert!(guard.tick(3000.0));
        match guard.submit(&spec, &report, 3001.0) {
            SubmitOutcome::Accepted { notice, .. } => assert_eq!(notice.id, 2),
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn invalid_submit_during_confirmation_is_still_rejected() {
        let spec = FormSpec::contact();
        let mut guard = SubmissionGuard::new(3000);
        let valid = validate_form(&spec, &filled());
        assert!(matches!(
            guard.submit(&spec, &valid, 0.0),
            SubmitOutcome::Accepted { .. }
        ));

        let empty = validate_form(&spec, &FormValues::new());
        assert_eq!(
            guard.submit(&spec, &empty, 500.0),
            SubmitOutcome::Rejected {
                invalid: vec!["name".into(), "email".into(), "phone".into()]
            }
        );
        assert!(guard.is_pending(), "the confirmation keeps running");
        assert_eq!(
            guard.submit(&spec, &valid, 600.0),
            SubmitOutcome::Pending { until_ms: 3000.0 }
        );
    }

    #[test]
    fn submission_record_trims_values() {
        let spec = FormSpec::contact();
        let mut values = filled();
        values.insert("name".into(), "  Anna ".into());
        let record = Submission::from_values(&spec, &values);
        assert_eq!(record.fields["name"], "Anna");
        assert_eq!(record.fields["message"], "");
    }
}
