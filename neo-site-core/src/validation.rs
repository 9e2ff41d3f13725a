//! Constraint validation for site forms.
//!
//! Mirrors the browser's built-in checks (required, pattern, type, minlength)
//! as pure functions so the outcome can be computed and tested without a DOM.
//! The web layer still hands the resulting messages to the native validation
//! bubble.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::phone::PHONE_PATTERN;

/// Message shown for an email that fails the type check.
pub const EMAIL_MESSAGE: &str = "Enter a valid email address";
/// Message shown for a phone number that fails the mask pattern.
pub const PHONE_MESSAGE: &str = "Use the format +7 (900) 000-00-00";

const MISSING_MESSAGE: &str = "Please fill out this field";
const TOO_SHORT_MESSAGE: &str = "Please lengthen this text";
const PATTERN_MESSAGE: &str = "Please match the requested format";
const TYPE_MESSAGE: &str = "Please enter a valid value";

// WHATWG "valid e-mail address" production.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email grammar should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    /// Value for the `type` attribute; `None` for `<textarea>`.
    #[must_use]
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Tel => Some("tel"),
            Self::TextArea => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            pattern: None,
            min_length: None,
            placeholder: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A form and, when it lives inside one, the dialog that should close on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub id: String,
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub dialog: Option<String>,
}

impl FormSpec {
    /// The contact form used on every page variant.
    #[must_use]
    pub fn contact() -> Self {
        Self {
            id: "contactForm".to_string(),
            fields: vec![
                FieldSpec::new("name", "Name", FieldKind::Text)
                    .required()
                    .with_min_length(2)
                    .with_placeholder("Your name"),
                FieldSpec::new("email", "Email", FieldKind::Email)
                    .required()
                    .with_placeholder("you@example.com"),
                FieldSpec::new("phone", "Phone", FieldKind::Tel)
                    .required()
                    .with_pattern(PHONE_PATTERN)
                    .with_placeholder(crate::phone::PHONE_PLACEHOLDER),
                FieldSpec::new("message", "Message", FieldKind::TextArea),
            ],
            dialog: None,
        }
    }

    #[must_use]
    pub fn inside_dialog(mut self, dialog: impl Into<String>) -> Self {
        self.dialog = Some(dialog.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Current field values keyed by field name. Absent entries count as empty.
pub type FormValues = BTreeMap<String, String>;

/// Which constraints a value violates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validity {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_short: bool,
}

impl Validity {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !(self.value_missing || self.type_mismatch || self.pattern_mismatch || self.too_short)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// Evaluate one value against a field's constraints.
///
/// An empty optional field is valid regardless of type or pattern, matching
/// the platform behaviour. Whitespace-only input counts as missing.
#[must_use]
pub fn check_field(spec: &FieldSpec, value: &str) -> Validity {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Validity {
            value_missing: spec.required,
            ..Validity::default()
        };
    }

    let type_mismatch = spec.kind == FieldKind::Email && !EMAIL_RE.is_match(trimmed);
    let pattern_mismatch = spec
        .pattern
        .as_deref()
        .and_then(compile_pattern)
        .is_some_and(|re| !re.is_match(value));
    let too_short = spec
        .min_length
        .is_some_and(|min| trimmed.chars().count() < min);

    Validity {
        value_missing: false,
        type_mismatch,
        pattern_mismatch,
        too_short,
    }
}

/// Compiled field patterns, keyed by source. Failures are cached too so an
/// unparsable pattern is reported once.
static PATTERNS: Lazy<Mutex<HashMap<String, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn compile_pattern(pattern: &str) -> Option<Regex> {
    let mut cache = PATTERNS
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(cached) = cache.get(pattern) {
        return cached.clone();
    }
    let compiled = match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => Some(re),
        Err(err) => {
            // Browsers ignore an unparsable pattern attribute.
            log::warn!("ignoring invalid field pattern {pattern:?}: {err}");
            None
        }
    };
    cache.insert(pattern.to_string(), compiled.clone());
    compiled
}

#[must_use]
pub const fn field_state(validity: Validity, touched: bool) -> FieldState {
    if !touched {
        FieldState::Untouched
    } else if validity.is_valid() {
        FieldState::Valid
    } else {
        FieldState::Invalid
    }
}

/// Human-readable replacement for the browser message, for the cases where
/// the generic one is confusing. `None` keeps the native message.
#[must_use]
pub const fn custom_message(kind: FieldKind, validity: Validity) -> Option<&'static str> {
    match kind {
        FieldKind::Email if validity.type_mismatch => Some(EMAIL_MESSAGE),
        FieldKind::Tel if validity.pattern_mismatch => Some(PHONE_MESSAGE),
        _ => None,
    }
}

/// Message to render inline, falling back to the generic wording.
#[must_use]
pub const fn display_message(kind: FieldKind, validity: Validity) -> Option<&'static str> {
    if let Some(msg) = custom_message(kind, validity) {
        return Some(msg);
    }
    if validity.value_missing {
        Some(MISSING_MESSAGE)
    } else if validity.type_mismatch {
        Some(TYPE_MESSAGE)
    } else if validity.pattern_mismatch {
        Some(PATTERN_MESSAGE)
    } else if validity.too_short {
        Some(TOO_SHORT_MESSAGE)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub name: String,
    pub kind: FieldKind,
    pub validity: Validity,
    pub custom_message: Option<&'static str>,
}

impl FieldReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    #[must_use]
    pub const fn display_message(&self) -> Option<&'static str> {
        display_message(self.kind, self.validity)
    }
}

/// Outcome of validating every field of a form, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormReport {
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldReport::is_valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.is_valid())
    }

    #[must_use]
    pub fn first_invalid(&self) -> Option<&FieldReport> {
        self.invalid_fields().next()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[must_use]
pub fn validate_form(spec: &FormSpec, values: &FormValues) -> FormReport {
    let fields = spec
        .fields
        .iter()
        .map(|field| {
            let value = values.get(&field.name).map_or("", String::as_str);
            let validity = check_field(field, value);
            FieldReport {
                name: field.name.clone(),
                kind: field.kind,
                validity,
                custom_message: custom_message(field.kind, validity),
            }
        })
        .collect();
    FormReport { fields }
}
