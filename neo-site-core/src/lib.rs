//! Neo Site Core
//!
//! Platform-agnostic behaviour for the Neo marketing site. Everything here is
//! plain data in, plain data out: the web crate owns the DOM and only applies
//! the values computed by this crate.

pub mod config;
pub mod dialog;
pub mod effects;
pub mod motion;
pub mod phone;
pub mod sound;
pub mod submission;
pub mod theme;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, MagneticConfig, SiteConfig, TypingConfig};
pub use dialog::{
    CONTACT_DIALOG, DEMO_DIALOG, DialogPayload, DialogState, OpenDialog, PROJECT_DIALOG,
    project_detail_title,
};
pub use effects::{
    CursorMode, Particle, ParticleField, Point, ProjectedPoint, Rect, Tilt, card_tilt,
    magnetic_offset, magnetic_transform,
};
pub use motion::{
    CounterAnimation, CounterFrame, TypeStep, Typewriter, header_scrolled, parse_count,
    reveal_delay_ms, scroll_progress,
};
pub use phone::{
    PHONE_PATTERN, PHONE_PLACEHOLDER, format_after_delete, format_phone, is_complete,
    normalize_digits, phone_digits,
};
pub use sound::{SoundCue, SoundState};
pub use submission::{Notice, SubmissionGuard, SubmitOutcome, Submission};
pub use theme::{
    MemoryPreferenceStore, PreferenceError, PreferenceStore, THEME_STORAGE_KEY, Theme,
    resolve_initial_theme, toggle_theme,
};
pub use validation::{
    FieldKind, FieldReport, FieldSpec, FieldState, FormReport, FormSpec, FormValues, Validity,
    check_field, custom_message, display_message, field_state, validate_form,
};
