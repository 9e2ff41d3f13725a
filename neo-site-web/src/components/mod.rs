pub mod contact_form;
pub mod counter;
pub mod cursor;
pub mod dialogs;
pub mod feature_card;
pub mod form_field;
pub mod header;
pub mod hero;
pub mod hero_canvas;
pub mod loading_screen;
pub mod magnetic_button;
pub mod modal;
pub mod particles;
pub mod phone_input;
pub mod projects;
pub mod sections;
pub mod sound_toggle;
pub mod theme_toggle;
pub mod toast;
pub mod typing_text;
