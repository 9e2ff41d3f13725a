//! Telephone input mask.
//! Display format: +7 (DDD) DDD-DD-DD, e.g. +7 (999) 123-45-67

use once_cell::sync::Lazy;
use regex::Regex;

/// Country code plus ten subscriber digits.
pub const MAX_DIGITS: usize = 11;

/// Constraint pattern installed on `input[type=tel]`.
pub const PHONE_PATTERN: &str = r"\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}";

pub const PHONE_PLACEHOLDER: &str = "+7 (900) 000-00-00";

const COUNTRY_CODE: char = '7';
const TRUNK_PREFIX: char = '8';

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{PHONE_PATTERN})$")).expect("phone pattern should compile")
});

/// Strip formatting and normalize the national prefix.
///
/// Non-digits are dropped and the result is capped at [`MAX_DIGITS`]. A
/// leading `8` becomes `7`; any other leading digit is treated as the first
/// subscriber digit and gets an implied `7` in front of it.
#[must_use]
pub fn normalize_digits(raw: &str) -> String {
    let mut digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();
    match digits.chars().next() {
        None | Some(COUNTRY_CODE) => {}
        Some(TRUNK_PREFIX) => digits.replace_range(..1, "7"),
        Some(_) => {
            digits.insert(0, COUNTRY_CODE);
            digits.truncate(MAX_DIGITS);
        }
    }
    digits
}

/// Render raw field text as the progressive display mask.
///
/// Groups open as soon as the digits reach them, so a partially typed number
/// renders as e.g. `+7 (999) 12`. Empty input yields an empty string.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    render(&normalize_digits(raw))
}

/// Mask for a value the user just shortened with backspace or delete.
///
/// Removing the trailing separator would have it re-rendered straight back,
/// leaving the field stuck; in that case the last digit goes as well. A
/// separator removed anywhere else is simply restored.
#[must_use]
pub fn format_after_delete(raw: &str) -> String {
    let formatted = format_phone(raw);
    if formatted.len() <= raw.len() || !formatted.starts_with(raw) {
        return formatted;
    }
    let mut digits = normalize_digits(raw);
    digits.pop();
    render(&digits)
}

/// Digits contained in an already formatted value.
#[must_use]
pub fn phone_digits(display: &str) -> String {
    display.chars().filter(char::is_ascii_digit).collect()
}

/// Whether a display value is a full number in the canonical format.
#[must_use]
pub fn is_complete(display: &str) -> bool {
    phone_digits(display).len() == MAX_DIGITS && PHONE_RE.is_match(display)
}

fn group(digits: &str, from: usize, to: usize) -> &str {
    let len = digits.len();
    &digits[from.min(len)..to.min(len)]
}

fn render(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let len = digits.len();
    let mut out = String::with_capacity(PHONE_PLACEHOLDER.len());
    out.push_str("+7");
    if len >= 2 {
        out.push_str(" (");
        out.push_str(group(digits, 1, 4));
    }
    if len >= 4 {
        out.push(')');
    }
    if len >= 5 {
        out.push(' ');
        out.push_str(group(digits, 4, 7));
    }
    if len >= 8 {
        out.push('-');
        out.push_str(group(digits, 7, 9));
    }
    if len >= 10 {
        out.push('-');
        out.push_str(group(digits, 9, 11));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_over_a_separator_drops_a_digit() {
        assert_eq!(format_after_delete("+7 (999"), "+7 (99");
        assert_eq!(format_after_delete("+7 (999) 123-4"), "+7 (999) 123-4");
        assert_eq!(format_after_delete("+7 (999) 123-"), "+7 (999) 123");
        assert_eq!(format_after_delete("+7 (999) "), "+7 (999)");
        assert_eq!(format_after_delete("+"), "");
    }

    #[test]
    fn deleting_a_separator_mid_number_keeps_every_digit() {
        assert_eq!(format_after_delete("+7 (999)123"), "+7 (999) 123");
        assert_eq!(
            format_after_delete("+7 (999 123-45-67"),
            "+7 (999) 123-45-67"
        );
        assert_eq!(format_after_delete("+7 (999) 12345-67"), "+7 (999) 123-45-67");
    }

    #[test]
    fn trunk_prefix_is_rewritten() {
        assert_eq!(normalize_digits("89991234567"), "79991234567");
        assert_eq!(format_phone("89991234567"), "+7 (999) 123-45-67");
    }

    #[test]
    fn empty_and_single_digit() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc-()"), "");
        assert_eq!(format_phone("7"), "+7");
        assert_eq!(format_phone("8"), "+7");
    }

    #[test]
    fn groups_open_progressively() {
        assert_eq!(format_phone("79"), "+7 (9");
        assert_eq!(format_phone("7999"), "+7 (999)");
        assert_eq!(format_phone("79991"), "+7 (999) 1");
        assert_eq!(format_phone("79991234"), "+7 (999) 123-4");
        assert_eq!(format_phone("7999123456"), "+7 (999) 123-45-6");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(format_phone("799912345678999"), "+7 (999) 123-45-67");
    }

    #[test]
    fn leading_subscriber_digit_gets_country_code() {
        assert_eq!(normalize_digits("9991234567"), "79991234567");
        assert_eq!(format_phone("999"), "+7 (999)");
    }

    #[test]
    fn mid_string_edit_rerenders_whole_value() {
        // user inserted "5" after the area code of a full number
        assert_eq!(format_phone("+7 (999)5 123-45-67"), "+7 (999) 512-34-56");
    }

    #[test]
    fn completeness_requires_full_mask() {
        assert!(is_complete("+7 (999) 123-45-67"));
        assert!(!is_complete("+7 (999) 123-45-6"));
        assert!(!is_complete("79991234567"));
    }
}
