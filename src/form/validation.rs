//! Validation helpers
//!
//! The engine never invents rules: callers hand it a validate function.
//! [`validate_fields`] is the stock one, running each descriptor's validator.

use super::field::{FieldValue, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field key → message, only for fields currently failing
pub type ValidationErrors<F> = BTreeMap<F, String>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_PATTERN: invalid regex pattern")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$")
        .expect("PHONE_PATTERN: invalid regex pattern")
});

/// Run every descriptor's validator over `values`
pub fn validate_fields<T: FormValues>(values: &T) -> ValidationErrors<T::Field> {
    T::descriptors()
        .iter()
        .filter_map(|d| (d.validate)(&values.value(d.field)).map(|msg| (d.field, msg)))
        .collect()
}

/// Validator for fields without rules
pub fn no_rules(_: &FieldValue) -> Option<String> {
    None
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Phone numbers need a plausible shape and at least 10 digits
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_PATTERN.is_match(phone) && digits >= 10
}
