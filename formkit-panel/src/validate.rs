//! Entry validators.
//!
//! Each validator returns `None` when the input is acceptable, otherwise the
//! message shown next to the entry. Composite validators run their checks in
//! a fixed order and report the first failure.

use formkit_schema::{Field, FieldType, FormFieldLookup};
use regex::Regex;

pub const MUST_NOT_BE_EMPTY: &str = "Must not be empty.";
pub const MUST_NOT_CONTAIN_SPACES: &str = "Must not contain spaces.";
pub const MUST_BE_UNIQUE: &str = "Must be unique.";
pub const MUST_BE_QNAME: &str = "Must be a valid QName.";
pub const MUST_BE_NUMBER: &str = "Must be a number.";
pub const MUST_BE_INTEGER: &str = "Must be a whole number.";
pub const MUST_BE_REGEX: &str = "Must be a valid regular expression.";
pub const MUST_BE_OPTION: &str = "Must be one of the available options.";

pub fn not_empty(value: &str) -> Option<String> {
    value.is_empty().then(|| MUST_NOT_BE_EMPTY.to_string())
}

pub fn no_spaces(value: &str) -> Option<String> {
    value
        .chars()
        .any(char::is_whitespace)
        .then(|| MUST_NOT_CONTAIN_SPACES.to_string())
}

/// Message for a number below `min`.
pub fn greater_or_equal(min: f64) -> String {
    format!("Should be greater than or equal to {min}.")
}

/// Message for a number above `max`.
pub fn less_or_equal(max: f64) -> String {
    format!("Should be less than or equal to {max}.")
}

/// Validate a new id for `field`.
///
/// The schema root id must additionally be a QName, since it ends up as the
/// form's XML identifier.
pub fn validate_id(value: &str, field: &Field, lookup: &dyn FormFieldLookup) -> Option<String> {
    not_empty(value)
        .or_else(|| no_spaces(value))
        .or_else(|| {
            lookup
                .id_assigned(value)
                .filter(|assigned| assigned.id != field.id)
                .map(|_| MUST_BE_UNIQUE.to_string())
        })
        .or_else(|| {
            (field.type_ == FieldType::Default && !is_qname(value))
                .then(|| MUST_BE_QNAME.to_string())
        })
}

/// Validate a new data key for `field`.
pub fn validate_key(value: &str, field: &Field, lookup: &dyn FormFieldLookup) -> Option<String> {
    not_empty(value).or_else(|| no_spaces(value)).or_else(|| {
        lookup
            .key_assigned(value)
            .filter(|assigned| assigned.id != field.id)
            .map(|_| MUST_BE_UNIQUE.to_string())
    })
}

/// Reject `value` if another item of the same list already uses it.
pub fn unique_among<'a>(value: &str, others: impl IntoIterator<Item = &'a str>) -> Option<String> {
    others
        .into_iter()
        .any(|other| other == value)
        .then(|| MUST_BE_UNIQUE.to_string())
}

pub fn valid_regex(value: &str) -> Option<String> {
    Regex::new(value).err().map(|_| MUST_BE_REGEX.to_string())
}

/// `prefix:local` or `local`, where both parts are NCNames.
pub fn is_qname(value: &str) -> bool {
    match value.split_once(':') {
        Some((prefix, local)) => is_ncname(prefix) && is_ncname(local),
        None => is_ncname(value),
    }
}

/// XML non-colonized name, restricted to what form ids actually use.
fn is_ncname(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
