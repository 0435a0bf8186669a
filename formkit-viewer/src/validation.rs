//! Submit-time validation of field values against their `validate` rules.

use formkit_schema::Field;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::value::is_empty;

/// Error messages for `value`; empty when the value is acceptable.
///
/// Rules other than `required` only apply to non-empty values.
pub fn validate_value(field: &Field, value: &Value) -> Vec<String> {
    let Some(rules) = &field.validate else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if is_empty(value) {
        if rules.required == Some(true) {
            errors.push("Field is required.".to_string());
        }
        return errors;
    }

    if let Value::String(text) = value {
        let length = text.chars().count() as u64;
        if let Some(min) = rules.min_length.filter(|min| length < *min) {
            errors.push(format!("Field must have minimum length of {min}."));
        }
        if let Some(max) = rules.max_length.filter(|max| length > *max) {
            errors.push(format!("Field must have maximum length of {max}."));
        }
        if let Some(pattern) = &rules.pattern {
            match Regex::new(pattern) {
                Ok(re) if !re.is_match(text) => {
                    errors.push(format!("Field must match pattern {pattern}."));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(field = %field.id, pattern = %pattern, error = %e, "ignoring invalid pattern");
                }
            }
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = rules.min.filter(|min| n < *min) {
            errors.push(format!("Field must have minimum value of {min}."));
        }
        if let Some(max) = rules.max.filter(|max| n > *max) {
            errors.push(format!("Field must have maximum value of {max}."));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(validate: Value) -> Field {
        serde_json::from_value(json!({
            "id": "Textfield_1",
            "type": "textfield",
            "key": "name",
            "validate": validate
        }))
        .unwrap()
    }

    #[test]
    fn test_required() {
        let f = field(json!({ "required": true, "minLength": 3 }));
        assert_eq!(validate_value(&f, &json!("")), vec!["Field is required."]);
        assert_eq!(validate_value(&f, &Value::Null), vec!["Field is required."]);
        assert!(validate_value(&f, &json!("Jane")).is_empty());
    }

    #[test]
    fn test_length_and_pattern() {
        let f = field(json!({ "minLength": 3, "maxLength": 5, "pattern": "^[a-z]+$" }));
        assert_eq!(
            validate_value(&f, &json!("ab")),
            vec!["Field must have minimum length of 3."]
        );
        assert_eq!(
            validate_value(&f, &json!("abcdefg")),
            vec!["Field must have maximum length of 5."]
        );
        assert_eq!(
            validate_value(&f, &json!("AB1")),
            vec!["Field must match pattern ^[a-z]+$."]
        );
        assert!(validate_value(&f, &json!("")).is_empty());
    }

    #[test]
    fn test_number_bounds() {
        let f = field(json!({ "min": 1, "max": 10 }));
        assert_eq!(
            validate_value(&f, &json!(0)),
            vec!["Field must have minimum value of 1."]
        );
        assert_eq!(
            validate_value(&f, &json!(10.5)),
            vec!["Field must have maximum value of 10."]
        );
        assert!(validate_value(&f, &json!(5)).is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_ignored() {
        let f = field(json!({ "pattern": "(" }));
        assert!(validate_value(&f, &json!("anything")).is_empty());
    }
}
