//! Data values: initial values, change coercion, truthiness and options.

use formkit_schema::{Field, FieldType, ValueOption, ValuesSource};
use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::error::{Result, ViewerError};

/// Initial value of a keyed input: the provided data wins, then the
/// field's default value, then the type's empty value.
pub fn initial_value(field: &Field, data: &Map<String, Value>) -> Value {
    field
        .key
        .as_ref()
        .and_then(|key| data.get(key))
        .or(field.default_value.as_ref())
        .cloned()
        .or_else(|| field.type_.info().and_then(|info| info.empty_value))
        .unwrap_or(Value::Null)
}

/// Coerce raw widget input into the value stored for `field`.
pub fn coerce(field: &Field, raw: Value) -> Result<Value> {
    let invalid = |message: &str| ViewerError::invalid_value(&field.id, message);

    match field.type_ {
        FieldType::Select | FieldType::Radio => match raw {
            Value::Null => Ok(Value::Null),
            Value::String(s) if s.is_empty() => Ok(Value::Null),
            other => Ok(other),
        },
        FieldType::Number => match raw {
            Value::Null => Ok(Value::Null),
            Value::Number(n) => Ok(Value::Number(n)),
            Value::String(s) if s.trim().is_empty() => Ok(Value::Null),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(number)
                .ok_or_else(|| invalid("expected a number")),
            _ => Err(invalid("expected a number")),
        },
        FieldType::Checkbox => match raw {
            Value::Bool(b) => Ok(Value::Bool(b)),
            Value::String(s) => Ok(Value::Bool(s == "true")),
            Value::Null => Ok(Value::Bool(false)),
            _ => Err(invalid("expected a boolean")),
        },
        FieldType::Checklist | FieldType::Taglist => match raw {
            Value::Array(items) => Ok(Value::Array(items)),
            Value::Null => Ok(Value::Array(Vec::new())),
            _ => Err(invalid("expected a list of values")),
        },
        FieldType::Textfield => match raw {
            Value::Null => Ok(Value::String(String::new())),
            Value::String(s) => Ok(Value::String(s)),
            other => Ok(Value::String(other.to_string())),
        },
        _ => Ok(raw),
    }
}

fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Whether a value counts as set. Empty strings, empty lists, `false`,
/// zero and null do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Whether a value is missing for the purpose of `required`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// String form of a value, as compared against conditional expressions.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Options of a value field: inline `values` for a static source, or the
/// list found in `data[valuesKey]` for an input source. Malformed entries of
/// a dynamic list are skipped.
pub fn options(field: &Field, data: &Map<String, Value>) -> Vec<ValueOption> {
    match field.values_source() {
        ValuesSource::Static => field.values.clone().unwrap_or_default(),
        ValuesSource::Input => {
            let key = field.values_key.as_deref().unwrap_or_default();
            let Some(list) = data.get(key) else {
                return Vec::new();
            };
            let Some(items) = list.as_array() else {
                warn!(field = %field.id, key, "dynamic values are not a list");
                return Vec::new();
            };
            items
                .iter()
                .filter_map(|item| {
                    let option = serde_json::from_value::<ValueOption>(item.clone()).ok();
                    if option.is_none() {
                        warn!(field = %field.id, key, item = %item, "skipping malformed dynamic value");
                    }
                    option
                })
                .collect()
        }
    }
}
