//! Validation group entries. Every edit rewrites the whole `validate` object.

use formkit_schema::{Field, FieldType};
use serde_json::{Map, Value};

use super::{number_value, parse_number, EntryContext};
use crate::edit::EditField;
use crate::entry::{input_bool, input_text, Entry, Property, Widget};
use crate::error::{PanelError, Result};
use crate::validate::{greater_or_equal, valid_regex, MUST_BE_INTEGER};

/// Entries for `field`'s type, in display order.
pub fn validation_entries(field: &Field) -> Vec<Entry> {
    let validate = field.validate.clone().unwrap_or_default();
    let required = Entry::new(
        "required",
        "Required",
        Widget::Checkbox,
        Value::Bool(validate.required.unwrap_or(false)),
        Property::Required,
    );

    match field.type_ {
        FieldType::Textfield => vec![
            required,
            Entry::new(
                "minLength",
                "Minimum length",
                Widget::NumberField {
                    min: Some(0.0),
                    max: None,
                },
                optional(validate.min_length.map(Value::from)),
                Property::MinLength,
            ),
            Entry::new(
                "maxLength",
                "Maximum length",
                Widget::NumberField {
                    min: Some(0.0),
                    max: None,
                },
                optional(validate.max_length.map(Value::from)),
                Property::MaxLength,
            ),
            Entry::new(
                "pattern",
                "Regular expression pattern",
                Widget::TextField,
                optional(validate.pattern.map(Value::String)),
                Property::Pattern,
            ),
        ],
        FieldType::Number => vec![
            required,
            Entry::new(
                "min",
                "Minimum",
                Widget::NumberField {
                    min: None,
                    max: None,
                },
                optional(validate.min.map(number_value)),
                Property::Min,
            ),
            Entry::new(
                "max",
                "Maximum",
                Widget::NumberField {
                    min: None,
                    max: None,
                },
                optional(validate.max.map(number_value)),
                Property::Max,
            ),
        ],
        FieldType::Radio | FieldType::Select => vec![required],
        _ => Vec::new(),
    }
}

fn optional(value: Option<Value>) -> Value {
    value.unwrap_or_else(|| Value::String(String::new()))
}

pub(crate) fn set_required(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    write(ctx, "required", Some(Value::Bool(input_bool(input))), edit)
}

/// `minLength` / `maxLength`: non-negative whole numbers, empty clears.
pub(crate) fn set_length(
    ctx: &EntryContext,
    key: &str,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let text = input_text(input);
    if text.is_empty() {
        return write(ctx, key, None, edit);
    }

    let n = parse_number(&text)
        .and_then(|n| {
            if n < 0.0 {
                Err(greater_or_equal(0.0))
            } else if n.fract() != 0.0 {
                Err(MUST_BE_INTEGER.to_string())
            } else {
                Ok(n)
            }
        })
        .map_err(|m| PanelError::validation(&ctx.entry.id, m))?;
    write(ctx, key, Some(Value::from(n as u64)), edit)
}

pub(crate) fn set_pattern(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let text = input_text(input);
    if text.is_empty() {
        return write(ctx, "pattern", None, edit);
    }
    ctx.check(valid_regex(&text))?;
    write(ctx, "pattern", Some(Value::String(text)), edit)
}

/// `min` / `max` of number fields: any finite number, empty clears.
pub(crate) fn set_bound(
    ctx: &EntryContext,
    key: &str,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let text = input_text(input);
    if text.is_empty() {
        return write(ctx, key, None, edit);
    }
    let n = parse_number(&text).map_err(|m| PanelError::validation(&ctx.entry.id, m))?;
    write(ctx, key, Some(number_value(n)), edit)
}

fn write(ctx: &EntryContext, key: &str, value: Option<Value>, edit: &mut dyn EditField) -> Result<()> {
    let mut validate = match ctx
        .field
        .validate
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(formkit_schema::SchemaError::from)?
    {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    match value {
        Some(value) => {
            validate.insert(key.to_string(), value);
        }
        None => {
            validate.remove(key);
        }
    }
    edit.edit_field(ctx.field, &["validate"], Some(Value::Object(validate)));
    Ok(())
}
