//! Entries of the General group.

use std::collections::HashSet;

use formkit_schema::{generate_id, Field, FieldType, FormFieldLookup, SchemaError, ValuesSource};
use serde_json::{Map, Value};

use super::{number_value, parse_number, EntryContext};
use crate::edit::EditField;
use crate::entry::{input_bool, input_text, Choice, Entry, Property, Widget};
use crate::error::{PanelError, Result};
use crate::validate::{
    greater_or_equal, less_or_equal, no_spaces, not_empty, validate_id, validate_key,
    MUST_BE_INTEGER,
};

/// Value of the `Visible` entry when no controlling field is set.
pub const VISIBLE_NONE: &str = "none";

/// Upper bound of the `Columns` entry; one column per grid track.
pub const MAX_COLUMNS: usize = 16;

pub fn id_entry(field: &Field) -> Vec<Entry> {
    if field.type_ != FieldType::Default {
        return Vec::new();
    }
    vec![Entry::new(
        "id",
        "ID",
        Widget::TextField,
        Value::String(field.id.clone()),
        Property::Id,
    )]
}

pub fn label_entry(field: &Field) -> Vec<Entry> {
    if !field.type_.is_input() && field.type_ != FieldType::Button {
        return Vec::new();
    }
    vec![Entry::new(
        "label",
        "Field label",
        Widget::TextField,
        text_value(&field.label),
        Property::Label,
    )]
}

pub fn description_entry(field: &Field) -> Vec<Entry> {
    if !field.type_.is_input() {
        return Vec::new();
    }
    vec![Entry::new(
        "description",
        "Field description",
        Widget::TextField,
        text_value(&field.description),
        Property::Description,
    )]
}

pub fn key_entry(field: &Field) -> Vec<Entry> {
    if !field.type_.is_input() {
        return Vec::new();
    }
    vec![Entry::new(
        "key",
        "Key",
        Widget::TextField,
        text_value(&field.key),
        Property::Key,
    )
    .with_description("Binds to a form variable")]
}

/// `Visible` plus, while a controlling field is chosen, `Conditional Expression`.
pub fn visible_entries(field: &Field, lookup: &dyn FormFieldLookup) -> Vec<Entry> {
    if !field.type_.is_input() {
        return Vec::new();
    }

    let mut options = vec![Choice::new("None", VISIBLE_NONE)];
    options.extend(
        lookup
            .all()
            .into_iter()
            .filter(|other| other.id != field.id)
            .filter_map(|other| {
                let label = other.label.as_deref().filter(|l| !l.is_empty())?;
                let label = match &other.key {
                    Some(key) => format!("{label} ({key})"),
                    None => label.to_string(),
                };
                Some(Choice::new(label, other.id.clone()))
            }),
    );

    let visible = field
        .visible
        .clone()
        .unwrap_or_else(|| VISIBLE_NONE.to_string());
    let controlled = visible != VISIBLE_NONE;

    let mut entries = vec![Entry::new(
        "visible",
        "Visible",
        Widget::Select { options },
        Value::String(visible),
        Property::Visible,
    )];
    if controlled {
        entries.push(
            Entry::new(
                "visibleExpression",
                "Conditional Expression",
                Widget::TextField,
                text_value(&field.visible_expression),
                Property::VisibleExpression,
            )
            .with_description("Leave empty to show the field whenever the controlling value is set"),
        );
    }
    entries
}

pub fn default_value_entry(field: &Field) -> Vec<Entry> {
    let current = field.default_value.clone();
    let (widget, value) = match field.type_ {
        FieldType::Checkbox => {
            let checked = matches!(current, Some(Value::Bool(true)));
            (
                Widget::Select {
                    options: vec![Choice::new("Checked", "true"), Choice::new("Not checked", "false")],
                },
                Value::String(checked.to_string()),
            )
        }
        FieldType::Number => (
            Widget::NumberField {
                min: None,
                max: None,
            },
            current.unwrap_or_else(|| Value::String(String::new())),
        ),
        FieldType::Textfield => (
            Widget::TextField,
            current.unwrap_or_else(|| Value::String(String::new())),
        ),
        FieldType::Radio | FieldType::Select
            if field.values_source() == ValuesSource::Static =>
        {
            let mut options = vec![Choice::new("<none>", "")];
            options.extend(
                field
                    .values
                    .iter()
                    .flatten()
                    .map(|v| Choice::new(v.label.clone(), v.value.clone())),
            );
            (
                Widget::Select { options },
                current.unwrap_or_else(|| Value::String(String::new())),
            )
        }
        _ => return Vec::new(),
    };
    vec![Entry::new(
        "defaultValue",
        "Default value",
        widget,
        value,
        Property::DefaultValue,
    )]
}

pub fn action_entry(field: &Field) -> Vec<Entry> {
    if field.type_ != FieldType::Button {
        return Vec::new();
    }
    vec![Entry::new(
        "action",
        "Action",
        Widget::Select {
            options: vec![Choice::new("Submit", "submit"), Choice::new("Reset", "reset")],
        },
        Value::String(field.action.clone().unwrap_or_else(|| "submit".into())),
        Property::Action,
    )]
}

pub fn columns_entry(field: &Field) -> Vec<Entry> {
    if field.type_ != FieldType::Columns {
        return Vec::new();
    }
    vec![Entry::new(
        "columns",
        "Columns",
        Widget::NumberField {
            min: Some(1.0),
            max: Some(MAX_COLUMNS as f64),
        },
        Value::from(field.children().len()),
        Property::Columns,
    )]
}

pub fn text_entry(field: &Field) -> Vec<Entry> {
    if field.type_ != FieldType::Text {
        return Vec::new();
    }
    vec![Entry::new("text", "Text", Widget::TextArea, text_value(&field.text), Property::Text)
        .with_description("Use Markdown or basic HTML to format.")]
}

pub fn disabled_entry(field: &Field) -> Vec<Entry> {
    if !field.type_.is_input() {
        return Vec::new();
    }
    vec![Entry::new(
        "disabled",
        "Disabled",
        Widget::Checkbox,
        Value::Bool(field.disabled.unwrap_or(false)),
        Property::Disabled,
    )]
}

fn text_value(value: &Option<String>) -> Value {
    Value::String(value.clone().unwrap_or_default())
}

pub(crate) fn set_id(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let value = input_text(input);
    ctx.check(validate_id(&value, ctx.field, ctx.lookup))?;
    edit.edit_field(ctx.field, &["id"], Some(Value::String(value)));
    Ok(())
}

pub(crate) fn set_key(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let value = input_text(input);
    ctx.check(validate_key(&value, ctx.field, ctx.lookup))?;
    edit.edit_field(ctx.field, &["key"], Some(Value::String(value)));
    Ok(())
}

/// Plain string properties; an empty input is written as an empty string.
pub(crate) fn set_text_property(
    ctx: &EntryContext,
    property: &str,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    edit.edit_field(ctx.field, &[property], Some(Value::String(input_text(input))));
    Ok(())
}

pub(crate) fn set_visible(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let value = input_text(input);
    ctx.check(not_empty(&value).or_else(|| no_spaces(&value)))?;
    ctx.ensure_choice(&value)?;

    let cleared = value == VISIBLE_NONE;
    edit.edit_field(ctx.field, &["visible"], Some(Value::String(value)));
    if cleared && ctx.field.visible_expression.is_some() {
        edit.edit_field(ctx.field, &["visibleExpression"], None);
    }
    Ok(())
}

pub(crate) fn set_default_value(
    ctx: &EntryContext,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let text = input_text(input);
    let value = match ctx.field.type_ {
        FieldType::Checkbox => {
            ctx.ensure_choice(&text)?;
            Some(Value::Bool(input_bool(input)))
        }
        FieldType::Number if text.is_empty() => None,
        FieldType::Number => {
            let n = parse_number(&text).map_err(|m| PanelError::validation(&ctx.entry.id, m))?;
            Some(number_value(n))
        }
        FieldType::Radio | FieldType::Select => {
            ctx.ensure_choice(&text)?;
            (!text.is_empty()).then(|| Value::String(text))
        }
        _ => (!text.is_empty()).then(|| Value::String(text)),
    };
    edit.edit_field(ctx.field, &["defaultValue"], value);
    Ok(())
}

pub(crate) fn set_action(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let value = input_text(input);
    ctx.ensure_choice(&value)?;
    edit.edit_field(ctx.field, &["action"], Some(Value::String(value)));
    Ok(())
}

/// Resize the column container. New columns are empty `default` containers;
/// shrinking drops trailing columns with their content.
pub(crate) fn set_columns(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let count = parse_number(&input_text(input))
        .and_then(|n| {
            if n.fract() != 0.0 {
                Err(MUST_BE_INTEGER.to_string())
            } else if n < 1.0 {
                Err(greater_or_equal(1.0))
            } else if n > MAX_COLUMNS as f64 {
                Err(less_or_equal(MAX_COLUMNS as f64))
            } else {
                Ok(n as usize)
            }
        })
        .map_err(|m| PanelError::validation(&ctx.entry.id, m))?;

    let mut columns: Vec<Field> = ctx.field.children().iter().take(count).cloned().collect();
    let mut fresh = HashSet::new();
    while columns.len() < count {
        let mut column = FieldType::Default.create(Map::new())?;
        let mut id = generate_id("Field_", ctx.lookup);
        while fresh.contains(&id) {
            id = generate_id("Field_", ctx.lookup);
        }
        fresh.insert(id.clone());
        column.id = id;
        columns.push(column);
    }

    let value = serde_json::to_value(columns).map_err(SchemaError::from)?;
    edit.edit_field(ctx.field, &["components"], Some(value));
    Ok(())
}

pub(crate) fn set_disabled(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    edit.edit_field(ctx.field, &["disabled"], Some(Value::Bool(input_bool(input))));
    Ok(())
}
