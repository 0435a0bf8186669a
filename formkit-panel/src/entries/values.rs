//! Values source, static values and dynamic values entries.

use formkit_schema::{Field, SchemaError, ValueOption, ValuesSource};
use serde_json::Value;

use super::EntryContext;
use crate::edit::EditField;
use crate::entry::{input_text, Choice, Entry, Property, Widget};
use crate::error::Result;
use crate::validate::{no_spaces, not_empty, unique_among};

pub fn values_source_entry(field: &Field) -> Vec<Entry> {
    vec![Entry::new(
        "valuesSource",
        "Type",
        Widget::Select {
            options: vec![
                Choice::new("Static", ValuesSource::Static.as_str()),
                Choice::new("Input data", ValuesSource::Input.as_str()),
            ],
        },
        Value::String(field.values_source().as_str().to_string()),
        Property::ValuesSource,
    )]
}

pub fn values_key_entry(field: &Field) -> Vec<Entry> {
    vec![Entry::new(
        "valuesKey",
        "Input values key",
        Widget::TextField,
        Value::String(field.values_key.clone().unwrap_or_default()),
        Property::ValuesKey,
    )
    .with_description("Define which input property to populate the values from")]
}

/// Id of the list item for the static value at `index`.
pub fn static_value_item_id(field: &Field, index: usize) -> String {
    format!("{}-staticValues-{index}", field.id)
}

/// `Label` and `Value` entries of one static value.
pub fn static_value_entries(field: &Field, index: usize, option: &ValueOption) -> Vec<Entry> {
    let item = static_value_item_id(field, index);
    vec![
        Entry::new(
            format!("{item}-label"),
            "Label",
            Widget::TextField,
            Value::String(option.label.clone()),
            Property::StaticValueLabel(index),
        ),
        Entry::new(
            format!("{item}-value"),
            "Value",
            Widget::TextField,
            Value::String(option.value.clone()),
            Property::StaticValueValue(index),
        ),
    ]
}

/// Switch the values source. Every source is visited in order; the selected
/// one gets its default definition and the others are unset.
pub(crate) fn set_values_source(
    ctx: &EntryContext,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let text = input_text(input);
    ctx.ensure_choice(&text)?;
    let selected = ValuesSource::parse(&text);

    for source in ValuesSource::ALL {
        let value = (selected == Some(source)).then(|| source.default_value());
        edit.edit_field(ctx.field, &[source.path()], value);
    }
    Ok(())
}

pub(crate) fn set_values_key(ctx: &EntryContext, input: &Value, edit: &mut dyn EditField) -> Result<()> {
    let value = input_text(input);
    ctx.check(not_empty(&value).or_else(|| no_spaces(&value)))?;
    edit.edit_field(ctx.field, &["valuesKey"], Some(Value::String(value)));
    Ok(())
}

pub(crate) fn set_label(
    ctx: &EntryContext,
    index: usize,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let mut values = current_values(ctx.field);
    if let Some(option) = values.get_mut(index) {
        option.label = input_text(input);
    }
    write_values(ctx.field, values, edit)
}

pub(crate) fn set_value(
    ctx: &EntryContext,
    index: usize,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let value = input_text(input);
    let mut values = current_values(ctx.field);
    let others = values
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, v)| v.value.as_str());
    ctx.check(not_empty(&value).or_else(|| unique_among(&value, others)))?;

    if let Some(option) = values.get_mut(index) {
        option.value = value;
    }
    write_values(ctx.field, values, edit)
}

/// Append `Value N` / `valueN`, with N the first ordinal from `len + 1`
/// whose label and value are both unused.
pub(crate) fn add_static_value(field: &Field, edit: &mut dyn EditField) -> Result<()> {
    let mut values = current_values(field);
    let mut n = values.len() + 1;
    let taken = |n: usize, values: &[ValueOption]| {
        let label = format!("Value {n}");
        let value = format!("value{n}");
        values.iter().any(|v| v.label == label || v.value == value)
    };
    while taken(n, &values) {
        n += 1;
    }
    values.push(ValueOption::new(format!("Value {n}"), format!("value{n}")));
    write_values(field, values, edit)
}

pub(crate) fn remove_static_value(field: &Field, index: usize, edit: &mut dyn EditField) -> Result<()> {
    let mut values = current_values(field);
    if index < values.len() {
        values.remove(index);
    }
    write_values(field, values, edit)
}

fn current_values(field: &Field) -> Vec<ValueOption> {
    field.values.clone().unwrap_or_default()
}

fn write_values(field: &Field, values: Vec<ValueOption>, edit: &mut dyn EditField) -> Result<()> {
    let value = serde_json::to_value(values).map_err(SchemaError::from)?;
    edit.edit_field(field, &["values"], Some(value));
    Ok(())
}
