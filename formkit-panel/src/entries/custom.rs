//! Custom properties: free string key/value pairs kept in insertion order.

use formkit_schema::{Field, SchemaError};
use indexmap::IndexMap;
use serde_json::Value;

use super::EntryContext;
use crate::edit::EditField;
use crate::entry::{input_text, Entry, Property, Widget};
use crate::error::Result;
use crate::validate::{no_spaces, not_empty, unique_among};

type Properties = IndexMap<String, String>;

/// Id of the list item for the custom property at `index`.
pub fn property_item_id(field: &Field, index: usize) -> String {
    format!("{}-property-{index}", field.id)
}

/// `Key` and `Value` entries of one custom property.
pub fn property_entries(field: &Field, index: usize, key: &str, value: &str) -> Vec<Entry> {
    let item = property_item_id(field, index);
    vec![
        Entry::new(
            format!("{item}-key"),
            "Key",
            Widget::TextField,
            Value::String(key.to_string()),
            Property::CustomKey(index),
        ),
        Entry::new(
            format!("{item}-value"),
            "Value",
            Widget::TextField,
            Value::String(value.to_string()),
            Property::CustomValue(index),
        ),
    ]
}

/// Rename the property at `index`, keeping its position.
pub(crate) fn set_key(
    ctx: &EntryContext,
    index: usize,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let key = input_text(input);
    let properties = current(ctx.field);
    let others = properties
        .keys()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, k)| k.as_str());
    ctx.check(
        not_empty(&key)
            .or_else(|| no_spaces(&key))
            .or_else(|| unique_among(&key, others)),
    )?;

    let renamed: Properties = properties
        .iter()
        .enumerate()
        .map(|(i, (k, v))| {
            let k = if i == index { key.clone() } else { k.clone() };
            (k, v.clone())
        })
        .collect();
    write(ctx.field, renamed, edit)
}

pub(crate) fn set_value(
    ctx: &EntryContext,
    index: usize,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    let mut properties = current(ctx.field);
    if let Some((_, value)) = properties.get_index_mut(index) {
        *value = input_text(input);
    }
    write(ctx.field, properties, edit)
}

/// Insert `keyN: "value"` with N the first free ordinal from `len + 1`.
pub(crate) fn add_property(field: &Field, edit: &mut dyn EditField) -> Result<()> {
    let mut properties = current(field);
    let mut n = properties.len() + 1;
    while properties.contains_key(&format!("key{n}")) {
        n += 1;
    }
    properties.insert(format!("key{n}"), "value".to_string());
    write(field, properties, edit)
}

pub(crate) fn remove_property(field: &Field, key: &str, edit: &mut dyn EditField) -> Result<()> {
    let mut properties = current(field);
    properties.shift_remove(key);
    write(field, properties, edit)
}

fn current(field: &Field) -> Properties {
    field.properties.clone().unwrap_or_default()
}

fn write(field: &Field, properties: Properties, edit: &mut dyn EditField) -> Result<()> {
    let value = serde_json::to_value(properties).map_err(SchemaError::from)?;
    edit.edit_field(field, &["properties"], Some(value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditRecorder;
    use serde_json::json;

    fn field() -> Field {
        serde_json::from_str(
            r#"{"id":"Textfield_1","type":"textfield","properties":{"firstName":"Jane","key2":"x","lastName":"Doe"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_add_skips_existing_keys() {
        let mut recorder = EditRecorder::new();
        add_property(&field(), &mut recorder).unwrap();
        let value = recorder.calls()[0].value.clone().unwrap();
        assert_eq!(value["key4"], json!("value"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut recorder = EditRecorder::new();
        remove_property(&field(), "key2", &mut recorder).unwrap();
        let text = serde_json::to_string(recorder.calls()[0].value.as_ref().unwrap()).unwrap();
        assert_eq!(text, r#"{"firstName":"Jane","lastName":"Doe"}"#);
    }

    #[test]
    fn test_entry_ids() {
        let entries = property_entries(&field(), 0, "firstName", "Jane");
        assert_eq!(entries[0].id, "Textfield_1-property-0-key");
        assert_eq!(entries[1].value, json!("Jane"));
    }
}
