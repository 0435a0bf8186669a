//! Field type registry: display label, icon, keyed flag, empty value and
//! default shape for every known field type.

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::types::{Field, FieldType};

/// Static facts about a field type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTypeInfo {
    pub type_: FieldType,
    /// Human readable type name, e.g. `Text Field`.
    pub label: &'static str,
    /// Icon identifier understood by the host UI.
    pub icon: &'static str,
    /// Whether values of this field are bound to a data key.
    pub keyed: bool,
    /// Data value of an untouched field; `None` for non-data fields.
    pub empty_value: Option<Value>,
}

impl FieldType {
    /// Registry information; `None` for unknown types.
    pub fn info(&self) -> Option<FieldTypeInfo> {
        let (label, icon, keyed, empty_value) = match self {
            FieldType::Button => ("Button", "button", true, None),
            FieldType::Checkbox => ("Checkbox", "checkbox", true, Some(json!(false))),
            FieldType::Checklist => ("Checklist", "checklist", true, Some(json!([]))),
            FieldType::Columns => ("Columns", "columns", false, None),
            FieldType::Default => ("Form", "form", false, None),
            FieldType::Number => ("Number", "number", true, Some(Value::Null)),
            FieldType::Radio => ("Radio", "radio", true, Some(Value::Null)),
            FieldType::Select => ("Select", "select", true, Some(Value::Null)),
            FieldType::Taglist => ("Taglist", "taglist", true, Some(json!([]))),
            FieldType::Text => ("Text", "text", false, None),
            FieldType::Textfield => ("Text Field", "textfield", true, Some(json!(""))),
            FieldType::Other(_) => return None,
        };
        Some(FieldTypeInfo {
            type_: self.clone(),
            label,
            icon,
            keyed,
            empty_value,
        })
    }

    /// Whether the type binds a data key. Unknown types are not keyed.
    pub fn is_keyed(&self) -> bool {
        self.info().is_some_and(|i| i.keyed)
    }

    /// Default attributes a freshly created field of this type carries.
    pub fn defaults(&self) -> Map<String, Value> {
        let defaults = match self {
            FieldType::Button => json!({ "action": "submit" }),
            FieldType::Checklist | FieldType::Radio | FieldType::Select | FieldType::Taglist => {
                json!({ "values": [{ "label": "Value", "value": "value" }] })
            }
            FieldType::Columns | FieldType::Default => json!({ "components": [] }),
            FieldType::Text => json!({ "text": "# Text" }),
            _ => json!({}),
        };
        match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Build a field of this type: defaults first, then `options` on top.
    ///
    /// Ids and keys are not assigned here; see
    /// [`FormFieldRegistry::create_field`](crate::FormFieldRegistry::create_field).
    pub fn create(&self, options: Map<String, Value>) -> Result<Field> {
        let mut attrs = self.defaults();
        attrs.extend(options);
        attrs.insert("type".into(), Value::String(self.as_str().to_string()));
        Ok(serde_json::from_value(Value::Object(attrs))?)
    }
}
