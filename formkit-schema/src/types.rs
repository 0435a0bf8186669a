//! Core schema types for formkit.
//!
//! A form schema is a tree of [`Field`] nodes serialized as JSON (or YAML).
//! The root is a `default` container holding `components`. Attributes this
//! crate does not model are kept in [`Field::extra`] so a schema survives a
//! load/save round trip unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The declared type of a field.
///
/// Unknown types are preserved as [`FieldType::Other`]; they never fail to
/// parse and simply have no label, icon or factory defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Button,
    Checkbox,
    Checklist,
    Columns,
    Default,
    Number,
    Radio,
    Select,
    Taglist,
    Text,
    Textfield,
    Other(String),
}

impl FieldType {
    /// All known field types, in registry order.
    pub const KNOWN: [FieldType; 11] = [
        FieldType::Button,
        FieldType::Checkbox,
        FieldType::Checklist,
        FieldType::Columns,
        FieldType::Default,
        FieldType::Number,
        FieldType::Radio,
        FieldType::Select,
        FieldType::Taglist,
        FieldType::Text,
        FieldType::Textfield,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Button => "button",
            FieldType::Checkbox => "checkbox",
            FieldType::Checklist => "checklist",
            FieldType::Columns => "columns",
            FieldType::Default => "default",
            FieldType::Number => "number",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Taglist => "taglist",
            FieldType::Text => "text",
            FieldType::Textfield => "textfield",
            FieldType::Other(s) => s,
        }
    }

    /// Whether the type is a data-bound input control.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            FieldType::Checkbox
                | FieldType::Checklist
                | FieldType::Number
                | FieldType::Radio
                | FieldType::Select
                | FieldType::Taglist
                | FieldType::Textfield
        )
    }

    /// Whether the type offers a list of selectable options.
    pub fn has_values(&self) -> bool {
        matches!(
            self,
            FieldType::Checklist | FieldType::Radio | FieldType::Select | FieldType::Taglist
        )
    }

    /// Whether fields of this type hold child `components`.
    pub fn is_container(&self) -> bool {
        matches!(self, FieldType::Default | FieldType::Columns)
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "button" => FieldType::Button,
            "checkbox" => FieldType::Checkbox,
            "checklist" => FieldType::Checklist,
            "columns" => FieldType::Columns,
            "default" => FieldType::Default,
            "number" => FieldType::Number,
            "radio" => FieldType::Radio,
            "select" => FieldType::Select,
            "taglist" => FieldType::Taglist,
            "text" => FieldType::Text,
            "textfield" => FieldType::Textfield,
            _ => FieldType::Other(s),
        }
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        FieldType::from(s.to_string())
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        match t {
            FieldType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option of a static value list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueOption {
    pub label: String,
    pub value: String,
}

impl ValueOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Where a field's options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuesSource {
    /// Inline `values` list.
    Static,
    /// Runtime list read from the data key named by `valuesKey`.
    Input,
}

impl ValuesSource {
    /// Sources in the order they are applied when switching.
    pub const ALL: [ValuesSource; 2] = [ValuesSource::Static, ValuesSource::Input];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValuesSource::Static => "static",
            ValuesSource::Input => "input",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "static" => Some(ValuesSource::Static),
            "input" => Some(ValuesSource::Input),
            _ => None,
        }
    }

    /// Property holding this source's definition.
    pub fn path(&self) -> &'static str {
        match self {
            ValuesSource::Static => "values",
            ValuesSource::Input => "valuesKey",
        }
    }

    /// Value written when this source is selected.
    pub fn default_value(&self) -> Value {
        match self {
            ValuesSource::Static => Value::Array(Vec::new()),
            ValuesSource::Input => Value::String(String::new()),
        }
    }
}

/// Validation rules attached to an input field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Validate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// A node in the form schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ValueOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Field>>,
    /// Attributes not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    /// A bare field of the given type.
    pub fn new(type_: impl Into<FieldType>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_: type_.into(),
            key: None,
            label: None,
            description: None,
            text: None,
            action: None,
            values: None,
            values_key: None,
            validate: None,
            properties: None,
            disabled: None,
            visible: None,
            visible_expression: None,
            default_value: None,
            components: None,
            extra: Map::new(),
        }
    }

    /// Parse a field (usually a whole schema) from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a field (usually a whole schema) from YAML text.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Current value source. A present `valuesKey` (even empty) wins.
    pub fn values_source(&self) -> ValuesSource {
        if self.values_key.is_some() {
            ValuesSource::Input
        } else {
            ValuesSource::Static
        }
    }

    /// Direct children; empty for non-containers.
    pub fn children(&self) -> &[Field] {
        self.components.as_deref().unwrap_or(&[])
    }

    /// Depth-first, pre-order traversal including `self`.
    pub fn walk(&self) -> Vec<&Field> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}
