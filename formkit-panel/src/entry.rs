//! Renderable entry descriptors.

use serde::Serialize;
use serde_json::Value;

/// A single editable property as the host should render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub widget: Widget,
    /// Current value in widget terms (strings for text and select widgets).
    pub value: Value,
    #[serde(skip)]
    pub(crate) property: Property,
}

impl Entry {
    pub(crate) fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        widget: Widget,
        value: Value,
        property: Property,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            widget,
            value,
            property,
        }
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Choices offered by a select entry; empty for other widgets.
    pub fn choices(&self) -> &[Choice] {
        match &self.widget {
            Widget::Select { options } => options,
            _ => &[],
        }
    }
}

/// Input control kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Widget {
    TextField,
    TextArea,
    NumberField {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Checkbox,
    Select { options: Vec<Choice> },
}

/// One option of a select widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Which field property an entry edits.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Property {
    Id,
    Label,
    Description,
    Key,
    Visible,
    VisibleExpression,
    DefaultValue,
    Action,
    Columns,
    Text,
    Disabled,
    ValuesSource,
    ValuesKey,
    StaticValueLabel(usize),
    StaticValueValue(usize),
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    CustomKey(usize),
    CustomValue(usize),
}

/// Text representation of a raw input value.
pub(crate) fn input_text(input: &Value) -> String {
    match input {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Boolean reading of a checkbox input.
pub(crate) fn input_bool(input: &Value) -> bool {
    match input {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}
