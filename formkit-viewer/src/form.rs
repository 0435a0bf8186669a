//! Form: a schema interpreted against a data object.

use std::collections::HashSet;

use formkit_schema::{Field, FieldType, FormFieldRegistry, ValueOption};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, ViewerError};
use crate::validation::validate_value;
use crate::value::{as_text, coerce, initial_value, is_truthy, options};

/// Value of `visible` meaning "always shown".
pub const VISIBLE_NONE: &str = "none";

/// Emitted for every accepted change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEvent {
    pub field: Field,
    pub value: Value,
}

/// Outcome of [`Form::submit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// Values of the visible, enabled inputs, by key.
    pub data: Map<String, Value>,
    /// Messages per field id, in document order; only failing fields appear.
    pub errors: IndexMap<String, Vec<String>>,
}

impl Submission {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Render state of one visible field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ValueOption>,
    pub disabled: bool,
}

/// A form instance.
#[derive(Debug, Clone)]
pub struct Form {
    registry: FormFieldRegistry,
    initial: Map<String, Value>,
    data: Map<String, Value>,
}

impl Form {
    /// Import `schema` and compute the initial data from `data` (an object,
    /// or null for an empty form).
    pub fn new(schema: Field, data: Value) -> Result<Self> {
        let provided = match data {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ViewerError::InvalidData {
                    found: kind(&other).to_string(),
                })
            }
        };
        let registry = FormFieldRegistry::import(schema)?;

        let mut data = provided.clone();
        for field in registry.schema().walk() {
            let Some(key) = field.key.as_ref().filter(|_| field.type_.is_input()) else {
                continue;
            };
            data.insert(key.clone(), initial_value(field, &provided));
        }

        debug!(
            form = %registry.schema().id,
            fields = registry.len(),
            "form initialized"
        );

        Ok(Self {
            registry,
            initial: data.clone(),
            data,
        })
    }

    pub fn schema(&self) -> &Field {
        self.registry.schema()
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.registry.get(id)
    }

    /// Current data value of `field`, if it is keyed.
    pub fn value(&self, field: &Field) -> Option<&Value> {
        field.key.as_ref().and_then(|key| self.data.get(key))
    }

    /// Options offered by a value field.
    pub fn options(&self, field: &Field) -> Vec<ValueOption> {
        options(field, &self.data)
    }

    /// Apply a widget change to the input `field_id`.
    pub fn change(&mut self, field_id: &str, raw: Value) -> Result<ChangeEvent> {
        let field = self
            .registry
            .get(field_id)
            .ok_or_else(|| ViewerError::FieldNotFound {
                id: field_id.to_string(),
            })?;
        let key = match (&field.key, field.type_.is_input()) {
            (Some(key), true) => key.clone(),
            _ => {
                return Err(ViewerError::NotAnInput {
                    id: field_id.to_string(),
                })
            }
        };

        let value = coerce(field, raw)?;
        let event = ChangeEvent {
            field: field.clone(),
            value: value.clone(),
        };
        debug!(field = field_id, key = %key, "form field changed");
        self.data.insert(key, value);
        Ok(event)
    }

    /// Restore the initial data.
    pub fn reset(&mut self) {
        self.data = self.initial.clone();
    }

    /// Whether `field` is currently shown.
    ///
    /// `visible` names a controlling field. Without `visibleExpression` the
    /// field shows while the controller's value is truthy; with it, while the
    /// controller's value equals the expression. A hidden controller hides its
    /// dependants, and a cycle hides every field on it.
    pub fn is_visible(&self, field: &Field) -> bool {
        let mut seen = HashSet::new();
        self.visible_from(field, &mut seen)
    }

    fn visible_from<'a>(&'a self, field: &'a Field, seen: &mut HashSet<&'a str>) -> bool {
        let controller_id = match field.visible.as_deref() {
            None | Some(VISIBLE_NONE) => return true,
            Some(id) => id,
        };
        if !seen.insert(field.id.as_str()) {
            return false;
        }
        let Some(controller) = self.registry.get(controller_id) else {
            return true;
        };

        let value = self.value(controller).cloned().unwrap_or(Value::Null);
        let shown = match field.visible_expression.as_deref().filter(|e| !e.is_empty()) {
            Some(expression) => as_text(&value) == expression,
            None => is_truthy(&value),
        };
        shown && self.visible_from(controller, seen)
    }

    /// State of every visible field below the root, in document order.
    pub fn fields(&self) -> Vec<FieldState> {
        self.registry
            .schema()
            .walk()
            .into_iter()
            .skip(1)
            .filter(|field| self.is_visible(field))
            .map(|field| FieldState {
                id: field.id.clone(),
                type_: field.type_.clone(),
                key: field.key.clone(),
                label: field.label.clone(),
                value: self.value(field).cloned().unwrap_or(Value::Null),
                options: if field.type_.has_values() {
                    self.options(field)
                } else {
                    Vec::new()
                },
                disabled: field.disabled.unwrap_or(false),
            })
            .collect()
    }

    /// Validate and collect the data of visible, enabled inputs.
    pub fn submit(&self) -> Submission {
        let mut data = Map::new();
        let mut errors = IndexMap::new();

        for field in self.registry.schema().walk() {
            let Some(key) = &field.key else { continue };
            if !field.type_.is_input() || field.disabled == Some(true) || !self.is_visible(field) {
                continue;
            }

            let value = self.data.get(key).cloned().unwrap_or(Value::Null);
            let messages = validate_value(field, &value);
            if !messages.is_empty() {
                errors.insert(field.id.clone(), messages);
            }
            data.insert(key.clone(), value);
        }

        debug!(fields = data.len(), errors = errors.len(), "form submitted");
        Submission { data, errors }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
