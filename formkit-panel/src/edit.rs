//! The single mutation path out of the panel.

use formkit_schema::Field;
use serde::Serialize;
use serde_json::Value;

/// Receiver of `(field, path, value)` edits. `None` unsets the property.
///
/// Closures with the matching signature implement this trait, so a host can
/// pass `&mut |field, path, value| ...` directly.
pub trait EditField {
    fn edit_field(&mut self, field: &Field, path: &[&str], value: Option<Value>);
}

impl<F> EditField for F
where
    F: FnMut(&Field, &[&str], Option<Value>),
{
    fn edit_field(&mut self, field: &Field, path: &[&str], value: Option<Value>) {
        self(field, path, value)
    }
}

/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditCall {
    pub field_id: String,
    pub path: Vec<String>,
    pub value: Option<Value>,
}

impl EditCall {
    pub fn path(&self) -> Vec<&str> {
        self.path.iter().map(String::as_str).collect()
    }
}

/// Collects edits so they can be applied after the panel borrow ends.
#[derive(Debug, Default, Clone)]
pub struct EditRecorder {
    calls: Vec<EditCall>,
}

impl EditRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EditCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<EditCall> {
        self.calls
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl EditField for EditRecorder {
    fn edit_field(&mut self, field: &Field, path: &[&str], value: Option<Value>) {
        self.calls.push(EditCall {
            field_id: field.id.clone(),
            path: path.iter().map(|s| s.to_string()).collect(),
            value,
        });
    }
}
