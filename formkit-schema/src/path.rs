//! Property path access on fields.
//!
//! Every schema mutation is expressed as `(field, path, value)` where `path`
//! names a property (possibly nested, e.g. `["validate", "minLength"]`) and a
//! `None` value unsets it. Paths address the camelCase JSON shape of a field.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::types::Field;

/// Read the value at `path`, if present.
pub fn get_path(field: &Field, path: &[&str]) -> Option<Value> {
    let value = serde_json::to_value(field).ok()?;
    let mut current = &value;
    for segment in path {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current.clone())
}

/// Return a copy of `field` with `path` set to `value` (`None` unsets it).
///
/// Intermediate objects are created as needed. The result must still parse
/// as a field; an edit that breaks the field shape is rejected.
pub fn with_path(field: &Field, path: &[&str], value: Option<Value>) -> Result<Field> {
    let Some((last, parents)) = path.split_last() else {
        return Err(SchemaError::invalid_path(path, "empty path"));
    };

    let mut root = serde_json::to_value(field)?;
    let mut current = &mut root;
    for segment in parents {
        let object = current
            .as_object_mut()
            .ok_or_else(|| SchemaError::invalid_path(path, "not an object"))?;
        current = object
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let object = current
        .as_object_mut()
        .ok_or_else(|| SchemaError::invalid_path(path, "not an object"))?;
    match value {
        Some(v) => {
            object.insert(last.to_string(), v);
        }
        None => {
            object.remove(*last);
        }
    }

    serde_json::from_value(root).map_err(|e| SchemaError::invalid_path(path, e.to_string()))
}
