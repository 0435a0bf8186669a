//! Form field registry: owns an imported schema and indexes its fields.
//!
//! Fields are indexed by id (to their position in the tree) and keyed
//! fields by key. All edits go through [`FormFieldRegistry::edit_field`],
//! which re-validates id and key uniqueness before committing.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};
use tracing::debug;
use ulid::Ulid;

use crate::error::{Result, SchemaError};
use crate::path::with_path;
use crate::types::{Field, FieldType};

/// Lookup service the properties panel uses for uniqueness checks and for
/// enumerating fields.
pub trait FormFieldLookup {
    /// The field currently holding `id`, if any.
    fn id_assigned(&self, id: &str) -> Option<&Field>;

    /// The keyed field currently holding `key`, if any.
    fn key_assigned(&self, key: &str) -> Option<&Field>;

    /// Every field of the schema, root first, in document order.
    fn all(&self) -> Vec<&Field>;
}

/// Position of a field in the tree: child indexes from the root.
type Location = Vec<usize>;

/// Registry over an owned schema.
#[derive(Debug, Clone)]
pub struct FormFieldRegistry {
    schema: Field,
    id_index: HashMap<String, Location>,
    key_index: HashMap<String, String>,
}

impl FormFieldRegistry {
    /// Import a schema: assign missing ids, then index ids and keys.
    ///
    /// Fails if the root is not a `default` container or if ids or keys
    /// collide.
    pub fn import(mut schema: Field) -> Result<Self> {
        if schema.type_ != FieldType::Default {
            return Err(SchemaError::InvalidRoot {
                found: schema.type_.to_string(),
            });
        }

        let mut taken: HashSet<String> = schema
            .walk()
            .into_iter()
            .filter(|f| !f.id.is_empty())
            .map(|f| f.id.clone())
            .collect();
        assign_missing_ids(&mut schema, &mut taken);

        let (id_index, key_index) = build_indexes(&schema)?;

        debug!(
            fields = id_index.len(),
            keys = key_index.len(),
            "form schema imported"
        );

        Ok(Self {
            schema,
            id_index,
            key_index,
        })
    }

    /// The schema root.
    pub fn schema(&self) -> &Field {
        &self.schema
    }

    /// Consume the registry, returning the schema.
    pub fn into_schema(self) -> Field {
        self.schema
    }

    /// Get a field by id.
    pub fn get(&self, id: &str) -> Option<&Field> {
        self.id_index.get(id).and_then(|loc| self.field_at(loc))
    }

    /// Number of indexed fields, root included.
    pub fn len(&self) -> usize {
        self.id_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_index.is_empty()
    }

    /// Apply a single `(path, value)` edit to the field with `id`.
    ///
    /// The edit is rejected, leaving the schema untouched, if it would break
    /// the field shape or make an id or key collide.
    pub fn edit_field(&mut self, id: &str, path: &[&str], value: Option<Value>) -> Result<&Field> {
        let loc = self
            .id_index
            .get(id)
            .cloned()
            .ok_or_else(|| SchemaError::FieldNotFound { id: id.to_string() })?;
        let current = self
            .field_at(&loc)
            .ok_or_else(|| SchemaError::FieldNotFound { id: id.to_string() })?;
        let edited = with_path(current, path, value)?;

        let mut candidate = self.schema.clone();
        if let Some(slot) = field_at_mut(&mut candidate, &loc) {
            *slot = edited;
        }
        self.commit(candidate)?;

        debug!(id, path = %path.join("."), "field edited");

        self.field_at(&loc)
            .ok_or_else(|| SchemaError::FieldNotFound { id: id.to_string() })
    }

    /// Create a new field of `type_` with a fresh id (and key, for keyed
    /// types). The field is not inserted.
    pub fn create_field(&self, type_: &FieldType, options: Map<String, Value>) -> Result<Field> {
        let mut field = type_.create(options)?;
        if field.id.is_empty() {
            field.id = self.next_id("Field_");
        }
        if type_.is_keyed() && field.key.is_none() {
            let suffix = field.id.rsplit('_').next().unwrap_or(&field.id).to_string();
            let mut key = format!("field_{suffix}");
            while self.key_index.contains_key(&key) {
                key = format!("field_{}", random_suffix());
            }
            field.key = Some(key);
        }
        Ok(field)
    }

    /// Insert `field` into the container `parent_id` at `index` (clamped).
    pub fn add_field(&mut self, parent_id: &str, index: usize, field: Field) -> Result<()> {
        let loc = self
            .id_index
            .get(parent_id)
            .cloned()
            .ok_or_else(|| SchemaError::FieldNotFound {
                id: parent_id.to_string(),
            })?;

        let mut candidate = self.schema.clone();
        let parent = field_at_mut(&mut candidate, &loc).ok_or_else(|| {
            SchemaError::FieldNotFound {
                id: parent_id.to_string(),
            }
        })?;
        let components = parent.components.get_or_insert_with(Vec::new);
        let index = index.min(components.len());
        components.insert(index, field);

        self.commit(candidate)
    }

    /// Remove the field with `id` from its container, returning it.
    pub fn remove_field(&mut self, id: &str) -> Result<Field> {
        let loc = self
            .id_index
            .get(id)
            .cloned()
            .ok_or_else(|| SchemaError::FieldNotFound { id: id.to_string() })?;
        let Some((&index, parent_loc)) = loc.split_last() else {
            return Err(SchemaError::invalid_path(&[id], "cannot remove the schema root"));
        };

        let mut candidate = self.schema.clone();
        let removed = field_at_mut(&mut candidate, parent_loc)
            .and_then(|parent| parent.components.as_mut())
            .filter(|components| index < components.len())
            .map(|components| components.remove(index))
            .ok_or_else(|| SchemaError::FieldNotFound { id: id.to_string() })?;

        self.commit(candidate)?;
        Ok(removed)
    }

    /// A fresh id with `prefix` not used by any field.
    pub fn next_id(&self, prefix: &str) -> String {
        generate_id(prefix, self)
    }

    fn commit(&mut self, candidate: Field) -> Result<()> {
        let (id_index, key_index) = build_indexes(&candidate)?;
        self.schema = candidate;
        self.id_index = id_index;
        self.key_index = key_index;
        Ok(())
    }

    fn field_at(&self, loc: &[usize]) -> Option<&Field> {
        let mut field = &self.schema;
        for &i in loc {
            field = field.children().get(i)?;
        }
        Some(field)
    }
}

impl FormFieldLookup for FormFieldRegistry {
    fn id_assigned(&self, id: &str) -> Option<&Field> {
        self.get(id)
    }

    fn key_assigned(&self, key: &str) -> Option<&Field> {
        self.key_index.get(key).and_then(|id| self.get(id))
    }

    fn all(&self) -> Vec<&Field> {
        self.schema.walk()
    }
}

/// A fresh id with `prefix` that `lookup` does not know yet.
pub fn generate_id(prefix: &str, lookup: &dyn FormFieldLookup) -> String {
    loop {
        let id = format!("{prefix}{}", random_suffix());
        if lookup.id_assigned(&id).is_none() {
            return id;
        }
    }
}

fn field_at_mut<'a>(root: &'a mut Field, loc: &[usize]) -> Option<&'a mut Field> {
    let mut field = root;
    for &i in loc {
        field = field.components.as_mut()?.get_mut(i)?;
    }
    Some(field)
}

/// Seven lowercase base32 characters from the random part of a ULID.
fn random_suffix() -> String {
    let ulid = Ulid::new().to_string().to_lowercase();
    ulid[ulid.len() - 7..].to_string()
}

fn assign_missing_ids(field: &mut Field, taken: &mut HashSet<String>) {
    if field.id.is_empty() {
        let mut id = format!("Field_{}", random_suffix());
        while taken.contains(&id) {
            id = format!("Field_{}", random_suffix());
        }
        taken.insert(id.clone());
        field.id = id;
    }
    if let Some(children) = field.components.as_mut() {
        for child in children {
            assign_missing_ids(child, taken);
        }
    }
}

fn build_indexes(schema: &Field) -> Result<(HashMap<String, Location>, HashMap<String, String>)> {
    let mut ids = HashMap::new();
    let mut keys = HashMap::new();
    let mut stack: Vec<(&Field, Location)> = vec![(schema, Vec::new())];

    while let Some((field, loc)) = stack.pop() {
        for (i, child) in field.children().iter().enumerate() {
            let mut child_loc = loc.clone();
            child_loc.push(i);
            stack.push((child, child_loc));
        }

        if ids.insert(field.id.clone(), loc).is_some() {
            return Err(SchemaError::DuplicateId {
                id: field.id.clone(),
            });
        }
        if !field.type_.is_keyed() {
            continue;
        }
        if let Some(key) = &field.key {
            if keys.insert(key.clone(), field.id.clone()).is_some() {
                return Err(SchemaError::DuplicateKey { key: key.clone() });
            }
        }
    }

    Ok((ids, keys))
}
