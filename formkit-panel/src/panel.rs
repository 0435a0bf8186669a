//! The properties panel over an optional selected field.

use formkit_schema::{Field, FormFieldLookup};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::edit::EditField;
use crate::entries::{self, custom, values};
use crate::entry::Entry;
use crate::error::{PanelError, Result};
use crate::groups::{compose, Group, ItemAction, CUSTOM_VALUES, STATIC_VALUES};
use crate::header::PanelHeader;

pub const PLACEHOLDER: &str = "Select a form field to edit its properties.";

/// What the host renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PanelView {
    Empty {
        placeholder: &'static str,
    },
    Populated {
        header: PanelHeader,
        groups: Vec<Group>,
    },
}

impl PanelView {
    pub fn groups(&self) -> &[Group] {
        match self {
            PanelView::Populated { groups, .. } => groups,
            PanelView::Empty { .. } => &[],
        }
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups().iter().find(|g| g.id == id)
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.groups()
            .iter()
            .flat_map(|g| g.all_entries())
            .find(|e| e.id == id)
    }
}

/// Properties panel over the current selection.
///
/// The panel keeps no state of its own: every call recomposes groups from the
/// field it was built with, so a host rebuilds it after applying edits.
pub struct PropertiesPanel<'a> {
    field: Option<&'a Field>,
    lookup: &'a dyn FormFieldLookup,
}

impl<'a> PropertiesPanel<'a> {
    pub fn new(field: Option<&'a Field>, lookup: &'a dyn FormFieldLookup) -> Self {
        Self { field, lookup }
    }

    pub fn field(&self) -> Option<&'a Field> {
        self.field
    }

    pub fn view(&self) -> PanelView {
        match self.field {
            None => PanelView::Empty {
                placeholder: PLACEHOLDER,
            },
            Some(field) => PanelView::Populated {
                header: PanelHeader::for_field(field),
                groups: compose(field, self.lookup),
            },
        }
    }

    /// Validate `input` for the entry `entry_id` and forward the resulting
    /// edits. Rejected input produces no edit.
    pub fn set_value(&self, entry_id: &str, input: Value, edit: &mut dyn EditField) -> Result<()> {
        let field = self.field.ok_or(PanelError::NoSelection)?;
        let view = self.view();
        let entry = view.entry(entry_id).ok_or_else(|| PanelError::UnknownEntry {
            id: entry_id.to_string(),
        })?;

        let result = entries::apply(entry, field, self.lookup, &input, edit);
        if let Err(PanelError::Validation { message, .. }) = &result {
            debug!(field = %field.id, entry = entry_id, message = %message, "entry value rejected");
        }
        result
    }

    /// Append a new item to the list group `group_id`.
    pub fn add_item(&self, group_id: &str, edit: &mut dyn EditField) -> Result<()> {
        let field = self.field.ok_or(PanelError::NoSelection)?;
        let unknown = || PanelError::UnknownGroup {
            id: group_id.to_string(),
        };
        let view = self.view();
        let group = view
            .group(group_id)
            .filter(|g| g.is_list())
            .ok_or_else(unknown)?;

        match group.id {
            STATIC_VALUES => values::add_static_value(field, edit),
            CUSTOM_VALUES => custom::add_property(field, edit),
            _ => Err(unknown()),
        }
    }

    /// Remove the list item `item_id`.
    pub fn remove_item(&self, item_id: &str, edit: &mut dyn EditField) -> Result<()> {
        let field = self.field.ok_or(PanelError::NoSelection)?;
        let view = self.view();
        let item = view
            .groups()
            .iter()
            .flat_map(|g| g.items())
            .find(|i| i.id == item_id)
            .ok_or_else(|| PanelError::UnknownItem {
                id: item_id.to_string(),
            })?;

        match &item.action {
            ItemAction::StaticValue(index) => values::remove_static_value(field, *index, edit),
            ItemAction::CustomProperty(key) => custom::remove_property(field, key, edit),
        }
    }
}
