//! Group composition: which entries apply to a field, in which groups.

mod custom;
mod general;
mod validation;
mod values;

use formkit_schema::{Field, FormFieldLookup};
use serde::Serialize;
use tracing::debug;

use crate::entry::Entry;

pub const GENERAL: &str = "general";
pub const VALUES_SOURCE: &str = "valuesSource";
pub const STATIC_VALUES: &str = "staticValues";
pub const DYNAMIC_VALUES: &str = "dynamicValues";
pub const VALIDATION: &str = "validation";
pub const CUSTOM_VALUES: &str = "customValues";

/// A named cluster of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: &'static str,
    pub label: &'static str,
    pub content: GroupContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GroupContent {
    /// A flat list of entries.
    Entries { entries: Vec<Entry> },
    /// Collapsible items the user can add to and remove from.
    List {
        #[serde(rename = "addLabel")]
        add_label: &'static str,
        items: Vec<ListItem>,
    },
}

/// One item of a list group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub id: String,
    pub label: String,
    pub entries: Vec<Entry>,
    #[serde(skip)]
    pub(crate) action: ItemAction,
}

/// What removing a list item does.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ItemAction {
    StaticValue(usize),
    CustomProperty(String),
}

impl Group {
    pub(crate) fn entries(id: &'static str, label: &'static str, entries: Vec<Entry>) -> Option<Self> {
        (!entries.is_empty()).then(|| Self {
            id,
            label,
            content: GroupContent::Entries { entries },
        })
    }

    /// Every entry of the group, list items included.
    pub fn all_entries(&self) -> Vec<&Entry> {
        match &self.content {
            GroupContent::Entries { entries } => entries.iter().collect(),
            GroupContent::List { items, .. } => items.iter().flat_map(|i| i.entries.iter()).collect(),
        }
    }

    /// Items of a list group; empty for entry groups.
    pub fn items(&self) -> &[ListItem] {
        match &self.content {
            GroupContent::List { items, .. } => items,
            GroupContent::Entries { .. } => &[],
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.content, GroupContent::List { .. })
    }

    /// Entry labels in display order.
    pub fn entry_labels(&self) -> Vec<&str> {
        self.all_entries().into_iter().map(|e| e.label.as_str()).collect()
    }
}

/// Compose the groups for `field`. Empty groups are left out.
pub fn compose(field: &Field, lookup: &dyn FormFieldLookup) -> Vec<Group> {
    let groups: Vec<Group> = [
        general::general_group(field, lookup),
        values::values_source_group(field),
        values::static_values_group(field),
        values::dynamic_values_group(field),
        validation::validation_group(field),
        custom::custom_values_group(field),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(
        field = %field.id,
        type_ = %field.type_,
        groups = groups.len(),
        "properties panel composed"
    );
    groups
}
