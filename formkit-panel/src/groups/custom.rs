use formkit_schema::{Field, FieldType};

use super::{Group, GroupContent, ItemAction, ListItem, CUSTOM_VALUES};
use crate::entries::custom::{property_entries, property_item_id};

/// Every field but the schema root carries custom properties.
pub(super) fn custom_values_group(field: &Field) -> Option<Group> {
    if field.type_ == FieldType::Default {
        return None;
    }

    let items = field
        .properties
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, (key, value))| ListItem {
            id: property_item_id(field, index),
            label: key.clone(),
            entries: property_entries(field, index, key, value),
            action: ItemAction::CustomProperty(key.clone()),
        })
        .collect();

    Some(Group {
        id: CUSTOM_VALUES,
        label: "Custom properties",
        content: GroupContent::List {
            add_label: "Add property",
            items,
        },
    })
}
