use formkit_schema::{Field, ValuesSource};

use super::{Group, GroupContent, ItemAction, ListItem, DYNAMIC_VALUES, STATIC_VALUES, VALUES_SOURCE};
use crate::entries::values::{
    static_value_entries, static_value_item_id, values_key_entry, values_source_entry,
};

pub(super) fn values_source_group(field: &Field) -> Option<Group> {
    if !field.type_.has_values() {
        return None;
    }
    Group::entries(VALUES_SOURCE, "Values source", values_source_entry(field))
}

pub(super) fn static_values_group(field: &Field) -> Option<Group> {
    if !field.type_.has_values() || field.values_source() != ValuesSource::Static {
        return None;
    }

    let items = field
        .values
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, option)| ListItem {
            id: static_value_item_id(field, index),
            label: option.label.clone(),
            entries: static_value_entries(field, index, option),
            action: ItemAction::StaticValue(index),
        })
        .collect();

    Some(Group {
        id: STATIC_VALUES,
        label: "Static values",
        content: GroupContent::List {
            add_label: "Add value",
            items,
        },
    })
}

pub(super) fn dynamic_values_group(field: &Field) -> Option<Group> {
    if !field.type_.has_values() || field.values_source() != ValuesSource::Input {
        return None;
    }
    Group::entries(DYNAMIC_VALUES, "Dynamic values", values_key_entry(field))
}
