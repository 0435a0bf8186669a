use formkit_schema::{Field, FormFieldLookup};

use super::{Group, GENERAL};
use crate::entries::general::{
    action_entry, columns_entry, default_value_entry, description_entry, disabled_entry, id_entry,
    key_entry, label_entry, text_entry, visible_entries,
};

pub(super) fn general_group(field: &Field, lookup: &dyn FormFieldLookup) -> Option<Group> {
    let entries = [
        id_entry(field),
        label_entry(field),
        description_entry(field),
        key_entry(field),
        visible_entries(field, lookup),
        default_value_entry(field),
        action_entry(field),
        columns_entry(field),
        text_entry(field),
        disabled_entry(field),
    ]
    .into_iter()
    .flatten()
    .collect();

    Group::entries(GENERAL, "General", entries)
}
