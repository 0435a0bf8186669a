use formkit_schema::Field;

use super::{Group, VALIDATION};
use crate::entries::validation::validation_entries;

pub(super) fn validation_group(field: &Field) -> Option<Group> {
    Group::entries(VALIDATION, "Validation", validation_entries(field))
}
