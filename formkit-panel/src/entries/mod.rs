//! Entry definitions.
//!
//! Each entry function is a pure function of the field (and lookup service)
//! returning zero or more [`Entry`] descriptors. Setters validate raw input
//! and turn it into `edit_field` calls.

pub mod custom;
pub mod general;
pub mod validation;
pub mod values;

use formkit_schema::{Field, FormFieldLookup};
use serde_json::{Number, Value};
use tracing::trace;

use crate::edit::EditField;
use crate::entry::{Entry, Property};
use crate::error::{PanelError, Result};
use crate::validate::{MUST_BE_NUMBER, MUST_BE_OPTION};

/// What a setter needs to know about the current selection.
pub(crate) struct EntryContext<'a> {
    pub field: &'a Field,
    pub lookup: &'a dyn FormFieldLookup,
    pub entry: &'a Entry,
}

impl EntryContext<'_> {
    /// Turn a validator result into an error for this entry.
    pub fn check(&self, message: Option<String>) -> Result<()> {
        match message {
            Some(message) => Err(PanelError::validation(&self.entry.id, message)),
            None => Ok(()),
        }
    }

    /// Reject values a select entry does not offer.
    pub fn ensure_choice(&self, value: &str) -> Result<()> {
        let offered = self.entry.choices().iter().any(|c| c.value == value);
        self.check((!offered).then(|| MUST_BE_OPTION.to_string()))
    }
}

/// Validate `input` for `entry` and emit the resulting edits.
pub(crate) fn apply(
    entry: &Entry,
    field: &Field,
    lookup: &dyn FormFieldLookup,
    input: &Value,
    edit: &mut dyn EditField,
) -> Result<()> {
    trace!(field = %field.id, entry = %entry.id, "applying entry value");

    let ctx = EntryContext {
        field,
        lookup,
        entry,
    };
    match &entry.property {
        Property::Id => general::set_id(&ctx, input, edit),
        Property::Label => general::set_text_property(&ctx, "label", input, edit),
        Property::Description => general::set_text_property(&ctx, "description", input, edit),
        Property::Key => general::set_key(&ctx, input, edit),
        Property::Visible => general::set_visible(&ctx, input, edit),
        Property::VisibleExpression => {
            general::set_text_property(&ctx, "visibleExpression", input, edit)
        }
        Property::DefaultValue => general::set_default_value(&ctx, input, edit),
        Property::Action => general::set_action(&ctx, input, edit),
        Property::Columns => general::set_columns(&ctx, input, edit),
        Property::Text => general::set_text_property(&ctx, "text", input, edit),
        Property::Disabled => general::set_disabled(&ctx, input, edit),
        Property::ValuesSource => values::set_values_source(&ctx, input, edit),
        Property::ValuesKey => values::set_values_key(&ctx, input, edit),
        Property::StaticValueLabel(index) => values::set_label(&ctx, *index, input, edit),
        Property::StaticValueValue(index) => values::set_value(&ctx, *index, input, edit),
        Property::Required => validation::set_required(&ctx, input, edit),
        Property::MinLength => validation::set_length(&ctx, "minLength", input, edit),
        Property::MaxLength => validation::set_length(&ctx, "maxLength", input, edit),
        Property::Pattern => validation::set_pattern(&ctx, input, edit),
        Property::Min => validation::set_bound(&ctx, "min", input, edit),
        Property::Max => validation::set_bound(&ctx, "max", input, edit),
        Property::CustomKey(index) => custom::set_key(&ctx, *index, input, edit),
        Property::CustomValue(index) => custom::set_value(&ctx, *index, input, edit),
    }
}

/// Parse a finite number from text input.
pub(crate) fn parse_number(text: &str) -> std::result::Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| MUST_BE_NUMBER.to_string())
}

/// JSON number for `n`, integral when possible.
pub(crate) fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
