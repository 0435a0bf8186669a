//! Panel header: element label, icon and type label of the selected field.

use formkit_schema::{Field, FieldType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelHeader {
    pub label: Option<String>,
    pub icon: Option<&'static str>,
    pub type_label: Option<&'static str>,
}

impl PanelHeader {
    pub fn for_field(field: &Field) -> Self {
        Self {
            label: element_label(field),
            icon: field.type_.info().map(|info| info.icon),
            type_label: type_label(&field.type_),
        }
    }
}

/// Upper-case type names shown above the groups.
pub fn type_label(type_: &FieldType) -> Option<&'static str> {
    let label = match type_ {
        FieldType::Button => "BUTTON",
        FieldType::Checkbox => "CHECKBOX",
        FieldType::Checklist => "CHECKLIST",
        FieldType::Columns => "COLUMNS",
        FieldType::Default => "FORM",
        FieldType::Number => "NUMBER",
        FieldType::Radio => "RADIO",
        FieldType::Select => "SELECT",
        FieldType::Taglist => "TAGLIST",
        FieldType::Text => "TEXT",
        FieldType::Textfield => "TEXT FIELD",
        FieldType::Other(_) => return None,
    };
    Some(label)
}

/// Text fields are named by their (shortened) text, the form by its id and
/// everything else by its label.
pub fn element_label(field: &Field) -> Option<String> {
    match field.type_ {
        FieldType::Text => Some(text_to_label(field.text.as_deref().unwrap_or("..."))),
        FieldType::Default => Some(field.id.clone()),
        _ => field.label.clone(),
    }
}

/// Texts longer than ten characters are cut to thirty and get an ellipsis.
pub fn text_to_label(text: &str) -> String {
    if text.chars().count() > 10 {
        let head: String = text.chars().take(30).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
