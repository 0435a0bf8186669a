//! Properties panel model for formkit
//!
//! Given the selected field and a [`FormFieldLookup`](formkit_schema::FormFieldLookup),
//! the panel decides which property editors apply, describes them as
//! renderable [`Entry`] values grouped into [`Group`]s, validates raw input
//! and turns accepted input into `edit_field(field, path, value)` calls.
//!
//! ```
//! use formkit_panel::{EditRecorder, PropertiesPanel};
//! use formkit_schema::{Field, FormFieldRegistry};
//! use serde_json::json;
//!
//! let schema = Field::from_json(
//!     r#"{"id":"form","type":"default","components":[
//!         {"id":"Textfield_1","type":"textfield","key":"name"}]}"#,
//! ).unwrap();
//! let registry = FormFieldRegistry::import(schema).unwrap();
//! let panel = PropertiesPanel::new(registry.get("Textfield_1"), &registry);
//!
//! let mut edits = EditRecorder::new();
//! panel.set_value("label", json!("Name"), &mut edits).unwrap();
//! assert_eq!(edits.calls()[0].path(), vec!["label"]);
//! ```

pub mod edit;
pub mod entries;
pub mod entry;
pub mod error;
pub mod groups;
pub mod header;
pub mod panel;
pub mod validate;

pub use edit::{EditCall, EditField, EditRecorder};
pub use entry::{Choice, Entry, Widget};
pub use error::{PanelError, Result};
pub use groups::{compose, Group, GroupContent, ListItem};
pub use header::{element_label, text_to_label, PanelHeader};
pub use panel::{PanelView, PropertiesPanel, PLACEHOLDER};
