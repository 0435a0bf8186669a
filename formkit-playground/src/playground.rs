//! The playground: one schema/data state shared by the editor and the viewer.
//!
//! Editor edits go through the properties panel, which reports them as
//! `(field, path, value)` calls. The playground records those calls, applies
//! them to its registry as one batch and announces the new state on
//! [`STATE_CHANGED`].

use std::collections::HashMap;
use std::path::Path;

use formkit_panel::{EditRecorder, PanelView, PropertiesPanel};
use formkit_schema::{Field, FormFieldRegistry, SchemaError};
use formkit_viewer::{Form, Submission};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::error::{PlaygroundError, Result};
use crate::events::{EventBus, ListenerId, DESTROY, SELECTION_CHANGED, STATE_CHANGED};
use crate::format::FileFormat;
use crate::logging::Pretty;

/// Initial state of a playground.
#[derive(Debug, Clone)]
pub struct PlaygroundOptions {
    pub schema: Field,
    /// Form data; `None` starts with an empty object.
    pub data: Option<Map<String, Value>>,
}

impl PlaygroundOptions {
    pub fn new(schema: Field) -> Self {
        Self { schema, data: None }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Snapshot returned by [`Playground::get_state`] and carried by
/// [`STATE_CHANGED`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaygroundState {
    pub schema: Field,
    pub data: Map<String, Value>,
}

#[derive(Debug)]
pub struct Playground {
    registry: FormFieldRegistry,
    data: Map<String, Value>,
    selection: Option<String>,
    events: EventBus,
    destroyed: bool,
}

impl Playground {
    pub fn new(options: PlaygroundOptions) -> Result<Self> {
        let registry = FormFieldRegistry::import(options.schema)?;
        debug!(form = %registry.schema().id, fields = registry.len(), "playground created");
        Ok(Self {
            registry,
            data: options.data.unwrap_or_default(),
            selection: None,
            events: EventBus::new(),
            destroyed: false,
        })
    }

    pub fn get_state(&self) -> PlaygroundState {
        PlaygroundState {
            schema: self.registry.schema().clone(),
            data: self.data.clone(),
        }
    }

    pub fn schema(&self) -> &Field {
        self.registry.schema()
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Replace the schema. The selection is kept if the field still exists.
    pub fn set_schema(&mut self, schema: Field) -> Result<()> {
        self.ensure_alive()?;
        self.registry = FormFieldRegistry::import(schema)?;
        if let Some(id) = &self.selection {
            if self.registry.get(id).is_none() {
                debug!(id = %id, "selected field is gone");
                self.selection = None;
            }
        }
        self.emit_state()
    }

    /// Replace the form data.
    pub fn set_data(&mut self, data: Value) -> Result<()> {
        self.ensure_alive()?;
        self.data = match data {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return Err(PlaygroundError::InvalidData),
        };
        self.emit_state()
    }

    /// Load a dropped schema document. On a parse error the state is left
    /// untouched and the error is logged and returned.
    pub fn load_file_contents(&mut self, contents: &str, format: FileFormat) -> Result<()> {
        self.ensure_alive()?;
        let schema = format.parse_schema(contents).map_err(|err| {
            warn!(format = %format, error = %err, "could not load form file");
            err
        })?;
        self.set_schema(schema)
    }

    /// Load a schema file; the format follows the file extension.
    pub async fn load_file(&mut self, path: &Path) -> Result<()> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlaygroundError::io(path, e))?;
        debug!(path = %path.display(), "loading form file");
        self.load_file_contents(&contents, FileFormat::from_path(path))
    }

    /// Load a data file; the format follows the file extension.
    pub async fn load_data(&mut self, path: &Path) -> Result<()> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlaygroundError::io(path, e))?;
        let data = FileFormat::from_path(path).parse_value(&contents)?;
        self.set_data(data)
    }

    /// Write the current schema; the format follows the file extension.
    pub async fn save_schema(&self, path: &Path) -> Result<()> {
        let contents = FileFormat::from_path(path).render(self.registry.schema())?;
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| PlaygroundError::io(path, e))?;
        debug!(path = %path.display(), "schema saved");
        Ok(())
    }

    pub fn on<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&Value) + Send + 'static,
    {
        self.events.on(event, handler)
    }

    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        self.events.off(event, id)
    }

    pub fn emit(&mut self, event: &str, payload: &Value) {
        self.events.emit(event, payload);
    }

    /// Emit [`DESTROY`] and drop every listener. Later mutations fail.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.events.emit(DESTROY, &Value::Null);
        self.events.clear();
        self.destroyed = true;
        debug!("playground destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Select the field the properties panel edits; `None` clears it.
    pub fn select(&mut self, id: Option<&str>) -> Result<()> {
        self.ensure_alive()?;
        if let Some(id) = id {
            if self.registry.get(id).is_none() {
                return Err(SchemaError::FieldNotFound { id: id.to_string() }.into());
            }
        }
        self.selection = id.map(str::to_string);
        self.events
            .emit(SELECTION_CHANGED, &json!({ "selection": self.selection }));
        Ok(())
    }

    pub fn selection(&self) -> Option<&Field> {
        self.selection.as_deref().and_then(|id| self.registry.get(id))
    }

    pub fn properties_panel(&self) -> PropertiesPanel<'_> {
        PropertiesPanel::new(self.selection(), &self.registry)
    }

    pub fn panel_view(&self) -> PanelView {
        self.properties_panel().view()
    }

    /// Set entry `entry_id` of the selected field from a widget input.
    pub fn set_entry_value(&mut self, entry_id: &str, input: Value) -> Result<()> {
        self.ensure_alive()?;
        let mut recorder = EditRecorder::new();
        self.properties_panel()
            .set_value(entry_id, input, &mut recorder)?;
        self.apply(recorder)
    }

    /// Append an item to the list group `group_id` of the selected field.
    pub fn add_item(&mut self, group_id: &str) -> Result<()> {
        self.ensure_alive()?;
        let mut recorder = EditRecorder::new();
        self.properties_panel().add_item(group_id, &mut recorder)?;
        self.apply(recorder)
    }

    /// Remove the list item `item_id` from the selected field.
    pub fn remove_item(&mut self, item_id: &str) -> Result<()> {
        self.ensure_alive()?;
        let mut recorder = EditRecorder::new();
        self.properties_panel().remove_item(item_id, &mut recorder)?;
        self.apply(recorder)
    }

    /// A viewer form over the current state.
    pub fn form(&self) -> Result<Form> {
        Ok(Form::new(
            self.registry.schema().clone(),
            Value::Object(self.data.clone()),
        )?)
    }

    pub fn submit(&self) -> Result<Submission> {
        Ok(self.form()?.submit())
    }

    /// Apply recorded edits in order. Either every edit is applied or none.
    fn apply(&mut self, recorder: EditRecorder) -> Result<()> {
        if recorder.is_empty() {
            return Ok(());
        }

        let mut registry = self.registry.clone();
        let mut selection = self.selection.clone();
        let mut renamed: HashMap<String, String> = HashMap::new();

        for call in recorder.into_calls() {
            let id = renamed
                .get(&call.field_id)
                .cloned()
                .unwrap_or_else(|| call.field_id.clone());
            let path = call.path();
            registry.edit_field(&id, &path, call.value.clone())?;

            if let (["id"], Some(Value::String(new_id))) = (path.as_slice(), &call.value) {
                if selection.as_deref() == Some(id.as_str()) {
                    selection = Some(new_id.clone());
                }
                renamed.insert(call.field_id.clone(), new_id.clone());
            }
        }

        self.registry = registry;
        self.selection = selection;
        self.emit_state()
    }

    fn emit_state(&mut self) -> Result<()> {
        let state = self.get_state();
        debug!("state changed: {}", Pretty(&state));
        let payload =
            serde_json::to_value(&state).map_err(|e| PlaygroundError::Render(e.to_string()))?;
        self.events.emit(STATE_CHANGED, &payload);
        Ok(())
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed {
            return Err(PlaygroundError::Destroyed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn schema() -> Field {
        serde_json::from_value(json!({
            "id": "form",
            "type": "default",
            "components": [
                { "id": "Textfield_1", "type": "textfield", "key": "creditor", "label": "Creditor" },
                { "id": "Select_1", "type": "select", "key": "language", "label": "Language",
                  "values": [{ "label": "German", "value": "german" }] }
            ]
        }))
        .unwrap()
    }

    fn playground() -> Playground {
        Playground::new(PlaygroundOptions::new(schema())).unwrap()
    }

    fn record(playground: &mut Playground, event: &str) -> Arc<Mutex<Vec<Value>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        playground.on(event, move |payload| sink.lock().unwrap().push(payload.clone()));
        seen
    }

    #[test]
    fn test_new_playground_state() {
        let playground = playground();
        let state = playground.get_state();
        assert_eq!(state.schema.id, "form");
        assert!(state.data.is_empty());
        assert!(matches!(playground.panel_view(), PanelView::Empty { .. }));
    }

    #[test]
    fn test_invalid_drop_keeps_state() {
        let mut playground = playground();
        let events = record(&mut playground, STATE_CHANGED);
        let before = playground.get_state();

        let result = playground.load_file_contents("{ not json", FileFormat::Json);
        assert!(matches!(result, Err(PlaygroundError::Parse { .. })));
        assert_eq!(playground.get_state(), before);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_valid_drop_replaces_schema() {
        let mut playground = playground();
        let events = record(&mut playground, STATE_CHANGED);

        playground
            .load_file_contents(
                "id: other\ntype: default\ncomponents:\n  - id: Number_1\n    type: number\n    key: amount\n",
                FileFormat::Yaml,
            )
            .unwrap();
        assert_eq!(playground.schema().id, "other");
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["schema"]["components"][0]["key"], json!("amount"));
    }

    #[test]
    fn test_entry_edit_updates_schema_and_emits() {
        let mut playground = playground();
        let events = record(&mut playground, STATE_CHANGED);

        playground.select(Some("Textfield_1")).unwrap();
        playground.set_entry_value("label", json!("Creditor name")).unwrap();

        assert_eq!(
            playground.registry.get("Textfield_1").unwrap().label.as_deref(),
            Some("Creditor name")
        );
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_id_rename_follows_selection() {
        let mut playground = playground();
        playground.select(Some("form")).unwrap();
        playground.set_entry_value("id", json!("invoice")).unwrap();

        assert_eq!(playground.selection().map(|f| f.id.as_str()), Some("invoice"));
        assert!(playground.registry.get("form").is_none());
        assert_eq!(playground.schema().id, "invoice");
    }

    #[test]
    fn test_rejected_edit_changes_nothing() {
        let mut playground = playground();
        let events = record(&mut playground, STATE_CHANGED);
        playground.select(Some("Textfield_1")).unwrap();

        let result = playground.set_entry_value("key", json!("language"));
        assert!(matches!(result, Err(PlaygroundError::Panel(_))));
        assert_eq!(
            playground.registry.get("Textfield_1").unwrap().key.as_deref(),
            Some("creditor")
        );
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_edit_without_selection() {
        let mut playground = playground();
        assert!(matches!(
            playground.set_entry_value("label", json!("x")),
            Err(PlaygroundError::Panel(formkit_panel::PanelError::NoSelection))
        ));
    }

    #[test]
    fn test_select_unknown_field() {
        let mut playground = playground();
        assert!(playground.select(Some("nope")).is_err());
        assert!(playground.selection().is_none());
    }

    #[test]
    fn test_selection_events() {
        let mut playground = playground();
        let events = record(&mut playground, SELECTION_CHANGED);
        playground.select(Some("Select_1")).unwrap();
        playground.select(None).unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec![json!({ "selection": "Select_1" }), json!({ "selection": null })]
        );
    }

    #[test]
    fn test_static_value_items() {
        let mut playground = playground();
        playground.select(Some("Select_1")).unwrap();
        playground.add_item("staticValues").unwrap();

        let values = playground.selection().unwrap().values.clone().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].value, "value2");

        playground.remove_item("Select_1-staticValues-0").unwrap();
        let values = playground.selection().unwrap().values.clone().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, "value2");
    }

    #[test]
    fn test_destroy() {
        let mut playground = playground();
        let events = record(&mut playground, DESTROY);
        playground.destroy();
        playground.destroy();

        assert_eq!(events.lock().unwrap().len(), 1);
        assert!(playground.is_destroyed());
        assert!(matches!(
            playground.set_schema(schema()),
            Err(PlaygroundError::Destroyed)
        ));
    }

    #[test]
    fn test_set_data_rejects_non_objects() {
        let mut playground = playground();
        assert!(matches!(
            playground.set_data(json!("text")),
            Err(PlaygroundError::InvalidData)
        ));
        playground.set_data(json!({ "creditor": "Jane" })).unwrap();
        assert_eq!(playground.form().unwrap().data()["creditor"], json!("Jane"));
    }
}
