//! Playground around a form schema and its data.
//!
//! [`Playground`] owns the schema and data, hosts an editor session (a
//! selection plus the properties panel over it) and builds viewer forms from
//! the same state. Changes are announced on an [`EventBus`]. The `formkit`
//! binary exposes the same operations on the command line.
//!
//! ```
//! use formkit_playground::{Playground, PlaygroundOptions};
//! use formkit_schema::Field;
//! use serde_json::json;
//!
//! let schema = Field::from_json(r#"{
//!     "id": "form", "type": "default",
//!     "components": [{ "id": "Textfield_1", "type": "textfield", "key": "name" }]
//! }"#).unwrap();
//!
//! let mut playground = Playground::new(PlaygroundOptions::new(schema)).unwrap();
//! playground.select(Some("Textfield_1")).unwrap();
//! playground.set_entry_value("label", json!("Name")).unwrap();
//! assert_eq!(playground.selection().unwrap().label.as_deref(), Some("Name"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod logging;
pub mod playground;

pub use cli::{Cli, Commands};
pub use config::{ConfigError, ConfigOverrides, PlaygroundConfig};
pub use error::{PlaygroundError, Result};
pub use events::{EventBus, ListenerId, DESTROY, SELECTION_CHANGED, STATE_CHANGED};
pub use format::FileFormat;
pub use logging::Pretty;
pub use playground::{Playground, PlaygroundOptions, PlaygroundState};
