//! Form schema model and registries
//!
//! `formkit-schema` is the data layer shared by the properties panel, the
//! viewer and the playground. It knows nothing about rendering.
//!
//! # Architecture
//!
//! - **Schema as a tree**: a `default` root [`Field`] with nested `components`
//! - **Lossless**: unknown attributes and unknown field types survive round trips
//! - **Field type registry**: labels, icons, keyed flags and factory defaults per type
//! - **Single mutation path**: `(field, path, value)` edits applied by [`FormFieldRegistry`]

pub mod error;
pub mod field_types;
pub mod path;
pub mod registry;
pub mod types;

pub use error::{Result, SchemaError};
pub use field_types::FieldTypeInfo;
pub use path::{get_path, with_path};
pub use registry::{generate_id, FormFieldLookup, FormFieldRegistry};
pub use types::{Field, FieldType, Validate, ValueOption, ValuesSource};
