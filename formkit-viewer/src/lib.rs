//! Headless form viewer for formkit
//!
//! A [`Form`] interprets a schema against a data object: it computes initial
//! data, resolves static or dynamic options, applies widget changes, decides
//! conditional visibility and validates on submit. Rendering is left to the
//! host.

pub mod error;
pub mod form;
pub mod validation;
pub mod value;

pub use error::{Result, ViewerError};
pub use form::{ChangeEvent, FieldState, Form, Submission};
pub use validation::validate_value;
