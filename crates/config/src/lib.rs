//! Binding-override configuration for keyroute.
//!
//! This crate owns the serializable override format and its validation;
//! the engine stays free of file-format concerns.

pub mod overrides;
pub mod types;

pub use overrides::{OverrideError, RESERVED_GESTURES, compile, validate};
pub use types::BindingOverrides;
