#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// field representation for smoothing purposes.
pub mod field;

/// Error types for the field module.
pub mod error;

/// basic operations on fields.
pub mod ops;

pub use crate::error::FieldError;
pub use crate::field::{Field, FieldSize};
