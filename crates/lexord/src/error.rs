//! Error types for the lexord crate.
//!
//! The typed comparator API has no runtime failure mode. Errors only come
//! from turning field names into keys, see [`OrderBy`](crate::OrderBy).

use thiserror::Error;

/// Errors that can occur when building a chain from named keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexordError {
    /// The field is not a keyed field of the subject type.
    #[error("unknown sort field '{field}' (available: {available})")]
    UnknownField { field: String, available: String },

    /// An order clause had no field name.
    #[error("empty field name in order clause")]
    EmptyField,

    /// A direction was neither ascending nor descending.
    #[error("invalid sort direction '{0}': expected 'asc' or 'desc'")]
    InvalidDirection(String),
}

/// Result type for lexord operations.
pub type Result<T> = std::result::Result<T, LexordError>;
