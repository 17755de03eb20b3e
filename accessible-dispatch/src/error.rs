//! Error types for dispatch.

use accessible_collections::CollectionError;
use accessible_model::SchemaError;
use accessible_types::{ObjectId, Value};
use thiserror::Error;

/// Dispatch-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The name is not an accessor, or names a verb the property does not grant.
    #[error("method {0} does not exist")]
    UnknownMethod(String),

    /// The constraint validator (or the association's target type) rejected a value.
    /// State is unchanged.
    #[error("invalid value {value} for {type_name}.{property}")]
    InvalidValue {
        type_name: String,
        property: String,
        value: Value,
    },

    /// Wrong number of arguments. Raised before any mutation.
    #[error("{method} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("object {0} does not exist")]
    UnknownObject(ObjectId),

    #[error("type {0} is not registered")]
    UnknownType(String),

    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
