//! Core type definitions for Accessible.
//!
//! This crate defines the small set of types shared by every other crate in
//! the workspace:
//! - [`ObjectId`]: identifier of an instance inside an object graph (UUID v7)
//! - [`Value`]: the dynamic value held by a property (scalar or container)
//! - [`Verb`]: the action encoded in an accessor name (`get`, `is`, `set`, `add`, `remove`)
//!
//! Nothing here knows about metadata or dispatch; those live in
//! `accessible-model` and `accessible-dispatch`.

mod ids;
mod value;
mod verb;

pub use ids::ObjectId;
pub use value::{Value, ValueKind};
pub use verb::Verb;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid verb: {0}")]
    InvalidVerb(String),

    #[error("invalid value kind: {0}")]
    InvalidValueKind(String),
}
