//! Error types for schema loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// A schema that cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("type {0} is declared more than once")]
    DuplicateType(String),

    #[error("property {type_name}.{property} is declared more than once")]
    DuplicateProperty { type_name: String, property: String },

    #[error("item name {item_name} is used by more than one collection of {type_name}")]
    DuplicateItemName { type_name: String, item_name: String },

    #[error("{type_name}.{name} cannot form an accessor name")]
    InvalidName { type_name: String, name: String },

    #[error("constructor of {type_name} names unknown property {property}")]
    UnknownConstructorProperty { type_name: String, property: String },

    #[error("{type_name}.{property} is associated with unknown property {target}")]
    UnknownAssociationTarget {
        type_name: String,
        property: String,
        target: String,
    },

    #[error("{type_name}.{property} is associated with {target}, which does not associate back")]
    AsymmetricAssociation {
        type_name: String,
        property: String,
        target: String,
    },

    #[error("map property {type_name}.{property} cannot be associated")]
    AssociatedMap { type_name: String, property: String },

    #[error("{target} must grant `{verb}` to keep its association with {type_name}.{property} in sync")]
    MissingReciprocalAccess {
        type_name: String,
        property: String,
        target: String,
        verb: String,
    },
}

/// Errors produced while loading schema files.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
