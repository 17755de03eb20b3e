//! Declarative metadata for Accessible.
//!
//! Defines what the dispatch engine consumes:
//! - [`PropertyMetadata`]: access rights, collection behavior, association and constraint of one property
//! - [`TypeSchema`]: the properties and constructor arguments of one object type
//! - [`ConstraintValidator`]: accept/reject predicate for prospective values
//! - [`SchemaFile`]: TOML representation of a set of type schemas
//!
//! The dispatch engine never looks at how these records were produced; builder
//! calls and schema files are two providers of the same structures.

mod config;
mod constraint;
mod error;
mod property;
mod schema;

pub use config::SchemaFile;
pub use constraint::{ConstraintValidator, ObjectTypes, TypeConstraintValidator, ValueConstraint};
pub use error::{ModelError, ModelResult, SchemaError};
pub use property::{Association, CollectionBehavior, CollectionKind, PropertyMetadata};
pub use schema::TypeSchema;
