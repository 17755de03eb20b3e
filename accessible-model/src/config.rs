//! Schema files: type schemas declared in TOML.
//!
//! ```toml
//! [[types]]
//! name = "Post"
//! constructor = ["title"]
//!
//! [[types.properties]]
//! name = "title"
//! access = ["get", "set"]
//! constraint = { kind = "text", nullable = false }
//!
//! [[types.properties]]
//! name = "tags"
//! access = ["get"]
//! collection = { kind = "set", item_name = "tag" }
//! association = { target_type = "Tag", target_property = "posts" }
//! ```

use crate::{ModelError, ModelResult, SchemaError, TypeSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// A set of type schemas as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub types: Vec<TypeSchema>,
}

impl SchemaFile {
    /// Loads and validates a schema file.
    pub fn load_from(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), types = file.types.len(), "Loaded schema file");
        Ok(file)
    }

    /// Parses and validates schemas from TOML text.
    pub fn from_toml_str(contents: &str) -> ModelResult<Self> {
        let file: SchemaFile = toml::from_str(contents)?;
        file.validate()?;
        Ok(file)
    }

    /// Per-type validation plus duplicate type names.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for schema in &self.types {
            if !seen.insert(schema.name.as_str()) {
                return Err(SchemaError::DuplicateType(schema.name.clone()));
            }
            schema.validate()?;
        }
        Ok(())
    }

    pub fn into_schemas(self) -> Vec<TypeSchema> {
        self.types
    }
}
