use crate::{CollectionKind, PropertyMetadata, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declares an object type: its properties and the positional constructor
/// arguments bound at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
    /// Property names bound, in order, by constructor arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor: Vec<String>,
}

impl TypeSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            constructor: Vec::new(),
        }
    }

    #[must_use]
    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn constructor(mut self, properties: &[&str]) -> Self {
        self.constructor = properties.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Checks the rules that can be decided from this type alone.
    ///
    /// Property and item names must form parseable accessor names
    /// (`[A-Za-z][A-Za-z0-9_]*`), and must stay distinct once their first
    /// letter is lowercased, since that is how accessors are looked up.
    /// Cross-type rules (association targets) are checked when the whole set
    /// of schemas is registered.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut names = HashSet::new();
        let mut property_keys = HashSet::new();
        let mut item_keys = HashSet::new();

        for property in &self.properties {
            self.check_name(&property.name)?;
            names.insert(property.name.as_str());
            if !property_keys.insert(accessor_key(&property.name)) {
                return Err(SchemaError::DuplicateProperty {
                    type_name: self.name.clone(),
                    property: property.name.clone(),
                });
            }
            if let Some(item_name) = property.item_name() {
                self.check_name(item_name)?;
                if !item_keys.insert(accessor_key(item_name)) {
                    return Err(SchemaError::DuplicateItemName {
                        type_name: self.name.clone(),
                        item_name: item_name.to_string(),
                    });
                }
            }
            if property.association.is_some()
                && property.collection_kind() == Some(CollectionKind::Map)
            {
                return Err(SchemaError::AssociatedMap {
                    type_name: self.name.clone(),
                    property: property.name.clone(),
                });
            }
        }

        if let Some(unknown) = self.constructor.iter().find(|c| !names.contains(c.as_str())) {
            return Err(SchemaError::UnknownConstructorProperty {
                type_name: self.name.clone(),
                property: unknown.clone(),
            });
        }

        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), SchemaError> {
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(SchemaError::InvalidName {
                type_name: self.name.clone(),
                name: name.to_string(),
            })
        }
    }
}

/// The dispatch key of a property or item name: first letter lowercased.
fn accessor_key(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
