use crate::ValueConstraint;
use accessible_types::{Value, ValueKind, Verb};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metadata of one declared property.
///
/// A property's effective access rights are its declared `access` verbs plus
/// the `methods` of its collection behavior, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub name: String,
    #[serde(default)]
    pub access: BTreeSet<Verb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association: Option<Association>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ValueConstraint>,
    /// Initial value of a scalar property. Ignored for collections.
    #[serde(default, with = "plain_value", skip_serializing_if = "Value::is_null")]
    pub default: Value,
}

impl PropertyMetadata {
    fn build(name: &str, access: &[Verb], collection: Option<CollectionBehavior>) -> Self {
        Self {
            name: name.into(),
            access: access.iter().copied().collect(),
            collection,
            association: None,
            constraint: None,
            default: Value::Null,
        }
    }

    /// Shorthand for a scalar property.
    pub fn scalar(name: &str, access: &[Verb]) -> Self {
        Self::build(name, access, None)
    }

    /// Shorthand for a list property whose `add`/`remove` accessors use `item_name`.
    pub fn list(name: &str, item_name: &str, access: &[Verb]) -> Self {
        Self::build(name, access, Some(CollectionBehavior::new(CollectionKind::List, item_name)))
    }

    /// Shorthand for a set property.
    pub fn set(name: &str, item_name: &str, access: &[Verb]) -> Self {
        Self::build(name, access, Some(CollectionBehavior::new(CollectionKind::Set, item_name)))
    }

    /// Shorthand for a map property.
    pub fn map(name: &str, item_name: &str, access: &[Verb]) -> Self {
        Self::build(name, access, Some(CollectionBehavior::new(CollectionKind::Map, item_name)))
    }

    /// Links this property to `target_property` on `target_type`.
    #[must_use]
    pub fn with_association(mut self, target_type: &str, target_property: &str) -> Self {
        self.association = Some(Association {
            target_type: target_type.into(),
            target_property: target_property.into(),
        });
        self
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: ValueConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    /// Restricts which collection verbs are exposed (default: `add` and `remove`).
    /// No-op on scalar properties.
    #[must_use]
    pub fn with_methods(mut self, methods: &[Verb]) -> Self {
        if let Some(collection) = self.collection.as_mut() {
            collection.methods = methods.iter().copied().filter(Verb::is_collection).collect();
        }
        self
    }

    /// Declared access plus collection methods.
    pub fn effective_access(&self) -> BTreeSet<Verb> {
        let mut verbs = self.access.clone();
        if let Some(collection) = &self.collection {
            verbs.extend(collection.methods.iter().copied());
        }
        verbs
    }

    /// Returns true if `verb` may be invoked on this property.
    pub fn allows(&self, verb: Verb) -> bool {
        self.access.contains(&verb)
            || self
                .collection
                .as_ref()
                .is_some_and(|c| c.methods.contains(&verb))
    }

    /// The item name used for `add`/`remove` accessors, if this is a collection.
    pub fn item_name(&self) -> Option<&str> {
        self.collection.as_ref().map(|c| c.item_name_or(&self.name))
    }

    pub fn collection_kind(&self) -> Option<CollectionKind> {
        self.collection.as_ref().map(|c| c.kind)
    }

    pub fn is_collection(&self) -> bool {
        self.collection.is_some()
    }

    /// The value a freshly created instance holds for this property.
    pub fn initial_value(&self) -> Value {
        match &self.collection {
            Some(collection) => collection.kind.empty(),
            None => self.default.clone(),
        }
    }
}

/// Container discipline of a collection property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl CollectionKind {
    /// An empty container of this kind.
    pub fn empty(&self) -> Value {
        match self {
            Self::List => Value::List(Vec::new()),
            Self::Set => Value::Set(Vec::new()),
            Self::Map => Value::Map(Vec::new()),
        }
    }

    /// The value kind of containers of this kind.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::List => ValueKind::List,
            Self::Set => ValueKind::Set,
            Self::Map => ValueKind::Map,
        }
    }

    /// Returns true if `value` is a container of this kind.
    pub fn holds(&self, value: &Value) -> bool {
        value.kind() == self.value_kind()
    }
}

/// Collection behavior of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBehavior {
    pub kind: CollectionKind,
    /// Singular noun forming the `add`/`remove` accessor names (e.g. "tag" for "tags").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// Collection verbs exposed for this property.
    #[serde(default = "default_methods")]
    pub methods: BTreeSet<Verb>,
}

fn default_methods() -> BTreeSet<Verb> {
    [Verb::Add, Verb::Remove].into_iter().collect()
}

impl CollectionBehavior {
    pub fn new(kind: CollectionKind, item_name: &str) -> Self {
        Self {
            kind,
            item_name: Some(item_name.into()),
            methods: default_methods(),
        }
    }

    /// The declared item name, falling back to the property name.
    pub fn item_name_or<'a>(&'a self, property: &'a str) -> &'a str {
        self.item_name.as_deref().unwrap_or(property)
    }
}

/// Back-reference to the property kept in sync with this one.
///
/// Associations are pairwise: the target property must declare an
/// association pointing back at this property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Association {
    pub target_type: String,
    pub target_property: String,
}

/// Plain-JSON (de)serialization of defaults, so schema files can write
/// `default = 3` instead of the tagged `Value` representation.
mod plain_value {
    use accessible_types::Value;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
        value.to_json().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from_json(&json))
    }
}
