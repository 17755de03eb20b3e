//! Dynamic property values.
//!
//! A property holds either a scalar (`Null`, `Bool`, `Int`, `Float`, `Text`,
//! `Ref`) or a container (`List`, `Set`, `Map`). Containers keep insertion
//! order; `Set` uniqueness and `Map` key identity are defined by `Value`
//! equality, so no hashing is required and floats are allowed as elements.
//!
//! Equality is reflexive: `Float(NaN)` equals itself, so a NaN can be found,
//! deduplicated and removed like any other element.

use crate::{Error, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dynamically typed property value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Reference to another object in the same graph.
    Ref(ObjectId),
    List(Vec<Value>),
    Set(Vec<Value>),
    /// Key/value entries in insertion order. Keys are unique.
    Map(Vec<(Value, Value)>),
}

/// The discriminant of a [`Value`], used by constraints and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Ref,
    List,
    Set,
    Map,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Ref => "ref",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "text" => Ok(Self::Text),
            "ref" => Ok(Self::Ref),
            "list" => Ok(Self::List),
            "set" => Ok(Self::Set),
            "map" => Ok(Self::Map),
            other => Err(Error::InvalidValueKind(other.to_string())),
        }
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Ref(_) => ValueKind::Ref,
            Self::List(_) => ValueKind::List,
            Self::Set(_) => ValueKind::Set,
            Self::Map(_) => ValueKind::Map,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the referenced object, if this is a `Ref`.
    #[must_use]
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Self::Ref(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a `List` or `Set`.
    #[must_use]
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a `Map`.
    #[must_use]
    pub fn entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a map entry by key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if a `List` or `Set` holds `item`, or a `Map` has `item` as a key.
    #[must_use]
    pub fn contains(&self, item: &Value) -> bool {
        match self {
            Self::List(items) | Self::Set(items) => items.contains(item),
            Self::Map(entries) => entries.iter().any(|(k, _)| k == item),
            _ => false,
        }
    }

    /// Number of elements in a container; `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Converts plain JSON into a value.
    ///
    /// Arrays become lists and objects become maps with text keys. A string
    /// is always `Text`; references cannot be expressed in plain JSON.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            serde_json::Value::Object(fields) => Self::Map(
                fields
                    .iter()
                    .map(|(k, v)| (Self::Text(k.clone()), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Converts a value into plain JSON for display.
    ///
    /// References render as their id string. Maps whose keys are all text
    /// render as objects, other maps as arrays of `[key, value]` pairs.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            // JSON has no NaN or infinities; those render as "NaN", "inf", "-inf".
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or_else(|| serde_json::Value::String(f.to_string()), serde_json::Value::Number),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Ref(id) => serde_json::Value::String(id.to_string()),
            Self::List(items) | Self::Set(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Map(entries) => {
                if entries.iter().all(|(k, _)| k.as_str().is_some()) {
                    serde_json::Value::Object(
                        entries
                            .iter()
                            .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.to_json())))
                            .collect(),
                    )
                } else {
                    serde_json::Value::Array(
                        entries
                            .iter()
                            .map(|(k, v)| serde_json::Value::Array(vec![k.to_json(), v.to_json()]))
                            .collect(),
                    )
                }
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::Ref(id)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
