//! Accessor verbs.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic action encoded in an accessor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Get,
    Is,
    Set,
    Add,
    Remove,
}

impl Verb {
    /// All verbs.
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Is, Verb::Set, Verb::Add, Verb::Remove];

    /// The lowercase prefix used in accessor names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Is => "is",
            Self::Set => "set",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    /// Returns true for `get` and `is`.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Get | Self::Is)
    }

    /// Returns true for `add` and `remove`, the verbs addressed by item name.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Add | Self::Remove)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "is" => Ok(Self::Is),
            "set" => Ok(Self::Set),
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            other => Err(Error::InvalidVerb(other.to_string())),
        }
    }
}
