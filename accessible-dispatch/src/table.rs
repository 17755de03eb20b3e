//! Dispatch tables: the access resolver compiled ahead of time.
//!
//! Every accessor a type exposes is generated from its metadata once, at
//! registration. Resolving a call is a single lookup keyed by
//! `(verb, target)`; a miss means the method does not exist or the verb is
//! not granted, which are the same thing to a caller.

use crate::method_name::{lower_first, method_name};
use crate::{DispatchError, DispatchResult, ParsedName};
use accessible_collections::strategy_for;
use accessible_model::{CollectionKind, TypeSchema};
use accessible_types::Verb;
use std::collections::HashMap;

/// One generated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub verb: Verb,
    /// Accessor name, e.g. `addTag`.
    pub method: String,
    /// The property the accessor operates on (for `add`/`remove`, the
    /// property owning the item name).
    pub property: String,
    pub collection: Option<CollectionKind>,
    /// Number of arguments the accessor takes.
    pub arity: usize,
}

/// Accessors of one type, keyed by `(verb, target)`.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    entries: HashMap<(Verb, String), Accessor>,
}

impl DispatchTable {
    /// Generates every accessor granted by the schema's effective access rights.
    ///
    /// `add`/`remove` granted on a scalar property produce nothing: there is
    /// no item name to address them by.
    pub fn build(schema: &TypeSchema) -> Self {
        let mut entries = HashMap::new();

        for property in &schema.properties {
            let kind = property.collection_kind();
            for verb in property.effective_access() {
                let (target, arity) = match (verb, kind, property.item_name()) {
                    (Verb::Add, Some(kind), Some(item)) => (item, strategy_for(kind).add_arity()),
                    (Verb::Remove, Some(kind), Some(item)) => {
                        (item, strategy_for(kind).remove_arity())
                    }
                    (Verb::Add | Verb::Remove, _, _) => continue,
                    (Verb::Set, _, _) => (property.name.as_str(), 1),
                    (Verb::Get | Verb::Is, _, _) => (property.name.as_str(), 0),
                };

                entries.insert(
                    (verb, lower_first(target)),
                    Accessor {
                        verb,
                        method: method_name(verb, target),
                        property: property.name.clone(),
                        collection: kind,
                        arity,
                    },
                );
            }
        }

        Self { entries }
    }

    /// Resolves a parsed call to its accessor.
    ///
    /// This is the only authorization gate: anything past it has been granted.
    pub fn resolve(&self, call: &ParsedName, method: &str) -> DispatchResult<&Accessor> {
        self.lookup(call.verb, &call.target)
            .ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))
    }

    /// Looks up the accessor for `verb` on a property (`get`/`is`/`set`) or
    /// item name (`add`/`remove`).
    pub fn lookup(&self, verb: Verb, target: &str) -> Option<&Accessor> {
        self.entries.get(&(verb, lower_first(target)))
    }

    /// All accessors, sorted by method name.
    pub fn accessors(&self) -> Vec<&Accessor> {
        let mut all: Vec<_> = self.entries.values().collect();
        all.sort_by(|a, b| a.method.cmp(&b.method));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
