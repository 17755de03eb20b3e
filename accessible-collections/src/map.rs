//! Keyed entries.
//!
//! `add` takes `(key, value)`, `remove` takes `key`.

use crate::{CollectionError, CollectionResult, CollectionStrategy, check_arity};
use accessible_model::CollectionKind;
use accessible_types::Value;

/// Map strategy: `add` inserts or overwrites, `remove` deletes by key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapManager;

fn entries_mut(container: &mut Value) -> CollectionResult<&mut Vec<(Value, Value)>> {
    match container {
        Value::Map(entries) => Ok(entries),
        other => Err(CollectionError::ContainerMismatch {
            expected: CollectionKind::Map,
            actual: other.kind(),
        }),
    }
}

impl CollectionStrategy for MapManager {
    fn add_arity(&self) -> usize {
        2
    }

    fn add(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(2, args)?;
        let entries = entries_mut(container)?;
        let (key, value) = (&args[0], &args[1]);
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.clone(),
            None => entries.push((key.clone(), value.clone())),
        }
        Ok(())
    }

    fn remove(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(1, args)?;
        entries_mut(container)?.retain(|(k, _)| *k != args[0]);
        Ok(())
    }
}
