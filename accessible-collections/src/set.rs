//! Unique elements, kept in insertion order.

use crate::{CollectionError, CollectionResult, CollectionStrategy, check_arity};
use accessible_model::CollectionKind;
use accessible_types::Value;

/// Set strategy: `add` inserts unless an equal element exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetManager;

fn items_mut(container: &mut Value) -> CollectionResult<&mut Vec<Value>> {
    match container {
        Value::Set(items) => Ok(items),
        other => Err(CollectionError::ContainerMismatch {
            expected: CollectionKind::Set,
            actual: other.kind(),
        }),
    }
}

impl CollectionStrategy for SetManager {
    fn add(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(1, args)?;
        let items = items_mut(container)?;
        if !items.contains(&args[0]) {
            items.push(args[0].clone());
        }
        Ok(())
    }

    fn remove(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(1, args)?;
        items_mut(container)?.retain(|item| *item != args[0]);
        Ok(())
    }
}
