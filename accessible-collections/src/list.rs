//! Ordered sequence with duplicates.

use crate::{CollectionError, CollectionResult, CollectionStrategy, check_arity};
use accessible_model::CollectionKind;
use accessible_types::Value;

/// List strategy: `add` appends, `remove` deletes the first equal element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListManager;

fn items_mut(container: &mut Value) -> CollectionResult<&mut Vec<Value>> {
    match container {
        Value::List(items) => Ok(items),
        other => Err(CollectionError::ContainerMismatch {
            expected: CollectionKind::List,
            actual: other.kind(),
        }),
    }
}

impl CollectionStrategy for ListManager {
    fn add(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(1, args)?;
        items_mut(container)?.push(args[0].clone());
        Ok(())
    }

    fn remove(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()> {
        check_arity(1, args)?;
        let items = items_mut(container)?;
        if let Some(pos) = items.iter().position(|item| *item == args[0]) {
            items.remove(pos);
        }
        Ok(())
    }
}
