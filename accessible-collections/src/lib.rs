//! Collection strategies for Accessible.
//!
//! Each collection property is mutated through one of three strategies:
//!
//! - [`ListManager`]: ordered, duplicates allowed
//! - [`SetManager`]: insertion-ordered, unique by equality
//! - [`MapManager`]: key/value entries, one entry per key
//!
//! All strategies share two rules: adding an element that is already present
//! (set) or removing one that is absent (all kinds) is a no-op, never an error.
//! Association synchronization relies on this to terminate.

mod error;
mod list;
mod map;
mod set;

pub use error::{CollectionError, CollectionResult};
pub use list::ListManager;
pub use map::MapManager;
pub use set::SetManager;

use accessible_model::CollectionKind;
use accessible_types::Value;

/// Mutation strategy for one container discipline.
pub trait CollectionStrategy: Send + Sync {
    /// Number of arguments `add` takes.
    fn add_arity(&self) -> usize {
        1
    }

    /// Number of arguments `remove` takes.
    fn remove_arity(&self) -> usize {
        1
    }

    /// Adds to `container`. `args` must have exactly `add_arity()` elements.
    fn add(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()>;

    /// Removes from `container`. `args` must have exactly `remove_arity()` elements.
    fn remove(&self, container: &mut Value, args: &[Value]) -> CollectionResult<()>;
}

/// Returns the strategy for `kind`.
pub fn strategy_for(kind: CollectionKind) -> &'static dyn CollectionStrategy {
    match kind {
        CollectionKind::List => &ListManager,
        CollectionKind::Set => &SetManager,
        CollectionKind::Map => &MapManager,
    }
}

pub(crate) fn check_arity(expected: usize, args: &[Value]) -> CollectionResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CollectionError::ArityMismatch {
            expected,
            actual: args.len(),
        })
    }
}
