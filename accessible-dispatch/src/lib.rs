//! Accessor dispatch for Accessible.
//!
//! Objects live in an [`ObjectGraph`] and expose accessors that are never
//! written by hand: `getX`, `isX`, `setX`, `addX`, `removeX`. A call flows
//! through:
//!
//! 1. [`parse_method_name`]: split the name into a [`Verb`](accessible_types::Verb) and a target
//! 2. [`DispatchTable`]: resolve the target to a property and check the verb is granted
//! 3. the constraint validator (`set`) or a collection strategy (`add`/`remove`)
//! 4. association synchronization: mirror the change on the linked property of related objects
//!
//! Dispatch tables and association links are compiled once, when a
//! [`TypeRegistry`] is built, and are immutable afterwards.

mod dispatch;
mod error;
mod graph;
mod method_name;
mod registry;
mod sync;
mod table;

pub use error::{DispatchError, DispatchResult};
pub use graph::{Handle, ObjectGraph};
pub use method_name::{ParsedName, method_name, parse_method_name};
pub use registry::{AssociationLink, Reciprocal, RegisteredType, TypeRegistry};
pub use table::{Accessor, DispatchTable};
