//! Association synchronization.
//!
//! After an accepted mutation of an associated property, the inverse change
//! is applied to the linked property of the related object, through that
//! object's own accessors. The reciprocal call is skipped when the related
//! property already reflects the change; together with idempotent
//! collection add/remove this ends every chain after one hop, so no visited
//! set is kept.

use crate::graph::ObjectGraph;
use crate::{AssociationLink, DispatchError, DispatchResult, Reciprocal, RegisteredType};
use accessible_model::PropertyMetadata;
use accessible_types::{ObjectId, Value};
use tracing::{debug, warn};

/// The mutation applied on the origin side.
#[derive(Debug, Clone)]
pub(crate) enum Change {
    /// A single-valued property moved from `old` to `new`.
    Replaced { old: Value, new: Value },
    /// An item entered a collection.
    Added(Value),
    /// An item left a collection.
    Removed(Value),
}

impl ObjectGraph {
    pub(crate) fn synchronize(
        &mut self,
        origin: ObjectId,
        link: &AssociationLink,
        change: Change,
    ) -> DispatchResult<()> {
        debug!(
            object = %origin,
            property = %link.origin_property,
            target = %format!("{}.{}", link.target_type, link.target_property),
            ?change,
            "Synchronizing association"
        );

        let result = match change {
            Change::Replaced { old, new } => {
                if let Some(previous) = old.as_object() {
                    self.unlink(origin, link, previous)?;
                }
                match new.as_object() {
                    Some(next) => self.link(origin, link, next),
                    None => Ok(()),
                }
            }
            Change::Added(item) => match item.as_object() {
                Some(target) => self.link(origin, link, target),
                None => Ok(()),
            },
            Change::Removed(item) => match item.as_object() {
                Some(target) => self.unlink(origin, link, target),
                None => Ok(()),
            },
        };

        if let Err(e) = &result {
            warn!(
                object = %origin,
                property = %link.origin_property,
                error = %e,
                "Reciprocal update failed; origin change kept"
            );
        }
        result
    }

    /// Makes `target`'s reciprocal property reference `origin`.
    fn link(&mut self, origin: ObjectId, link: &AssociationLink, target: ObjectId) -> DispatchResult<()> {
        let me = Value::Ref(origin);
        let current = self.value(target, &link.target_property)?;

        match &link.reciprocal {
            Reciprocal::Collection { add_method, .. } => {
                if current.contains(&me) {
                    return Ok(());
                }
                self.invoke(target, add_method, &[me])?;
            }
            Reciprocal::Scalar { set_method } => {
                if *current == me {
                    return Ok(());
                }
                self.invoke(target, set_method, &[me])?;
            }
        }
        Ok(())
    }

    /// Makes `target`'s reciprocal property stop referencing `origin`.
    fn unlink(&mut self, origin: ObjectId, link: &AssociationLink, target: ObjectId) -> DispatchResult<()> {
        let me = Value::Ref(origin);

        match &link.reciprocal {
            Reciprocal::Collection { remove_method, .. } => {
                // A list may hold the origin more than once; membership is
                // what is mirrored, so every occurrence goes.
                while self.value(target, &link.target_property)?.contains(&me) {
                    self.invoke(target, remove_method, std::slice::from_ref(&me))?;
                }
            }
            Reciprocal::Scalar { set_method } => {
                if *self.value(target, &link.target_property)? != me {
                    return Ok(());
                }
                self.invoke(target, set_method, &[Value::Null])?;
            }
        }
        Ok(())
    }

    /// Checks that `value` can be linked through `link` before anything is
    /// mutated: it must reference an existing object of the target type.
    pub(crate) fn check_link_target(
        &self,
        link: &AssociationLink,
        value: &Value,
        ty: &RegisteredType,
        property: &PropertyMetadata,
    ) -> DispatchResult<()> {
        let id = value.as_object().ok_or_else(|| DispatchError::InvalidValue {
            type_name: ty.name().to_string(),
            property: property.name.clone(),
            value: value.clone(),
        })?;
        let actual = self.type_of(id).ok_or(DispatchError::UnknownObject(id))?;
        if actual != link.target_type {
            return Err(DispatchError::InvalidValue {
                type_name: ty.name().to_string(),
                property: property.name.clone(),
                value: value.clone(),
            });
        }
        Ok(())
    }
}
