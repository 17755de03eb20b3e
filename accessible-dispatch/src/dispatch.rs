//! The dispatch orchestrator: parse → resolve → validate or delegate →
//! synchronize → return.

use crate::graph::ObjectGraph;
use crate::method_name::method_name;
use crate::sync::Change;
use crate::{DispatchError, DispatchResult, RegisteredType, parse_method_name};
use accessible_collections::strategy_for;
use accessible_model::{CollectionKind, PropertyMetadata};
use accessible_types::{ObjectId, Value, Verb};
use std::sync::Arc;
use tracing::debug;

impl ObjectGraph {
    /// Invokes an accessor on an object.
    ///
    /// Getters return the property's current value (containers by value).
    /// Mutators return the receiver as `Value::Ref(id)`.
    ///
    /// Arguments: none for `get`/`is`; one for `set` and for `add`/`remove`
    /// on lists and sets; `(key, value)` for map `add`, `key` for map `remove`.
    pub fn invoke(&mut self, id: ObjectId, method: &str, args: &[Value]) -> DispatchResult<Value> {
        let registry = Arc::clone(&self.registry);
        let type_name = &self.instance(id)?.type_name;
        let ty = registry
            .get(type_name)
            .ok_or_else(|| DispatchError::UnknownType(type_name.clone()))?;

        let call = parse_method_name(method)?;
        let accessor = ty.table.resolve(&call, method)?;
        if args.len() != accessor.arity {
            return Err(DispatchError::ArityMismatch {
                method: method.to_string(),
                expected: accessor.arity,
                actual: args.len(),
            });
        }
        let property = ty
            .property(&accessor.property)
            .ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))?;

        debug!(object = %id, method, "Dispatching accessor");

        match accessor.verb {
            Verb::Get | Verb::Is => Ok(self.value(id, &property.name)?.clone()),
            Verb::Set => {
                self.check_write(ty, property, &args[0])?;
                self.write_property(id, ty, property, args[0].clone())?;
                Ok(Value::Ref(id))
            }
            Verb::Add | Verb::Remove => {
                self.mutate_collection(id, ty, property, accessor.verb, args)?;
                Ok(Value::Ref(id))
            }
        }
    }

    /// Checks a prospective `set` without mutating anything.
    pub(crate) fn check_write(
        &self,
        ty: &RegisteredType,
        property: &PropertyMetadata,
        value: &Value,
    ) -> DispatchResult<()> {
        let invalid = || DispatchError::InvalidValue {
            type_name: ty.name().to_string(),
            property: property.name.clone(),
            value: value.clone(),
        };

        let link = self.registry.association(ty.name(), &property.name);
        match (property.collection_kind(), link) {
            (Some(_), Some(link)) => {
                let items = value.items().ok_or_else(invalid)?;
                for item in items {
                    self.check_link_target(link, item, ty, property)?;
                }
            }
            (Some(kind), None) => {
                let shape_ok = match kind {
                    CollectionKind::Map => kind.holds(value),
                    CollectionKind::List | CollectionKind::Set => value.items().is_some(),
                };
                if !shape_ok || !self.registry.validator().accepts(property, value, self) {
                    return Err(invalid());
                }
            }
            (None, link) => {
                if !self.registry.validator().accepts(property, value, self) {
                    return Err(invalid());
                }
                if let Some(link) = link {
                    if !value.is_null() {
                        self.check_link_target(link, value, ty, property)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Writes a value already accepted by [`check_write`](Self::check_write).
    pub(crate) fn write_property(
        &mut self,
        id: ObjectId,
        ty: &RegisteredType,
        property: &PropertyMetadata,
        value: Value,
    ) -> DispatchResult<()> {
        let registry = Arc::clone(&self.registry);
        let link = registry.association(ty.name(), &property.name);

        match (property.collection.as_ref(), link) {
            // Replacing an associated collection goes item by item through the
            // property's own accessors, so each step synchronizes.
            (Some(collection), Some(_)) => {
                let item_name = collection.item_name_or(&property.name);
                let remove = method_name(Verb::Remove, item_name);
                let add = method_name(Verb::Add, item_name);

                let existing = self
                    .value(id, &property.name)?
                    .items()
                    .map(<[Value]>::to_vec)
                    .unwrap_or_default();
                for item in existing {
                    self.invoke(id, &remove, &[item])?;
                }
                for item in value.items().map(<[Value]>::to_vec).unwrap_or_default() {
                    self.invoke(id, &add, &[item])?;
                }
                Ok(())
            }
            (Some(collection), None) => {
                let rebuilt = rebuild(collection.kind, &value)?;
                *self.value_mut(id, &property.name)? = rebuilt;
                Ok(())
            }
            (None, link) => {
                let slot = self.value_mut(id, &property.name)?;
                if *slot == value {
                    debug!(object = %id, property = %property.name, "Value unchanged");
                    return Ok(());
                }
                let old = std::mem::replace(slot, value.clone());
                match link {
                    Some(link) => self.synchronize(id, link, Change::Replaced { old, new: value }),
                    None => Ok(()),
                }
            }
        }
    }

    fn mutate_collection(
        &mut self,
        id: ObjectId,
        ty: &RegisteredType,
        property: &PropertyMetadata,
        verb: Verb,
        args: &[Value],
    ) -> DispatchResult<()> {
        let kind = property
            .collection_kind()
            .ok_or_else(|| DispatchError::UnknownMethod(method_name(verb, &property.name)))?;
        let strategy = strategy_for(kind);
        let registry = Arc::clone(&self.registry);
        let link = registry.association(ty.name(), &property.name);

        if let (Some(link), Verb::Add) = (link, verb) {
            self.check_link_target(link, &args[0], ty, property)?;
        }

        let container = self.value_mut(id, &property.name)?;
        let was_present = container.contains(&args[0]);
        match verb {
            Verb::Add => strategy.add(container, args)?,
            _ => strategy.remove(container, args)?,
        }
        let still_present = container.contains(&args[0]);

        let Some(link) = link else {
            return Ok(());
        };
        // Membership is what the association mirrors: only a change in
        // membership is propagated.
        match verb {
            Verb::Add if !was_present => self.synchronize(id, link, Change::Added(args[0].clone())),
            Verb::Remove if was_present && !still_present => {
                self.synchronize(id, link, Change::Removed(args[0].clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Normalizes a replacement container to the property's kind, dropping
/// duplicate set elements and repeated map keys (last write wins).
fn rebuild(kind: CollectionKind, value: &Value) -> DispatchResult<Value> {
    let strategy = strategy_for(kind);
    let mut container = kind.empty();
    match value {
        Value::Map(entries) => {
            for (k, v) in entries {
                strategy.add(&mut container, &[k.clone(), v.clone()])?;
            }
        }
        other => {
            for item in other.items().unwrap_or_default() {
                strategy.add(&mut container, std::slice::from_ref(item))?;
            }
        }
    }
    Ok(container)
}
