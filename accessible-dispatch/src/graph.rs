//! The object graph: an arena of instances addressed by [`ObjectId`].
//!
//! Objects reference each other by id (`Value::Ref`), so a bidirectional
//! association is two ids pointing at each other rather than two owning
//! pointers.

use crate::{DispatchError, DispatchResult, RegisteredType, TypeRegistry};
use accessible_model::ObjectTypes;
use accessible_types::{ObjectId, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// State of one object: property name to current value.
#[derive(Debug, Clone)]
pub(crate) struct Instance {
    pub(crate) type_name: String,
    pub(crate) state: HashMap<String, Value>,
}

impl Instance {
    fn new(ty: &RegisteredType) -> Self {
        let state = ty
            .schema
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.initial_value()))
            .collect();
        Self {
            type_name: ty.schema.name.clone(),
            state,
        }
    }
}

/// Instances of registered types, mutated only through dispatch.
///
/// Single-writer: every mutating method takes `&mut self`, and a call runs
/// to completion (including reciprocal calls on related objects) before it
/// returns.
pub struct ObjectGraph {
    pub(crate) registry: Arc<TypeRegistry>,
    pub(crate) objects: HashMap<ObjectId, Instance>,
}

impl ObjectGraph {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            objects: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Creates an instance with default scalars and empty collections.
    pub fn create(&mut self, type_name: &str) -> DispatchResult<ObjectId> {
        let ty = self
            .registry
            .get(type_name)
            .ok_or_else(|| DispatchError::UnknownType(type_name.to_string()))?;
        let id = ObjectId::new();
        self.objects.insert(id, Instance::new(ty));
        debug!(object = %id, type_name, "Created object");
        Ok(id)
    }

    /// Creates an instance and binds `args`, in order, to the type's
    /// constructor properties.
    ///
    /// Arguments are written through the same validate-then-write path as
    /// `set` (including association synchronization) but without the access
    /// check, so constructor properties need not grant `set`. Every argument
    /// is checked before the object is inserted: a rejected argument leaves
    /// the graph unchanged.
    pub fn construct(&mut self, type_name: &str, args: &[Value]) -> DispatchResult<ObjectId> {
        let registry = Arc::clone(&self.registry);
        let ty = registry
            .get(type_name)
            .ok_or_else(|| DispatchError::UnknownType(type_name.to_string()))?;

        let expected = ty.schema.constructor.len();
        if args.len() != expected {
            return Err(DispatchError::ArityMismatch {
                method: format!("{type_name}::new"),
                expected,
                actual: args.len(),
            });
        }

        let id = ObjectId::new();
        let bindings: Vec<_> = ty
            .schema
            .constructor
            .iter()
            .zip(args)
            .filter_map(|(name, arg)| ty.property(name).map(|p| (p, arg)))
            .collect();

        for (property, arg) in &bindings {
            self.check_write(ty, property, arg)?;
        }

        self.objects.insert(id, Instance::new(ty));
        for (property, arg) in bindings {
            self.write_property(id, ty, property, arg.clone())?;
        }
        debug!(object = %id, type_name, "Constructed object");
        Ok(id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The type name of an object.
    pub fn type_of(&self, id: ObjectId) -> Option<&str> {
        self.objects.get(&id).map(|o| o.type_name.as_str())
    }

    /// Reads a property without going through an accessor.
    ///
    /// Intended for inspection; reads cannot break any invariant, but callers
    /// normally use `get`/`is` accessors.
    pub fn peek(&self, id: ObjectId, property: &str) -> Option<&Value> {
        self.objects.get(&id)?.state.get(property)
    }

    /// A handle for chained calls on one object.
    pub fn handle(&mut self, id: ObjectId) -> DispatchResult<Handle<'_>> {
        if !self.contains(id) {
            return Err(DispatchError::UnknownObject(id));
        }
        Ok(Handle { graph: self, id })
    }

    pub(crate) fn instance(&self, id: ObjectId) -> DispatchResult<&Instance> {
        self.objects.get(&id).ok_or(DispatchError::UnknownObject(id))
    }

    pub(crate) fn value(&self, id: ObjectId, property: &str) -> DispatchResult<&Value> {
        self.instance(id)?
            .state
            .get(property)
            .ok_or_else(|| DispatchError::UnknownMethod(property.to_string()))
    }

    pub(crate) fn value_mut(&mut self, id: ObjectId, property: &str) -> DispatchResult<&mut Value> {
        self.objects
            .get_mut(&id)
            .ok_or(DispatchError::UnknownObject(id))?
            .state
            .get_mut(property)
            .ok_or_else(|| DispatchError::UnknownMethod(property.to_string()))
    }
}

impl ObjectTypes for ObjectGraph {
    fn type_of(&self, id: ObjectId) -> Option<&str> {
        ObjectGraph::type_of(self, id)
    }
}

/// One object of a graph, for chained accessor calls.
///
/// ```ignore
/// graph.handle(post)?.call("setTitle", &["Hello".into()])?.call("addTag", &[tag.into()])?;
/// ```
pub struct Handle<'g> {
    graph: &'g mut ObjectGraph,
    id: ObjectId,
}

impl Handle<'_> {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Invokes a mutator and returns the handle for chaining.
    pub fn call(&mut self, method: &str, args: &[Value]) -> DispatchResult<&mut Self> {
        self.graph.invoke(self.id, method, args)?;
        Ok(self)
    }

    /// Invokes a getter and returns its value.
    pub fn value(&mut self, method: &str) -> DispatchResult<Value> {
        self.graph.invoke(self.id, method, &[])
    }
}
