//! Type registration: schemas validated and compiled into dispatch tables
//! and association links.

use crate::method_name::method_name;
use crate::{DispatchResult, DispatchTable};
use accessible_model::{
    ConstraintValidator, PropertyMetadata, SchemaError, SchemaFile, TypeConstraintValidator,
    TypeSchema,
};
use accessible_types::Verb;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A registered type: its schema and compiled accessors.
#[derive(Debug, Clone)]
pub struct RegisteredType {
    pub schema: TypeSchema,
    pub table: DispatchTable,
}

impl RegisteredType {
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.schema.get(name)
    }
}

/// How the synchronizer reaches the other side of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reciprocal {
    /// The related property is single-valued: link with `set(self)`,
    /// unlink with `set(null)`.
    Scalar { set_method: String },
    /// The related property is a list or set: link with `add(self)`,
    /// unlink with `remove(self)`.
    Collection {
        add_method: String,
        remove_method: String,
    },
}

/// One side of an association, as seen from `origin_type.origin_property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationLink {
    pub origin_type: String,
    pub origin_property: String,
    pub target_type: String,
    pub target_property: String,
    pub reciprocal: Reciprocal,
}

/// Immutable registry of object types.
///
/// Built once from a set of schemas. Cross-type rules are checked here:
/// every association must point at an existing property that associates
/// back, and that property must grant the accessors the synchronizer calls.
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>,
    associations: HashMap<(String, String), AssociationLink>,
    validator: Arc<dyn ConstraintValidator>,
}

impl TypeRegistry {
    /// Registers `schemas` with the default [`TypeConstraintValidator`].
    pub fn new(schemas: Vec<TypeSchema>) -> DispatchResult<Self> {
        Self::with_validator(schemas, Arc::new(TypeConstraintValidator))
    }

    /// Registers the types of a loaded schema file.
    pub fn from_schema_file(file: SchemaFile) -> DispatchResult<Self> {
        Self::new(file.into_schemas())
    }

    /// Registers `schemas` with a custom constraint validator.
    pub fn with_validator(
        schemas: Vec<TypeSchema>,
        validator: Arc<dyn ConstraintValidator>,
    ) -> DispatchResult<Self> {
        let mut types = HashMap::new();
        for schema in schemas {
            schema.validate()?;
            if types.contains_key(&schema.name) {
                return Err(SchemaError::DuplicateType(schema.name).into());
            }
            let table = DispatchTable::build(&schema);
            info!(type_name = %schema.name, accessors = table.len(), "Registered type");
            types.insert(schema.name.clone(), RegisteredType { schema, table });
        }

        let associations = link_associations(&types)?;

        Ok(Self {
            types,
            associations,
            validator,
        })
    }

    pub fn get(&self, type_name: &str) -> Option<&RegisteredType> {
        self.types.get(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The association declared on `type_name.property`, if any.
    pub fn association(&self, type_name: &str, property: &str) -> Option<&AssociationLink> {
        self.associations
            .get(&(type_name.to_string(), property.to_string()))
    }

    pub fn validator(&self) -> &dyn ConstraintValidator {
        self.validator.as_ref()
    }
}

fn link_associations(
    types: &HashMap<String, RegisteredType>,
) -> Result<HashMap<(String, String), AssociationLink>, SchemaError> {
    let mut links = HashMap::new();

    for ty in types.values() {
        for property in &ty.schema.properties {
            let Some(association) = &property.association else {
                continue;
            };
            let target_label = format!("{}.{}", association.target_type, association.target_property);

            let target = types
                .get(&association.target_type)
                .and_then(|t| t.property(&association.target_property))
                .ok_or_else(|| SchemaError::UnknownAssociationTarget {
                    type_name: ty.schema.name.clone(),
                    property: property.name.clone(),
                    target: target_label.clone(),
                })?;

            let mirrored = target.association.as_ref().is_some_and(|back| {
                back.target_type == ty.schema.name && back.target_property == property.name
            });
            if !mirrored {
                return Err(SchemaError::AsymmetricAssociation {
                    type_name: ty.schema.name.clone(),
                    property: property.name.clone(),
                    target: target_label,
                });
            }

            let reciprocal = reciprocal_for(target).map_err(|verb| {
                SchemaError::MissingReciprocalAccess {
                    type_name: ty.schema.name.clone(),
                    property: property.name.clone(),
                    target: target_label.clone(),
                    verb: verb.to_string(),
                }
            })?;

            links.insert(
                (ty.schema.name.clone(), property.name.clone()),
                AssociationLink {
                    origin_type: ty.schema.name.clone(),
                    origin_property: property.name.clone(),
                    target_type: association.target_type.clone(),
                    target_property: association.target_property.clone(),
                    reciprocal,
                },
            );
        }
    }

    Ok(links)
}

/// The accessors used to reach `target`, or the first missing verb.
fn reciprocal_for(target: &PropertyMetadata) -> Result<Reciprocal, Verb> {
    match target.item_name() {
        Some(item) => {
            for verb in [Verb::Add, Verb::Remove] {
                if !target.allows(verb) {
                    return Err(verb);
                }
            }
            Ok(Reciprocal::Collection {
                add_method: method_name(Verb::Add, item),
                remove_method: method_name(Verb::Remove, item),
            })
        }
        None if target.allows(Verb::Set) => Ok(Reciprocal::Scalar {
            set_method: method_name(Verb::Set, &target.name),
        }),
        None => Err(Verb::Set),
    }
}
