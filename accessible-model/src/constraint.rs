use crate::PropertyMetadata;
use accessible_types::{ObjectId, Value, ValueKind};
use serde::{Deserialize, Serialize};

/// Type and nullability rule attached to a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueConstraint {
    /// Required value kind. `None` accepts any kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueKind>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// For `ref` values, the type the referenced object must have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ValueConstraint {
    fn of_kind(kind: ValueKind) -> Self {
        Self {
            kind: Some(kind),
            nullable: true,
            target_type: None,
        }
    }

    /// Accepts anything, including null.
    pub fn any() -> Self {
        Self {
            kind: None,
            nullable: true,
            target_type: None,
        }
    }

    pub fn bool() -> Self {
        Self::of_kind(ValueKind::Bool)
    }

    pub fn int() -> Self {
        Self::of_kind(ValueKind::Int)
    }

    /// Floats; integers are accepted as well.
    pub fn float() -> Self {
        Self::of_kind(ValueKind::Float)
    }

    pub fn text() -> Self {
        Self::of_kind(ValueKind::Text)
    }

    /// A reference to an object of `target_type`.
    pub fn reference(target_type: &str) -> Self {
        Self {
            kind: Some(ValueKind::Ref),
            nullable: true,
            target_type: Some(target_type.into()),
        }
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Resolves the type of objects referenced by values under validation.
pub trait ObjectTypes {
    fn type_of(&self, id: ObjectId) -> Option<&str>;
}

/// Accept/reject predicate for a prospective property value.
///
/// The dispatch engine calls this before every scalar write and reacts only
/// to the boolean result. Implementations must not have side effects.
pub trait ConstraintValidator: Send + Sync {
    fn accepts(&self, property: &PropertyMetadata, value: &Value, objects: &dyn ObjectTypes) -> bool;
}

/// Validator enforcing each property's [`ValueConstraint`].
///
/// Properties without a constraint accept any value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeConstraintValidator;

impl ConstraintValidator for TypeConstraintValidator {
    fn accepts(&self, property: &PropertyMetadata, value: &Value, objects: &dyn ObjectTypes) -> bool {
        let Some(constraint) = &property.constraint else {
            return true;
        };

        if value.is_null() {
            return constraint.nullable;
        }

        let kind_ok = match constraint.kind {
            None => true,
            Some(ValueKind::Float) => matches!(value, Value::Float(_) | Value::Int(_)),
            Some(kind) => value.kind() == kind,
        };
        if !kind_ok {
            return false;
        }

        match (&constraint.target_type, value.as_object()) {
            (Some(expected), Some(id)) => objects.type_of(id) == Some(expected.as_str()),
            _ => true,
        }
    }
}
