//! Type constraints
//!
//! A [`TypeConstraint`] is the rule an element must satisfy to be stored in a
//! container. It is fixed when the container is built.
//!
//! | Constraint | Accepts |
//! |------------|---------|
//! | `Any` | every value |
//! | `Primitive(kind)` | values of exactly that primitive kind |
//! | `Nominal(class)` | instances of the class, its subclasses, or implementors |
//!
//! Equality is exact: `Nominal(Square) != Nominal(Polygon)` even though every
//! square is a polygon.

use crate::class::{ClassDef, ClassRef};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive value kinds a constraint can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// `Value::Bool`
    Bool,
    /// `Value::Int`
    Integer,
    /// `Value::Float`
    Float,
    /// `Value::String`
    String,
    /// `Value::Bytes`
    Bytes,
}

impl PrimitiveKind {
    /// All primitive kinds (for iteration)
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Integer,
        PrimitiveKind::Float,
        PrimitiveKind::String,
        PrimitiveKind::Bytes,
    ];

    /// Canonical type name
    pub const fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::String => "string",
            PrimitiveKind::Bytes => "bytes",
        }
    }

    /// Parse a primitive type name; `integer` is accepted as an alias of `int`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(PrimitiveKind::Bool),
            "int" | "integer" => Some(PrimitiveKind::Integer),
            "float" => Some(PrimitiveKind::Float),
            "string" => Some(PrimitiveKind::String),
            "bytes" => Some(PrimitiveKind::Bytes),
            _ => None,
        }
    }

    /// Check if a value is of this kind
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (PrimitiveKind::Bool, Value::Bool(_))
                | (PrimitiveKind::Integer, Value::Int(_))
                | (PrimitiveKind::Float, Value::Float(_))
                | (PrimitiveKind::String, Value::String(_))
                | (PrimitiveKind::Bytes, Value::Bytes(_))
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rule elements of a container must satisfy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeConstraint {
    /// No restriction
    #[default]
    Any,
    /// Exactly one primitive kind
    Primitive(PrimitiveKind),
    /// Instances of a class or interface
    Nominal(ClassRef),
}

impl TypeConstraint {
    /// Constraint satisfied by pair values only
    pub fn pair() -> Self {
        TypeConstraint::Nominal(ClassDef::pair())
    }

    /// `checkType`: does `value` satisfy this constraint?
    pub fn check(&self, value: &Value) -> bool {
        match self {
            TypeConstraint::Any => true,
            TypeConstraint::Primitive(kind) => kind.matches(value),
            TypeConstraint::Nominal(class) => match value {
                Value::Instance(instance) => instance.is_a(class),
                Value::Pair(_) => **class == *ClassDef::pair(),
                _ => false,
            },
        }
    }

    /// Check if this is the `Any` constraint
    pub fn is_any(&self) -> bool {
        matches!(self, TypeConstraint::Any)
    }

    /// The class named by a `Nominal` constraint
    pub fn class(&self) -> Option<&ClassRef> {
        match self {
            TypeConstraint::Nominal(class) => Some(class),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for TypeConstraint {
    fn from(kind: PrimitiveKind) -> Self {
        TypeConstraint::Primitive(kind)
    }
}

impl From<ClassRef> for TypeConstraint {
    fn from(class: ClassRef) -> Self {
        TypeConstraint::Nominal(class)
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::Any => f.write_str("any"),
            TypeConstraint::Primitive(kind) => write!(f, "{}", kind),
            TypeConstraint::Nominal(class) => write!(f, "{}", class),
        }
    }
}
