//! Concrete container kinds
//!
//! The kind is the descriptor a specialised constructor selects. It decides
//! which constraints a container may be built with and how the bulk factory
//! derives a constraint when none is given. Pair provenance records it so
//! `unpair` can rebuild the same kind.
//!
//! | Kind | Constraint | Factory without constraint |
//! |------|------------|----------------------------|
//! | Generic | any | class of first item if it is an instance, else `Any` |
//! | Integer | `int` | `int` |
//! | String | `string` | `string` |
//! | Object | nominal only | class of first item (required) |

use crate::container::TypedContainer;
use kollect_core::{Error, PrimitiveKind, Result, TypeConstraint, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The concrete kind of a [`TypedContainer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Accepts whichever constraint it is built with
    Generic,
    /// Fixed to `Primitive(Integer)`
    Integer,
    /// Fixed to `Primitive(String)`
    String,
    /// Requires a nominal constraint
    Object,
}

impl ContainerKind {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ContainerKind::Generic => "GenericContainer",
            ContainerKind::Integer => "IntegerContainer",
            ContainerKind::String => "StringContainer",
            ContainerKind::Object => "ObjectContainer",
        }
    }

    /// The constraint a kind always uses, if it has one
    pub fn fixed_constraint(&self) -> Option<TypeConstraint> {
        match self {
            ContainerKind::Integer => Some(TypeConstraint::Primitive(PrimitiveKind::Integer)),
            ContainerKind::String => Some(TypeConstraint::Primitive(PrimitiveKind::String)),
            ContainerKind::Generic | ContainerKind::Object => None,
        }
    }

    /// Build an empty container of this kind
    ///
    /// Integer and String kinds ignore `constraint` and use their own.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if an Object container is asked for a
    /// non-nominal constraint.
    pub fn construct(&self, constraint: TypeConstraint) -> Result<TypedContainer> {
        let constraint = match (self, self.fixed_constraint()) {
            (_, Some(fixed)) => fixed,
            (ContainerKind::Object, None) => match constraint {
                TypeConstraint::Nominal(_) => constraint,
                other => {
                    return Err(Error::construction(format!(
                        "{} needs a class or interface, got '{}'",
                        self.name(),
                        other
                    )))
                }
            },
            (_, None) => constraint,
        };
        Ok(TypedContainer::with_kind(*self, constraint))
    }

    /// Bulk factory: build a container of this kind holding `items`
    ///
    /// With an explicit constraint this is [`construct`](Self::construct)
    /// followed by `add_all`. Without one, the constraint is derived as the
    /// table in the module docs describes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` when an Object container cannot infer a
    /// class, or `Error::InvalidType` when an item fails the constraint.
    pub fn from_items<I, V>(
        &self,
        items: I,
        constraint: Option<TypeConstraint>,
    ) -> Result<TypedContainer>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        let constraint = match constraint {
            Some(constraint) => constraint,
            None => self.infer_constraint(items.first())?,
        };
        let mut container = self.construct(constraint)?;
        container.add_all(items)?;
        Ok(container)
    }

    fn infer_constraint(&self, first: Option<&Value>) -> Result<TypeConstraint> {
        if let Some(fixed) = self.fixed_constraint() {
            return Ok(fixed);
        }
        let inferred = match first {
            Some(Value::Instance(instance)) => {
                Some(TypeConstraint::Nominal(instance.class().clone()))
            }
            _ => None,
        };
        match (self, inferred) {
            (_, Some(constraint)) => {
                debug!(kind = self.name(), %constraint, "inferred constraint from first item");
                Ok(constraint)
            }
            (ContainerKind::Object, None) => Err(Error::construction(format!(
                "{} cannot infer a class from {}",
                self.name(),
                first.map_or("an empty item list", |value| value.type_name())
            ))),
            (_, None) => Ok(TypeConstraint::Any),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
