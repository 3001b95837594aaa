//! Runtime-typed container
//!
//! [`TypedContainer`] stores [`Value`]s at integer positions and enforces a
//! [`TypeConstraint`] at every validated mutation point: `add`, `add_all`,
//! `set`, and the two-sided operations `chain`, `zip` and `unpair`.
//!
//! ## Ownership
//!
//! A container has exactly one owner. In-place combinators (`map`,
//! `filter`, `chain`) take `&mut self`; [`Clone`] is the only way to obtain an
//! independent duplicate.
//!
//! ## Known invariant gap
//!
//! `map` writes its outputs without validation, so a container may hold
//! values that violate its constraint until `chain`, `zip` or `unpair`
//! re-checks them. See [`TypedContainer::map`].

use crate::kind::ContainerKind;
use crate::slots::Slots;
use kollect_core::{
    AddAllMode, ClassRef, CollectionPolicy, Error, Operation, PrimitiveKind, Result, Side,
    TypeConstraint, Value,
};
use std::collections::btree_map;
use tracing::trace;

/// Ordered, type-constrained element store with indexed access
#[derive(Debug, Clone)]
pub struct TypedContainer {
    kind: ContainerKind,
    constraint: TypeConstraint,
    policy: CollectionPolicy,
    pub(crate) slots: Slots<Value>,
}

impl TypedContainer {
    /// Create an empty generic container with the given constraint
    pub fn new(constraint: TypeConstraint) -> Self {
        Self::with_kind(ContainerKind::Generic, constraint)
    }

    /// Create an empty integer-only container
    pub fn integers() -> Self {
        Self::with_kind(
            ContainerKind::Integer,
            TypeConstraint::Primitive(PrimitiveKind::Integer),
        )
    }

    /// Create an empty string-only container
    pub fn strings() -> Self {
        Self::with_kind(
            ContainerKind::String,
            TypeConstraint::Primitive(PrimitiveKind::String),
        )
    }

    /// Create an empty container for instances of `class`
    pub fn objects(class: &ClassRef) -> Self {
        Self::with_kind(ContainerKind::Object, TypeConstraint::Nominal(class.clone()))
    }

    /// Bulk factory of the generic kind; see [`ContainerKind::from_items`]
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` if an item fails the constraint.
    pub fn from_items<I, V>(items: I, constraint: Option<TypeConstraint>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        ContainerKind::Generic.from_items(items, constraint)
    }

    pub(crate) fn with_kind(kind: ContainerKind, constraint: TypeConstraint) -> Self {
        Self {
            kind,
            constraint,
            policy: CollectionPolicy::default(),
            slots: Slots::new(),
        }
    }

    /// Builder: replace the behaviour policy
    pub fn with_policy(mut self, policy: CollectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Empty container with the same kind, constraint and policy
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            kind: self.kind,
            constraint: self.constraint.clone(),
            policy: self.policy,
            slots: Slots::new(),
        }
    }

    /// The container's constraint (fixed at construction)
    #[inline]
    pub fn constraint(&self) -> &TypeConstraint {
        &self.constraint
    }

    /// The concrete container kind
    #[inline]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// The behaviour policy
    #[inline]
    pub fn policy(&self) -> CollectionPolicy {
        self.policy
    }

    /// `checkType`: would `value` be accepted?
    #[inline]
    pub fn check_type(&self, value: &Value) -> bool {
        self.constraint.check(value)
    }

    pub(crate) fn validate(
        &self,
        value: &Value,
        operation: Operation,
        side: Option<Side>,
    ) -> Result<()> {
        if self.check_type(value) {
            return Ok(());
        }
        trace!(
            %operation,
            expected = %self.constraint,
            found = value.type_name(),
            "rejected value"
        );
        Err(Error::invalid_type(
            operation,
            side,
            &self.constraint,
            value.type_name(),
        ))
    }

    /// Append `value` at the next free position
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` if `value` fails the constraint, or
    /// `Error::InvalidArgument` once position `usize::MAX` is taken; the
    /// container is unchanged either way.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.validate(&value, Operation::Add, None)?;
        self.slots.push(value)?;
        Ok(())
    }

    /// Validate and append every item in order
    ///
    /// Under the default [`AddAllMode::Partial`] policy the first bad item
    /// stops the call and items before it **stay appended**. Under
    /// [`AddAllMode::Atomic`] nothing is appended unless every item passes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` for the first item that fails.
    pub fn add_all<I, V>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.append_validated(items.into_iter().map(Into::into), Operation::AddAll, None)?;
        Ok(self)
    }

    pub(crate) fn append_validated<I>(
        &mut self,
        items: I,
        operation: Operation,
        side: Option<Side>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        match self.policy.add_all {
            AddAllMode::Partial => {
                for value in items {
                    self.validate(&value, operation, side)?;
                    self.slots.push(value)?;
                }
            }
            AddAllMode::Atomic => {
                let staged: Vec<Value> = items.into_iter().collect();
                for value in &staged {
                    self.validate(value, operation, side)?;
                }
                let fits = staged.is_empty()
                    || self
                        .slots
                        .next_position()
                        .map_or(false, |next| next.checked_add(staged.len() - 1).is_some());
                if !fits {
                    return Err(Error::invalid_argument(
                        "not enough free positions left to append every item",
                    ));
                }
                for value in staged {
                    self.slots.push(value)?;
                }
            }
        }
        Ok(())
    }

    /// Indexed write; `None` appends
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` if `value` fails the constraint, or
    /// `Error::InvalidArgument` when appending with no free position left.
    pub fn set(&mut self, position: Option<usize>, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.validate(&value, Operation::Set, None)?;
        match position {
            Some(position) => {
                self.slots.insert(position, value);
            }
            None => {
                self.slots.push(value)?;
            }
        }
        Ok(())
    }

    /// Remove the element at `position`, leaving a gap
    pub fn unset(&mut self, position: usize) -> Option<Value> {
        self.slots.remove(position)
    }

    /// Element at `position`, or `None` if unoccupied
    #[inline]
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.slots.get(position)
    }

    /// Check if `position` is occupied
    #[inline]
    pub fn exists(&self, position: usize) -> bool {
        self.slots.contains(position)
    }

    /// Number of occupied positions
    #[inline]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Alias of [`count`](Self::count)
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no position is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Elements in ascending position order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.slots.values(),
        }
    }

    /// `(position, element)` in ascending position order
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.slots.iter().map(|(position, value)| (*position, value))
    }

    /// Occupied positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.positions().copied()
    }

    /// Copy the elements out, in ascending position order
    pub fn values(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Consume into the elements, in ascending position order
    pub fn into_values(self) -> Vec<Value> {
        self.slots.into_iter_indexed().map(|(_, value)| value).collect()
    }

    /// Elements that currently violate the constraint (only possible after `map`)
    pub fn violations(&self) -> usize {
        self.iter().filter(|value| !self.check_type(value)).count()
    }
}

impl PartialEq for TypedContainer {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.constraint == other.constraint && self.slots == other.slots
    }
}

/// Borrowing iterator over a container's elements
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Values<'a, usize, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a TypedContainer {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
