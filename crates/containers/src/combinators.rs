//! Functional combinators on [`TypedContainer`]
//!
//! | Operation | Receiver | Result |
//! |-----------|----------|--------|
//! | `each` | unchanged | receiver |
//! | `map` | replaced in place, **not re-validated** | receiver |
//! | `filter` | shrunk in place, positions kept | receiver |
//! | `chain` | appended in place | receiver |
//! | `partition` | unchanged | two new containers |
//! | `reduce` / `fold` | unchanged | accumulator |
//! | `all` / `any` / `find` | unchanged | short-circuit answer |
//! | `chunk` | unchanged | new containers |
//!
//! Every operation visits occupied positions in ascending order.

use crate::container::TypedContainer;
use kollect_core::{ChunkConstraint, Error, Operation, Result, Side, Value};
use tracing::{debug, warn};

impl TypedContainer {
    /// Call `f` with every element, for side effects only
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Value),
    {
        for value in self.iter() {
            f(value);
        }
        self
    }

    /// Replace every element with `f(element)`, in place, keeping positions
    ///
    /// The outputs are **not** checked against the constraint. A mapping that
    /// changes the element type leaves the container holding values it would
    /// otherwise reject; `chain`, `zip` and `unpair` re-check and fail with
    /// `InvalidType` when they meet such values. Violations are logged at
    /// `warn` level.
    pub fn map<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(Value) -> Value,
    {
        self.slots.replace_all(f);
        let violations = self.violations();
        if violations > 0 {
            warn!(
                violations,
                constraint = %self.constraint(),
                "map produced values that violate the container constraint"
            );
        }
        self
    }

    /// Keep only elements for which `predicate` holds
    ///
    /// Positions are not renumbered: removed elements leave gaps.
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&Value) -> bool,
    {
        self.slots.retain(|value| predicate(value));
        self
    }

    /// Append every element of `other`, in order
    ///
    /// The constraints must be exactly equal; a subtype constraint is not
    /// enough. Each element is re-validated before it is appended, following
    /// the container's bulk append policy. `other` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` with side `Right` when the constraints
    /// differ or an element of `other` fails the check.
    pub fn chain(&mut self, other: &TypedContainer) -> Result<&mut Self> {
        if other.constraint() != self.constraint() {
            return Err(Error::invalid_type(
                Operation::Chain,
                Some(Side::Right),
                self.constraint(),
                other.constraint().to_string(),
            ));
        }
        self.append_validated(other.iter().cloned(), Operation::Chain, Some(Side::Right))?;
        Ok(self)
    }

    /// Split into `(matching, rest)`, both with this container's kind,
    /// constraint and policy
    ///
    /// Elements are copied as they are; relative order is preserved. The
    /// receiver is unchanged.
    pub fn partition<F>(&self, mut predicate: F) -> (TypedContainer, TypedContainer)
    where
        F: FnMut(&Value) -> bool,
    {
        let (accepted, rejected): (Vec<Value>, Vec<Value>) =
            self.iter().cloned().partition(|value| predicate(value));
        let mut matching = self.empty_like();
        matching.slots = accepted.into_iter().collect();
        let mut rest = self.empty_like();
        rest.slots = rejected.into_iter().collect();
        (matching, rest)
    }

    /// Left fold with the first element as the initial accumulator
    ///
    /// Returns `None` for an empty container.
    pub fn reduce<F>(&self, mut f: F) -> Option<Value>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut values = self.iter();
        let first = values.next()?.clone();
        Some(values.fold(first, |acc, value| f(acc, value)))
    }

    /// Left fold from an explicit seed
    pub fn fold<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, &Value) -> A,
    {
        self.iter().fold(seed, f)
    }

    /// True if every element matches; true for an empty container
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value) -> bool,
    {
        self.iter().all(|value| predicate(value))
    }

    /// True if some element matches; false for an empty container
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value) -> bool,
    {
        self.iter().any(|value| predicate(value))
    }

    /// First element (by position) that matches
    pub fn find<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Split into consecutive groups of at most `size` elements
    ///
    /// Under the default [`ChunkConstraint::Inherit`] policy every group
    /// carries this container's constraint, and with `preserve_keys` each
    /// group keeps the source positions of its elements; otherwise positions
    /// restart at 0. Under [`ChunkConstraint::Factory`] every group is built
    /// by the kind's bulk factory: its constraint is re-inferred and may
    /// differ, and positions always restart at 0 (`preserve_keys` is ignored).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `size` is 0. Under the factory
    /// policy, factory errors are returned as they are.
    pub fn chunk(&self, size: usize, preserve_keys: bool) -> Result<Vec<TypedContainer>> {
        if size == 0 {
            return Err(Error::invalid_argument("chunk size must be greater than zero"));
        }
        let entries: Vec<(usize, &Value)> = self.iter_indexed().collect();
        let chunks = entries
            .chunks(size)
            .map(|group| self.build_chunk(group, preserve_keys))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            size,
            chunks = chunks.len(),
            policy = ?self.policy().chunk_constraint,
            "chunked container"
        );
        Ok(chunks)
    }

    fn build_chunk(&self, group: &[(usize, &Value)], preserve_keys: bool) -> Result<TypedContainer> {
        match self.policy().chunk_constraint {
            ChunkConstraint::Inherit => {
                let mut chunk = self.empty_like();
                if preserve_keys {
                    for (position, value) in group {
                        chunk.slots.insert(*position, (*value).clone());
                    }
                } else {
                    chunk.slots = group.iter().map(|(_, value)| (*value).clone()).collect();
                }
                Ok(chunk)
            }
            ChunkConstraint::Factory => {
                let values = group.iter().map(|(_, value)| (*value).clone());
                let chunk = self.kind().from_items(values, None)?;
                Ok(chunk.with_policy(self.policy()))
            }
        }
    }
}
