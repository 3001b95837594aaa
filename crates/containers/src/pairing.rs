//! Zip / unpair
//!
//! `zip` combines two containers into a [`PairedContainer`]: a container of
//! [`Pair`] values plus the [`Provenance`] of both sources. `unpair` uses the
//! provenance to rebuild two containers of the original kinds and
//! constraints.
//!
//! ## Traversal
//!
//! Under the default [`ZipMode::ContiguousPrefix`] policy zip probes
//! positions `0, 1, 2, ...` and stops at the first position missing on
//! either side. A gap left by `filter` or `unset` therefore truncates the
//! result even when later positions are occupied on both sides. The
//! [`ZipMode::Positional`] policy instead pairs the n-th occupied element of
//! each side.
//!
//! ## Re-validation
//!
//! Both zip and unpair re-check every value against its source constraint:
//! an earlier `map` may have stored values the constraint rejects. For each
//! position zip checks the right value first, unpair the left one.
//!
//! ## Round trip
//!
//! For gap-free sources untouched by constraint-breaking `map`s,
//! `zip(a, b).unpair()` returns containers equal to `a` and `b` truncated to
//! the shorter length.

use crate::container::TypedContainer;
use crate::kind::ContainerKind;
use kollect_core::{
    CollectionPolicy, Error, Operation, Pair, Result, Side, TypeConstraint, Value, ZipMode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind and constraint of one zip source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// Concrete container kind
    pub kind: ContainerKind,
    /// Constraint the source was built with
    pub constraint: TypeConstraint,
}

impl Origin {
    /// Create an origin
    pub fn new(kind: ContainerKind, constraint: TypeConstraint) -> Self {
        Self { kind, constraint }
    }

    /// Origin describing `container`
    pub fn of(container: &TypedContainer) -> Self {
        Self::new(container.kind(), container.constraint().clone())
    }

    /// Empty container of this origin's kind and constraint
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the kind rejects the constraint.
    pub fn construct(&self) -> Result<TypedContainer> {
        self.kind.construct(self.constraint.clone())
    }
}

/// Provenance of both zip sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// The receiver of `zip`
    pub left: Origin,
    /// The argument of `zip`
    pub right: Origin,
}

/// Pairs produced by `zip`, with the provenance needed to unpair them
///
/// The pairs live in a [`TypedContainer`] constrained to the built-in `Pair`
/// class, so only pairs can be written through [`pairs_mut`](Self::pairs_mut).
#[derive(Debug, Clone, PartialEq)]
pub struct PairedContainer {
    pairs: TypedContainer,
    provenance: Provenance,
}

impl PairedContainer {
    fn new(provenance: Provenance, policy: CollectionPolicy) -> Self {
        Self {
            pairs: TypedContainer::new(TypeConstraint::pair()).with_policy(policy),
            provenance,
        }
    }

    /// Provenance of both sources
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Kind and constraint of the left source
    pub fn left_origin(&self) -> &Origin {
        &self.provenance.left
    }

    /// Kind and constraint of the right source
    pub fn right_origin(&self) -> &Origin {
        &self.provenance.right
    }

    /// Override the recorded left origin
    pub fn set_left_origin(&mut self, origin: Origin) -> &mut Self {
        self.provenance.left = origin;
        self
    }

    /// Override the recorded right origin
    pub fn set_right_origin(&mut self, origin: Origin) -> &mut Self {
        self.provenance.right = origin;
        self
    }

    /// The pair container
    pub fn pairs(&self) -> &TypedContainer {
        &self.pairs
    }

    /// Mutable access to the pair container
    pub fn pairs_mut(&mut self) -> &mut TypedContainer {
        &mut self.pairs
    }

    /// Pair at `position`
    pub fn get(&self, position: usize) -> Option<&Pair> {
        self.pairs.get(position).and_then(Value::as_pair)
    }

    /// Number of pairs
    pub fn count(&self) -> usize {
        self.pairs.count()
    }

    /// Check if there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in ascending position order
    ///
    /// Non-pair values can only appear through `pairs_mut().map(..)` and are
    /// skipped here; `unpair` reports them.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> + '_ {
        self.pairs.iter().filter_map(Value::as_pair)
    }

    /// Rebuild the left and right containers from the pairs
    ///
    /// Each side is constructed from its recorded origin; then, pair by pair
    /// in ascending position order, the left value is checked against the left
    /// constraint and the right value against the right constraint before both
    /// are appended. `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if an origin cannot be constructed, or
    /// `Error::InvalidType` naming the failing side.
    pub fn unpair(&self) -> Result<(TypedContainer, TypedContainer)> {
        let policy = self.pairs.policy();
        let mut left = self.provenance.left.construct()?.with_policy(policy);
        let mut right = self.provenance.right.construct()?.with_policy(policy);

        for value in self.pairs.iter() {
            let pair = value.as_pair().ok_or_else(|| {
                Error::invalid_type(
                    Operation::Unpair,
                    None,
                    &TypeConstraint::pair(),
                    value.type_name(),
                )
            })?;
            left.validate(pair.left(), Operation::Unpair, Some(Side::Left))?;
            right.validate(pair.right(), Operation::Unpair, Some(Side::Right))?;
            left.slots.push(pair.left().clone())?;
            right.slots.push(pair.right().clone())?;
        }

        debug!(
            pairs = self.pairs.count(),
            left = %self.provenance.left.kind,
            right = %self.provenance.right.kind,
            "unpaired container"
        );
        Ok((left, right))
    }
}

impl<'a> IntoIterator for &'a PairedContainer {
    type Item = &'a Value;
    type IntoIter = crate::container::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl TypedContainer {
    /// Pair this container (left) with `other` (right)
    ///
    /// See the module docs for the traversal rule. Every scanned value is
    /// re-validated against its own container's constraint. The result
    /// records both sources' kinds and constraints and uses this
    /// container's policy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidType` naming the side whose value fails its
    /// constraint.
    pub fn zip(&self, other: &TypedContainer) -> Result<PairedContainer> {
        let provenance = Provenance {
            left: Origin::of(self),
            right: Origin::of(other),
        };
        let mut paired = PairedContainer::new(provenance, self.policy());

        let candidates: Box<dyn Iterator<Item = (&Value, &Value)> + '_> = match self.policy().zip {
            ZipMode::ContiguousPrefix => {
                let shared = self
                    .slots
                    .contiguous_prefix_len()
                    .min(other.slots.contiguous_prefix_len());
                Box::new(self.iter().zip(other.iter()).take(shared))
            }
            ZipMode::Positional => Box::new(self.iter().zip(other.iter())),
        };

        for (left, right) in candidates {
            other.validate(right, Operation::Zip, Some(Side::Right))?;
            self.validate(left, Operation::Zip, Some(Side::Left))?;
            paired
                .pairs
                .slots
                .push(Value::from(Pair::new(left.clone(), right.clone())))?;
        }

        if paired.count() < self.count().min(other.count()) {
            debug!(
                paired = paired.count(),
                left = self.count(),
                right = other.count(),
                "zip stopped at the first gap"
            );
        }
        Ok(paired)
    }
}
