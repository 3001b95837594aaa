//! Immutable two-value tuple produced by zip

use serde::{Deserialize, Serialize};

/// One value from a left source and one from a right source
///
/// A pair has no identity beyond its two values and cannot be modified once
/// built; use [`Pair::into_parts`] to take it apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<L = crate::value::Value, R = crate::value::Value> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    /// Create a pair
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The value taken from the left source
    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The value taken from the right source
    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Consume the pair and return both values
    #[inline]
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Pair::new(left, right)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_parts()
    }
}
