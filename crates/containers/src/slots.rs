//! Position-keyed element storage
//!
//! [`Slots`] maps non-negative positions to elements. Appends go to the
//! next free position, explicit writes may land anywhere, and removals leave
//! gaps. Iteration is always in ascending position order.
//!
//! ## Next free position
//!
//! - Append uses the counter and bumps it
//! - An explicit write at `p` raises the counter to at least `p + 1`
//! - Removal never lowers the counter
//! - `retain` rebuilds it as highest surviving position + 1
//!
//! Once `usize::MAX` has been written there is no next free position and
//! appends fail with `Error::InvalidArgument`; explicit writes still work.

use kollect_core::{Error, Result};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Ordered, gap-tolerant element storage
#[derive(Debug, Clone)]
pub struct Slots<T> {
    items: BTreeMap<usize, T>,
    // None once position usize::MAX has been used
    next: Option<usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slots<T> {
    /// Create empty storage
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next: Some(0),
        }
    }

    /// Append at the next free position, returning that position
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the counter is exhausted.
    pub fn push(&mut self, item: T) -> Result<usize> {
        let position = self.next.ok_or_else(|| {
            Error::invalid_argument("no free position left to append at (usize::MAX is in use)")
        })?;
        self.items.insert(position, item);
        self.next = position.checked_add(1);
        Ok(position)
    }

    /// Write at `position`, returning the previous occupant
    pub fn insert(&mut self, position: usize, item: T) -> Option<T> {
        self.next = match (self.next, position.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        self.items.insert(position, item)
    }

    /// Remove the element at `position`, leaving a gap
    pub fn remove(&mut self, position: usize) -> Option<T> {
        self.items.remove(&position)
    }

    /// Element at `position`
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(&position)
    }

    /// Check if `position` is occupied
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.items.contains_key(&position)
    }

    /// Number of occupied positions
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no position is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position the next append will use, `None` when exhausted
    #[inline]
    pub fn next_position(&self) -> Option<usize> {
        self.next
    }

    /// Length of the gap-free run starting at position 0
    pub fn contiguous_prefix_len(&self) -> usize {
        self.items
            .keys()
            .enumerate()
            .take_while(|(expected, position)| expected == *position)
            .count()
    }

    /// Elements in ascending position order
    pub fn values(&self) -> btree_map::Values<'_, usize, T> {
        self.items.values()
    }

    /// `(position, element)` in ascending position order
    pub fn iter(&self) -> btree_map::Iter<'_, usize, T> {
        self.items.iter()
    }

    /// Occupied positions in ascending order
    pub fn positions(&self) -> btree_map::Keys<'_, usize, T> {
        self.items.keys()
    }

    /// Keep only elements for which `keep` returns true; positions are not
    /// renumbered
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|_, item| keep(item));
        self.next = match self.items.keys().next_back() {
            Some(last) => last.checked_add(1),
            None => Some(0),
        };
    }

    /// Replace every element with `f(element)`, keeping positions
    pub fn replace_all<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        let items = std::mem::take(&mut self.items);
        self.items = items.into_iter().map(|(pos, item)| (pos, f(item))).collect();
    }

    /// Transform into storage of another element type, keeping positions
    pub fn map_into<U, F>(self, mut f: F) -> Slots<U>
    where
        F: FnMut(T) -> U,
    {
        Slots {
            items: self.items.into_iter().map(|(pos, item)| (pos, f(item))).collect(),
            next: self.next,
        }
    }

    /// Consume into `(position, element)` in ascending position order
    pub fn into_iter_indexed(self) -> btree_map::IntoIter<usize, T> {
        self.items.into_iter()
    }
}

// Equal when the same positions hold equal elements; the counter is ignored
impl<T: PartialEq> PartialEq for Slots<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// Positions `0..n` in iteration order
impl<T> FromIterator<T> for Slots<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: BTreeMap<usize, T> = iter.into_iter().enumerate().collect();
        let next = Some(items.len());
        Self { items, next }
    }
}
