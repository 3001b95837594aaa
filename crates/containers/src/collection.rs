//! Compile-time typed collection
//!
//! [`Collection<T>`] offers the combinator suite with the element type fixed
//! by the compiler instead of a runtime constraint. Because the type system
//! already guarantees every element is a `T`, nothing here can fail with
//! `InvalidType`, and `map` returns a `Collection<U>` rather than rewriting
//! elements in place.
//!
//! Positions behave as in [`TypedContainer`](crate::TypedContainer): appends
//! use the next free position and removals leave gaps.
//!
//! # Examples
//!
//! ```
//! use kollect_containers::Collection;
//!
//! let numbers: Collection<i64> = (1..=4).collect();
//! let names: Collection<&str> = ["a", "b", "c"].into_iter().collect();
//!
//! let zipped = numbers.zip(&names);
//! assert_eq!(zipped.len(), 3);
//!
//! let (left, right) = zipped.unzip();
//! assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(right.len(), 3);
//! ```

use crate::slots::Slots;
use kollect_core::{Error, Pair, Result};

/// Ordered collection of `T` with integer positions
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    slots: Slots<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { slots: Slots::new() }
    }

    /// Append at the next free position, returning that position
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` once position `usize::MAX` is taken.
    pub fn push(&mut self, item: T) -> Result<usize> {
        self.slots.push(item)
    }

    /// Indexed write; `None` appends. Returns the previous occupant.
    ///
    /// # Errors
    ///
    /// Appending fails as [`push`](Self::push) does; explicit positions never fail.
    pub fn set(&mut self, position: Option<usize>, item: T) -> Result<Option<T>> {
        match position {
            Some(position) => Ok(self.slots.insert(position, item)),
            None => {
                self.slots.push(item)?;
                Ok(None)
            }
        }
    }

    /// Remove the element at `position`, leaving a gap
    pub fn unset(&mut self, position: usize) -> Option<T> {
        self.slots.remove(position)
    }

    /// Element at `position`
    pub fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(position)
    }

    /// Check if `position` is occupied
    pub fn exists(&self, position: usize) -> bool {
        self.slots.contains(position)
    }

    /// Number of occupied positions
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no position is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Elements in ascending position order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.slots.values()
    }

    /// Occupied positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.positions().copied()
    }

    /// Call `f` with every element
    pub fn each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
        self
    }

    /// Transform every element into a `U`, keeping positions
    pub fn map<U, F>(self, f: F) -> Collection<U>
    where
        F: FnMut(T) -> U,
    {
        Collection {
            slots: self.slots.map_into(f),
        }
    }

    /// Transform every element in place, keeping positions
    pub fn map_in_place<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        self.slots.replace_all(f);
        self
    }

    /// Keep only matching elements; positions are not renumbered
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&T) -> bool,
    {
        self.slots.retain(|item| predicate(item));
        self
    }

    /// Append every element of `other`, in order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the free positions run out;
    /// elements appended before that stay.
    pub fn chain(&mut self, other: &Collection<T>) -> Result<&mut Self>
    where
        T: Clone,
    {
        for item in other.iter() {
            self.slots.push(item.clone())?;
        }
        Ok(self)
    }

    /// Split into `(matching, rest)`, preserving relative order
    pub fn partition<F>(&self, mut predicate: F) -> (Collection<T>, Collection<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|item| predicate(item));
        (matching.into_iter().collect(), rest.into_iter().collect())
    }

    /// Left fold with the first element as the initial accumulator
    pub fn reduce<F>(&self, mut f: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut items = self.iter();
        let first = items.next()?.clone();
        Some(items.fold(first, |acc, item| f(acc, item)))
    }

    /// Left fold from an explicit seed
    pub fn fold<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(seed, f)
    }

    /// True if every element matches; true when empty
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(item))
    }

    /// True if some element matches; false when empty
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    /// First matching element
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    /// Split into consecutive groups of at most `size` elements
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `size` is 0.
    pub fn chunk(&self, size: usize, preserve_keys: bool) -> Result<Vec<Collection<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(Error::invalid_argument("chunk size must be greater than zero"));
        }
        let entries: Vec<(&usize, &T)> = self.slots.iter().collect();
        Ok(entries
            .chunks(size)
            .map(|group| {
                if !preserve_keys {
                    return group
                        .iter()
                        .map(|(_, item)| (*item).clone())
                        .collect::<Collection<T>>();
                }
                let mut chunk = Collection::new();
                for (position, item) in group {
                    chunk.slots.insert(**position, (*item).clone());
                }
                chunk
            })
            .collect())
    }

    /// Pair with `other` up to the first position missing on either side
    pub fn zip<U>(&self, other: &Collection<U>) -> Collection<Pair<T, U>>
    where
        T: Clone,
        U: Clone,
    {
        (0..)
            .map_while(|position| Some((self.get(position)?, other.get(position)?)))
            .map(|(left, right)| Pair::new(left.clone(), right.clone()))
            .collect()
    }
}

impl<L, R> Collection<Pair<L, R>> {
    /// Split pairs back into a left and a right collection
    pub fn unzip(self) -> (Collection<L>, Collection<R>) {
        let (left, right): (Vec<L>, Vec<R>) = self
            .slots
            .into_iter_indexed()
            .map(|(_, pair)| pair.into_parts())
            .unzip();
        (left.into_iter().collect(), right.into_iter().collect())
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
