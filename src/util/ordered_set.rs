//! Insertion-ordered hash set.
//!
//! [`OrderedSet`] backs every posting list in the inverted index. Membership
//! tests go through an `AHashSet`, while iteration follows the order in which
//! elements were first inserted, so search results come back in a stable,
//! reproducible order instead of hash order.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use ahash::AHashSet;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A deduplicated collection that remembers insertion order.
///
/// Equality is set equality: two sets holding the same elements compare equal
/// regardless of the order they were inserted in.
///
/// # Examples
///
/// ```
/// use scour::util::ordered_set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert("b"));
/// assert!(set.insert("a"));
/// assert!(!set.insert("b"));
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
/// assert!(set.contains("a"));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    members: AHashSet<T>,
}

impl<T> OrderedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        OrderedSet {
            items: Vec::new(),
            members: AHashSet::new(),
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    /// Create an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedSet {
            items: Vec::with_capacity(capacity),
            members: AHashSet::with_capacity(capacity),
        }
    }

    /// Add a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.members.contains(&value) {
            return false;
        }
        self.members.insert(value.clone());
        self.items.push(value);
        true
    }

    /// Check whether a value is in the set.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(value)
    }

    /// Copy the elements into a vector, in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|item| other.members.contains(item))
    }
}

impl<T: Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
