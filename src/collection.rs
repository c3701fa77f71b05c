//! Append-ordered collection capability.
//!
//! Result lists, failure lists, and parameter binding sets all share one
//! container contract: insert at the end, count, walk in insertion order, and
//! find by linear predicate scan. `Collection` is that contract, backed by a
//! `Vec`. Owners construct it once and hand out references; nothing reorders
//! or removes entries mid-run.

use serde::Serialize;

/// A generic append-ordered container.
///
/// # Examples
///
/// ```rust
/// use vigil::collection::Collection;
/// let mut c = Collection::new();
/// c.insert("a");
/// c.insert("b");
/// assert_eq!(c.count(), 2);
/// assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item, preserving insertion order.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates items in insertion order, each exactly once.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Linear scan in insertion order; returns the first match.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn find_mut(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| predicate(&**item))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
