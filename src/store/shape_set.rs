//! Insertion-ordered set of shapes with value deduplication

use std::slice::Iter;

/// Ordered collection that ignores values it already holds
///
/// Order matters for deletion tie-breaks, so this keeps a plain vector
/// and scans for duplicates on insert. Slots hold a handful of shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSet<T> {
    items: Vec<T>,
}

impl<T> Default for ShapeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShapeSet<T> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of stored shapes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test whether the set holds nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shapes in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Remove the shape at a position, `None` when out of range
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

impl<T: PartialEq> ShapeSet<T> {
    /// Append a shape unless an equal one is present
    ///
    /// Returns whether the shape was added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Test whether an equal shape is present
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of the first equal shape
    pub fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Remove the first equal shape, returning whether one was found
    pub fn remove_value(&mut self, value: &T) -> bool {
        self.position(value)
            .and_then(|index| self.remove(index))
            .is_some()
    }
}

impl<'a, T> IntoIterator for &'a ShapeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
