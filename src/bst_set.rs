use std::fmt;

use crate::bst_base::{
    iter::{Iter, TraversalOrder},
    DefaultBst,
};

/// Set-flavored front over [`DefaultBst`] for element types with a
/// natural total order, hiding the comparator parameter.
pub struct BstSet<T> {
    tree: DefaultBst<T>,
}

impl<T: Ord + fmt::Debug> BstSet<T> {
    pub fn new() -> Self {
        Self {
            tree: DefaultBst::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    pub fn insert(&mut self, value: T) {
        self.tree.insert(value);
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value)
    }

    /// Smallest element, or `None` when the set is empty.
    pub fn first(&self) -> Option<&T> {
        self.tree.minimum().ok()
    }

    /// Largest element, or `None` when the set is empty.
    pub fn last(&self) -> Option<&T> {
        self.tree.maximum().ok()
    }

    /// Ascending walk over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Lazy walk in the requested order.
    pub fn traverse(&self, order: TraversalOrder) -> Iter<'_, T> {
        self.tree.traverse(order)
    }
}

impl<T: Ord + fmt::Debug> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> Extend<T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + fmt::Debug> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: Ord + fmt::Debug> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BstSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
