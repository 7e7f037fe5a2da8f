pub mod bst;
pub mod bst_traits;
pub mod error;
pub mod events;
pub mod iter;
mod node;
pub mod tree_stats;

use std::{cmp::Ordering, marker::PhantomData};

use self::{bst::Bst, bst_traits::Comparator};

/// Comparator backed by the element type's own `Ord`.
#[derive(Clone, Debug)]
pub struct NaturalOrder<T> {
    _t: PhantomData<T>,
}

impl<T> NaturalOrder<T> {
    pub fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Comparator<T> for NaturalOrder<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Tree over the element type's natural ordering.
pub type DefaultBst<T> = Bst<T, NaturalOrder<T>>;
