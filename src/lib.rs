//! Binary search tree containers with a pluggable ordering.
//!
//! The core type is [`bst_base::bst::Bst`]: an unbalanced binary search
//! tree whose every placement and search decision is delegated to a
//! comparator fixed at construction. For every node, all elements in its
//! left subtree compare below the node's element and all elements in its
//! right subtree compare above it; an in-order walk therefore yields the
//! elements in ascending comparator order. Pre-order, in-order and
//! post-order walks are produced lazily by [`bst_base::iter::Iter`].
//!
//! Element types with a natural total order can use the
//! [`bst_set::BstSet`] front instead, which hides the comparator
//! parameter:
//!
//! ```
//! use bstree::bst_set::BstSet;
//!
//! let mut set = BstSet::new();
//! set.insert(5);
//! set.insert(3);
//! set.insert(8);
//!
//! assert!(set.contains(&3));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
//! ```
//!
//! The tree is plain single-threaded in-memory state: no balancing is
//! performed, shape is a function of insertion order alone, and callers
//! needing concurrent mutation must wrap the whole container in their
//! own lock.

pub mod bst_base;
pub mod bst_set;
