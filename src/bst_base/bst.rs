use std::{cmp::Ordering, fmt, mem};

use super::{
    bst_traits::Comparator,
    error::TreeError,
    events::{notify, EventKind, Subscription, TreeEvent},
    iter::{Iter, TraversalOrder},
    node::{Link, Node},
    tree_stats::TreeStats,
    NaturalOrder,
};

/// An unbalanced binary search tree.
///
/// The comparator fixed at construction governs every placement and
/// search decision; the shape of the tree is a function of insertion
/// order alone. Child links are exclusive-ownership slots, so subtrees
/// move by ownership transfer and the structure can hold no cycles and
/// no shared nodes.
///
/// Not safe for concurrent mutation: callers needing that must wrap the
/// whole container in their own mutual exclusion.
pub struct Bst<T, C> {
    root: Link<T>,
    stats: TreeStats,
    comparator: C,
    subscribers: Vec<Subscription<T>>,
}

/// Construction
impl<T, C: Comparator<T>> Bst<T, C> {
    /// Builds an empty tree governed by the supplied ordering policy.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            stats: TreeStats::new(),
            comparator,
            subscribers: Vec::new(),
        }
    }
}

impl<T: Ord> Bst<T, NaturalOrder<T>> {
    /// Builds an empty tree over the element type's own `Ord`.
    ///
    /// Types without a usable total order (say `f64`) do not satisfy the
    /// bound and must come in through [`Bst::with_comparator`] instead;
    /// the requirement is checked at compile time.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder::new())
    }
}

impl<T: Ord> Default for Bst<T, NaturalOrder<T>> {
    fn default() -> Self {
        Self::new()
    }
}

/// Access functions to the element count
impl<T, C> Bst<T, C> {
    pub fn len(&self) -> usize {
        self.stats.size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }
}

/// Search and extremes
impl<T, C: Comparator<T>> Bst<T, C> {
    /// Whether an element comparing equal to `target` is stored.
    ///
    /// Walks the comparator-guided path from the root; cost is
    /// proportional to the path length, with no balance guarantee.
    pub fn contains(&self, target: &T) -> bool {
        self.get(target).is_some()
    }

    /// The stored element comparing equal to `target`, if any.
    ///
    /// Useful when the comparator inspects only part of the element and
    /// the caller wants the rest of what is actually stored.
    pub fn get(&self, target: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match self.comparator.compare(target, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Smallest element under the tree's ordering.
    pub fn minimum(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Largest element under the tree's ordering.
    pub fn maximum(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }
}

/// Traversal
impl<T, C> Bst<T, C> {
    /// Lazy walk over every element in the requested order.
    pub fn traverse(&self, order: TraversalOrder) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), order)
    }

    /// In-order walk; elements come out in ascending comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }
}

impl<'a, T, C> IntoIterator for &'a Bst<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Subscription
impl<T, C> Bst<T, C> {
    /// Registers a hook run synchronously after each committed mutation
    /// covered by `interest`, in registration order.
    ///
    /// Hooks observe the affected element and a short description; they
    /// cannot fail or roll back the mutation they are told about.
    pub fn subscribe<F>(&mut self, interest: EventKind, hook: F)
    where
        F: FnMut(&TreeEvent<'_, T>) + 'static,
    {
        self.subscribers.push(Subscription {
            interest,
            hook: Box::new(hook),
        });
    }
}

/// Insertion
impl<T: fmt::Debug, C: Comparator<T>> Bst<T, C> {
    /// Places `value` in the tree.
    ///
    /// A value comparing equal to a stored element overwrites it in
    /// place: the node keeps its position, no node is created and the
    /// element count does not change. Otherwise the descent ends at an
    /// empty child slot, where exactly one node is created and the count
    /// grows by exactly one for the whole operation.
    pub fn insert(&mut self, value: T) {
        log::debug!("Bst::insert({:?}) on tree of size {}", value, self.len());

        let (created, stored) = Self::insert_into(&mut self.root, value, &self.comparator);

        let kind = if created {
            self.stats.size += 1;
            self.stats.created += 1;
            EventKind::Inserted
        } else {
            self.stats.replaced += 1;
            EventKind::Replaced
        };

        notify(&mut self.subscribers, kind, stored);
    }

    /// Descends to the slot for `value`, creating at most one node.
    /// Reports whether a node was created and where the value now lives.
    fn insert_into<'a>(link: &'a mut Link<T>, value: T, comparator: &C) -> (bool, &'a T) {
        match link {
            None => {
                let node = link.insert(Box::new(Node::new(value)));
                (true, &node.value)
            }
            Some(node) => match comparator.compare(&value, &node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value, comparator),
                Ordering::Greater => Self::insert_into(&mut node.right, value, comparator),
                Ordering::Equal => {
                    node.value = value;
                    (false, &node.value)
                }
            },
        }
    }
}

/// Removal
impl<T: fmt::Debug, C: Comparator<T>> Bst<T, C> {
    /// Detaches the one node comparing equal to `target`, if any.
    ///
    /// Reports whether *this call* removed something; whether the tree
    /// ends up empty afterwards plays no part in the answer. A miss
    /// leaves the tree structurally untouched.
    pub fn remove(&mut self, target: &T) -> bool {
        log::debug!("Bst::remove({:?}) on tree of size {}", target, self.len());

        let removed = match Self::remove_from(&mut self.root, target, &self.comparator) {
            Some(value) => value,
            None => {
                log::debug!("Bst::remove found no node equal to {:?}", target);
                return false;
            }
        };

        self.stats.size -= 1;
        self.stats.removed += 1;
        notify(&mut self.subscribers, EventKind::Removed, &removed);
        true
    }

    fn remove_from(link: &mut Link<T>, target: &T, comparator: &C) -> Option<T> {
        let ordering = comparator.compare(target, &link.as_deref()?.value);
        match ordering {
            Ordering::Less => Self::remove_from(&mut link.as_deref_mut()?.left, target, comparator),
            Ordering::Greater => {
                Self::remove_from(&mut link.as_deref_mut()?.right, target, comparator)
            }
            Ordering::Equal => Self::splice_out(link),
        }
    }

    /// Removes the node at `link` itself. Zero- and one-child nodes are
    /// replaced by their child (or nothing); a two-child node trades
    /// elements with its in-order successor, which then unlinks as a
    /// node with at most a right child.
    fn splice_out(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.value),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(node.value)
            }
            (Some(left), Some(right)) => {
                let mut right: Link<T> = Some(right);
                let successor = Self::detach_min(&mut right)?;
                let Node {
                    value: successor_value,
                    ..
                } = *successor;

                let removed = mem::replace(&mut node.value, successor_value);
                node.left = Some(left);
                node.right = right;
                *link = Some(node);
                Some(removed)
            }
        }
    }

    /// Unlinks and returns the leftmost node of the subtree at `link`,
    /// promoting its right child into the vacated slot.
    fn detach_min(link: &mut Link<T>) -> Option<Box<Node<T>>> {
        match link {
            None => None,
            Some(node) if node.left.is_some() => Self::detach_min(&mut node.left),
            Some(_) => {
                let mut min = link.take()?;
                *link = min.right.take();
                Some(min)
            }
        }
    }
}

/// Bulk teardown
impl<T, C> Bst<T, C> {
    /// Drops every node and zeroes the size. Subscriptions survive, and
    /// no per-node events fire; this is a bulk reset, not a sequence of
    /// removals.
    ///
    /// Nodes are drained onto an explicit worklist so freeing a
    /// degenerate chain cannot exhaust the call stack.
    pub fn clear(&mut self) {
        let drained = self.stats.size;

        let mut worklist = Vec::new();
        worklist.extend(self.root.take());
        while let Some(mut node) = worklist.pop() {
            worklist.extend(node.left.take());
            worklist.extend(node.right.take());
        }

        self.stats.size = 0;
        self.stats.removed += drained;
    }
}

impl<T, C> Drop for Bst<T, C> {
    fn drop(&mut self) {
        self.clear();

        debug_assert!(self.stats.size == 0);
    }
}

/// Display
impl<T: fmt::Debug, C> fmt::Debug for Bst<T, C> {
    /// Structure dump: one node per line, children indented beneath
    /// their parent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => write!(f, "Bst(empty)"),
            Some(root) => Self::fmt_node(f, root, 0),
        }
    }
}

impl<T: fmt::Debug, C> Bst<T, C> {
    fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node<T>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(f, "{:?}", node.value)?;

        for child in [node.left.as_deref(), node.right.as_deref()]
            .into_iter()
            .flatten()
        {
            Self::fmt_node(f, child, depth + 1)?;
        }

        Ok(())
    }
}
