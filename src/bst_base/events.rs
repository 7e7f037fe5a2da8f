use bitmask_enum::bitmask;

/// The mutations a subscriber can register interest in.
#[bitmask(u8)]
pub enum EventKind {
    /// A new node was created for an element not previously present.
    Inserted = 1,
    /// An equal element was already present; the stored element was
    /// overwritten in place and no node was created.
    Replaced = 2,
    /// A node was detached and its element handed out of the tree.
    Removed = 4,
}

/// Notification handed to subscribers once a mutation has fully committed.
pub struct TreeEvent<'a, T> {
    pub kind: EventKind,
    pub value: &'a T,
}

impl<T> TreeEvent<'_, T> {
    /// Short human-readable account of what happened.
    pub fn description(&self) -> &'static str {
        if self.kind.contains(EventKind::Inserted) {
            "value inserted"
        } else if self.kind.contains(EventKind::Replaced) {
            "existing value replaced"
        } else if self.kind.contains(EventKind::Removed) {
            "value removed"
        } else {
            "no change"
        }
    }
}

pub(crate) type Hook<T> = Box<dyn FnMut(&TreeEvent<'_, T>)>;

pub(crate) struct Subscription<T> {
    pub interest: EventKind,
    pub hook: Hook<T>,
}

/// Runs every hook whose interest mask covers `kind`, in registration
/// order. Hooks only observe the element; the mutation they are told
/// about has already committed and cannot be failed from here.
pub(crate) fn notify<T>(subscribers: &mut [Subscription<T>], kind: EventKind, value: &T) {
    if subscribers.is_empty() {
        return;
    }

    let event = TreeEvent { kind, value };
    for subscription in subscribers.iter_mut() {
        if subscription.interest.contains(kind) {
            (subscription.hook)(&event);
        }
    }
}
