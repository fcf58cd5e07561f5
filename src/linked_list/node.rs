use alloc::boxed::Box;

/// An owning link to the next node. `None` marks the end of the chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// A node in a singly linked list.
///
/// Each node exclusively owns its successor, so a chain can never share a
/// node or form a cycle.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub const fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Get the value stored in the node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the stored value, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    /// Get the next node in the chain
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Get a mutable reference to the next node in the chain
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }
}

impl<T: PartialEq> Node<T> {
    /// Returns `true` if the node holds a value equal to `value`.
    #[inline]
    pub fn has_value(&self, value: &T) -> bool {
        self.value == *value
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}
