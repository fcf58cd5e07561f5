use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use log::{debug, trace};

use super::{
    error::ListError,
    iter::NodeIter,
    node::{Link, Node},
};

/// An owning singly linked list.
///
/// The list owns its head node and every node owns its successor. `length`
/// always equals the number of nodes reachable from `head`.
pub struct LinkedList<T> {
    head: Link<T>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            length: 0,
        }
    }

    /// Builds a chain in iteration order, first value at the head.
    fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut head: Link<T> = None;
        let mut length = 0;
        let mut tail = &mut head;
        for value in values {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
            length += 1;
        }
        LinkedList { head, length }
    }

    /// Get the head of the linked list
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Get a mutable reference to the head of the linked list
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Get the number of nodes in the linked list
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if a value can be inserted at `index`, i.e. `index <= len`.
    pub fn is_valid_index(&self, index: usize) -> bool {
        index <= self.length
    }

    /// Returns `true` if `index` addresses an existing node, i.e. `index < len`.
    pub fn is_navigable_index(&self, index: usize) -> bool {
        index < self.length
    }

    /// Push a new value to the front of the list. The previous head becomes
    /// the second node.
    pub fn add(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.length += 1;
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get_node_at_index(&self, index: usize) -> Result<&Node<T>, ListError> {
        self.check_navigable(index)?;
        self.iter()
            .nth(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the node at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get_node_at_index_mut(&mut self, index: usize) -> Result<&mut Node<T>, ListError> {
        self.check_navigable(index)?;
        let err = self.out_of_range(index);
        self.link_at_mut(index)
            .and_then(|link| link.as_deref_mut())
            .ok_or(err)
    }

    /// Inserts `value` so that it becomes the element at `index`, shifting the
    /// following elements back by one. `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > len`. The list is left
    /// untouched in that case.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if !self.is_valid_index(index) {
            debug!(
                "rejecting insert at index {} into list of length {}",
                index, self.length
            );
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            self.add(value);
            return Ok(());
        }

        let previous = self.get_node_at_index_mut(index - 1)?;
        let mut node = Box::new(Node::new(value));
        node.next = previous.next.take();
        previous.next = Some(node);
        self.length += 1;
        trace!("spliced node at index {}, length now {}", index, self.length);
        Ok(())
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn delete_by_index(&mut self, index: usize) -> Result<T, ListError> {
        self.check_navigable(index)?;
        let err = self.out_of_range(index);
        let value = self
            .link_at_mut(index)
            .and_then(Self::unlink)
            .ok_or(err)?;
        self.length -= 1;
        trace!("unlinked node at index {}, length now {}", index, self.length);
        Ok(value)
    }

    /// Overwrites the value stored at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn update_node(&mut self, value: T, index: usize) -> Result<T, ListError> {
        self.get_node_at_index_mut(index)
            .map(|node| node.set_value(value))
    }

    fn iter(&self) -> NodeIter<'_, T> {
        NodeIter::new(&self.head)
    }

    /// Get the link that owns the node at `index`: the head link for `0`,
    /// otherwise the `next` link of the node at `index - 1`.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Detach the node owned by `link`, reattaching its successor in its place.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node.value)
    }

    fn check_navigable(&self, index: usize) -> Result<(), ListError> {
        if self.is_navigable_index(index) {
            Ok(())
        } else {
            debug!(
                "rejecting index {} for list of length {}",
                index, self.length
            );
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.length,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// Builds a list holding a copy of `values`, in order. The first element
    /// becomes the head.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if `values` is empty.
    pub fn from_slice(values: &[T]) -> Result<Self, ListError> {
        if values.is_empty() {
            debug!("refusing to build a list from an empty slice");
            return Err(ListError::InvalidArgument(
                "cannot build a list from an empty sequence",
            ));
        }
        Ok(Self::from_values(values.iter().cloned()))
    }

    /// Copies the values into a `Vec` in chain order, head first. An empty
    /// list yields an empty `Vec`.
    pub fn to_list(&self) -> Vec<T> {
        self.iter().map(|node| node.value.clone()).collect()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first node holding `value`.
    pub fn get_index(&self, value: &T) -> Option<usize> {
        self.iter().position(|node| node.has_value(value))
    }

    /// Removes the first node holding `value`. Returns whether a node was
    /// removed; an empty list simply returns `false`.
    pub fn delete_by_value(&mut self, value: &T) -> bool {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !node.has_value(value)) {
            let Some(node) = link else {
                return false;
            };
            link = &mut node.next;
        }

        match Self::unlink(link) {
            Some(_) => {
                self.length -= 1;
                trace!("unlinked matching node, length now {}", self.length);
                true
            }
            None => false,
        }
    }
}

impl<T> TryFrom<Vec<T>> for LinkedList<T> {
    type Error = ListError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            debug!("refusing to build a list from an empty vec");
            return Err(ListError::InvalidArgument(
                "cannot build a list from an empty sequence",
            ));
        }
        Ok(Self::from_values(values))
    }
}

impl<T> From<LinkedList<T>> for Vec<T> {
    fn from(mut list: LinkedList<T>) -> Self {
        let mut values = Vec::with_capacity(list.length);
        let mut current = list.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            values.push(node.value);
        }
        values
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        Self::from_values(self.iter().map(|node| node.value.clone()))
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.length == other.length
            && self
                .iter()
                .zip(other.iter())
                .all(|(lhs, rhs)| lhs.value == rhs.value)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, node) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| &node.value))
            .finish()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
