use super::node::{Link, Node};

/// A borrowing walk over the nodes of a chain, head first.
pub(crate) struct NodeIter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> NodeIter<'a, T> {
    /// Creates a walk starting at the node behind `head`.
    pub(crate) fn new(head: &'a Link<T>) -> Self {
        Self {
            current: head.as_deref(),
        }
    }
}

impl<'a, T> Iterator for NodeIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|&current| {
            self.current = current.next();
        })
    }
}
