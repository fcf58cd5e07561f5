//! # Singly Linked List
//!
//! An owning, singly linked list. Every node is boxed and exclusively owned by
//! its predecessor, and the head node is owned by the list itself. Dropping the
//! list releases the whole chain.
//!
//! ## Core Components
//!
//! - [`node::Node`]: a cell holding one value and the link to its successor.
//! - [`list::LinkedList`]: the head link, the running length and all traversal
//!   and mutation algorithms.
//! - [`error::ListError`]: errors raised by positional operations and by the
//!   array constructor.
//!
//! ## Indices
//!
//! Indices are zero based and counted from the head. Insertion accepts any
//! index in `0..=len`, while reads, updates and deletions accept `0..len`.
//!
//! # Examples
//!
//! ```
//! use linked_collections::linked_list::{list::LinkedList, error::ListError};
//!
//! let mut list = LinkedList::from_slice(&[1, 2, 3]).unwrap();
//! list.add(0);
//! list.insert(9, 2).unwrap();
//!
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.to_list(), vec![0, 1, 9, 2, 3]);
//! assert_eq!(list.get_index(&9), Some(2));
//!
//! assert!(list.delete_by_value(&9));
//! assert_eq!(list.delete_by_index(0), Ok(0));
//! assert_eq!(
//!     list.update_node(7, 3),
//!     Err(ListError::IndexOutOfRange { index: 3, len: 3 })
//! );
//!
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! ```

pub mod error;
pub mod list;
pub mod node;

mod iter;

#[cfg(test)]
mod tests;
