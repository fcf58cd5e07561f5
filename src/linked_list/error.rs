use thiserror::Error;

/// Errors raised by [`LinkedList`](super::list::LinkedList) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A positional operation was given an index outside its valid range.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A constructor was given an argument it cannot build a list from.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
