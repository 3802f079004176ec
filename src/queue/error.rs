use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by [`Queue`](crate::Queue) operations. A failing operation
/// leaves the queue untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The payload copy of a new element could not be allocated.
    #[error("failed to allocate the element payload: {0}")]
    Alloc(#[from] TryReserveError),
    /// The operation needs at least one element.
    #[error("the queue is empty")]
    Empty,
}
