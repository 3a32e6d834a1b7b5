use std::fmt::{self, Display, Formatter};

/// The only recoverable failure mode in this crate: the backing allocator
/// refused a request, or the request would have grown `logical_size` past
/// [`crate::util::SIZE_MAX`].
///
/// Everything else (popping an empty heap, an out-of-range position passed
/// to `pull_up`/`push_down`) is a contract violation: the library asserts
/// in debug builds and is permitted undefined behavior in release builds,
/// per the crate's error-handling policy, but never a recoverable `Result`.
#[derive(Debug)]
pub struct HeapError {
    kind: HeapErrorKind,
}

#[derive(Debug)]
enum HeapErrorKind {
    AllocationFailure { requested: usize, limit: usize },
}

impl HeapError {
    pub(crate) fn allocation_failure(requested: usize, limit: usize) -> HeapError {
        HeapError { kind: HeapErrorKind::AllocationFailure { requested, limit } }
    }
}

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            HeapErrorKind::AllocationFailure { requested, limit } => write!(
                f,
                "allocation failure: requested size {requested} exceeds the limit of {limit}"
            ),
        }
    }
}

impl std::error::Error for HeapError {}

/// The result type returned by every fallible growth operation.
pub type HeapResult<T> = Result<T, HeapError>;
