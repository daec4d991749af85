//! Widget errors
//!
//! All carousel errors are local and non-fatal: at most a transition
//! silently does not occur.

use rondo_dom::{DomError, NodeId};

/// Carousel errors
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// Paging or random start requested while zero pages are present
    #[error("carousel has no pages")]
    NoPages,

    /// A page index beyond the live page collection
    #[error("page index {index} out of range ({len} pages)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Bind target is not an element in the tree
    #[error("container {0:?} is not an element in the tree")]
    InvalidContainer(NodeId),

    /// The underlying tree refused an operation
    #[error(transparent)]
    Dom(#[from] DomError),
}
