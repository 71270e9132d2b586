//! Pagination error types

use thiserror::Error;

/// Caller-contract violations detected when building a [`PageState`](super::PageState)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page size of zero cannot partition any list
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(u32),
}
