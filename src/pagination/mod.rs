//! Pagination core
//!
//! This module contains the pure pagination logic used by every list screen:
//! - `PageState`: authoritative position of a paginated list
//! - `PageWindow`: bounded window of page numbers with ellipsis markers
//! - `PageControls`: validated page-change requests and previous/next buttons
//!
//! Nothing here performs I/O. Owners hold the state and re-fetch when a
//! page change is accepted.

mod controls;
mod error;
mod state;
mod window;

pub use controls::{validate_page_change, NavControl, PageControls};
pub use error::PaginationError;
pub use state::PageState;
pub use window::{Entries, PageEntry, PageWindow, MAX_VISIBLE_PAGES};
