//! Pagination state
//!
//! `PageState` is the authoritative position of a paginated list. It is owned
//! by whoever renders the list (see [`ListOwner`](crate::services::ListOwner));
//! the window and controls only borrow it.

use serde::Serialize;

use super::{PageControls, PageWindow, PaginationError};

/// Current position within a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// Page currently displayed (1-indexed)
    current_page: u32,
    /// Number of items per page, never zero
    page_size: u32,
    /// Total number of items across all pages
    total_items: u64,
}

impl PageState {
    /// Create a new pagination state
    ///
    /// A negative `total_items` is treated as "not loaded yet" and clamped to 0.
    /// `current_page` is stored as given; the window tolerates out-of-range values.
    ///
    /// # Errors
    /// Returns `PaginationError::InvalidPageSize` when `page_size` is 0.
    pub fn new(current_page: u32, page_size: u32, total_items: i64) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }

        Ok(Self {
            current_page,
            page_size,
            total_items: clamp_total(total_items),
        })
    }

    /// Create a state positioned on the first page of an empty list
    pub fn first_page(page_size: u32) -> Result<Self, PaginationError> {
        Self::new(1, page_size, 0)
    }

    /// Page currently displayed (1-indexed)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of items per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total number of items across all pages
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Total number of pages, 0 for an empty list
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Check whether `page` addresses an existing page
    pub fn contains_page(&self, page: i64) -> bool {
        page >= 1 && page <= i64::from(self.total_pages())
    }

    /// Offset of the first item on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Record a fresh item count after the list was re-fetched
    pub fn set_total_items(&mut self, total_items: i64) {
        self.total_items = clamp_total(total_items);
    }

    /// Move to `page` if it exists
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub fn go_to(&mut self, page: u32) -> bool {
        if !self.contains_page(i64::from(page)) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Page-number window for the current position
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self)
    }

    /// Page-change controls emitting accepted targets to `on_page_change`
    pub fn controls<F>(&self, on_page_change: F) -> PageControls<'_, F>
    where
        F: FnMut(u32),
    {
        PageControls::new(self, on_page_change)
    }
}

fn clamp_total(total_items: i64) -> u64 {
    u64::try_from(total_items).unwrap_or(0)
}
