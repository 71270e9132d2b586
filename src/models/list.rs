//! List query and result types
//!
//! This module provides:
//! - `ListParams`: page request sent by a list owner to its data source
//! - `PagedResult`: one page of items plus the total count, as returned by a fetch

use serde::{Deserialize, Serialize};

use crate::pagination::PageState;

/// Upper bound for `per_page` when none is configured
pub const DEFAULT_MAX_PER_PAGE: u32 = 100;

/// Pagination parameters for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl ListParams {
    /// Create new pagination parameters
    pub fn new(page: u32, per_page: u32) -> Self {
        Self::bounded(page, per_page, DEFAULT_MAX_PER_PAGE)
    }

    /// Create pagination parameters with a custom `per_page` ceiling
    pub fn bounded(page: u32, per_page: u32, max_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, max_per_page.max(1)),
        }
    }

    /// Parameters addressing the current page of `state`
    pub fn from_state(state: &PageState) -> Self {
        Self {
            page: state.current_page().max(1),
            per_page: state.page_size(),
        }
    }

    /// Calculate the offset of the first item
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }

    /// Get the maximum number of items on the page
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

/// Paginated result container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

impl<T> PagedResult<T> {
    /// Create a new paginated result
    pub fn new(items: Vec<T>, total: i64, params: &ListParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            per_page: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_clamps() {
        let params = ListParams::new(0, 0);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 1);

        let params = ListParams::new(3, 500);
        assert_eq!(params.per_page, DEFAULT_MAX_PER_PAGE);

        let params = ListParams::bounded(2, 80, 50);
        assert_eq!(params.per_page, 50);
        assert_eq!(params.offset(), 50);
        assert_eq!(params.limit(), 50);
    }

    #[test]
    fn test_list_params_from_state() {
        let state = PageState::new(4, 25, 1000).unwrap();
        let params = ListParams::from_state(&state);
        assert_eq!(params, ListParams { page: 4, per_page: 25 });
        assert_eq!(params.offset(), 75);
    }

    #[test]
    fn test_paged_result_echoes_params() {
        let result = PagedResult::new(vec![1, 2, 3], 35, &ListParams::new(4, 10));
        assert_eq!(result.page, 4);
        assert_eq!(result.per_page, 10);
        assert_eq!(result.total, 35);
    }

    #[test]
    fn test_paged_result_default_is_first_page() {
        let result: PagedResult<u8> = PagedResult::default();
        assert_eq!(result.page, 1);
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }
}
