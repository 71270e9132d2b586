//! Page-change controls
//!
//! Turns clicks on the pagination bar (numbered entries, previous/next) into
//! page-change requests. Only requests for an existing page reach the owner's
//! callback; everything else is dropped without an error, since a stale bar
//! (double click racing a re-render) can legitimately ask for a page that no
//! longer exists.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PageEntry, PageState, PageWindow};

/// Previous or next button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControl {
    /// Page the button requests
    pub page: i64,
    /// Whether the button is actionable
    pub enabled: bool,
}

/// Validate a page-change request against the current state
///
/// Returns the accepted page, or `None` when `new_page` is outside `[1, total_pages]`.
pub fn validate_page_change(state: &PageState, new_page: i64) -> Option<u32> {
    if state.contains_page(new_page) {
        u32::try_from(new_page).ok()
    } else {
        None
    }
}

/// Pagination bar bound to an owner's state and page-change callback
pub struct PageControls<'a, F> {
    state: &'a PageState,
    on_page_change: F,
}

impl<'a, F> PageControls<'a, F>
where
    F: FnMut(u32),
{
    /// Bind controls to `state`; `on_page_change` receives accepted targets only
    pub fn new(state: &'a PageState, on_page_change: F) -> Self {
        Self {
            state,
            on_page_change,
        }
    }

    /// Numbered entries to render
    pub fn window(&self) -> PageWindow {
        self.state.window()
    }

    /// The "previous" button, disabled on the first page
    pub fn previous(&self) -> NavControl {
        let page = i64::from(self.state.current_page()) - 1;
        NavControl {
            page,
            enabled: self.state.contains_page(page),
        }
    }

    /// The "next" button, disabled on the last page
    pub fn next(&self) -> NavControl {
        let page = i64::from(self.state.current_page()) + 1;
        NavControl {
            page,
            enabled: self.state.contains_page(page),
        }
    }

    /// Request a move to `new_page`
    ///
    /// Invokes the callback at most once and returns the accepted page.
    pub fn request(&mut self, new_page: i64) -> Option<u32> {
        match validate_page_change(self.state, new_page) {
            Some(page) => {
                (self.on_page_change)(page);
                Some(page)
            }
            None => {
                debug!(
                    "Ignoring page change to {} (total pages: {})",
                    new_page,
                    self.state.total_pages()
                );
                None
            }
        }
    }

    /// Activate a rendered entry; ellipses are inert
    pub fn select(&mut self, entry: PageEntry) -> Option<u32> {
        entry
            .page_number()
            .and_then(|page| self.request(i64::from(page)))
    }

    /// Activate the "previous" button
    ///
    /// Goes through the same validation even when the button is disabled.
    pub fn go_previous(&mut self) -> Option<u32> {
        let target = self.previous().page;
        self.request(target)
    }

    /// Activate the "next" button
    pub fn go_next(&mut self) -> Option<u32> {
        let target = self.next().page;
        self.request(target)
    }
}
