//! List owner
//!
//! The owner of a paginated list screen. It holds the authoritative
//! [`PageState`], fetches pages from a [`ListSource`] and publishes them into
//! the matching [`Store`] slice. Page-change requests go through the same
//! validation as the pagination bar; only accepted ones trigger a fetch.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{ListParams, PagedResult};
use crate::pagination::{PageState, PageWindow, PaginationError};
use crate::services::ListSource;
use crate::store::{Slice, Store, Stored};

/// Paginated list bound to a data source and a store slice
pub struct ListOwner<T: Stored> {
    state: PageState,
    source: Arc<dyn ListSource<T>>,
    store: Arc<Store>,
}

impl<T: Stored> ListOwner<T> {
    /// Create an owner positioned on page 1
    ///
    /// # Errors
    /// Fails when `page_size` is 0.
    pub fn new(
        store: Arc<Store>,
        source: Arc<dyn ListSource<T>>,
        page_size: u32,
    ) -> Result<Self, PaginationError> {
        Ok(Self {
            state: PageState::first_page(page_size)?,
            source,
            store,
        })
    }

    /// Current pagination state
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Page-number window for the current state
    pub fn window(&self) -> PageWindow {
        self.state.window()
    }

    /// Store slice this owner publishes into
    pub fn slice(&self) -> &Slice<T> {
        self.store.slice::<T>()
    }

    /// Re-fetch the current page and publish it
    ///
    /// When the list shrank below the current page, moves to the new last page
    /// and fetches again. On error the state is left as it was, matching what
    /// the store still holds.
    pub async fn refresh(&mut self) -> Result<()> {
        let previous = self.state;
        let result = self.reload().await;
        if result.is_err() {
            self.state = previous;
        }
        result
    }

    async fn reload(&mut self) -> Result<()> {
        let page = self.fetch_current().await?;
        self.state.set_total_items(page.total);

        let total_pages = self.state.total_pages();
        if total_pages >= 1 && self.state.current_page() > total_pages {
            debug!(
                "Page {} no longer exists, moving to {}",
                self.state.current_page(),
                total_pages
            );
            self.state.go_to(total_pages);
            let page = self.fetch_current().await?;
            self.state.set_total_items(page.total);
            self.slice().replace(page);
            return Ok(());
        }

        self.slice().replace(page);
        Ok(())
    }

    /// Move to `target` and re-fetch
    ///
    /// Returns the accepted page, or `None` when `target` is out of range. On a
    /// failed fetch the previous position is restored.
    pub async fn change_page(&mut self, target: i64) -> Result<Option<u32>> {
        let mut requested = None;
        self.state
            .controls(|page| requested = Some(page))
            .request(target);

        match requested {
            Some(page) => self.apply(page).await.map(Some),
            None => Ok(None),
        }
    }

    /// Activate the "next" control
    pub async fn next_page(&mut self) -> Result<Option<u32>> {
        let mut requested = None;
        self.state.controls(|page| requested = Some(page)).go_next();

        match requested {
            Some(page) => self.apply(page).await.map(Some),
            None => Ok(None),
        }
    }

    /// Activate the "previous" control
    pub async fn previous_page(&mut self) -> Result<Option<u32>> {
        let mut requested = None;
        self.state.controls(|page| requested = Some(page)).go_previous();

        match requested {
            Some(page) => self.apply(page).await.map(Some),
            None => Ok(None),
        }
    }

    async fn apply(&mut self, page: u32) -> Result<u32> {
        if page == self.state.current_page() {
            return Ok(page);
        }

        let previous = self.state;
        self.state.go_to(page);
        if let Err(e) = self.refresh().await {
            self.state = previous;
            return Err(e);
        }
        Ok(self.state.current_page())
    }

    async fn fetch_current(&self) -> Result<PagedResult<T>> {
        let params = ListParams::from_state(&self.state);
        let page = self
            .source
            .fetch(&params)
            .await
            .with_context(|| format!("Failed to fetch {} page {}", self.slice().name(), params.page))?;

        if page.page != params.page {
            warn!(
                "Discarding {} response for page {} (requested {})",
                self.slice().name(),
                page.page,
                params.page
            );
            anyhow::bail!("Stale response for page {}", page.page);
        }

        Ok(page)
    }
}
