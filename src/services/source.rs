//! List data sources
//!
//! A `ListSource` answers page requests for one entity kind. In the console
//! this is a REST endpoint; `MemoryListSource` serves items held in memory.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{ListParams, PagedResult};

#[async_trait]
pub trait ListSource<T>: Send + Sync {
    /// Fetch one page of items together with the total count
    async fn fetch(&self, params: &ListParams) -> Result<PagedResult<T>>;
}

/// In-memory list source
pub struct MemoryListSource<T> {
    items: RwLock<Vec<T>>,
}

impl<T> MemoryListSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn boxed(items: Vec<T>) -> Arc<dyn ListSource<T>> {
        Arc::new(Self::new(items))
    }

    /// Keep only the items matching `keep`
    pub async fn retain<F>(&self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.write().await.retain(keep);
    }
}

#[async_trait]
impl<T> ListSource<T> for MemoryListSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn fetch(&self, params: &ListParams) -> Result<PagedResult<T>> {
        let items = self.items.read().await;
        let start = params.offset().min(items.len());
        let end = start.saturating_add(params.limit()).min(items.len());

        Ok(PagedResult::new(
            items[start..end].to_vec(),
            items.len() as i64,
            params,
        ))
    }
}
