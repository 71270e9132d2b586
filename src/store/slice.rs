//! Observable store slice
//!
//! A slice holds the last fetched page of one entity kind and notifies its
//! subscribers after every write. Callbacks run in registration order, outside
//! of any lock, so a subscriber may read the slice it was notified about.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::models::PagedResult;

/// Subscriber callback type
pub type Subscriber<T> = Arc<dyn Fn(&PagedResult<T>) + Send + Sync>;

/// Handle returned by [`Slice::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One typed slice of the store
pub struct Slice<T> {
    name: &'static str,
    data: RwLock<PagedResult<T>>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: AtomicU64,
}

impl<T> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T> Slice<T> {
    /// Create an empty slice
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data: RwLock::new(PagedResult::default()),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Slice name, used in log output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run `f` against the current contents without cloning
    pub fn read<R>(&self, f: impl FnOnce(&PagedResult<T>) -> R) -> R {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        f(&data)
    }

    /// Register a callback invoked after every write
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&PagedResult<T>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));

        debug!("Subscribed {:?} to '{}'", id, self.name);
        id
    }

    /// Remove a subscriber; returns `false` if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        before != subscribers.len()
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T: Clone> Slice<T> {
    /// Clone of the current contents
    pub fn snapshot(&self) -> PagedResult<T> {
        self.read(Clone::clone)
    }

    /// Store a freshly fetched page and notify subscribers
    pub fn replace(&self, page: PagedResult<T>) {
        {
            let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
            *data = page;
        }
        self.notify();
    }

    /// Drop the cached page and notify subscribers
    pub fn clear(&self) {
        self.replace(PagedResult::default());
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        if subscribers.is_empty() {
            return;
        }

        debug!("Notifying {} subscriber(s) of '{}'", subscribers.len(), self.name);
        let data = self.snapshot();
        for callback in subscribers {
            callback(&data);
        }
    }
}
