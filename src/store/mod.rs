//! Client-side store
//!
//! A typed cache of server-fetched entities, one slice per entity kind.
//! The store is passed by reference (usually inside an `Arc`) to the list
//! owners that fill it and the views that subscribe to it:
//! - Reads go through [`Slice::read`] / [`Slice::snapshot`]
//! - Writes go through [`Slice::replace`] / [`Slice::clear`], which notify subscribers
//! - [`Stored`] maps an entity type to its slice so generic owners stay typed

mod slice;

pub use slice::{Slice, Subscriber, SubscriptionId};

use tracing::debug;

use crate::models::{Auction, Listing, Member, Seller, Thread};

/// Process-wide cache of fetched entities
#[derive(Debug)]
pub struct Store {
    pub auctions: Slice<Auction>,
    pub listings: Slice<Listing>,
    pub threads: Slice<Thread>,
    pub members: Slice<Member>,
    pub sellers: Slice<Seller>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            auctions: Slice::new("auctions"),
            listings: Slice::new("listings"),
            threads: Slice::new("threads"),
            members: Slice::new("members"),
            sellers: Slice::new("sellers"),
        }
    }

    /// Typed access to the slice holding `T`
    pub fn slice<T: Stored>(&self) -> &Slice<T> {
        T::slice(self)
    }

    /// Drop every cached page, e.g. when the console navigates away
    pub fn clear_all(&self) {
        self.auctions.clear();
        self.listings.clear();
        self.threads.clear();
        self.members.clear();
        self.sellers.clear();
        debug!("Store cleared");
    }
}

/// Entity types that have a slice in the [`Store`]
pub trait Stored: Clone + Send + Sync + Sized + 'static {
    /// The slice holding values of this type
    fn slice(store: &Store) -> &Slice<Self>;
}

macro_rules! impl_stored {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Stored for $ty {
                fn slice(store: &Store) -> &Slice<Self> {
                    &store.$field
                }
            }
        )*
    };
}

impl_stored! {
    Auction => auctions,
    Listing => listings,
    Thread => threads,
    Member => members,
    Seller => sellers,
}
