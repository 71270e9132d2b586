//! Data models
//!
//! This module contains the data structures shared across the admin console:
//! - Marketplace entities held by the client store (Auction, Listing, Thread, Member, Seller)
//! - List query/result types exchanged between list owners and their data sources

mod auction;
mod list;
mod listing;
mod member;
mod seller;
mod thread;

pub use auction::{Auction, AuctionStatus};
pub use list::{ListParams, PagedResult, DEFAULT_MAX_PER_PAGE};
pub use listing::{Listing, ListingStatus};
pub use member::{Member, MemberRole, MemberStatus};
pub use seller::Seller;
pub use thread::Thread;
