//! Auction model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Auction lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    /// Created but not yet open for bids
    #[default]
    Scheduled,
    /// Accepting bids
    Live,
    /// Closed after its end time
    Ended,
    /// Withdrawn by the seller or an admin
    Cancelled,
}

/// Auction entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub seller_id: i64,
    /// Opening bid in minor currency units
    pub starting_bid: i64,
    /// Highest bid so far, if any
    #[serde(default)]
    pub current_bid: Option<i64>,
    pub status: AuctionStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
