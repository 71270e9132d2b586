//! Fixed-price listing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Draft,
    Active,
    SoldOut,
    Archived,
}

/// Fixed-price listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub seller_id: i64,
    /// Unit price in minor currency units
    pub price: i64,
    pub stock: u32,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}
