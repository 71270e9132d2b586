//! Seller model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seller profile attached to a member account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    /// Owning member account
    pub member_id: i64,
    pub store_name: String,
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}
