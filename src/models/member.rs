//! Member model
//!
//! Members are the marketplace's user accounts as seen by the admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Moderator,
    #[default]
    Buyer,
}

/// Member account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Suspended,
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
}
