//! Discussion thread model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discussion thread entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    #[serde(default)]
    pub reply_count: u32,
    /// Locked threads accept no new replies
    #[serde(default)]
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_reply_at: Option<DateTime<Utc>>,
}
