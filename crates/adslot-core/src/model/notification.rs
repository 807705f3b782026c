// ── Notification domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A system notification for the advertiser (ad reviewed, booking
/// starting, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub kind: Option<String>,
    pub is_read: bool,
    pub created_at: Option<DateTime<Utc>>,
}
