// ── User domain type ──

use serde::{Deserialize, Serialize};

/// Profile of an authenticated advertiser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// "First Last" when names are present, username otherwise.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() => format!("{first} {last}"),
            (Some(first), None) if !first.is_empty() => first.to_owned(),
            _ => self.username.clone(),
        }
    }
}
