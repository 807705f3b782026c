// ── Ad (creative) domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle of an ad. Everything past `PendingReview` is driven
/// exclusively by the backend's review/publishing pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AdStatus {
    Draft,
    PendingReview,
    Approved,
    Rejected,
    Live,
    Expired,
    Paused,
    /// Wire value this client doesn't know about.
    Unknown,
}

impl AdStatus {
    pub(crate) fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }

    /// Whether the ad can be offered in the booking form.
    pub fn is_bookable(self) -> bool {
        matches!(self, Self::Approved | Self::Live)
    }
}

/// The two mutually exclusive content shapes an ad can take.
///
/// `MediaLed` ads are image-first and must carry a working website
/// link; `FullFormat` ads are self-contained text creatives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AdCategory {
    MediaLed,
    FullFormat,
}

/// Where the ad is targeted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlacementKind {
    Main,
    Regional,
}

/// A user-authored advertisement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub call_to_action: Option<String>,
    pub website_url: Option<String>,
    pub catalog_url: Option<String>,
    pub terms_conditions: Option<String>,
    pub category: Option<AdCategory>,
    pub placement_kind: Option<PlacementKind>,
    pub region: Option<String>,
    pub status: AdStatus,
    /// Set by the backend when `status` is [`AdStatus::Rejected`].
    pub rejection_reason: Option<String>,
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Ad {
    /// Click-through rate in percent; 0 when there are no impressions.
    pub fn click_through_rate(&self) -> f64 {
        if self.total_impressions > 0 {
            #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
            {
                (self.total_clicks as f64 / self.total_impressions as f64) * 100.0
            }
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_names() {
        assert_eq!(AdStatus::from_wire("pending_review"), AdStatus::PendingReview);
        assert_eq!(AdStatus::PendingReview.to_string(), "pending_review");
        assert_eq!(AdStatus::from_wire("something_new"), AdStatus::Unknown);
    }

    #[test]
    fn only_approved_and_live_are_bookable() {
        assert!(AdStatus::Approved.is_bookable());
        assert!(AdStatus::Live.is_bookable());
        assert!(!AdStatus::Draft.is_bookable());
        assert!(!AdStatus::Rejected.is_bookable());
    }
}
