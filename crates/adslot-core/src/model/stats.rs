// ── Statistics domain types ──
//
// All aggregates are computed server-side; the client only renders
// them. `AdStatistics::zeroed()` is the graceful-degradation value used
// when the analytics source is slow or unavailable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Click/impression counters for a single ad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdStatistics {
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub click_through_rate: f64,
}

impl AdStatistics {
    /// All-zero statistics, shown instead of an error when the
    /// analytics upstream does not answer in time.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// Aggregate across all of the caller's ads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyAdStatistics {
    pub total_ads: i64,
    pub live_ads: i64,
    pub total_impressions: i64,
    pub total_clicks: i64,
}

/// Aggregate across all of the caller's bookings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingStatistics {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
    pub total_revenue: Decimal,
}

/// Aggregate across all of the caller's payments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentStatistics {
    pub total_payments: i64,
    pub total_paid: Decimal,
}
