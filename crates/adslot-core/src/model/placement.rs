// ── Placement domain type ──

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable advertising slot with a per-day rate.
///
/// Immutable from the client's perspective; fetched read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub id: i64,
    /// Human-friendly display name (e.g. "Homepage Banner").
    pub name: String,
    /// Stable internal reference code (e.g. "homepage_banner").
    pub code: String,
    pub price_per_day: Decimal,
    pub description: Option<String>,
    /// Pixel dimensions, e.g. "1200x400".
    pub dimensions: Option<String>,
    pub is_premium: bool,
}
