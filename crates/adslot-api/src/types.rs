// Wire types for the Adslot REST API.
//
// These mirror the backend serializers field-for-field. `adslot-core`
// converts them into the canonical domain model; nothing outside this
// crate should need to know the wire shapes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ── List envelope ───────────────────────────────────────────────────

/// List responses are either a bare array or a paginated envelope with
/// a `results` field, depending on backend pagination settings. Accept
/// both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Paginated { results } => results,
            Self::Plain(items) => items,
        }
    }
}

// ── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}

/// Response body of both `login` and `register`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserDto,
    pub tokens: TokenPairDto,
}

/// Registration request. Validation failures come back as a
/// field → messages map (see [`crate::Error::Api`]).
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

// ── Ads ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AdDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub catalog_url: Option<String>,
    #[serde(default)]
    pub terms_conditions: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub placement_kind: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub total_impressions: i64,
    #[serde(default)]
    pub total_clicks: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update payload for an ad. `None` fields are omitted so the
/// same struct serves full creates and partial updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdStatisticsDto {
    #[serde(default)]
    pub total_impressions: i64,
    #[serde(default)]
    pub total_clicks: i64,
    #[serde(default)]
    pub click_through_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MyAdStatisticsDto {
    #[serde(default)]
    pub total_ads: i64,
    #[serde(default)]
    pub live_ads: i64,
    #[serde(default)]
    pub total_impressions: i64,
    #[serde(default)]
    pub total_clicks: i64,
}

// ── Placements ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PlacementDto {
    pub id: i64,
    pub placement_name: String,
    pub placement_code: String,
    pub base_price_per_day: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Response of the availability check. `is_available` is authoritative;
/// the conflicting bookings are informational.
#[derive(Debug, Deserialize)]
pub struct AvailabilityDto {
    pub is_available: bool,
    #[serde(default)]
    pub conflicting_bookings: Vec<CalendarBookingDto>,
}

// ── Bookings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct BookingDto {
    pub id: i64,
    pub ad: i64,
    #[serde(default)]
    pub ad_title: Option<String>,
    pub placement: i64,
    #[serde(default)]
    pub placement_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub price_per_day: Decimal,
    pub total_price: Decimal,
    pub status: String,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Slim booking shape used by the calendar endpoint and the
/// availability conflict list.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarBookingDto {
    pub id: i64,
    #[serde(default)]
    pub ad_title: Option<String>,
    #[serde(default)]
    pub placement_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingPayload {
    pub ad_id: i64,
    pub placement_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingStatisticsDto {
    #[serde(default)]
    pub total_bookings: i64,
    #[serde(default)]
    pub active_bookings: i64,
    #[serde(default)]
    pub completed_bookings: i64,
    #[serde(default)]
    pub total_revenue: Decimal,
}

// ── Files ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct FileDto {
    pub id: i64,
    pub original_filename: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size_kb: Option<i64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub virus_scan_status: Option<String>,
    /// Set once the file has been linked to an ad.
    #[serde(default)]
    pub ad: Option<i64>,
}

// ── Payments ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentDto {
    pub id: i64,
    pub booking: i64,
    pub amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentPayload {
    pub booking_id: i64,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentStatisticsDto {
    #[serde(default)]
    pub total_payments: i64,
    #[serde(default)]
    pub total_paid: Decimal,
}

// ── Notifications ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationDto {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
