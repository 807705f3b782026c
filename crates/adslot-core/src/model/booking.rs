// ── Booking domain types ──

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    /// Wire value this client doesn't know about.
    Unknown,
}

impl BookingStatus {
    pub(crate) fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }
}

/// A reservation of a placement for an ad over an inclusive date range.
///
/// Invariants (server-enforced, mirrored here for display):
/// `end_date >= start_date` and
/// `total_days == (end_date - start_date).num_days() + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub ad_id: i64,
    pub ad_title: Option<String>,
    pub placement_id: i64,
    pub placement_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub price_per_day: Decimal,
    pub total_price: Decimal,
    pub status: BookingStatus,
    /// Set once the booking has been cancelled.
    pub cancellation_reason: Option<String>,
}

impl Booking {
    /// Advisory mirror of the server rule: only pending or confirmed
    /// bookings may be cancelled. The server remains authoritative.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        )
    }
}

/// Slim booking used for calendar rendering and conflict display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarBooking {
    pub id: i64,
    pub ad_title: Option<String>,
    pub placement_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
}

impl CalendarBooking {
    /// Inclusive-range overlap test: both boundary dates count.
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Label shown in calendar cells and conflict lists.
    pub fn label(&self) -> &str {
        self.placement_name
            .as_deref()
            .or(self.ad_title.as_deref())
            .unwrap_or("booking")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(start: &str, end: &str) -> CalendarBooking {
        CalendarBooking {
            id: 1,
            ad_title: Some("Spring Sale".into()),
            placement_name: Some("Homepage Banner".into()),
            start_date: start.parse().expect("start"),
            end_date: end.parse().expect("end"),
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn covers_includes_both_boundaries() {
        let b = booking("2025-03-10", "2025-03-12");
        assert!(b.covers("2025-03-10".parse().expect("date")));
        assert!(b.covers("2025-03-11".parse().expect("date")));
        assert!(b.covers("2025-03-12".parse().expect("date")));
        assert!(!b.covers("2025-03-09".parse().expect("date")));
        assert!(!b.covers("2025-03-13".parse().expect("date")));
    }

    #[test]
    fn single_day_booking_covers_itself() {
        let b = booking("2025-03-10", "2025-03-10");
        assert!(b.covers("2025-03-10".parse().expect("date")));
    }

    #[test]
    fn cancellable_only_before_activation() {
        let mut b = Booking {
            id: 1,
            ad_id: 2,
            ad_title: None,
            placement_id: 3,
            placement_name: None,
            start_date: "2025-03-10".parse().expect("date"),
            end_date: "2025-03-12".parse().expect("date"),
            total_days: 3,
            price_per_day: Decimal::new(5000, 2),
            total_price: Decimal::new(15000, 2),
            status: BookingStatus::Pending,
            cancellation_reason: None,
        };
        assert!(b.is_cancellable());
        b.status = BookingStatus::Confirmed;
        assert!(b.is_cancellable());
        b.status = BookingStatus::Active;
        assert!(!b.is_cancellable());
        b.status = BookingStatus::Cancelled;
        assert!(!b.is_cancellable());
    }
}
