// ── Pricing & availability calculator ──
//
// Derives the booking quote (day count, total price) from the selected
// date range and placement rate, and formats the advisory availability
// state. Conflict detection itself is the server's job: this module
// only interprets the backend's boolean — it never inspects a local
// booking list.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Placement;

/// Derived price summary for a prospective booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    /// Inclusive day count; a same-day range counts as 1.
    pub total_days: i64,
    pub total_price: Decimal,
}

impl BookingQuote {
    /// The empty quote shown while the form is incomplete.
    pub fn zero() -> Self {
        Self {
            total_days: 0,
            total_price: Decimal::ZERO,
        }
    }
}

/// Compute the quote for an inclusive date range at a per-day rate.
///
/// Any missing input yields the zero quote without error.
pub fn quote(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    placement: Option<&Placement>,
) -> BookingQuote {
    let (Some(start), Some(end), Some(placement)) = (start_date, end_date, placement) else {
        return BookingQuote::zero();
    };

    let total_days = (end - start).num_days() + 1;
    if total_days <= 0 {
        // Not constructible through BookingForm, which clamps end >= start.
        return BookingQuote::zero();
    }

    BookingQuote {
        total_days,
        total_price: Decimal::from(total_days) * placement.price_per_day,
    }
}

/// Advisory availability state, as last reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// No check has completed for the current inputs.
    #[default]
    Unknown,
    Available,
    /// The backend reported at least one conflicting booking.
    Conflict,
}

impl Availability {
    pub fn from_server(is_available: bool) -> Self {
        if is_available {
            Self::Available
        } else {
            Self::Conflict
        }
    }

    /// The user-facing message for this state; empty while unknown.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Available => "Dates are available",
            Self::Conflict => "These dates are already booked. Please choose different dates.",
        }
    }
}

/// Client-side state of the "book new slot" form.
///
/// The date setters keep `end_date >= start_date` by construction, the
/// same clamping the date inputs applied in the original UI.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub ad_id: Option<i64>,
    pub placement: Option<Placement>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    pub availability: Availability,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Set the range start. An end date earlier than the new start is
    /// dragged up to it. Resets any stale availability verdict.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
        if let Some(end) = self.end_date {
            if end < date {
                self.end_date = Some(date);
            }
        }
        self.availability = Availability::Unknown;
    }

    /// Set the range end, clamped to no earlier than the start.
    pub fn set_end_date(&mut self, date: NaiveDate) {
        let clamped = match self.start_date {
            Some(start) if date < start => start,
            _ => date,
        };
        self.end_date = Some(clamped);
        self.availability = Availability::Unknown;
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
        self.availability = Availability::Unknown;
    }

    /// Current quote; zero while the form is incomplete.
    pub fn quote(&self) -> BookingQuote {
        quote(self.start_date, self.end_date, self.placement.as_ref())
    }

    /// Whether an availability check should be issued: only once the
    /// placement and both dates are set.
    pub fn ready_for_availability_check(&self) -> bool {
        self.placement.is_some() && self.start_date.is_some() && self.end_date.is_some()
    }

    /// Confirm is disabled while any required field is empty or the
    /// last known availability verdict is a conflict.
    pub fn can_confirm(&self) -> bool {
        self.ad_id.is_some()
            && self.ready_for_availability_check()
            && self.availability != Availability::Conflict
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    fn homepage_banner(rate: &str) -> Placement {
        Placement {
            id: 3,
            name: "Homepage Banner".into(),
            code: "homepage_banner".into(),
            price_per_day: rate.parse().expect("rate"),
            description: None,
            dimensions: Some("1200x400".into()),
            is_premium: true,
        }
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().expect("date")
    }

    #[test]
    fn three_day_range_at_fifty_is_one_fifty() {
        let placement = homepage_banner("50.00");
        let q = quote(Some(d("2025-03-10")), Some(d("2025-03-12")), Some(&placement));
        assert_eq!(q.total_days, 3);
        assert_eq!(q.total_price, Decimal::new(15000, 2));
    }

    #[test]
    fn same_day_booking_is_one_day() {
        let placement = homepage_banner("19.99");
        let q = quote(Some(d("2025-07-04")), Some(d("2025-07-04")), Some(&placement));
        assert_eq!(q.total_days, 1);
        assert_eq!(q.total_price, "19.99".parse::<Decimal>().expect("decimal"));
    }

    #[test]
    fn missing_inputs_yield_zero_quote() {
        let placement = homepage_banner("50.00");
        assert_eq!(quote(None, Some(d("2025-03-12")), Some(&placement)), BookingQuote::zero());
        assert_eq!(quote(Some(d("2025-03-10")), None, Some(&placement)), BookingQuote::zero());
        assert_eq!(quote(Some(d("2025-03-10")), Some(d("2025-03-12")), None), BookingQuote::zero());
    }

    #[test]
    fn quote_spans_month_boundary() {
        let placement = homepage_banner("10.00");
        let q = quote(Some(d("2025-01-30")), Some(d("2025-02-02")), Some(&placement));
        assert_eq!(q.total_days, 4);
        assert_eq!(q.total_price, Decimal::new(4000, 2));
    }

    #[test]
    fn end_date_clamps_to_start() {
        let mut form = BookingForm::new();
        form.set_start_date(d("2025-03-10"));
        form.set_end_date(d("2025-03-05"));
        assert_eq!(form.end_date(), Some(d("2025-03-10")));
    }

    #[test]
    fn moving_start_past_end_drags_end_along() {
        let mut form = BookingForm::new();
        form.set_start_date(d("2025-03-01"));
        form.set_end_date(d("2025-03-04"));
        form.set_start_date(d("2025-03-10"));
        assert_eq!(form.end_date(), Some(d("2025-03-10")));
    }

    #[test]
    fn date_changes_reset_availability() {
        let mut form = BookingForm::new();
        form.set_placement(homepage_banner("50.00"));
        form.set_start_date(d("2025-03-10"));
        form.set_end_date(d("2025-03-12"));
        form.availability = Availability::Available;

        form.set_end_date(d("2025-03-13"));
        assert_eq!(form.availability, Availability::Unknown);
    }

    #[test]
    fn confirm_requires_all_fields_and_no_conflict() {
        let mut form = BookingForm::new();
        assert!(!form.can_confirm());

        form.ad_id = Some(12);
        form.set_placement(homepage_banner("50.00"));
        form.set_start_date(d("2025-03-10"));
        form.set_end_date(d("2025-03-12"));
        assert!(form.can_confirm(), "unknown availability does not block");

        form.availability = Availability::Conflict;
        assert!(!form.can_confirm());

        form.availability = Availability::Available;
        assert!(form.can_confirm());
    }

    #[test]
    fn availability_messages() {
        assert_eq!(Availability::Unknown.message(), "");
        assert!(Availability::Available.message().contains("available"));
        assert!(Availability::Conflict.message().contains("different dates"));
        assert_eq!(Availability::from_server(false), Availability::Conflict);
    }
}
