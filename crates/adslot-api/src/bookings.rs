// Booking endpoints
//
// Conflict resolution is server-side only: `create_booking` is always
// re-validated against existing bookings regardless of any advisory
// availability check the caller performed beforehand.

use chrono::NaiveDate;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    BookingDto, BookingPayload, BookingStatisticsDto, CalendarBookingDto, ListResponse,
};

impl ApiClient {
    /// List the caller's bookings, optionally filtered by status.
    pub async fn list_bookings(&self, status: Option<&str>) -> Result<Vec<BookingDto>, Error> {
        let url = self.api_url("advertisers/bookings/");
        let resp: ListResponse<BookingDto> = match status {
            Some(s) => self.get_query(url, &[("status", s.to_owned())]).await?,
            None => self.get(url).await?,
        };
        Ok(resp.into_vec())
    }

    /// Fetch a single booking by id.
    pub async fn get_booking(&self, id: i64) -> Result<BookingDto, Error> {
        self.get(self.api_url(&format!("advertisers/bookings/{id}/")))
            .await
    }

    /// Create a booking. Days and prices are computed server-side.
    pub async fn create_booking(&self, payload: &BookingPayload) -> Result<BookingDto, Error> {
        self.post(self.api_url("advertisers/bookings/"), payload)
            .await
    }

    /// Cancel a booking with a reason. One-way terminal transition.
    pub async fn cancel_booking(&self, id: i64, reason: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("advertisers/bookings/{id}/cancel/"));
        self.post_unit(url, &json!({ "reason": reason })).await
    }

    /// Confirmed/active bookings intersecting the given inclusive date
    /// range, for the calendar view. Optionally scoped to one placement.
    pub async fn calendar_bookings(
        &self,
        placement_id: Option<i64>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CalendarBookingDto>, Error> {
        let url = self.api_url("advertisers/bookings/calendar/");
        let mut query = vec![
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
        ];
        if let Some(pid) = placement_id {
            query.push(("placement_id", pid.to_string()));
        }
        let resp: ListResponse<CalendarBookingDto> = self.get_query(url, &query).await?;
        Ok(resp.into_vec())
    }

    /// Aggregate statistics across the caller's bookings.
    pub async fn my_booking_statistics(&self) -> Result<BookingStatisticsDto, Error> {
        self.get(self.api_url("advertisers/bookings/my_statistics/"))
            .await
    }
}
