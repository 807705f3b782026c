// Payment endpoints

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{ListResponse, PaymentDto, PaymentPayload, PaymentStatisticsDto};

impl ApiClient {
    /// List the caller's payments, optionally filtered by status.
    pub async fn list_payments(&self, status: Option<&str>) -> Result<Vec<PaymentDto>, Error> {
        let url = self.api_url("payments/payments/");
        let resp: ListResponse<PaymentDto> = match status {
            Some(s) => self.get_query(url, &[("status", s.to_owned())]).await?,
            None => self.get(url).await?,
        };
        Ok(resp.into_vec())
    }

    /// Record a payment for a booking.
    pub async fn create_payment(&self, payload: &PaymentPayload) -> Result<PaymentDto, Error> {
        self.post(self.api_url("payments/payments/"), payload).await
    }

    /// Aggregate payment statistics for the caller.
    pub async fn my_payment_statistics(&self) -> Result<PaymentStatisticsDto, Error> {
        self.get(self.api_url("payments/payments/my_statistics/"))
            .await
    }
}
