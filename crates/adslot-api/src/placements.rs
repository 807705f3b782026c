// Placement endpoints (read-only from the client's perspective)

use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AvailabilityDto, ListResponse, PlacementDto};

impl ApiClient {
    /// List active placements.
    pub async fn list_placements(&self) -> Result<Vec<PlacementDto>, Error> {
        let resp: ListResponse<PlacementDto> =
            self.get(self.api_url("advertisers/ad-placements/")).await?;
        Ok(resp.into_vec())
    }

    /// Fetch a single placement by id.
    pub async fn get_placement(&self, id: i64) -> Result<PlacementDto, Error> {
        self.get(self.api_url(&format!("advertisers/ad-placements/{id}/")))
            .await
    }

    /// Ask the backend whether a placement is free for an inclusive
    /// date range. The returned boolean is authoritative.
    pub async fn check_availability(
        &self,
        placement_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AvailabilityDto, Error> {
        let url = self.api_url(&format!(
            "advertisers/ad-placements/{placement_id}/availability/"
        ));
        self.get_query(
            url,
            &[
                ("start_date", start_date.to_string()),
                ("end_date", end_date.to_string()),
            ],
        )
        .await
    }
}
