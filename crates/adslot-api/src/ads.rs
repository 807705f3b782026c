// Ad (creative) endpoints

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AdDto, AdPayload, AdStatisticsDto, ListResponse, MyAdStatisticsDto};

impl ApiClient {
    /// List the caller's ads, optionally filtered by lifecycle status.
    pub async fn list_ads(&self, status: Option<&str>) -> Result<Vec<AdDto>, Error> {
        let url = self.api_url("advertisers/ads/");
        let resp: ListResponse<AdDto> = match status {
            Some(s) => {
                self.get_query(url, &[("status", s.to_owned())]).await?
            }
            None => self.get(url).await?,
        };
        Ok(resp.into_vec())
    }

    /// Fetch a single ad by id.
    pub async fn get_ad(&self, id: i64) -> Result<AdDto, Error> {
        self.get(self.api_url(&format!("advertisers/ads/{id}/"))).await
    }

    /// Create an ad. The payload's `status` decides draft vs review.
    pub async fn create_ad(&self, payload: &AdPayload) -> Result<AdDto, Error> {
        self.post(self.api_url("advertisers/ads/"), payload).await
    }

    /// Partially update an ad.
    pub async fn update_ad(&self, id: i64, payload: &AdPayload) -> Result<AdDto, Error> {
        self.patch(self.api_url(&format!("advertisers/ads/{id}/")), payload)
            .await
    }

    /// Delete an ad.
    pub async fn delete_ad(&self, id: i64) -> Result<(), Error> {
        self.delete(self.api_url(&format!("advertisers/ads/{id}/")))
            .await
    }

    /// Per-ad click/impression statistics.
    pub async fn ad_statistics(&self, id: i64) -> Result<AdStatisticsDto, Error> {
        self.get(self.api_url(&format!("advertisers/ads/{id}/statistics/")))
            .await
    }

    /// Aggregate statistics across the caller's ads.
    pub async fn my_ad_statistics(&self) -> Result<MyAdStatisticsDto, Error> {
        self.get(self.api_url("advertisers/ads/my_statistics/"))
            .await
    }
}
