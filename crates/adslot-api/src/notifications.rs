// Notification endpoints

use serde_json::json;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{ListResponse, NotificationDto};

impl ApiClient {
    /// List the caller's notifications, newest first.
    pub async fn list_notifications(&self) -> Result<Vec<NotificationDto>, Error> {
        let resp: ListResponse<NotificationDto> =
            self.get(self.api_url("advertisers/notifications/")).await?;
        Ok(resp.into_vec())
    }

    /// Mark one notification as read.
    pub async fn mark_notification_read(&self, id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("advertisers/notifications/{id}/mark_read/"));
        self.post_unit(url, &json!({})).await
    }

    /// Mark every notification as read.
    pub async fn mark_all_notifications_read(&self) -> Result<(), Error> {
        let url = self.api_url("advertisers/notifications/mark_all_read/");
        self.post_unit(url, &json!({})).await
    }
}
