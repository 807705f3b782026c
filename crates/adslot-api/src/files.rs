// File upload and management endpoints
//
// Uploads are independent resources: a file exists (and is virus-
// scanned) before any ad references it. Linking to an ad is a separate
// PATCH once the ad id is known.

use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{FileDto, ListResponse};

impl ApiClient {
    /// List the caller's uploaded files.
    pub async fn list_files(&self) -> Result<Vec<FileDto>, Error> {
        let resp: ListResponse<FileDto> = self.get(self.api_url("advertisers/files/")).await?;
        Ok(resp.into_vec())
    }

    /// Upload a file as a multipart form.
    ///
    /// The backend stores it under a generated name, virus-scans it,
    /// and returns the owned resource with its scan status.
    pub async fn upload_file(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<FileDto, Error> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(content_type)
            .map_err(Error::Transport)?;
        let form = Form::new().part("file", part);
        self.post_multipart(self.api_url("advertisers/files/"), form)
            .await
    }

    /// Link an uploaded file to an ad.
    pub async fn link_file(&self, file_id: i64, ad_id: i64) -> Result<FileDto, Error> {
        let url = self.api_url(&format!("advertisers/files/{file_id}/"));
        self.patch(url, &json!({ "ad": ad_id })).await
    }

    /// Delete an uploaded file.
    pub async fn delete_file(&self, id: i64) -> Result<(), Error> {
        self.delete(self.api_url(&format!("advertisers/files/{id}/")))
            .await
    }
}
