//! Photo hosting: direct unsigned upload to the image host, deletion via
//! the backend (which holds the host credentials).

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::error::ApiError;

/// The image host's reply to an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedPhoto {
    pub secure_url: String,
    pub public_id: String,
}

impl ApiClient {
    /// Upload one image with the unsigned preset. Callers treat this as
    /// fire-and-forget: a failure only costs the photo, never the form.
    pub async fn upload_photo(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UploadedPhoto, ApiError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.photos.preset.clone())
            .text("folder", self.photos.folder.clone());

        tracing::debug!(filename, "uploading photo");
        let response = self
            .http
            .post(&self.photos.upload)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Ask the backend to delete hosted photos by their host ids.
    pub async fn delete_photos(&self, public_ids: &[String]) -> Result<(), ApiError> {
        let _: Value = self
            .post("/photos/delete", &json!({ "public_ids": public_ids }))
            .await?;
        Ok(())
    }
}
