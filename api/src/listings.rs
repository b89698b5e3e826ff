//! Listing CRUD.

use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreatedResponse, Listing, ListingDraft};

impl ApiClient {
    pub async fn create_listing(&self, draft: &ListingDraft) -> Result<CreatedResponse, ApiError> {
        self.post("/listings", draft).await
    }

    pub async fn update_listing(&self, id: i64, draft: &ListingDraft) -> Result<(), ApiError> {
        let path = format!("/listings/{id}");
        let _: Value = self.put(&path, draft).await?;
        Ok(())
    }

    /// Take a listing out of the matching pool without deleting it.
    pub async fn deactivate_listing(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/listings/{id}");
        let _: Value = self.patch(&path, &json!({ "is_active": false })).await?;
        Ok(())
    }

    pub async fn get_listing(&self, id: i64) -> Result<Listing, ApiError> {
        let path = format!("/listings/{id}");
        self.get(&path).await
    }
}
