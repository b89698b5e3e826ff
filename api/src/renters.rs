//! Renter-profile CRUD.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreatedResponse, RenterProfile, RenterProfileDraft};

impl ApiClient {
    pub async fn create_renter_profile(
        &self,
        draft: &RenterProfileDraft,
    ) -> Result<CreatedResponse, ApiError> {
        self.post("/renters", draft).await
    }

    pub async fn update_renter_profile(
        &self,
        id: i64,
        draft: &RenterProfileDraft,
    ) -> Result<(), ApiError> {
        let path = format!("/renters/{id}");
        let _: Value = self.put(&path, draft).await?;
        Ok(())
    }

    pub async fn get_renter_profile(&self, id: i64) -> Result<RenterProfile, ApiError> {
        let path = format!("/renters/{id}");
        self.get(&path).await
    }
}
