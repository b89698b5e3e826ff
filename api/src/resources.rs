//! Resolve which resources the signed-in user owns.
//!
//! These two lookups feed role auto-detection: a user may have at most one
//! renter profile and any number of listings.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Deserialize)]
struct RenterProfileIdReply {
    renter_profile_id: i64,
}

#[derive(Deserialize)]
struct ListingIdsReply {
    #[serde(default)]
    listing_ids: Vec<i64>,
}

impl ApiClient {
    /// The user's renter-profile id, or `None` if they never created one
    /// (the backend answers 404 in that case).
    pub async fn fetch_renter_profile_id(&self, user_id: i64) -> Result<Option<i64>, ApiError> {
        let path = format!("/users/{user_id}/renter_profile");
        match self.get::<RenterProfileIdReply>(&path).await {
            Ok(reply) => Ok(Some(reply.renter_profile_id)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Ids of every listing the user owns, oldest first.
    pub async fn fetch_listing_ids(&self, user_id: i64) -> Result<Vec<i64>, ApiError> {
        let path = format!("/users/{user_id}/listings");
        let reply: ListingIdsReply = self.get(&path).await?;
        Ok(reply.listing_ids)
    }
}
