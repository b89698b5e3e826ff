//! Candidate queues, swipe submission, and mutual matches.
//!
//! Renters swipe on listings and listers swipe on renter profiles, so every
//! operation here is keyed on the viewer's role and active resource id.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Listing, MatchCandidate, SwipeRequest, SwipeResponse};

#[derive(Deserialize)]
struct MatchesReply {
    #[serde(default)]
    matches: Vec<MatchCandidate>,
}

#[derive(Deserialize)]
struct RecommendationsReply {
    #[serde(default)]
    recommendations: Vec<Listing>,
}

#[derive(Deserialize)]
struct MutualListingsReply {
    #[serde(default)]
    listing_ids: Vec<i64>,
}

#[derive(Deserialize)]
struct MutualRentersReply {
    #[serde(default)]
    renter_profile_ids: Vec<i64>,
}

/// Queue endpoint for a viewer role: renters see listing candidates and
/// listers see renter candidates.
pub fn candidates_path(is_renter: bool, resource_id: i64) -> String {
    if is_renter {
        format!("/renters/{resource_id}/listing_matches")
    } else {
        format!("/listings/{resource_id}/renter_matches")
    }
}

/// Swipe endpoint for a viewer role.
pub fn swipe_path(is_renter: bool, resource_id: i64) -> String {
    if is_renter {
        format!("/swipes/renter/{resource_id}")
    } else {
        format!("/swipes/listing/{resource_id}")
    }
}

impl ApiClient {
    /// Fetch the candidate queue for one swipe session, in server order.
    pub async fn fetch_candidates(
        &self,
        is_renter: bool,
        resource_id: i64,
    ) -> Result<Vec<MatchCandidate>, ApiError> {
        let reply: MatchesReply = self.get(&candidates_path(is_renter, resource_id)).await?;
        Ok(reply.matches)
    }

    /// Fetch the renter-only fallback queue of recommended listings,
    /// normalized into the candidate shape.
    pub async fn fetch_recommendations(
        &self,
        resource_id: i64,
    ) -> Result<Vec<MatchCandidate>, ApiError> {
        let path = format!("/listings/recommendations/{resource_id}");
        let reply: RecommendationsReply = self.get(&path).await?;
        Ok(reply
            .recommendations
            .into_iter()
            .map(MatchCandidate::from_listing)
            .collect())
    }

    /// Submit one swipe decision and return the server's match verdict.
    pub async fn submit_swipe(
        &self,
        is_renter: bool,
        resource_id: i64,
        swipe: &SwipeRequest,
    ) -> Result<SwipeResponse, ApiError> {
        self.post(&swipe_path(is_renter, resource_id), swipe).await
    }

    /// Listings that mutually matched with a renter profile.
    pub async fn mutual_match_listing_ids(
        &self,
        renter_profile_id: i64,
    ) -> Result<Vec<i64>, ApiError> {
        let path = format!("/mutual-matches/renter/{renter_profile_id}");
        let reply: MutualListingsReply = self.get(&path).await?;
        Ok(reply.listing_ids)
    }

    /// Renter profiles that mutually matched with a listing.
    pub async fn mutual_match_renter_ids(&self, listing_id: i64) -> Result<Vec<i64>, ApiError> {
        let path = format!("/mutual-matches/listing/{listing_id}");
        let reply: MutualRentersReply = self.get(&path).await?;
        Ok(reply.renter_profile_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_path_by_role() {
        assert_eq!(candidates_path(true, 42), "/renters/42/listing_matches");
        assert_eq!(candidates_path(false, 7), "/listings/7/renter_matches");
    }

    #[test]
    fn test_swipe_path_by_role() {
        assert_eq!(swipe_path(true, 42), "/swipes/renter/42");
        assert_eq!(swipe_path(false, 7), "/swipes/listing/7");
    }
}
