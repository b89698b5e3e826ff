//! Wire models for the backend API.
//!
//! The backend is loose about some shapes: the `photos` column is sometimes
//! returned as a JSON array and sometimes as a JSON-*encoded string*, and
//! match rows only carry the columns relevant to the viewer's role. All of
//! that is normalized here, at the boundary, so nothing downstream ever
//! branches on shape.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Login payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Reply to a create operation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// A hosted listing photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Photo-host identifier, needed to delete the image later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// Accept `photos` as an array, a JSON-encoded string, or null/absent.
fn photos_field<'de, D>(deserializer: D) -> Result<Vec<Photo>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Photo>),
        Encoded(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Raw::List(photos)) => Ok(photos),
        Some(Raw::Encoded(text)) => Ok(serde_json::from_str(&text).unwrap_or_default()),
    }
}

fn default_true() -> bool {
    true
}

/// A sublet listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    pub asking_price: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub num_bedrooms: Option<i32>,
    #[serde(default)]
    pub num_bathrooms: Option<i32>,
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub utilities_incl: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "photos_field")]
    pub photos: Vec<Photo>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Listing {
    pub fn photo_url(&self) -> Option<&str> {
        self.photos.first().map(|photo| photo.url.as_str())
    }
}

/// Payload for creating or updating a listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingDraft {
    pub user_id: i64,
    pub address: String,
    pub asking_price: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub pet_friendly: bool,
    pub utilities_incl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<Photo>,
}

/// A renter's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenterProfile {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub budget: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub num_bedrooms: Option<i32>,
    #[serde(default)]
    pub num_bathrooms: Option<i32>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Payload for creating or updating a renter profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenterProfileDraft {
    pub user_id: i64,
    pub budget: f64,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// One entry in a swipe queue.
///
/// A projection of either a listing (renter viewer) or a renter profile
/// (lister viewer), enriched with the poster's identity. Match rows vary by
/// viewer role, so every field except `id` is optional and defaulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Listing id when the viewer is a renter.
    pub id: i64,
    /// Renter-profile id when the viewer is a lister.
    #[serde(default)]
    pub renter_id: Option<i64>,
    #[serde(default)]
    pub lister_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub asking_price: Option<f64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub num_bedrooms: Option<i32>,
    #[serde(default)]
    pub num_bathrooms: Option<i32>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl MatchCandidate {
    /// Project a recommended listing into the candidate shape, hoisting the
    /// first photo's URL into the flat `photo_url` the cards render from.
    pub fn from_listing(listing: Listing) -> Self {
        Self {
            id: listing.id,
            photo_url: listing.photos.first().map(|photo| photo.url.clone()),
            address: listing.address,
            asking_price: Some(listing.asking_price),
            start_date: listing.start_date,
            end_date: listing.end_date,
            num_bedrooms: listing.num_bedrooms,
            num_bathrooms: listing.num_bathrooms,
            bio: listing.description,
            ..Self::default()
        }
    }

    /// Project a renter profile into the candidate shape (lister viewer).
    pub fn from_renter_profile(profile: RenterProfile) -> Self {
        Self {
            renter_id: Some(profile.id),
            budget: Some(profile.budget),
            address: profile.location,
            start_date: profile.start_date,
            end_date: profile.end_date,
            num_bedrooms: profile.num_bedrooms,
            num_bathrooms: profile.num_bathrooms,
            bio: profile.bio,
            ..Self::default()
        }
    }
}

/// One swipe decision, submitted once and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeRequest {
    pub target_id: i64,
    pub is_right: bool,
}

/// The server's synchronous verdict on a swipe.
///
/// Older backend revisions reply without the `match` flag; those decode as
/// not-matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwipeResponse {
    #[serde(default, rename = "match")]
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_json(photos: &str) -> String {
        format!(r#"{{"id": 7, "asking_price": 1200.0, "photos": {photos}}}"#)
    }

    #[test]
    fn test_photos_as_array() {
        let listing: Listing =
            serde_json::from_str(&listing_json(r#"[{"url": "http://x/1.jpg"}]"#)).unwrap();
        assert_eq!(listing.photo_url(), Some("http://x/1.jpg"));
    }

    #[test]
    fn test_photos_as_encoded_string() {
        let listing: Listing =
            serde_json::from_str(&listing_json(r#""[{\"url\":\"http://x/1.jpg\"}]""#)).unwrap();
        assert_eq!(listing.photo_url(), Some("http://x/1.jpg"));
    }

    #[test]
    fn test_photos_null_or_missing() {
        let listing: Listing = serde_json::from_str(&listing_json("null")).unwrap();
        assert!(listing.photos.is_empty());
        assert_eq!(listing.photo_url(), None);

        let listing: Listing =
            serde_json::from_str(r#"{"id": 7, "asking_price": 1200.0}"#).unwrap();
        assert_eq!(listing.photo_url(), None);
    }

    #[test]
    fn test_photos_unparsable_string_is_empty() {
        let listing: Listing = serde_json::from_str(&listing_json(r#""not json""#)).unwrap();
        assert!(listing.photos.is_empty());
    }

    #[test]
    fn test_from_listing_hoists_photo_url() {
        let listing: Listing =
            serde_json::from_str(&listing_json(r#""[{\"url\":\"http://x/1.jpg\"}]""#)).unwrap();
        let candidate = MatchCandidate::from_listing(listing);
        assert_eq!(candidate.photo_url.as_deref(), Some("http://x/1.jpg"));
        assert_eq!(candidate.asking_price, Some(1200.0));

        let bare: Listing = serde_json::from_str(&listing_json("[]")).unwrap();
        let candidate = MatchCandidate::from_listing(bare);
        assert_eq!(candidate.photo_url, None);
    }

    #[test]
    fn test_match_candidate_tolerates_sparse_rows() {
        let candidate: MatchCandidate = serde_json::from_str(
            r#"{"id": 3, "renter_id": 55, "first_name": "Sam", "budget": 900.0}"#,
        )
        .unwrap();
        assert_eq!(candidate.renter_id, Some(55));
        assert_eq!(candidate.lister_name, None);
        assert_eq!(candidate.address, None);
    }

    #[test]
    fn test_swipe_response_without_match_flag() {
        let response: SwipeResponse =
            serde_json::from_str(r#"{"message": "Renter swipe recorded", "id": 12}"#).unwrap();
        assert!(!response.matched);

        let response: SwipeResponse = serde_json::from_str(r#"{"match": true}"#).unwrap();
        assert!(response.matched);
    }
}
