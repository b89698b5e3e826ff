//! # API crate — typed client for the SubletSwipe backend
//!
//! Everything the app sends over the wire goes through this crate. It wraps
//! the backend's JSON HTTP API in a typed [`ApiClient`] and normalizes the
//! backend's occasionally loose response shapes at this boundary, so the
//! rest of the workspace only ever sees one canonical form of each model.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: thin `GET`/`POST`/`PUT`/`PATCH` JSON helpers; non-2xx bodies become error messages |
//! | [`config`] | [`Settings`]: backend base URL and photo-host parameters (defaults, `subletswipe.toml`, env overrides) |
//! | [`error`] | [`ApiError`]: status-with-body or transport failure |
//! | [`models`] | Wire models and loose-JSON normalization (photos as string *or* array, tolerant match candidates) |
//! | [`auth`] | Login and signup |
//! | [`resources`] | Resolve the signed-in user's renter-profile id and listing ids |
//! | [`matching`] | Candidate queues, recommendations, swipe submission, mutual matches |
//! | [`listings`] | Listing CRUD and deactivation |
//! | [`renters`] | Renter-profile CRUD |
//! | [`locations`] | Address autocomplete predictions |
//! | [`photos`] | Photo-host upload and backend-side deletion |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod listings;
pub mod locations;
pub mod matching;
pub mod models;
pub mod photos;
pub mod renters;
pub mod resources;

pub use client::ApiClient;
pub use config::Settings;
pub use error::ApiError;
pub use locations::AddressPrediction;
pub use models::{
    CreatedResponse, Credentials, Listing, ListingDraft, MatchCandidate, Photo, RenterProfile,
    RenterProfileDraft, SignupRequest, SwipeRequest, SwipeResponse,
};
pub use photos::UploadedPhoto;
pub use store::SessionUser;
