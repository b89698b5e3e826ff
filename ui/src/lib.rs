//! This crate contains all shared UI and app state for the workspace.

use dioxus::prelude::*;

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod session;
pub use session::make_session_store;

mod active_role;
pub use active_role::{use_active_role, ActiveRole, ActiveRoleProvider, ActiveRoleState};

mod swipe_session;
pub use swipe_session::{SwipePhase, SwipeSession, SwipeSubmission};

mod swiper;
pub use swiper::HomeSwiper;

mod cards;
pub use cards::{format_short_date, ListingCardContent, RenterCardContent};

pub mod components;

pub mod views;

/// Get the shared backend client provided at the application root.
pub fn use_api() -> api::ApiClient {
    use_context::<api::ApiClient>()
}
