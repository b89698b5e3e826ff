//! Home screen: gates, then the swipe deck.

use dioxus::prelude::*;

use crate::active_role::use_active_role;
use crate::auth::use_auth;
use crate::components::{Button, ErrorMessage, LoadingIndicator};
use crate::swiper::HomeSwiper;

#[component]
pub fn Home(on_get_started: EventHandler<()>) -> Element {
    let auth = use_auth();
    let role = use_active_role();

    let auth_state = auth.read();
    if auth_state.loading {
        return rsx! { LoadingIndicator {} };
    }
    if auth_state.user.is_none() {
        return rsx! { ErrorMessage { message: "Sign in to start swiping." } };
    }

    let state = role.read();
    if !state.has_detected() {
        return rsx! { LoadingIndicator { message: "Setting things up..." } };
    }

    // Neither a renter profile nor a listing yet: nothing to swipe with
    if state.resource_id().is_none() {
        return rsx! {
            div {
                style: "display: flex; flex-direction: column; align-items: center; \
                        justify-content: center; flex: 1; gap: 1.5rem; padding: 2rem; \
                        min-height: 60vh;",
                p {
                    style: "font-size: 1.25rem; color: #6b7280; text-align: center; margin: 0;",
                    "Create a renter profile or a listing to start swiping."
                }
                Button {
                    onclick: move |_| on_get_started.call(()),
                    "Get started"
                }
            }
        };
    }

    rsx! {
        HomeSwiper {}
    }
}
