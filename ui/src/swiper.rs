//! The home-screen swipe deck.
//!
//! Owns one [`SwipeSession`] per mount. The queue reloads whenever the
//! signed-in user or the equipped role/resource changes (a role switch
//! invalidates the queue outright; the superseded load future is dropped
//! with it). Submissions are fire-and-forget: the deck never waits on the
//! network and never rolls a gesture back.

use dioxus::prelude::*;

use crate::active_role::use_active_role;
use crate::auth::use_auth;
use crate::cards::{ListingCardContent, RenterCardContent};
use crate::components::{Button, ButtonVariant, ErrorMessage, LoadingIndicator};
use crate::swipe_session::{SwipePhase, SwipeSession};
use crate::use_api;

#[component]
pub fn HomeSwiper() -> Element {
    let auth = use_auth();
    let role = use_active_role();
    let client = use_api();
    let mut session = use_signal(SwipeSession::default);

    // Reload the queue whenever (user, role, resource) changes
    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            let user = auth.read().user;
            let state = role.read();
            let is_renter = state.is_renter();
            let resource_id = state.resource_id();

            async move {
                session.set(SwipeSession::default());
                if user.is_none() {
                    return;
                }
                let Some(resource_id) = resource_id else {
                    session.with_mut(|session| session.queue_loaded(Vec::new()));
                    return;
                };
                match client.fetch_candidates(is_renter, resource_id).await {
                    Ok(queue) => session.with_mut(|session| session.queue_loaded(queue)),
                    Err(err) => session.with_mut(|session| session.load_failed(err.to_string())),
                }
            }
        });
    }

    // The confetti burst clears itself after a short run
    use_effect(move || {
        if session().confetti() {
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
                session.with_mut(|session| session.clear_confetti());
            });
        }
    });

    let state = role.read();
    let is_renter = state.is_renter();
    let resource_id = state.resource_id();

    let swipe = {
        let client = client.clone();
        move |is_right: bool| {
            let index = session().cursor();
            let submission = session.with_mut(|session| {
                session.record_gesture(index, is_right, is_renter, resource_id)
            });
            let Some(submission) = submission else { return };

            let client = client.clone();
            spawn(async move {
                let outcome = client
                    .submit_swipe(
                        submission.is_renter,
                        submission.resource_id,
                        &submission.request(),
                    )
                    .await;
                match outcome {
                    Ok(response) => session.with_mut(|session| {
                        session.apply_swipe_response(index, &response, submission.is_renter)
                    }),
                    // The gesture already advanced the queue; losing the
                    // server record is the accepted cost.
                    Err(err) => tracing::error!(%err, "swipe submission failed"),
                }
            });
        }
    };
    let mut swipe_left = swipe.clone();
    let mut swipe_right = swipe;

    let mut on_recommendations = {
        let client = client.clone();
        move |_| {
            let Some(resource_id) = resource_id else { return };
            let client = client.clone();
            session.with_mut(|session| session.begin_load());
            spawn(async move {
                match client.fetch_recommendations(resource_id).await {
                    Ok(queue) => {
                        session.with_mut(|session| session.recommendations_loaded(queue))
                    }
                    Err(err) => session.with_mut(|session| session.load_failed(err.to_string())),
                }
            });
        }
    };

    let snapshot = session();
    let out_of_label = if is_renter { "listings" } else { "renters" };

    let body = match snapshot.phase() {
        SwipePhase::Loading => rsx! {
            LoadingIndicator {}
        },
        SwipePhase::Error(message) => rsx! {
            ErrorMessage { message }
        },
        SwipePhase::Exhausted => rsx! {
            div {
                style: "display: flex; flex-direction: column; align-items: center; \
                        justify-content: center; flex: 1; gap: 1.5rem; padding: 2rem;",
                if snapshot.queue_is_empty() {
                    p {
                        style: "font-size: 1.5rem; font-weight: 700; color: #9ca3af; text-align: center;",
                        "No matches found."
                    }
                } else {
                    p {
                        style: "font-size: 1.5rem; font-weight: 700; color: #9ca3af; text-align: center;",
                        "Out of {out_of_label} :("
                    }
                    if snapshot.can_offer_recommendations(is_renter) {
                        Button {
                            onclick: move |_| on_recommendations(()),
                            "See what others are swiping on"
                        }
                    }
                }
            }
        },
        SwipePhase::Ready => {
            let candidate = snapshot.current().cloned();
            rsx! {
                if let Some(candidate) = candidate {
                    div {
                        style: "display: flex; flex-direction: column; flex: 1; max-width: 36rem; \
                                margin: 0 auto; padding: 1.75rem; background: white; \
                                border-radius: 1rem; box-shadow: 0 4px 12px rgba(0,0,0,0.08);",
                        div {
                            style: "flex: 1; overflow: hidden;",
                            if is_renter {
                                ListingCardContent { candidate: candidate.clone() }
                            } else {
                                RenterCardContent { candidate: candidate.clone() }
                            }
                        }
                        div {
                            style: "display: flex; justify-content: center; gap: 2rem; margin-top: 0.5rem;",
                            button {
                                style: "width: 3.5rem; height: 3.5rem; border-radius: 9999px; \
                                        border: none; background: #f3f4f6; font-size: 1.5rem; cursor: pointer;",
                                onclick: move |_| swipe_left(false),
                                "✕"
                            }
                            button {
                                style: "width: 3.5rem; height: 3.5rem; border-radius: 9999px; \
                                        border: none; background: #f3f4f6; font-size: 1.5rem; cursor: pointer;",
                                onclick: move |_| swipe_right(true),
                                "♥"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "position: relative; display: flex; flex-direction: column; flex: 1; \
                    background: white; padding: 1rem;",
            {body}

            if let Some(name) = snapshot.celebration() {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; \
                            justify-content: center; background: rgba(0,0,0,0.4); z-index: 10;",
                    div {
                        style: "background: white; border-radius: 1rem; padding: 2rem 1.5rem; \
                                display: flex; flex-direction: column; align-items: center; gap: 1rem; \
                                max-width: 20rem; text-align: center;",
                        span { style: "font-size: 3rem;", "💚" }
                        h2 { style: "margin: 0; font-size: 1.5rem; color: #1f2937;", "It's a Match!" }
                        p {
                            style: "margin: 0; color: #6b7280;",
                            "You matched with {name}, check the matches tab for more details"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| session.with_mut(|session| session.dismiss_celebration()),
                            "Awesome!"
                        }
                    }
                }
            }

            if snapshot.confetti() {
                div {
                    style: "position: absolute; top: 0; left: 0; right: 0; display: flex; \
                            justify-content: center; font-size: 2rem; z-index: 11; pointer-events: none;",
                    "🎉🎉🎉"
                }
            }
        }
    }
}
