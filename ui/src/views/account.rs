//! Account management: role switching, listing selection, sign-out.

use dioxus::prelude::*;

use crate::active_role::use_active_role;
use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant, ErrorMessage};
use crate::use_api;

#[component]
pub fn Account(on_signed_out: EventHandler<()>, on_edit_profile: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut role = use_active_role();
    let client = use_api();

    let auth_state = auth.read();
    let Some(user) = auth_state.user else {
        return rsx! { ErrorMessage { message: "Sign in to manage your account." } };
    };
    let user_id = user.id;
    let display_name = user.display_name();

    let state = role.read();
    let is_renter = state.is_renter();
    let resource_id = state.resource_id();
    let has_profile = state.renter_profile_id().is_some();
    let listing_ids = state.listing_ids().to_vec();

    let mut switch_role = {
        let client = client.clone();
        move |to_renter: bool| {
            role.set_is_renter(to_renter);
            let client = client.clone();
            spawn(async move {
                role.refresh(&client, user_id).await;
            });
        }
    };

    let mut deactivate = {
        let client = client.clone();
        move |_| {
            let Some(listing_id) = resource_id else { return };
            let client = client.clone();
            spawn(async move {
                match client.deactivate_listing(listing_id).await {
                    Ok(()) => role.refresh(&client, user_id).await,
                    Err(err) => tracing::warn!(%err, listing_id, "failed to deactivate listing"),
                }
            });
        }
    };

    let role_label = if is_renter {
        "Swiping as a renter"
    } else {
        "Swiping as a lister"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding: 2rem; background: white; \
                    max-width: 28rem; margin: 0 auto; gap: 1.5rem;",

            div {
                h1 { style: "margin: 0; font-size: 1.5rem; color: #1f2937;", "{display_name}" }
                p { style: "margin: 0.25rem 0 0 0; color: #6b7280;", "{user.email}" }
            }

            div {
                h2 { style: "margin: 0 0 0.5rem 0; font-size: 1rem; color: #374151;", "Active role" }
                p { style: "margin: 0 0 0.75rem 0; color: #6b7280; font-size: 0.875rem;", "{role_label}" }
                div {
                    style: "display: flex; gap: 0.75rem;",
                    Button {
                        variant: if is_renter { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: {
                            let mut switch_role = switch_role.clone();
                            move |_| switch_role(true)
                        },
                        "Renter"
                    }
                    Button {
                        variant: if is_renter { ButtonVariant::Outline } else { ButtonVariant::Primary },
                        onclick: move |_| switch_role(false),
                        "Lister"
                    }
                }
                if is_renter && !has_profile {
                    p {
                        style: "margin: 0.75rem 0 0 0; color: #9ca3af; font-size: 0.875rem;",
                        "No renter profile yet."
                    }
                }
            }

            if is_renter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit_profile.call(()),
                    if has_profile { "Edit renter profile" } else { "Create renter profile" }
                }
            }

            if !is_renter && !listing_ids.is_empty() {
                div {
                    h2 { style: "margin: 0 0 0.5rem 0; font-size: 1rem; color: #374151;", "Your listings" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 0.5rem;",
                        for id in listing_ids.clone() {
                            Button {
                                variant: if resource_id == Some(id) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                onclick: move |_| role.set_resource_id(id),
                                "Listing #{id}"
                            }
                        }
                    }
                    if resource_id.is_some() {
                        div {
                            style: "margin-top: 0.75rem;",
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: move |_| deactivate(()),
                                "Deactivate this listing"
                            }
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    auth.sign_out();
                    on_signed_out.call(());
                },
                "Sign out"
            }
        }
    }
}
