//! Mutual matches for the active resource.

use dioxus::prelude::*;

use api::MatchCandidate;

use crate::active_role::use_active_role;
use crate::cards::{ListingCardContent, RenterCardContent};
use crate::components::{ErrorMessage, LoadingIndicator};
use crate::use_api;

async fn load_matches(
    client: api::ApiClient,
    is_renter: bool,
    resource_id: Option<i64>,
) -> Result<Vec<MatchCandidate>, String> {
    let Some(resource_id) = resource_id else {
        return Ok(Vec::new());
    };

    let mut cards = Vec::new();
    if is_renter {
        let ids = client
            .mutual_match_listing_ids(resource_id)
            .await
            .map_err(|err| err.to_string())?;
        for id in ids {
            match client.get_listing(id).await {
                Ok(listing) => cards.push(MatchCandidate::from_listing(listing)),
                Err(err) => tracing::warn!(%err, id, "skipping unloadable matched listing"),
            }
        }
    } else {
        let ids = client
            .mutual_match_renter_ids(resource_id)
            .await
            .map_err(|err| err.to_string())?;
        for id in ids {
            match client.get_renter_profile(id).await {
                Ok(profile) => cards.push(MatchCandidate::from_renter_profile(profile)),
                Err(err) => tracing::warn!(%err, id, "skipping unloadable matched profile"),
            }
        }
    }
    Ok(cards)
}

#[component]
pub fn Matches() -> Element {
    let role = use_active_role();
    let client = use_api();

    let state = role.read();
    let is_renter = state.is_renter();

    // Re-fetch whenever the equipped role/resource changes
    let matches = use_resource(move || {
        let client = client.clone();
        let state = role.read();
        let is_renter = state.is_renter();
        let resource_id = state.resource_id();
        async move { load_matches(client, is_renter, resource_id).await }
    });

    let body = match matches() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(message)) => rsx! { ErrorMessage { message } },
        Some(Ok(cards)) if cards.is_empty() => rsx! {
            p {
                style: "color: #9ca3af; text-align: center; padding: 3rem 1rem; margin: 0;",
                "No mutual matches yet. Keep swiping!"
            }
        },
        Some(Ok(cards)) => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 1rem;",
                for card in cards {
                    div {
                        key: "{card.id}-{card.renter_id.unwrap_or(0)}",
                        style: "background: white; border-radius: 1rem; padding: 1.25rem; \
                                box-shadow: 0 2px 8px rgba(0,0,0,0.06);",
                        if is_renter {
                            ListingCardContent { candidate: card.clone() }
                        } else {
                            RenterCardContent { candidate: card.clone() }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding: 1.5rem; max-width: 36rem; margin: 0 auto;",
            h1 { style: "margin: 0 0 1rem 0; font-size: 1.5rem; color: #1f2937;", "Your matches" }
            {body}
        }
    }
}
