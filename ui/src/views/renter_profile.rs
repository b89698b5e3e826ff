//! Renter-profile form: create on first visit, update afterwards.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::active_role::use_active_role;
use crate::auth::use_auth;
use crate::components::{Button, Input, Label};
use crate::use_api;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn RenterProfileForm(on_saved: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut role = use_active_role();
    let client = use_api();

    let existing_id = role.read().renter_profile_id();

    let mut budget = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut bedrooms = use_signal(|| "1".to_string());
    let mut bathrooms = use_signal(|| "1".to_string());
    let mut bio = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut prefilled = use_signal(|| false);

    // Prefill once from the existing profile, if there is one
    let profile = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                match existing_id {
                    Some(id) => client.get_renter_profile(id).await.ok(),
                    None => None,
                }
            }
        })
    };
    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Some(existing)) = profile() {
            budget.set(format!("{:.0}", existing.budget));
            location.set(existing.location.unwrap_or_default());
            start_date.set(
                existing
                    .start_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            );
            end_date.set(
                existing
                    .end_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            );
            bedrooms.set(existing.num_bedrooms.unwrap_or(1).to_string());
            bathrooms.set(existing.num_bathrooms.unwrap_or(1).to_string());
            bio.set(existing.bio.unwrap_or_default());
            prefilled.set(true);
        }
    });

    let mut submit = {
        let client = client.clone();
        move |_| {
            let Some(user_id) = auth.user_id() else {
                error.set(Some("Sign in to create a profile".to_string()));
                return;
            };
            let Ok(budget_value) = budget().trim().parse::<f64>() else {
                error.set(Some("Enter a monthly budget".to_string()));
                return;
            };
            let location_value = location().trim().to_string();
            if location_value.is_empty() {
                error.set(Some("Where are you looking?".to_string()));
                return;
            }
            let (Some(start), Some(end)) = (parse_date(&start_date()), parse_date(&end_date()))
            else {
                error.set(Some("Dates must be YYYY-MM-DD".to_string()));
                return;
            };
            if end < start {
                error.set(Some("End date must come after the start date".to_string()));
                return;
            }

            let draft = api::RenterProfileDraft {
                user_id,
                budget: budget_value,
                location: location_value,
                start_date: Some(start),
                end_date: Some(end),
                num_bedrooms: bedrooms().trim().parse().unwrap_or(1),
                num_bathrooms: bathrooms().trim().parse().unwrap_or(1),
                bio: Some(bio().trim().to_string()).filter(|b| !b.is_empty()),
            };

            busy.set(true);
            error.set(None);
            let client = client.clone();
            spawn(async move {
                let outcome = match existing_id {
                    Some(id) => client.update_renter_profile(id, &draft).await,
                    None => match client.create_renter_profile(&draft).await {
                        Ok(created) => {
                            // Equip the brand-new profile right away
                            role.set_role(true, created.id);
                            Ok(())
                        }
                        Err(err) => Err(err),
                    },
                };
                match outcome {
                    Ok(()) => {
                        role.refresh(&client, user_id).await;
                        on_saved.call(());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let title = if existing_id.is_some() {
        "Update your renter profile"
    } else {
        "Create your renter profile"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding: 2rem; background: white; \
                    max-width: 28rem; margin: 0 auto;",

            h1 { style: "margin: 0 0 1.5rem 0; font-size: 1.5rem; color: #1f2937;", "{title}" }

            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "profile-budget", "Budget ($/month)" }
                Input {
                    id: "profile-budget",
                    r#type: "number",
                    placeholder: "900",
                    value: budget(),
                    oninput: move |evt: FormEvent| budget.set(evt.value()),
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "profile-location", "Desired location" }
                Input {
                    id: "profile-location",
                    placeholder: "Waterloo, ON",
                    value: location(),
                    oninput: move |evt: FormEvent| location.set(evt.value()),
                }
            }
            div {
                style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
                div {
                    style: "flex: 1;",
                    Label { html_for: "profile-start", "Start date" }
                    Input {
                        id: "profile-start",
                        placeholder: "2026-05-01",
                        value: start_date(),
                        oninput: move |evt: FormEvent| start_date.set(evt.value()),
                    }
                }
                div {
                    style: "flex: 1;",
                    Label { html_for: "profile-end", "End date" }
                    Input {
                        id: "profile-end",
                        placeholder: "2026-08-31",
                        value: end_date(),
                        oninput: move |evt: FormEvent| end_date.set(evt.value()),
                    }
                }
            }
            div {
                style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
                div {
                    style: "flex: 1;",
                    Label { html_for: "profile-bedrooms", "Bedrooms" }
                    Input {
                        id: "profile-bedrooms",
                        r#type: "number",
                        value: bedrooms(),
                        oninput: move |evt: FormEvent| bedrooms.set(evt.value()),
                    }
                }
                div {
                    style: "flex: 1;",
                    Label { html_for: "profile-bathrooms", "Bathrooms" }
                    Input {
                        id: "profile-bathrooms",
                        r#type: "number",
                        value: bathrooms(),
                        oninput: move |evt: FormEvent| bathrooms.set(evt.value()),
                    }
                }
            }
            div {
                style: "margin-bottom: 1.5rem;",
                Label { html_for: "profile-bio", "About you" }
                Input {
                    id: "profile-bio",
                    placeholder: "Grad student, tidy, no smoking...",
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }
            }

            if let Some(message) = error() {
                p { style: "color: #ef4444; margin: 0 0 1rem 0; font-size: 0.875rem;", "{message}" }
            }

            Button {
                disabled: busy(),
                onclick: move |_| submit(()),
                if busy() { "Saving..." } else { "Save profile" }
            }
        }
    }
}
