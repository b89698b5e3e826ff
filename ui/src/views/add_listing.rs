//! Listing creation form.
//!
//! On success the new listing is equipped immediately via the explicit
//! role path — the resource lists can't know the fresh id yet — and a
//! refresh is kicked off to confirm it.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::active_role::use_active_role;
use crate::auth::use_auth;
use crate::components::{Button, Checkbox, Input, Label};
use crate::use_api;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn AddListing(on_created: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut role = use_active_role();
    let client = use_api();

    let mut address = use_signal(String::new);
    let mut predictions = use_signal(Vec::<api::AddressPrediction>::new);
    let mut price = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut bedrooms = use_signal(|| "1".to_string());
    let mut bathrooms = use_signal(|| "1".to_string());
    let mut pet_friendly = use_signal(|| false);
    let mut utilities_incl = use_signal(|| false);
    let mut description = use_signal(String::new);
    let mut photos = use_signal(Vec::<api::Photo>::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut on_address_input = {
        let client = client.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            address.set(value.clone());
            if value.trim().len() < 3 {
                predictions.set(Vec::new());
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.address_predictions(value.trim()).await {
                    Ok(found) => predictions.set(found),
                    Err(err) => tracing::warn!(%err, "address autocomplete failed"),
                }
            });
        }
    };

    let mut on_photo_picked = {
        let client = client.clone();
        move |evt: FormEvent| {
            let Some(file_engine) = evt.files() else { return };
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let Some(bytes) = file_engine.read_file(&name).await else {
                    return;
                };
                match client.upload_photo(bytes, &name).await {
                    Ok(uploaded) => photos.with_mut(|photos| {
                        photos.push(api::Photo {
                            url: uploaded.secure_url,
                            label: None,
                            public_id: Some(uploaded.public_id),
                        })
                    }),
                    // Losing the photo only costs the photo, never the form
                    Err(err) => tracing::warn!(%err, "photo upload failed"),
                }
            });
        }
    };

    let mut remove_photo = {
        let client = client.clone();
        move |index: usize| {
            let removed = photos.with_mut(|photos| {
                if index < photos.len() {
                    Some(photos.remove(index))
                } else {
                    None
                }
            });
            let Some(removed) = removed else { return };
            let Some(public_id) = removed.public_id else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                if let Err(err) = client.delete_photos(&[public_id]).await {
                    tracing::warn!(%err, "photo deletion failed");
                }
            });
        }
    };

    let mut submit = {
        let client = client.clone();
        move |_| {
            let Some(user_id) = auth.user_id() else {
                error.set(Some("Sign in to create a listing".to_string()));
                return;
            };

            let address_value = address().trim().to_string();
            if address_value.is_empty() {
                error.set(Some("Address is required".to_string()));
                return;
            }
            let Ok(asking_price) = price().trim().parse::<f64>() else {
                error.set(Some("Enter a monthly price".to_string()));
                return;
            };
            let (Some(start), Some(end)) = (parse_date(&start_date()), parse_date(&end_date()))
            else {
                error.set(Some("Dates must be YYYY-MM-DD".to_string()));
                return;
            };
            if end < start {
                error.set(Some("End date must come after the start date".to_string()));
                return;
            }
            let num_bedrooms = bedrooms().trim().parse::<i32>().unwrap_or(1);
            let num_bathrooms = bathrooms().trim().parse::<i32>().unwrap_or(1);

            let draft = api::ListingDraft {
                user_id,
                address: address_value,
                asking_price,
                start_date: Some(start),
                end_date: Some(end),
                num_bedrooms,
                num_bathrooms,
                pet_friendly: pet_friendly(),
                utilities_incl: utilities_incl(),
                description: Some(description().trim().to_string()).filter(|d| !d.is_empty()),
                amenities: Vec::new(),
                photos: photos(),
            };

            busy.set(true);
            error.set(None);
            let client = client.clone();
            spawn(async move {
                match client.create_listing(&draft).await {
                    Ok(created) => {
                        // Equip the brand-new listing before the lists know it
                        role.set_role(false, created.id);
                        role.refresh(&client, user_id).await;
                        on_created.call(());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; padding: 2rem; background: white; \
                    max-width: 28rem; margin: 0 auto;",

            h1 { style: "margin: 0 0 1.5rem 0; font-size: 1.5rem; color: #1f2937;", "Add a listing" }

            div {
                style: "margin-bottom: 1rem; position: relative;",
                Label { html_for: "listing-address", "Address" }
                Input {
                    id: "listing-address",
                    placeholder: "Start typing an address...",
                    value: address(),
                    oninput: move |evt: FormEvent| on_address_input(evt),
                }
                if !predictions().is_empty() {
                    div {
                        style: "border: 1px solid #e5e7eb; border-radius: 0.375rem; margin-top: 0.25rem;",
                        for prediction in predictions() {
                            button {
                                key: "{prediction.description}",
                                style: "display: block; width: 100%; text-align: left; padding: 0.5rem 0.75rem; \
                                        background: white; border: none; cursor: pointer; font-size: 0.875rem;",
                                onclick: {
                                    let description = prediction.description.clone();
                                    move |_| {
                                        address.set(description.clone());
                                        predictions.set(Vec::new());
                                    }
                                },
                                "{prediction.description}"
                            }
                        }
                    }
                }
            }

            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "listing-price", "Asking price ($/month)" }
                Input {
                    id: "listing-price",
                    r#type: "number",
                    placeholder: "1200",
                    value: price(),
                    oninput: move |evt: FormEvent| price.set(evt.value()),
                }
            }

            div {
                style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
                div {
                    style: "flex: 1;",
                    Label { html_for: "listing-start", "Start date" }
                    Input {
                        id: "listing-start",
                        placeholder: "2026-05-01",
                        value: start_date(),
                        oninput: move |evt: FormEvent| start_date.set(evt.value()),
                    }
                }
                div {
                    style: "flex: 1;",
                    Label { html_for: "listing-end", "End date" }
                    Input {
                        id: "listing-end",
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
                    Label { html_for: "listing-bedrooms", "Bedrooms" }
                    Input {
                        id: "listing-bedrooms",
                        r#type: "number",
                        value: bedrooms(),
                        oninput: move |evt: FormEvent| bedrooms.set(evt.value()),
                    }
                }
                div {
                    style: "flex: 1;",
                    Label { html_for: "listing-bathrooms", "Bathrooms" }
                    Input {
                        id: "listing-bathrooms",
                        r#type: "number",
                        value: bathrooms(),
                        oninput: move |evt: FormEvent| bathrooms.set(evt.value()),
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1rem;",
                Checkbox {
                    id: "listing-pets",
                    checked: pet_friendly(),
                    onchange: move |_| pet_friendly.set(!pet_friendly()),
                    label: "Pet friendly",
                }
                Checkbox {
                    id: "listing-utilities",
                    checked: utilities_incl(),
                    onchange: move |_| utilities_incl.set(!utilities_incl()),
                    label: "Utilities included",
                }
            }

            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "listing-description", "Description" }
                Input {
                    id: "listing-description",
                    placeholder: "Sunny room near campus...",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div {
                style: "margin-bottom: 1.5rem;",
                Label { html_for: "listing-photos", "Photos" }
                input {
                    id: "listing-photos",
                    r#type: "file",
                    accept: "image/*",
                    style: "margin-top: 0.375rem;",
                    onchange: move |evt: FormEvent| on_photo_picked(evt),
                }
                div {
                    style: "display: flex; gap: 0.5rem; flex-wrap: wrap; margin-top: 0.5rem;",
                    for (index, photo) in photos().into_iter().enumerate() {
                        div {
                            key: "{photo.url}",
                            style: "position: relative;",
                            img {
                                src: "{photo.url}",
                                style: "width: 4.5rem; height: 4.5rem; object-fit: cover; border-radius: 0.375rem;",
                            }
                            button {
                                style: "position: absolute; top: -0.375rem; right: -0.375rem; \
                                        width: 1.25rem; height: 1.25rem; border-radius: 9999px; \
                                        border: none; background: #ef4444; color: white; \
                                        font-size: 0.75rem; cursor: pointer;",
                                onclick: {
                                    let mut remove_photo = remove_photo.clone();
                                    move |_| remove_photo(index)
                                },
                                "✕"
                            }
                        }
                    }
                }
            }

            if let Some(message) = error() {
                p { style: "color: #ef4444; margin: 0 0 1rem 0; font-size: 0.875rem;", "{message}" }
            }

            Button {
                disabled: busy(),
                onclick: move |_| submit(()),
                if busy() { "Creating..." } else { "Create listing" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_date;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-05-01").is_some());
        assert!(parse_date(" 2026-05-01 ").is_some());
        assert!(parse_date("05/01/2026").is_none());
        assert!(parse_date("").is_none());
    }
}
