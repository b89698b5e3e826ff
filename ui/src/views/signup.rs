//! Account creation form.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Button, Input, Label};
use crate::use_api;

fn validate(email: &str, first_name: &str, last_name: &str, password: &str) -> Option<String> {
    if email.is_empty() || !email.contains('@') {
        return Some("Enter a valid email address".to_string());
    }
    if first_name.is_empty() || last_name.is_empty() {
        return Some("First and last name are required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

#[component]
pub fn Signup(on_signed_up: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_api();

    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut submit = {
        let client = client.clone();
        move |_| {
            let email_value = email().trim().to_lowercase();
            let first = first_name().trim().to_string();
            let last = last_name().trim().to_string();
            let password_value = password();

            if let Some(message) = validate(&email_value, &first, &last, &password_value) {
                error.set(Some(message));
                return;
            }

            busy.set(true);
            error.set(None);
            let client = client.clone();
            spawn(async move {
                let request = api::SignupRequest {
                    email: email_value.clone(),
                    first_name: first,
                    last_name: last,
                    password: password_value.clone(),
                    profile_photo: None,
                };
                let outcome = match client.signup(&request).await {
                    Ok(_) => {
                        // Log straight in with the new credentials
                        client
                            .login(&api::Credentials {
                                email: email_value,
                                password: password_value,
                            })
                            .await
                    }
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(user) => {
                        auth.sign_in(user);
                        on_signed_up.call(());
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
            style: "display: flex; flex-direction: column; justify-content: center; \
                    min-height: 100vh; padding: 2rem; background: white; max-width: 24rem; margin: 0 auto;",

            h1 { style: "margin: 0 0 1.5rem 0; font-size: 1.5rem; color: #1f2937;", "Create an account" }

            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "signup-first", "First name" }
                Input {
                    id: "signup-first",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "signup-last", "Last name" }
                Input {
                    id: "signup-last",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "signup-email", "Email" }
                Input {
                    id: "signup-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "signup-password", "Password" }
                Input {
                    id: "signup-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            if let Some(message) = error() {
                p { style: "color: #ef4444; margin: 0 0 1rem 0; font-size: 0.875rem;", "{message}" }
            }

            Button {
                disabled: busy(),
                onclick: move |_| submit(()),
                if busy() { "Creating account..." } else { "Sign up" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert!(validate("", "A", "B", "longenough").is_some());
        assert!(validate("no-at-sign", "A", "B", "longenough").is_some());
        assert!(validate("a@b.c", "", "B", "longenough").is_some());
        assert!(validate("a@b.c", "A", "B", "short").is_some());
        assert!(validate("a@b.c", "A", "B", "longenough").is_none());
    }
}
