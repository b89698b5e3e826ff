//! Login form.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Button, Input, Label};
use crate::use_api;

#[component]
pub fn Login(on_signed_in: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let client = use_api();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut submit = {
        let client = client.clone();
        move |_| {
            let credentials = api::Credentials {
                email: email().trim().to_lowercase(),
                password: password(),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);
            let client = client.clone();
            spawn(async move {
                match client.login(&credentials).await {
                    Ok(user) => {
                        auth.sign_in(user);
                        on_signed_in.call(());
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

            h1 { style: "margin: 0 0 1.5rem 0; font-size: 1.5rem; color: #1f2937;", "Sign in" }

            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
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
                if busy() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
