use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Entry screen for signed-out users.
#[component]
pub fn Welcome(on_login: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; min-height: 100vh; padding: 2rem; \
                    background: white; gap: 0.75rem;",

            h1 {
                style: "margin: 0 0 0.25rem 0; color: #1f2937; font-weight: 700; font-size: 1.75rem;",
                "SubletSwipe"
            }
            p {
                style: "margin: 0 0 1.5rem 0; color: #6b7280; text-align: center;",
                "Find a sublet, or someone to take yours."
            }

            Button {
                onclick: move |_| on_signup.call(()),
                "Create an account"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_login.call(()),
                "Sign in"
            }
        }
    }
}
