//! Small shared controls.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn style(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "background: #10b981; color: white; border: none; \
                 padding: 0.625rem 1.25rem; border-radius: 9999px; \
                 font-size: 0.9375rem; font-weight: 600; cursor: pointer;"
            }
            ButtonVariant::Outline => {
                "background: white; color: #374151; border: 1px solid #d1d5db; \
                 padding: 0.625rem 1.25rem; border-radius: 9999px; \
                 font-size: 0.9375rem; font-weight: 500; cursor: pointer;"
            }
            ButtonVariant::Danger => {
                "background: #ef4444; color: white; border: none; \
                 padding: 0.625rem 1.25rem; border-radius: 9999px; \
                 font-size: 0.9375rem; font-weight: 600; cursor: pointer;"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            style: variant.style(),
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            style: "display: block; font-size: 0.875rem; font-weight: 500; color: #374151;",
            {children}
        }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            id: "{id}",
            r#type: "{type_attr}",
            placeholder: "{placeholder}",
            value: "{value}",
            style: "width: 100%; margin-top: 0.375rem; padding: 0.5rem 0.75rem; \
                    border: 1px solid #d1d5db; border-radius: 0.375rem; font-size: 0.9375rem;",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Checkbox(id: String, checked: bool, onchange: EventHandler<FormEvent>, label: String) -> Element {
    rsx! {
        label {
            r#for: "{id}",
            style: "display: flex; align-items: center; gap: 0.5rem; font-size: 0.9375rem; color: #374151;",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |evt| onchange.call(evt),
            }
            "{label}"
        }
    }
}

/// Centered spinner shown while something loads.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; flex: 1; padding: 3rem; color: #9ca3af;",
            "{message}"
        }
    }
}

/// Full-width error text in place of unloadable content.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; \
                    flex: 1; padding: 2rem; color: #ef4444; text-align: center;",
            "{message}"
        }
    }
}
