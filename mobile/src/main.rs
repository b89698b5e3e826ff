use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/welcome")]
    Welcome {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Shell)]
        #[route("/home")]
        Home {},
        #[route("/matches")]
        Matches {},
        #[route("/add-listing")]
        AddListing {},
        #[route("/renter-profile")]
        RenterProfile {},
        #[route("/account")]
        Account {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = api::Settings::new().unwrap_or_default();
    use_context_provider(|| api::ApiClient::from_settings(&settings));

    rsx! {
        ui::AuthProvider {
            ui::ActiveRoleProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    let state = auth.read();
    if state.loading {
        return rsx! { ui::components::LoadingIndicator {} };
    }
    if state.user.is_some() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Welcome {});
    }
    rsx! {}
}

/// Tab-bar layout around the signed-in screens.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100vh; background: white;",
            div {
                style: "flex: 1; display: flex; flex-direction: column;",
                Outlet::<Route> {}
            }
            nav {
                style: "display: flex; justify-content: space-around; border-top: 1px solid #e5e7eb; \
                        padding: 0.75rem 0; background: white;",
                Link {
                    to: Route::Home {},
                    span { style: "color: #374151; font-size: 0.9375rem;", "Swipe" }
                }
                Link {
                    to: Route::Matches {},
                    span { style: "color: #374151; font-size: 0.9375rem;", "Matches" }
                }
                Link {
                    to: Route::AddListing {},
                    span { style: "color: #374151; font-size: 0.9375rem;", "List" }
                }
                Link {
                    to: Route::Account {},
                    span { style: "color: #374151; font-size: 0.9375rem;", "Account" }
                }
            }
        }
    }
}

#[component]
fn Welcome() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::Welcome {
            on_login: move |_| { nav.push(Route::Login {}); },
            on_signup: move |_| { nav.push(Route::Signup {}); },
        }
    }
}

#[component]
fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::Login {
            on_signed_in: move |_| { nav.replace(Route::Home {}); },
        }
    }
}

#[component]
fn Signup() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::Signup {
            on_signed_up: move |_| { nav.replace(Route::Home {}); },
        }
    }
}

#[component]
fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::Home {
            on_get_started: move |_| { nav.push(Route::RenterProfile {}); },
        }
    }
}

#[component]
fn Matches() -> Element {
    rsx! {
        ui::views::Matches {}
    }
}

#[component]
fn AddListing() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::AddListing {
            on_created: move |_| { nav.replace(Route::Home {}); },
        }
    }
}

#[component]
fn RenterProfile() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::RenterProfileForm {
            on_saved: move |_| { nav.replace(Route::Home {}); },
        }
    }
}

#[component]
fn Account() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::Account {
            on_signed_out: move |_| { nav.replace(Route::Welcome {}); },
            on_edit_profile: move |_| { nav.push(Route::RenterProfile {}); },
        }
    }
}
