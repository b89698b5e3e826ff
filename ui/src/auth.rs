//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionStore, SessionUser};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the persisted session has been read on launch.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Handle over the shared authentication state.
#[derive(Clone, Copy)]
pub struct Auth {
    state: Signal<AuthState>,
}

impl Auth {
    pub fn read(&self) -> AuthState {
        (self.state)()
    }

    pub fn user_id(&self) -> Option<i64> {
        (self.state)().user.map(|user| user.id)
    }

    /// Persist the user on device and mark the session signed in.
    pub fn sign_in(&mut self, user: SessionUser) {
        let mut state = self.state;
        spawn(async move {
            let store = crate::session::make_session_store();
            store.save(&user).await;
            state.set(AuthState {
                user: Some(user),
                loading: false,
            });
        });
    }

    /// Clear the persisted session and sign out.
    pub fn sign_out(&mut self) {
        let mut state = self.state;
        spawn(async move {
            let store = crate::session::make_session_store();
            store.clear().await;
            state.set(AuthState {
                user: None,
                loading: false,
            });
        });
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut state = use_signal(AuthState::default);

    // Restore the persisted user on launch
    let _ = use_resource(move || async move {
        let store = crate::session::make_session_store();
        let user = store.load().await;
        state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| Auth { state });

    rsx! {
        {children}
    }
}
