//! Active-role context: which identity the user is acting as.
//!
//! A user can hold both sides of the marketplace at once — one renter
//! profile and any number of listings. Exactly one resource is "equipped"
//! at a time and every screen reads it from here. [`ActiveRoleState`] is
//! the plain state machine (auto-detection, validation, explicit choice);
//! [`ActiveRoleProvider`] owns it as a context signal and keeps it in sync
//! with the server's resource lists. All mutation goes through the
//! [`ActiveRole`] handle's operations, never direct field writes.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::use_api;

/// Which of the user's resources is currently equipped.
///
/// `resource_id == None` means "no resource yet": the user has neither a
/// renter profile nor a listing and cannot swipe until they create one.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoleState {
    is_renter: bool,
    resource_id: Option<i64>,
    renter_profile_id: Option<i64>,
    listing_ids: Vec<i64>,
    /// Set once the user picks a role themselves; auto-detection then keeps
    /// its hands off `is_renter` until the session ends.
    explicit_role: bool,
    /// Set once at least one resource refresh has resolved.
    detected: bool,
}

impl Default for ActiveRoleState {
    fn default() -> Self {
        Self {
            is_renter: true,
            resource_id: None,
            renter_profile_id: None,
            listing_ids: Vec::new(),
            explicit_role: false,
            detected: false,
        }
    }
}

impl ActiveRoleState {
    pub fn is_renter(&self) -> bool {
        self.is_renter
    }

    pub fn resource_id(&self) -> Option<i64> {
        self.resource_id
    }

    pub fn renter_profile_id(&self) -> Option<i64> {
        self.renter_profile_id
    }

    pub fn listing_ids(&self) -> &[i64] {
        &self.listing_ids
    }

    /// Whether auto-detection has run against server state at least once.
    pub fn has_detected(&self) -> bool {
        self.detected
    }

    /// Record the latest server-reported resources and re-derive the active
    /// role, unless the user has explicitly chosen one — an explicit choice
    /// only ever gets its resource id revalidated, never its side flipped.
    pub fn apply_resources(&mut self, renter_profile_id: Option<i64>, listing_ids: Vec<i64>) {
        self.renter_profile_id = renter_profile_id;
        self.listing_ids = listing_ids;
        self.detected = true;

        if self.explicit_role {
            if self.is_renter {
                self.resource_id = self.renter_profile_id;
            } else if !self
                .resource_id
                .is_some_and(|id| self.listing_ids.contains(&id))
            {
                self.resource_id = self.listing_ids.first().copied();
            }
            return;
        }

        if let Some(profile_id) = self.renter_profile_id {
            // Renter wins ties
            self.is_renter = true;
            self.resource_id = Some(profile_id);
        } else if let Some(first) = self.listing_ids.first() {
            self.is_renter = false;
            self.resource_id = Some(*first);
        } else {
            self.is_renter = true;
            self.resource_id = None;
        }
    }

    /// Equip a resource for the current role. Ids outside the role's
    /// permitted set are rejected and the state is left unchanged; screens
    /// are allowed to pass optimistic or stale ids.
    pub fn set_resource_id(&mut self, id: i64) -> bool {
        let valid = if self.is_renter {
            self.renter_profile_id == Some(id)
        } else {
            self.listing_ids.contains(&id)
        };
        if valid {
            self.resource_id = Some(id);
        }
        valid
    }

    /// Atomically equip a role and resource, skipping validation. Used when
    /// the user onboards into a brand-new resource whose id the last list
    /// fetch cannot know about yet.
    pub fn set_role(&mut self, is_renter: bool, resource_id: i64) {
        self.is_renter = is_renter;
        self.resource_id = Some(resource_id);
        self.explicit_role = true;
    }

    /// Switch sides without touching the resource id; the next refresh
    /// reconciles it for the new role.
    pub fn set_is_renter(&mut self, is_renter: bool) {
        self.is_renter = is_renter;
        self.explicit_role = true;
    }
}

/// Handle over the process-wide active-role state.
#[derive(Clone, Copy)]
pub struct ActiveRole {
    state: Signal<ActiveRoleState>,
    generation: Signal<u64>,
}

impl ActiveRole {
    pub fn read(&self) -> ActiveRoleState {
        (self.state)()
    }

    pub fn set_resource_id(&mut self, id: i64) {
        let accepted = self.state.with_mut(|state| state.set_resource_id(id));
        if !accepted {
            tracing::warn!(id, "rejected resource id outside the active role's set");
        }
    }

    pub fn set_role(&mut self, is_renter: bool, resource_id: i64) {
        self.state
            .with_mut(|state| state.set_role(is_renter, resource_id));
    }

    pub fn set_is_renter(&mut self, is_renter: bool) {
        self.state.with_mut(|state| state.set_is_renter(is_renter));
    }

    /// Fetch the user's renter-profile id and listing ids, then re-derive
    /// the active role from them.
    ///
    /// Safe to call repeatedly and concurrently with itself: each call bumps
    /// a generation counter and a response that lost the race is discarded,
    /// so a slow stale reply never clobbers a fresher one. A failed fetch
    /// leaves prior state untouched; callers may simply try again.
    pub async fn refresh(&mut self, client: &api::ApiClient, user_id: i64) {
        let generation = self.generation.with_mut(|generation| {
            *generation += 1;
            *generation
        });

        let (profile, listings) = futures::join!(
            client.fetch_renter_profile_id(user_id),
            client.fetch_listing_ids(user_id),
        );

        let (renter_profile_id, listing_ids) = match (profile, listings) {
            (Ok(renter_profile_id), Ok(listing_ids)) => (renter_profile_id, listing_ids),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(%err, "failed to refresh active-role resources");
                return;
            }
        };

        if (self.generation)() != generation {
            // A newer refresh is in flight; let it apply instead
            return;
        }

        self.state
            .with_mut(|state| state.apply_resources(renter_profile_id, listing_ids));
    }
}

/// Get the active-role handle.
pub fn use_active_role() -> ActiveRole {
    use_context::<ActiveRole>()
}

/// Provider component that owns the active-role state.
/// Must be mounted inside an [`crate::AuthProvider`].
#[component]
pub fn ActiveRoleProvider(children: Element) -> Element {
    let auth = use_auth();
    let state = use_signal(ActiveRoleState::default);
    let generation = use_signal(|| 0u64);
    let mut role = ActiveRole { state, generation };
    use_context_provider(|| role);

    let client = use_api();

    // Re-detect whenever the signed-in user changes
    use_effect(move || {
        let user = auth.read().user;
        let client = client.clone();
        if let Some(user) = user {
            spawn(async move {
                role.refresh(&client, user.id).await;
            });
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_renter_when_only_profile_exists() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(Some(42), vec![]);
        assert!(state.is_renter());
        assert_eq!(state.resource_id(), Some(42));
        assert!(state.has_detected());
    }

    #[test]
    fn test_detects_lister_when_only_listings_exist() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![7, 9]);
        assert!(!state.is_renter());
        assert_eq!(state.resource_id(), Some(7));
    }

    #[test]
    fn test_renter_wins_when_user_has_both() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(Some(42), vec![7, 9]);
        assert!(state.is_renter());
        assert_eq!(state.resource_id(), Some(42));
    }

    #[test]
    fn test_no_resources_means_renter_without_resource() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![]);
        assert!(state.is_renter());
        assert_eq!(state.resource_id(), None);
        assert!(state.has_detected());
    }

    #[test]
    fn test_explicit_role_survives_refresh() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(Some(42), vec![7, 9]);
        state.set_is_renter(false);

        // Auto-detection would pick renter again; the explicit choice holds.
        state.apply_resources(Some(42), vec![7, 9]);
        assert!(!state.is_renter());
        assert_eq!(state.resource_id(), Some(7));
    }

    #[test]
    fn test_explicit_lister_keeps_current_listing_if_still_owned() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![7, 9]);
        assert!(state.set_resource_id(9));

        state.set_is_renter(false);
        state.apply_resources(None, vec![7, 9, 11]);
        assert_eq!(state.resource_id(), Some(9));
    }

    #[test]
    fn test_explicit_lister_falls_back_when_listing_disappears() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![7, 9]);
        state.set_is_renter(false);
        assert!(state.set_resource_id(9));

        state.apply_resources(None, vec![7]);
        assert_eq!(state.resource_id(), Some(7));
    }

    #[test]
    fn test_refresh_updates_lists_even_when_role_unchanged() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(Some(42), vec![]);
        state.apply_resources(Some(42), vec![7]);
        assert_eq!(state.listing_ids(), &[7]);
        assert!(state.is_renter());
    }

    #[test]
    fn test_set_resource_id_rejects_foreign_ids() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(Some(42), vec![]);

        assert!(!state.set_resource_id(99));
        assert_eq!(state.resource_id(), Some(42));

        state.set_is_renter(false);
        assert!(!state.set_resource_id(42));
        assert_eq!(state.resource_id(), Some(42));
    }

    #[test]
    fn test_set_resource_id_accepts_owned_listing() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![7, 9]);
        assert!(state.set_resource_id(9));
        assert_eq!(state.resource_id(), Some(9));
    }

    #[test]
    fn test_set_role_bypasses_validation_for_new_resources() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![]);

        // Listing 31 was just created; the lists don't know it yet.
        state.set_role(false, 31);
        assert!(!state.is_renter());
        assert_eq!(state.resource_id(), Some(31));

        // The next refresh confirms it.
        state.apply_resources(None, vec![31]);
        assert!(!state.is_renter());
        assert_eq!(state.resource_id(), Some(31));
    }

    #[test]
    fn test_set_is_renter_leaves_resource_for_next_refresh() {
        let mut state = ActiveRoleState::default();
        state.apply_resources(None, vec![7]);
        assert_eq!(state.resource_id(), Some(7));

        state.set_is_renter(true);
        assert_eq!(state.resource_id(), Some(7));

        state.apply_resources(Some(42), vec![7]);
        assert!(state.is_renter());
        assert_eq!(state.resource_id(), Some(42));
    }
}
