use std::sync::{Arc, Mutex};

use crate::models::SessionUser;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    user: Arc<Mutex<Option<SessionUser>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }

    async fn save(&self, user: &SessionUser) {
        *self.user.lock().unwrap() = Some(user.clone());
    }

    async fn clear(&self) {
        *self.user.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 1,
            email: "sam@example.com".into(),
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            profile_photo: None,
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        store.save(&sample_user()).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.id, 1);
        assert_eq!(loaded.display_name(), "Sam Lee");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::new();
        store.save(&sample_user()).await;
        store.clear().await;
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&sample_user()).await;
        assert!(other.load().await.is_some());
    }
}
