//! Filesystem-backed session store.
//!
//! Persists the signed-in user as `session.json` under a caller-supplied
//! base directory; the launcher passes the platform data dir. All I/O is
//! best-effort: an unreadable or unparsable file reads as signed-out.

use std::path::PathBuf;

use crate::models::SessionUser;
use crate::session::SessionStore;

/// Filesystem-backed SessionStore for on-device persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join("session.json")
    }
}

impl SessionStore for FileStore {
    async fn load(&self) -> Option<SessionUser> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&content).ok()
    }

    async fn save(&self, user: &SessionUser) {
        let _ = std::fs::create_dir_all(&self.base);
        if let Ok(content) = serde_json::to_string(user) {
            let _ = std::fs::write(self.session_path(), content);
        }
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 2,
            email: "noor@example.com".into(),
            first_name: "Noor".into(),
            last_name: "Patel".into(),
            profile_photo: Some("http://x/p.jpg".into()),
        }
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("subletswipe_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.save(&sample_user()).await;

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone());
        let loaded = store2.load().await.unwrap();
        assert_eq!(loaded, sample_user());

        store2.clear().await;
        assert!(store2.load().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_corrupt_session_reads_as_signed_out() {
        let dir = std::env::temp_dir().join(format!("subletswipe_corrupt_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(dir.join("session.json"), "{not json").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.load().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
