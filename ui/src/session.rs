//! Platform session-store constructor.

use store::FileStore;

/// Create the on-device session store, rooted at the platform data dir
/// (`~/.local/share/subletswipe/` on Linux, app-internal storage on
/// Android, `~/Library/Application Support/subletswipe/` on iOS/macOS).
pub fn make_session_store() -> FileStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("subletswipe");
    FileStore::new(base)
}
