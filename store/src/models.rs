use serde::{Deserialize, Serialize};

/// The authenticated user, as persisted between launches.
///
/// This is the backend's login reply verbatim; the client never stores
/// credentials, only the identity the server vouched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
