//! Credential authentication against the backend.

use store::SessionUser;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreatedResponse, Credentials, SignupRequest};

impl ApiClient {
    /// Exchange credentials for the signed-in user's identity.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        self.post("/login", credentials).await
    }

    /// Create an account. The caller still has to log in afterwards.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<CreatedResponse, ApiError> {
        self.post("/signup", signup).await
    }
}
