use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the backend or the photo host.
///
/// Non-2xx replies keep the response body as the displayable message, so a
/// screen can show exactly what the server said.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether this failure is a plain 404, so lookups can map it to `None`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
