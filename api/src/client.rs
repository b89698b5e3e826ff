//! Thin JSON wrapper over the backend HTTP API.
//!
//! [`ApiClient`] is cheap to clone (the inner `reqwest::Client` is a shared
//! handle) and is provided once at the application root. Endpoint methods
//! live in the sibling resource modules; this module only knows how to send
//! a request and turn a non-2xx reply into an [`ApiError`] carrying the
//! response body text.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Photos, Settings};
use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) photos: Photos,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            photos: Photos::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut client = Self::new(settings.backend.url.clone());
        client.photos = settings.photos.clone();
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PATCH");
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/login"), "http://localhost:8000/login");
    }
}
