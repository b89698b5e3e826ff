//! Address autocomplete, proxied through the backend.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

/// One autocomplete suggestion for a partial address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressPrediction {
    pub description: String,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Deserialize)]
struct PredictionsReply {
    #[serde(default)]
    predictions: Vec<AddressPrediction>,
}

impl ApiClient {
    /// Predictions for a partial address the user is typing.
    pub async fn address_predictions(
        &self,
        input: &str,
    ) -> Result<Vec<AddressPrediction>, ApiError> {
        let path = format!("/locations/{input}");
        let reply: PredictionsReply = self.get(&path).await?;
        Ok(reply.predictions)
    }
}
