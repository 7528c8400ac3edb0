//! Token issuance API client
//!
//! Consumes `POST /api/tokens/create`. Transport failures are folded into
//! the result struct at this boundary: callers always get a displayable
//! `CreateTokenResult`, never a propagated error. No retries; a failed
//! creation needs a new user-initiated attempt.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    pub supply: u64,
    pub description: String,
    pub image_url: String,
    pub creator_wallet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenResult {
    pub success: bool,
    #[serde(default)]
    pub mint_address: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateTokenResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            mint_address: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuanceClient {
    base_url: String,
    client: Client,
}

impl IssuanceClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Submit a creation request; every failure becomes a displayable
    /// `success: false` result
    pub async fn create_token(&self, request: &CreateTokenRequest) -> CreateTokenResult {
        let url = format!("{}/api/tokens/create", self.base_url);
        tracing::debug!(%url, symbol = %request.symbol, supply = request.supply, "creating token");

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "token creation request failed");
                return CreateTokenResult::failure(e.to_string());
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            // Failure payloads still carry a displayable error message
            if let Ok(result) = response.json::<CreateTokenResult>().await {
                tracing::warn!(%status, error = ?result.error, "token creation rejected");
                return result;
            }
            return CreateTokenResult::failure(format!("Server returned status {status}"));
        }

        match response.json::<CreateTokenResult>().await {
            Ok(result) => {
                tracing::info!(mint = ?result.mint_address, "token created");
                result
            }
            Err(e) => CreateTokenResult::failure(e.to_string()),
        }
    }
}
