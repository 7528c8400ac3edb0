//! Ranking API client
//!
//! Consumes `GET /api/metaphysics/leaderboard/lifeforce?limit=N` and
//! aggregates the returned records locally. One outstanding request at a
//! time, no retry, no cancellation; a failed fetch is terminal for that
//! interaction.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// One leaderboard entry, camelCase on the wire.
///
/// The backend COALESCEs the numeric columns to 0, so they deserialize
/// with defaults; nation and road are genuinely optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetaphysics {
    pub mint_address: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub life_force_score: f64,
    /// Vitality as a 0-100 percentage
    #[serde(default)]
    pub vitality_index: f64,
    #[serde(default)]
    pub permanence_score: f64,
    #[serde(default)]
    pub total_qlx_inflow: f64,
    #[serde(default)]
    pub total_qlx_outflow: f64,
    #[serde(default)]
    pub swap_count_total: u64,
    #[serde(default)]
    pub nation_name: Option<String>,
    #[serde(default)]
    pub road_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    leaderboard: Vec<TokenMetaphysics>,
}

/// Local aggregation over a fetched leaderboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardSummary {
    pub active_tokens: usize,
    pub total_swaps: u64,
    pub roads_claimed: usize,
}

impl LeaderboardSummary {
    pub fn from_tokens(tokens: &[TokenMetaphysics]) -> Self {
        Self {
            active_tokens: tokens.len(),
            total_swaps: tokens.iter().map(|t| t.swap_count_total).sum(),
            roads_claimed: tokens.iter().filter(|t| t.road_id.is_some()).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingClient {
    base_url: String,
    client: Client,
}

impl RankingClient {
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

    /// Fetch the life-force leaderboard, at most `limit` entries
    pub async fn fetch_leaderboard(&self, limit: u32) -> Result<Vec<TokenMetaphysics>> {
        let url = format!("{}/api/metaphysics/leaderboard/lifeforce", self.base_url);
        tracing::debug!(%url, limit, "fetching leaderboard");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!(status, "leaderboard fetch failed");
            return Err(ClientError::Status { status });
        }

        let body: LeaderboardResponse = response.json().await?;
        tracing::debug!(entries = body.leaderboard.len(), "leaderboard retrieved");
        Ok(body.leaderboard)
    }

    /// Boundary conversion: any failure yields the empty leaderboard so the
    /// caller can render the no-activity state
    pub async fn load_leaderboard(&self, limit: u32) -> Vec<TokenMetaphysics> {
        match self.fetch_leaderboard(limit).await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(error = %e, "leaderboard unavailable, rendering empty");
                Vec::new()
            }
        }
    }
}
