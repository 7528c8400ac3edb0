//! Commons Client Module
//!
//! Thin clients for the external services the commons UI consumes:
//! - Ranking API: life-force leaderboard plus local aggregation
//! - Token issuance API: registers newly created tokens
//! - Wallet provider: connection gate for the creation form
//!
//! Failures at these boundaries are converted into displayable states
//! (empty leaderboard, `success: false` results); nothing here retries.

pub mod config;
pub mod error;
pub mod form;
pub mod issuance;
pub mod ranking;
pub mod wallet;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use form::TokenForm;
pub use issuance::{CreateTokenRequest, CreateTokenResult, IssuanceClient};
pub use ranking::{LeaderboardSummary, RankingClient, TokenMetaphysics};
pub use wallet::WalletSession;
