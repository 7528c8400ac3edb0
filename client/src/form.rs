//! Token creation form
//!
//! Caller-side half of the deposit rule's contract: clamps the entered
//! supply into bounds before quoting, normalizes the symbol, and builds
//! the issuance request once the wallet is connected.

use serde::{Deserialize, Serialize};
use treasury::{clamp_supply, compute_deposit, DepositQuote, RECOMMENDED_SUPPLY};

use crate::error::{ClientError, Result};
use crate::issuance::CreateTokenRequest;
use crate::wallet::WalletSession;

/// Longest accepted token symbol
pub const SYMBOL_MAX_LEN: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    pub supply: u64,
    pub description: String,
    pub image_url: String,
}

impl Default for TokenForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            supply: RECOMMENDED_SUPPLY,
            description: String::new(),
            image_url: String::new(),
        }
    }
}

impl TokenForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols are stored uppercase and truncated to 10 characters
    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol
            .trim()
            .to_uppercase()
            .chars()
            .take(SYMBOL_MAX_LEN)
            .collect();
    }

    /// Entered supply, clamped into the accepted bounds
    pub fn set_supply(&mut self, supply: u64) {
        self.supply = clamp_supply(supply);
    }

    /// Live deposit preview for the entered supply. `floor_applied` tells
    /// the form to show the "min 1M required" warning.
    pub fn deposit_preview(&self) -> DepositQuote {
        compute_deposit(self.supply)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidForm("Token name is required".to_string()));
        }
        if self.symbol.is_empty() || self.symbol.chars().count() > SYMBOL_MAX_LEN {
            return Err(ClientError::InvalidForm(
                "Symbol must be 1-10 characters".to_string(),
            ));
        }
        treasury::validate_supply(self.supply)
            .map_err(|e| ClientError::InvalidForm(e.to_string()))?;
        Ok(())
    }

    /// Build the issuance request. Refused while the wallet is
    /// disconnected; the form stays disabled until then.
    pub fn into_request(self, wallet: &WalletSession) -> Result<CreateTokenRequest> {
        let creator = wallet
            .public_key()
            .ok_or(ClientError::WalletNotConnected)?;
        self.validate()?;

        Ok(CreateTokenRequest {
            name: self.name,
            symbol: self.symbol,
            supply: self.supply,
            description: self.description,
            image_url: self.image_url,
            creator_wallet: creator.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasury::{FLOOR_DEPOSIT, SUPPLY_MAX, SUPPLY_MIN};

    #[test]
    fn test_defaults_to_recommended_supply() {
        let form = TokenForm::new();
        assert_eq!(form.supply, RECOMMENDED_SUPPLY);
        // 1% of 1B
        assert_eq!(form.deposit_preview().required_deposit, 10_000_000);
    }

    #[test]
    fn test_symbol_normalization() {
        let mut form = TokenForm::new();
        form.set_symbol("  garu-commons-note  ");
        assert_eq!(form.symbol, "GARU-COMMO");
        assert_eq!(form.symbol.len(), SYMBOL_MAX_LEN);
    }

    #[test]
    fn test_symbol_truncates_on_char_boundary() {
        // Multibyte symbols count characters, not bytes: "aééééé"
        // uppercases to 6 chars spanning 11 bytes and must survive intact
        let mut form = TokenForm::new();
        form.name = "Garu Commons".to_string();
        form.set_symbol("aééééé");
        assert_eq!(form.symbol, "AÉÉÉÉÉ");
        assert!(form.validate().is_ok());

        // Truncation at the 10-char mark, wherever the bytes fall
        form.set_symbol("éééééééééééé");
        assert_eq!(form.symbol.chars().count(), SYMBOL_MAX_LEN);
        assert_eq!(form.symbol, "ÉÉÉÉÉÉÉÉÉÉ");
    }

    #[test]
    fn test_supply_clamped_before_preview() {
        let mut form = TokenForm::new();
        form.set_supply(0);
        assert_eq!(form.supply, SUPPLY_MIN);
        assert_eq!(form.deposit_preview().required_deposit, FLOOR_DEPOSIT);

        form.set_supply(u64::MAX);
        assert_eq!(form.supply, SUPPLY_MAX);
    }

    #[test]
    fn test_disconnected_wallet_refuses_request() {
        let mut form = TokenForm::new();
        form.name = "Garu Commons".to_string();
        form.set_symbol("GCN");

        let err = form.into_request(&WalletSession::disconnected()).unwrap_err();
        assert!(matches!(err, ClientError::WalletNotConnected));
    }

    #[test]
    fn test_request_carries_creator_wallet() {
        let mut form = TokenForm::new();
        form.name = "Garu Commons".to_string();
        form.set_symbol("GCN");
        form.description = "Commons token".to_string();

        let request = form
            .into_request(&WalletSession::connected_as("8xMCommons111"))
            .unwrap();
        assert_eq!(request.creator_wallet, "8xMCommons111");
        assert_eq!(request.supply, RECOMMENDED_SUPPLY);
    }
}
