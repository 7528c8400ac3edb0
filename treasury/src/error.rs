//! Treasury error types

use thiserror::Error;

use crate::deposit::{SUPPLY_MAX, SUPPLY_MIN};

/// Errors from caller-side supply validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("Supply {supply} below minimum of {min}", min = SUPPLY_MIN)]
    SupplyTooSmall { supply: u64 },

    #[error("Supply {supply} exceeds maximum of {max}", max = SUPPLY_MAX)]
    SupplyTooLarge { supply: u64 },

    #[error("Deposit of {deposit} tokens does not fit in base units at {decimals} decimals")]
    DepositOverflow { deposit: u64, decimals: u8 },
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
