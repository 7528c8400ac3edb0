//! Commons Treasury Module
//!
//! Implements the Commons Treasury deposit rule applied to every newly
//! issued token:
//! - 1% of total supply is levied into the reciprocity pool
//! - A minimum absolute deposit of 1,000,000 tokens applies when the
//!   percentage amount would be smaller
//!
//! The rule is a pure computation; bounds checking is a separate helper
//! for callers that accept raw user input.

pub mod deposit;
pub mod error;

pub use deposit::{
    clamp_supply, compute_deposit, raw_deposit_amount, validate_supply, DepositQuote,
    DEFAULT_DECIMALS, DEPOSIT_RATE_PERCENT, FLOOR_DEPOSIT, RECOMMENDED_SUPPLY, SUPPLY_MAX,
    SUPPLY_MIN,
};
pub use error::{Result, TreasuryError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_constants() {
        assert_eq!(DEPOSIT_RATE_PERCENT, 1);
        assert_eq!(FLOOR_DEPOSIT, 1_000_000);
        assert_eq!(SUPPLY_MIN, 1);
        assert_eq!(SUPPLY_MAX, 1_000_000_000_000);
        assert_eq!(RECOMMENDED_SUPPLY, 1_000_000_000);
    }
}
