//! Commons Treasury deposit calculation
//!
//! Every token entering the commons deposits MAX(1% of supply, 1M tokens)
//! into the reciprocity pool. The percentage keeps large issuances
//! proportional; the floor keeps small issuances meaningful.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreasuryError};

/// Treasury levy rate (1% of total supply)
pub const DEPOSIT_RATE_PERCENT: u64 = 1;

/// Minimum absolute deposit in whole tokens
pub const FLOOR_DEPOSIT: u64 = 1_000_000;

/// Smallest supply accepted from callers
pub const SUPPLY_MIN: u64 = 1;

/// Largest supply accepted from callers (1 trillion)
pub const SUPPLY_MAX: u64 = 1_000_000_000_000;

/// Recommended supply for commons tokens (1 billion)
pub const RECOMMENDED_SUPPLY: u64 = 1_000_000_000;

/// Standard decimals for commons tokens
pub const DEFAULT_DECIMALS: u8 = 6;

/// Result of the deposit rule for a requested supply
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DepositQuote {
    /// Required deposit in whole tokens
    pub required_deposit: u64,
    /// Share of supply the deposit represents, as a percentage
    pub effective_percent: f64,
    /// True when the floor governs (percentage amount at or below 1M)
    pub floor_applied: bool,
}

impl DepositQuote {
    /// Effective percentage rendered for display, two decimal places
    pub fn effective_percent_display(&self) -> String {
        format!("{:.2}", self.effective_percent)
    }
}

/// Compute the required Commons Treasury deposit for a token supply.
///
/// Pure and total over all `u64` inputs. Callers are responsible for
/// clamping user input to `[SUPPLY_MIN, SUPPLY_MAX]` first; `supply = 0`
/// is a defined input (floor deposit, 0% by convention), not an error.
pub fn compute_deposit(supply: u64) -> DepositQuote {
    let percent_deposit = supply / 100 * DEPOSIT_RATE_PERCENT;
    let required_deposit = percent_deposit.max(FLOOR_DEPOSIT);
    let floor_applied = percent_deposit <= FLOOR_DEPOSIT;

    let effective_percent = if supply > 0 {
        (required_deposit as f64 / supply as f64) * 100.0
    } else {
        0.0
    };

    DepositQuote {
        required_deposit,
        effective_percent,
        floor_applied,
    }
}

/// Deposit in raw base units, as recorded into the reciprocity pool.
///
/// `decimals` is caller-controlled (it arrives in the issuance request),
/// so the expansion is checked: scalings that do not fit in u64 are an
/// error, never a wrapped amount.
pub fn raw_deposit_amount(quote: &DepositQuote, decimals: u8) -> Result<u64> {
    10u128
        .checked_pow(decimals as u32)
        .and_then(|scale| (quote.required_deposit as u128).checked_mul(scale))
        .and_then(|raw| u64::try_from(raw).ok())
        .ok_or(TreasuryError::DepositOverflow {
            deposit: quote.required_deposit,
            decimals,
        })
}

/// Validate a caller-supplied supply against the configured bounds
pub fn validate_supply(supply: u64) -> Result<u64> {
    if supply < SUPPLY_MIN {
        return Err(TreasuryError::SupplyTooSmall { supply });
    }
    if supply > SUPPLY_MAX {
        return Err(TreasuryError::SupplyTooLarge { supply });
    }
    Ok(supply)
}

/// Clamp a caller-supplied supply into the configured bounds
pub fn clamp_supply(supply: u64) -> u64 {
    supply.clamp(SUPPLY_MIN, SUPPLY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_governs_small_supply() {
        let quote = compute_deposit(1_000_000);
        // 1% of 1M = 10,000, well under the floor
        assert_eq!(quote.required_deposit, FLOOR_DEPOSIT);
        assert!(quote.floor_applied);
        assert_eq!(quote.effective_percent_display(), "100.00");
    }

    #[test]
    fn test_percentage_governs_large_supply() {
        let quote = compute_deposit(10_000_000_000);
        assert_eq!(quote.required_deposit, 100_000_000);
        assert!(!quote.floor_applied);
        assert_eq!(quote.effective_percent_display(), "1.00");
    }

    #[test]
    fn test_zero_supply_convention() {
        let quote = compute_deposit(0);
        assert_eq!(quote.required_deposit, FLOOR_DEPOSIT);
        assert_eq!(quote.effective_percent, 0.0);
        assert!(quote.floor_applied);
    }

    #[test]
    fn test_raw_deposit_expansion() {
        let quote = compute_deposit(RECOMMENDED_SUPPLY);
        // 10M tokens at 6 decimals
        assert_eq!(
            raw_deposit_amount(&quote, DEFAULT_DECIMALS),
            Ok(10_000_000_000_000)
        );
    }

    #[test]
    fn test_raw_deposit_rejects_oversized_decimals() {
        // 10^10 token deposit at the supply cap: 10 decimals already
        // pushes past u64, and absurd decimals must not panic either
        let quote = compute_deposit(SUPPLY_MAX);
        assert_eq!(raw_deposit_amount(&quote, 9), Ok(10_000_000_000_000_000_000));
        assert_eq!(
            raw_deposit_amount(&quote, 10),
            Err(TreasuryError::DepositOverflow {
                deposit: 10_000_000_000,
                decimals: 10,
            })
        );
        assert!(raw_deposit_amount(&quote, u8::MAX).is_err());
    }

    #[test]
    fn test_supply_bounds() {
        assert!(validate_supply(0).is_err());
        assert!(validate_supply(SUPPLY_MAX + 1).is_err());
        assert_eq!(validate_supply(SUPPLY_MAX), Ok(SUPPLY_MAX));
        assert_eq!(clamp_supply(0), SUPPLY_MIN);
        assert_eq!(clamp_supply(u64::MAX), SUPPLY_MAX);
        assert_eq!(clamp_supply(500), 500);
    }
}
