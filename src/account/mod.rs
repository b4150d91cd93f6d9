//! Account balance model for spend validation
//!
//! Balances arrive from a node-query client already denominated in base
//! units; this module only decides how much of them is spendable.

use serde::{Deserialize, Serialize};

use crate::convert::base_to_display;
use crate::decimal::RoundingMode;

/// Flat fee in base units charged on every payment transaction
pub const FLAT_TXN_FEE: u64 = 1_000;

/// Account balance as reported by the node, in base units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Total balance held by the account
    pub amount: u64,
    /// Minimum balance the account is required to keep
    #[serde(rename = "min-balance")]
    pub min_balance: u64,
}

impl AccountBalance {
    /// Create a new account balance
    pub fn new(amount: u64, min_balance: u64) -> Self {
        Self { amount, min_balance }
    }

    /// Spendable balance; zero when the required minimum exceeds the total
    pub fn available(&self) -> u64 {
        self.amount.saturating_sub(self.min_balance)
    }

    /// Whether the account can fund `send_amount` plus the flat fee
    pub fn can_cover(&self, send_amount: u64) -> bool {
        match send_amount.checked_add(FLAT_TXN_FEE) {
            Some(cost) => self.available() >= cost,
            None => false,
        }
    }

    /// Available balance in display units
    pub fn available_display(&self, mode: RoundingMode) -> f64 {
        base_to_display(self.available(), mode)
    }
}
