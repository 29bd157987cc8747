// 👛 Pointers - Wallet with a guarded withdraw
// Mutation goes through &mut self, so callers always see the updated balance

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// BITCOIN
// ============================================================================

/// Amount of bitcoin, printed as "10 BTC"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Bitcoin(pub u64);

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.0)
    }
}

impl From<u64> for Bitcoin {
    fn from(amount: u64) -> Self {
        Bitcoin(amount)
    }
}

// ============================================================================
// WALLET
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("cannot withdraw, insufficient funds")]
    InsufficientFunds,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    /// Empty wallet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(balance: Bitcoin) -> Self {
        Wallet { balance }
    }

    /// Always succeeds. Saturates at `u64::MAX`.
    pub fn deposit(&mut self, amount: Bitcoin) {
        self.balance = Bitcoin(self.balance.0.saturating_add(amount.0));
        debug!(%amount, balance = %self.balance, "deposit");
    }

    /// Take `amount` out of the wallet.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] when `amount` exceeds the
    /// balance; the balance is left untouched in that case.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount > self.balance {
            debug!(%amount, balance = %self.balance, "withdraw refused");
            return Err(WalletError::InsufficientFunds);
        }

        self.balance = Bitcoin(self.balance.0 - amount.0);
        debug!(%amount, balance = %self.balance, "withdraw");
        Ok(())
    }

    pub fn balance(&self) -> Bitcoin {
        self.balance
    }
}

// ============================================================================
// TESTS
// ============================================================================
