//! Fee policy types
//!
//! The fee policy is fixed at marketplace construction: a fee account
//! and an integer fee percentage applied to the listing price (not to
//! the total paid). Total-price computation is a pure function with
//! floor semantics.

use crate::ids::AccountId;
use crate::numeric::Amount;
use serde::{Deserialize, Serialize};

/// Immutable marketplace fee configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    fee_account: AccountId,
    fee_percent: u32,
}

impl FeePolicy {
    /// Create a fee policy with the given fee account and percentage.
    pub fn new(fee_account: AccountId, fee_percent: u32) -> Self {
        Self {
            fee_account,
            fee_percent,
        }
    }

    /// The account that receives every sale's fee.
    pub fn fee_account(&self) -> AccountId {
        self.fee_account
    }

    /// The fee percentage applied to listing prices.
    pub fn fee_percent(&self) -> u32 {
        self.fee_percent
    }

    /// Fee owed on a listing price: `floor(price * fee_percent / 100)`.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn fee_for(&self, price: Amount) -> Option<Amount> {
        price.percent_floor(self.fee_percent)
    }

    /// Buyer-facing total: `price + floor(price * fee_percent / 100)`.
    ///
    /// The minimum payment required to purchase the item.
    pub fn total_price(&self, price: Amount) -> Option<Amount> {
        price.checked_add(self.fee_for(price)?)
    }
}
