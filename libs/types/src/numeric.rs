//! Integer money type
//!
//! All amounts are denominated in the smallest currency unit and use
//! checked integer arithmetic. Fractional results of percentage
//! computations are truncated toward zero, never rounded up, so the
//! marketplace can never overcharge by a rounding step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A money amount in the smallest currency unit.
///
/// Backed by `u128` so wei-scale prices fit without saturation.
/// Arithmetic is exposed only through checked operations; callers map
/// `None` to their own overflow error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a raw unit count.
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Get the raw unit count.
    pub fn raw(&self) -> u128 {
        self.0
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Integer percentage with floor semantics: `amount * percent / 100`.
    ///
    /// Returns `None` if the intermediate product overflows.
    pub fn percent_floor(self, percent: u32) -> Option<Amount> {
        self.0
            .checked_mul(u128::from(percent))
            .map(|v| Amount(v / 100))
    }
}

impl From<u64> for Amount {
    fn from(raw: u64) -> Self {
        Self(u128::from(raw))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
