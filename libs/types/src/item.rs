//! Listing record types
//!
//! An `Item` is the permanent record of one custodied asset offered at
//! a fixed price. Items are created by listing, mutated only by the
//! single `sold` transition, and never deleted — the registry doubles
//! as a sale history.

use crate::ids::{AccountId, AssetRef, ItemId, TokenId};
use crate::numeric::Amount;
use serde::{Deserialize, Serialize};

/// A marketplace listing.
///
/// `seller`, `price`, and the asset reference are fixed at creation.
/// `sold` starts false and flips to true exactly once, at settlement;
/// it never flips back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub asset_ref: AssetRef,
    pub token_id: TokenId,
    pub price: Amount,
    pub seller: AccountId,
    pub sold: bool,

    // Timestamps (unix nanos, caller-provided)
    pub listed_at: i64,
    pub sold_at: Option<i64>,
}

impl Item {
    /// Create a new unsold listing.
    pub fn new(
        item_id: ItemId,
        asset_ref: AssetRef,
        token_id: TokenId,
        price: Amount,
        seller: AccountId,
        listed_at: i64,
    ) -> Self {
        Self {
            item_id,
            asset_ref,
            token_id,
            price,
            seller,
            sold: false,
            listed_at,
            sold_at: None,
        }
    }

    /// Mark the item as sold.
    pub fn mark_sold(&mut self, timestamp: i64) {
        self.sold = true;
        self.sold_at = Some(timestamp);
    }

    /// Check if the item has been sold.
    pub fn is_sold(&self) -> bool {
        self.sold
    }
}
