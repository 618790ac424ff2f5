//! Item registry
//!
//! Owns the mapping of listed items and issues sequential item ids.
//! Ids start at 1, increase strictly, and are never reused; an id is
//! only consumed when a listing is actually recorded. Items are never
//! deleted, so the registry is also the permanent sale history.

use std::collections::BTreeMap;
use types::ids::{AccountId, AssetRef, ItemId, TokenId};
use types::item::Item;
use types::numeric::Amount;

use crate::errors::MarketError;

/// Registry of all listings, keyed by item id.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: BTreeMap<ItemId, Item>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Record a new listing and assign it the next sequential id.
    ///
    /// Rejects a zero price with `InvalidPrice` before any state
    /// change; a rejected call consumes no id and leaves the count
    /// untouched.
    pub fn insert(
        &mut self,
        asset_ref: AssetRef,
        token_id: TokenId,
        price: Amount,
        seller: AccountId,
        timestamp: i64,
    ) -> Result<ItemId, MarketError> {
        if price.is_zero() {
            return Err(MarketError::InvalidPrice);
        }

        // Ids are dense: count + 1 is always fresh because items are
        // never deleted.
        let item_id = ItemId::new(self.items.len() as u64 + 1);
        let item = Item::new(item_id, asset_ref, token_id, price, seller, timestamp);
        self.items.insert(item_id, item);
        Ok(item_id)
    }

    /// Look up an item. Fails with `ItemNotFound` for id 0, ids above
    /// the current count, or any otherwise unregistered id.
    pub fn get(&self, item_id: ItemId) -> Result<&Item, MarketError> {
        self.items
            .get(&item_id)
            .ok_or(MarketError::ItemNotFound { item_id })
    }

    /// Mutable lookup for the settlement engine.
    pub(crate) fn get_mut(&mut self, item_id: ItemId) -> Result<&mut Item, MarketError> {
        self.items
            .get_mut(&item_id)
            .ok_or(MarketError::ItemNotFound { item_id })
    }

    /// Number of items ever listed.
    pub fn item_count(&self) -> u64 {
        self.items.len() as u64
    }

    /// All items in id order, sold and unsold alike.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}
