//! Marketplace events
//!
//! Immutable records emitted once per successful operation, after all
//! state mutation for that operation completes. Consumed by external
//! observers (indexers, UIs); no engine logic depends on them.

use serde::{Deserialize, Serialize};
use types::ids::{AccountId, AssetRef, ItemId, TokenId};
use types::numeric::Amount;

/// An asset was listed and moved into marketplace custody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListed {
    pub item_id: ItemId,
    pub asset_ref: AssetRef,
    pub token_id: TokenId,
    pub price: Amount,
    pub seller: AccountId,
}

/// A listed item was purchased and settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSold {
    pub item_id: ItemId,
    pub asset_ref: AssetRef,
    pub token_id: TokenId,
    pub price: Amount,
    pub seller: AccountId,
    pub buyer: AccountId,
}

/// Enum wrapper for all marketplace events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    Listed(ItemListed),
    Sold(ItemSold),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_listed_serialization() {
        let event = ItemListed {
            item_id: ItemId::FIRST,
            asset_ref: AssetRef::new(),
            token_id: TokenId::new(1),
            price: Amount::new(100),
            seller: AccountId::new(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: ItemListed = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_item_sold_serialization() {
        let event = ItemSold {
            item_id: ItemId::FIRST,
            asset_ref: AssetRef::new(),
            token_id: TokenId::new(1),
            price: Amount::new(100),
            seller: AccountId::new(),
            buyer: AccountId::new(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: ItemSold = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_market_event_enum_variant() {
        let event = MarketEvent::Listed(ItemListed {
            item_id: ItemId::new(2),
            asset_ref: AssetRef::new(),
            token_id: TokenId::new(9),
            price: Amount::new(50),
            seller: AccountId::new(),
        });
        assert!(matches!(event, MarketEvent::Listed(_)));
    }
}
