//! Unique identifier types for marketplace entities
//!
//! Item and token identifiers are sequential integers assigned by the
//! issuing registry, starting at 1 and never reused. Account and
//! collection identities are opaque UUID v7 values: the marketplace
//! never interprets them, it only routes funds and custody to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a marketplace listing
///
/// Assigned in strictly increasing order starting at 1. An id is only
/// consumed by a successful listing; failed attempts leave the
/// sequence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first id a registry ever assigns.
    pub const FIRST: ItemId = ItemId(1);

    /// Create from a raw id value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id that follows this one in the sequence.
    pub fn next(&self) -> ItemId {
        ItemId(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single asset unit within a collection
///
/// Issued by the asset contract, not by the marketplace. The engine
/// carries it through listing and settlement without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an asset collection
///
/// Identifies which asset contract a listing belongs to. The engine
/// treats it as an uninterpreted handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(Uuid);

impl AssetRef {
    /// Create a new collection reference.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssetRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identity of an account
///
/// Sellers, buyers, the fee account, and the marketplace's own
/// custodial identity are all `AccountId`s. The type carries no
/// signing capability; it is only a destination for funds and custody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_sequence() {
        let first = ItemId::FIRST;
        assert_eq!(first.as_u64(), 1);
        assert_eq!(first.next().as_u64(), 2);
        assert!(first < first.next());
    }

    #[test]
    fn test_item_id_serialization() {
        let id = ItemId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_token_id_roundtrip() {
        let id = TokenId::new(7);
        assert_eq!(id.as_u64(), 7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_asset_ref_uniqueness() {
        let a = AssetRef::new();
        let b = AssetRef::new();
        assert_ne!(a, b, "AssetRefs should be unique");
    }

    #[test]
    fn test_account_id_uniqueness() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_account_id_serialization() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
