//! Asset custody capability
//!
//! The engine does not implement asset semantics; it depends on an
//! external custody capability to hold and move asset units. The
//! `AssetCustody` trait is that boundary. `AssetVault` is the
//! in-memory reference implementation used by tests and demos: a
//! minimal asset contract with sequential minting, per-token URIs, and
//! owner-checked transfers.

use std::collections::HashMap;
use types::ids::{AccountId, AssetRef, TokenId};

use crate::errors::CustodyError;

/// External capability for asset ownership queries and transfers.
///
/// A failed transfer is fatal to the enclosing engine operation: the
/// engine rolls back everything and reports the custody error.
pub trait AssetCustody {
    /// Current owner of a token.
    fn owner_of(&self, asset_ref: AssetRef, token_id: TokenId) -> Result<AccountId, CustodyError>;

    /// Move a token from `from` to `to`. Fails if `from` is not the
    /// current owner.
    fn transfer_ownership(
        &mut self,
        asset_ref: AssetRef,
        token_id: TokenId,
        from: AccountId,
        to: AccountId,
    ) -> Result<(), CustodyError>;
}

/// In-memory asset contract for one collection.
///
/// Token ids are issued sequentially starting at 1. Each token has an
/// owner and a URI fixed at mint time.
#[derive(Debug)]
pub struct AssetVault {
    collection: AssetRef,
    owners: HashMap<TokenId, AccountId>,
    uris: HashMap<TokenId, String>,
    token_count: u64,
}

impl AssetVault {
    /// Create an empty vault with a fresh collection reference.
    pub fn new() -> Self {
        Self {
            collection: AssetRef::new(),
            owners: HashMap::new(),
            uris: HashMap::new(),
            token_count: 0,
        }
    }

    /// The collection this vault manages.
    pub fn collection(&self) -> AssetRef {
        self.collection
    }

    /// Mint a new token to `owner` with the given URI.
    pub fn mint(&mut self, owner: AccountId, uri: impl Into<String>) -> TokenId {
        self.token_count += 1;
        let token_id = TokenId::new(self.token_count);
        self.owners.insert(token_id, owner);
        self.uris.insert(token_id, uri.into());
        token_id
    }

    /// Number of tokens minted so far.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// URI stored for a token at mint time.
    pub fn token_uri(&self, token_id: TokenId) -> Result<&str, CustodyError> {
        self.uris
            .get(&token_id)
            .map(String::as_str)
            .ok_or(CustodyError::UnknownToken { token_id })
    }

    /// Number of tokens currently owned by an account.
    pub fn balance_of(&self, owner: &AccountId) -> u64 {
        self.owners.values().filter(|o| *o == owner).count() as u64
    }
}

impl Default for AssetVault {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCustody for AssetVault {
    fn owner_of(&self, asset_ref: AssetRef, token_id: TokenId) -> Result<AccountId, CustodyError> {
        if asset_ref != self.collection {
            return Err(CustodyError::UnknownCollection { token_id });
        }
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(CustodyError::UnknownToken { token_id })
    }

    fn transfer_ownership(
        &mut self,
        asset_ref: AssetRef,
        token_id: TokenId,
        from: AccountId,
        to: AccountId,
    ) -> Result<(), CustodyError> {
        if asset_ref != self.collection {
            return Err(CustodyError::UnknownCollection { token_id });
        }
        let owner = self
            .owners
            .get_mut(&token_id)
            .ok_or(CustodyError::UnknownToken { token_id })?;
        if *owner != from {
            return Err(CustodyError::NotOwner { token_id, from });
        }
        *owner = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_assigns_sequential_token_ids() {
        let mut vault = AssetVault::new();
        let owner = AccountId::new();
        assert_eq!(vault.mint(owner, "uri-1"), TokenId::new(1));
        assert_eq!(vault.mint(owner, "uri-2"), TokenId::new(2));
        assert_eq!(vault.token_count(), 2);
    }

    #[test]
    fn test_mint_tracks_owner_and_uri() {
        let mut vault = AssetVault::new();
        let owner = AccountId::new();
        let token = vault.mint(owner, "sample uri");

        assert_eq!(vault.owner_of(vault.collection(), token), Ok(owner));
        assert_eq!(vault.token_uri(token), Ok("sample uri"));
        assert_eq!(vault.balance_of(&owner), 1);
    }

    #[test]
    fn test_transfer_moves_ownership() {
        let mut vault = AssetVault::new();
        let alice = AccountId::new();
        let bob = AccountId::new();
        let token = vault.mint(alice, "uri");
        let collection = vault.collection();

        vault.transfer_ownership(collection, token, alice, bob).unwrap();
        assert_eq!(vault.owner_of(collection, token), Ok(bob));
        assert_eq!(vault.balance_of(&alice), 0);
        assert_eq!(vault.balance_of(&bob), 1);
    }

    #[test]
    fn test_transfer_from_non_owner_rejected() {
        let mut vault = AssetVault::new();
        let alice = AccountId::new();
        let eve = AccountId::new();
        let token = vault.mint(alice, "uri");
        let collection = vault.collection();

        let result = vault.transfer_ownership(collection, token, eve, eve);
        assert_eq!(
            result,
            Err(CustodyError::NotOwner {
                token_id: token,
                from: eve
            })
        );
        // Ownership unchanged
        assert_eq!(vault.owner_of(collection, token), Ok(alice));
    }

    #[test]
    fn test_unknown_token() {
        let vault = AssetVault::new();
        let result = vault.owner_of(vault.collection(), TokenId::new(99));
        assert_eq!(
            result,
            Err(CustodyError::UnknownToken {
                token_id: TokenId::new(99)
            })
        );
    }

    #[test]
    fn test_unknown_collection() {
        let mut vault = AssetVault::new();
        let owner = AccountId::new();
        let token = vault.mint(owner, "uri");

        let other = AssetRef::new();
        let result = vault.owner_of(other, token);
        assert_eq!(result, Err(CustodyError::UnknownCollection { token_id: token }));
    }

    #[test]
    fn test_token_uri_unknown() {
        let vault = AssetVault::new();
        assert!(vault.token_uri(TokenId::new(1)).is_err());
    }
}
