//! Engine-specific error types
//!
//! Every error is a rejected operation: validation happens before any
//! mutation, and the failing operation leaves all state unchanged.

use thiserror::Error;
use types::ids::{AccountId, ItemId, TokenId};
use types::numeric::Amount;

/// Errors surfaced by marketplace operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("listing price must be greater than zero")]
    InvalidPrice,

    #[error("item not found: {item_id}")]
    ItemNotFound { item_id: ItemId },

    #[error("item already sold: {item_id}")]
    AlreadySold { item_id: ItemId },

    #[error("insufficient payment: required {required}, offered {offered}")]
    InsufficientPayment { required: Amount, offered: Amount },

    #[error("arithmetic overflow in settlement calculation")]
    Overflow,

    #[error("reentrancy detected")]
    Reentrancy,

    #[error("custody error: {0}")]
    Custody(#[from] CustodyError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Errors from the asset-custody capability.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CustodyError {
    #[error("unknown token: {token_id}")]
    UnknownToken { token_id: TokenId },

    #[error("unknown collection for token {token_id}")]
    UnknownCollection { token_id: TokenId },

    #[error("transfer from non-owner: {from} does not own token {token_id}")]
    NotOwner { token_id: TokenId, from: AccountId },
}

/// Errors from the internal balance ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("arithmetic overflow in balance calculation")]
    Overflow,

    #[error("insufficient funds for {account_id}: required {required}, available {available}")]
    InsufficientFunds {
        account_id: AccountId,
        required: Amount,
        available: Amount,
    },
}
