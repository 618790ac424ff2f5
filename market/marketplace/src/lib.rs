//! Marketplace Settlement Engine
//!
//! This crate implements the custody-and-settlement core of the
//! peer-to-peer asset marketplace: sellers list a uniquely identified
//! asset at a price, the marketplace custodies it, and buyers purchase
//! it by paying price plus fee in one atomic settlement.
//!
//! # Modules
//! - `errors`: Engine, custody, and ledger error types
//! - `events`: Listing/sale records emitted for external observers
//! - `security`: Reentrancy guard shared by state-changing operations
//! - `custody`: External asset-custody capability and in-memory vault
//! - `ledger`: Account balances with overflow-checked transfers
//! - `registry`: Listed items and sequential id issuance
//! - `engine`: The `Marketplace` operation surface
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod errors;
pub mod events;
pub mod security;
pub mod custody;
pub mod ledger;
pub mod registry;
pub mod engine;

/// Engine API version — frozen after release
pub const ENGINE_VERSION: &str = "1.0.0";
