//! Types library for the asset marketplace
//!
//! This library provides all core type definitions shared across the
//! marketplace system, ensuring type safety and deterministic integer
//! arithmetic for money amounts.
//!
//! # Modules
//! - `ids`: Unique identifiers (ItemId, TokenId, AssetRef, AccountId)
//! - `numeric`: Integer money type (Amount)
//! - `item`: Listing record and its sold transition
//! - `fee`: Immutable fee policy and total-price computation

// Public modules
pub mod ids;
pub mod numeric;
pub mod item;
pub mod fee;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::item::*;
    pub use crate::fee::*;
}
