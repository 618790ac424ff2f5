//! Marketplace settlement engine
//!
//! The `Marketplace` owns all shared state (registry, ledger, event
//! log) and exposes the operation surface: list, purchase, and
//! queries. Every operation takes `&mut self`, so operations are a
//! single global serialization point — no intermediate state is ever
//! observable from outside.
//!
//! Settlement ordering: all validation happens before any mutation;
//! internal bookkeeping (ledger credits, sold flag) happens before the
//! external custody call, so a reentrant call would observe the item
//! already sold; a failed custody transfer unwinds the credits and the
//! sold flag before the error is surfaced.

use tracing::{debug, info};
use types::fee::FeePolicy;
use types::ids::{AccountId, AssetRef, ItemId, TokenId};
use types::item::Item;
use types::numeric::Amount;

use crate::custody::AssetCustody;
use crate::errors::MarketError;
use crate::events::{ItemListed, ItemSold, MarketEvent};
use crate::ledger::Ledger;
use crate::registry::ItemRegistry;
use crate::security::ReentrancyGuard;

/// The marketplace engine.
///
/// Constructed once with an immutable fee policy. The engine holds a
/// custodial identity of its own (`market_account`); listed assets are
/// owned by that identity between listing and sale.
#[derive(Debug)]
pub struct Marketplace {
    /// Immutable fee configuration
    fee_policy: FeePolicy,
    /// Custodial identity holding listed assets
    market_account: AccountId,
    /// All listings, past and present
    registry: ItemRegistry,
    /// Funds disbursed to sellers and the fee account
    ledger: Ledger,
    /// Security: reentrancy guard
    reentrancy_guard: ReentrancyGuard,
    /// Emitted events log (append-only)
    events: Vec<MarketEvent>,
}

impl Marketplace {
    /// Create a marketplace with the given fee account and percentage.
    ///
    /// Both are fixed for the lifetime of the engine.
    pub fn new(fee_account: AccountId, fee_percent: u32) -> Self {
        Self {
            fee_policy: FeePolicy::new(fee_account, fee_percent),
            market_account: AccountId::new(),
            registry: ItemRegistry::new(),
            ledger: Ledger::new(),
            reentrancy_guard: ReentrancyGuard::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Listing ─────────────────────────

    /// List an asset for sale.
    ///
    /// Validates the price, moves the asset from `seller` into
    /// marketplace custody, records the listing, and emits
    /// `ItemListed` — all or nothing. A failed custody transfer leaves
    /// the registry untouched and consumes no item id.
    pub fn list(
        &mut self,
        custody: &mut dyn AssetCustody,
        asset_ref: AssetRef,
        token_id: TokenId,
        price: Amount,
        seller: AccountId,
        timestamp: i64,
    ) -> Result<ItemId, MarketError> {
        if !self.reentrancy_guard.acquire() {
            return Err(MarketError::Reentrancy);
        }
        let outcome = self.list_inner(custody, asset_ref, token_id, price, seller, timestamp);
        self.reentrancy_guard.release();
        outcome
    }

    fn list_inner(
        &mut self,
        custody: &mut dyn AssetCustody,
        asset_ref: AssetRef,
        token_id: TokenId,
        price: Amount,
        seller: AccountId,
        timestamp: i64,
    ) -> Result<ItemId, MarketError> {
        if price.is_zero() {
            return Err(MarketError::InvalidPrice);
        }

        // Custody transfer precedes the registry write: if it fails,
        // nothing was recorded; once it succeeds, the insert cannot
        // fail (price already validated).
        custody.transfer_ownership(asset_ref, token_id, seller, self.market_account)?;

        let item_id = self
            .registry
            .insert(asset_ref, token_id, price, seller, timestamp)?;

        self.events.push(MarketEvent::Listed(ItemListed {
            item_id,
            asset_ref,
            token_id,
            price,
            seller,
        }));

        debug!(%item_id, %seller, %price, "item listed");
        Ok(item_id)
    }

    // ───────────────────────── Settlement ─────────────────────────

    /// Purchase a listed item.
    ///
    /// `payment` must cover `total_price(item)`. Exactly `item.price`
    /// is credited to the seller; the remainder — the computed fee
    /// plus any overpayment — goes to the fee account. Overpayment is
    /// absorbed, not refunded.
    pub fn purchase(
        &mut self,
        custody: &mut dyn AssetCustody,
        item_id: ItemId,
        payment: Amount,
        buyer: AccountId,
        timestamp: i64,
    ) -> Result<(), MarketError> {
        if !self.reentrancy_guard.acquire() {
            return Err(MarketError::Reentrancy);
        }
        let outcome = self.settle(custody, item_id, payment, buyer, timestamp);
        self.reentrancy_guard.release();
        outcome
    }

    fn settle(
        &mut self,
        custody: &mut dyn AssetCustody,
        item_id: ItemId,
        payment: Amount,
        buyer: AccountId,
        timestamp: i64,
    ) -> Result<(), MarketError> {
        // Phase 1: validate in order, first failure wins, no mutation.
        let (asset_ref, token_id, price, seller) = {
            let item = self.registry.get(item_id)?;
            if item.is_sold() {
                return Err(MarketError::AlreadySold { item_id });
            }
            (item.asset_ref, item.token_id, item.price, item.seller)
        };

        let required = self
            .fee_policy
            .total_price(price)
            .ok_or(MarketError::Overflow)?;
        if payment < required {
            return Err(MarketError::InsufficientPayment {
                required,
                offered: payment,
            });
        }

        // payment >= required >= price, so this cannot underflow
        let remainder = payment.checked_sub(price).ok_or(MarketError::Overflow)?;
        let fee_account = self.fee_policy.fee_account();

        // Phase 2: internal bookkeeping, before any external call.
        self.ledger.credit(seller, price)?;
        if let Err(err) = self.ledger.credit(fee_account, remainder) {
            // Unwind the seller credit we just made.
            self.ledger.debit(&seller, price)?;
            return Err(err.into());
        }
        self.registry.get_mut(item_id)?.mark_sold(timestamp);

        // Phase 3: external custody transfer. Failure rolls the whole
        // settlement back — no funds moved, item stays unsold.
        if let Err(err) =
            custody.transfer_ownership(asset_ref, token_id, self.market_account, buyer)
        {
            let item = self.registry.get_mut(item_id)?;
            item.sold = false;
            item.sold_at = None;
            self.ledger.debit(&fee_account, remainder)?;
            self.ledger.debit(&seller, price)?;
            return Err(err.into());
        }

        self.events.push(MarketEvent::Sold(ItemSold {
            item_id,
            asset_ref,
            token_id,
            price,
            seller,
            buyer,
        }));

        info!(%item_id, %buyer, %payment, "item sold");
        Ok(())
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Buyer-facing total for a listed item: price plus computed fee.
    pub fn total_price(&self, item_id: ItemId) -> Result<Amount, MarketError> {
        let item = self.registry.get(item_id)?;
        self.fee_policy
            .total_price(item.price)
            .ok_or(MarketError::Overflow)
    }

    /// Snapshot of a listing.
    pub fn get(&self, item_id: ItemId) -> Result<&Item, MarketError> {
        self.registry.get(item_id)
    }

    /// Number of items ever listed.
    pub fn item_count(&self) -> u64 {
        self.registry.item_count()
    }

    /// All listings in id order, sold and unsold alike.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.registry.items()
    }

    /// Funds disbursed to an account so far.
    pub fn balance_of(&self, account_id: &AccountId) -> Amount {
        self.ledger.balance_of(account_id)
    }

    /// The marketplace's own custodial identity.
    pub fn market_account(&self) -> AccountId {
        self.market_account
    }

    /// The configured fee account.
    pub fn fee_account(&self) -> AccountId {
        self.fee_policy.fee_account()
    }

    /// The configured fee percentage.
    pub fn fee_percent(&self) -> u32 {
        self.fee_policy.fee_percent()
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[MarketEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<MarketEvent> {
        std::mem::take(&mut self.events)
    }
}
