//! Account balance ledger
//!
//! Tracks funds disbursed by the settlement engine. The engine is the
//! only mutator: purchase credits the seller and the fee account, and
//! debits are used solely to reverse those credits when a custody
//! transfer fails mid-settlement.

use std::collections::HashMap;
use types::ids::AccountId;
use types::numeric::Amount;

use crate::errors::LedgerError;

/// Balances by account, with overflow-checked arithmetic.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: HashMap<AccountId, Amount>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Current balance of an account. Unknown accounts hold zero.
    pub fn balance_of(&self, account_id: &AccountId) -> Amount {
        self.balances
            .get(account_id)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Add `amount` to an account's balance.
    pub fn credit(&mut self, account_id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let current = self.balances.entry(account_id).or_insert(Amount::ZERO);
        let new_balance = current.checked_add(amount).ok_or(LedgerError::Overflow)?;
        *current = new_balance;
        Ok(())
    }

    /// Subtract `amount` from an account's balance.
    pub fn debit(&mut self, account_id: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let current = self
            .balances
            .get_mut(account_id)
            .ok_or(LedgerError::InsufficientFunds {
                account_id: *account_id,
                required: amount,
                available: Amount::ZERO,
            })?;

        let new_balance =
            current
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientFunds {
                    account_id: *account_id,
                    required: amount,
                    available: *current,
                })?;

        *current = new_balance;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_balance_is_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance_of(&AccountId::new()), Amount::ZERO);
    }

    #[test]
    fn test_credit_accumulates() {
        let mut ledger = Ledger::new();
        let acc = AccountId::new();
        ledger.credit(acc, Amount::new(100)).unwrap();
        ledger.credit(acc, Amount::new(50)).unwrap();
        assert_eq!(ledger.balance_of(&acc), Amount::new(150));
    }

    #[test]
    fn test_credit_overflow() {
        let mut ledger = Ledger::new();
        let acc = AccountId::new();
        ledger.credit(acc, Amount::new(u128::MAX)).unwrap();
        let result = ledger.credit(acc, Amount::new(1));
        assert_eq!(result, Err(LedgerError::Overflow));
        // Balance unchanged on failure
        assert_eq!(ledger.balance_of(&acc), Amount::new(u128::MAX));
    }

    #[test]
    fn test_debit_reverses_credit() {
        let mut ledger = Ledger::new();
        let acc = AccountId::new();
        ledger.credit(acc, Amount::new(100)).unwrap();
        ledger.debit(&acc, Amount::new(100)).unwrap();
        assert_eq!(ledger.balance_of(&acc), Amount::ZERO);
    }

    #[test]
    fn test_debit_insufficient_funds() {
        let mut ledger = Ledger::new();
        let acc = AccountId::new();
        ledger.credit(acc, Amount::new(10)).unwrap();
        let result = ledger.debit(&acc, Amount::new(11));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.balance_of(&acc), Amount::new(10));
    }

    #[test]
    fn test_debit_unknown_account() {
        let mut ledger = Ledger::new();
        let result = ledger.debit(&AccountId::new(), Amount::new(1));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
    }

    #[test]
    fn test_accounts_isolated() {
        let mut ledger = Ledger::new();
        let a = AccountId::new();
        let b = AccountId::new();
        ledger.credit(a, Amount::new(100)).unwrap();
        ledger.credit(b, Amount::new(1)).unwrap();
        assert_eq!(ledger.balance_of(&a), Amount::new(100));
        assert_eq!(ledger.balance_of(&b), Amount::new(1));
    }

    proptest! {
        /// Credit then debit of the same amount restores the balance.
        #[test]
        fn fuzz_credit_debit_round_trip(start in 0u128..u64::MAX as u128, delta in 0u128..u64::MAX as u128) {
            let mut ledger = Ledger::new();
            let acc = AccountId::new();
            ledger.credit(acc, Amount::new(start)).unwrap();
            ledger.credit(acc, Amount::new(delta)).unwrap();
            ledger.debit(&acc, Amount::new(delta)).unwrap();
            prop_assert_eq!(ledger.balance_of(&acc), Amount::new(start));
        }
    }
}
