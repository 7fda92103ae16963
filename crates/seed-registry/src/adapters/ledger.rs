//! # Ledger Adapter
//!
//! In-memory value-transfer ledger. Records every executed transfer.
//!
//! Two modes:
//! - unmetered (default): transfers always succeed and are only recorded
//! - metered: accounts hold balances and a transfer fails on insufficient funds

use crate::domain::entities::FeeTransfer;
use crate::domain::value_objects::{Amount, Principal};
use crate::errors::TransferError;
use crate::ports::outbound::ValueTransfer;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct LedgerInner {
    balances: HashMap<Principal, Amount>,
    transfers: Vec<FeeTransfer>,
    forced_failure: Option<TransferError>,
}

/// In-memory ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    inner: RwLock<LedgerInner>,
    metered: bool,
}

impl InMemoryLedger {
    /// Ledger that records transfers without tracking balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger that tracks balances and rejects overdrafts.
    #[must_use]
    pub fn metered() -> Self {
        Self {
            metered: true,
            ..Self::default()
        }
    }

    /// Add funds to an account.
    pub fn credit(&self, account: impl Into<Principal>, amount: Amount) {
        let mut inner = self.inner.write();
        let balance = inner.balances.entry(account.into()).or_default();
        *balance = balance.saturating_add(amount);
    }

    #[must_use]
    pub fn balance_of(&self, account: &Principal) -> Amount {
        self.inner.read().balances.get(account).copied().unwrap_or(0)
    }

    /// Transfers executed so far, oldest first.
    #[must_use]
    pub fn transfers(&self) -> Vec<FeeTransfer> {
        self.inner.read().transfers.clone()
    }

    /// Make every following transfer fail with `error` (or succeed again
    /// with `None`).
    pub fn force_failure(&self, error: Option<TransferError>) {
        self.inner.write().forced_failure = error;
    }
}

impl ValueTransfer for InMemoryLedger {
    fn transfer(
        &self,
        amount: Amount,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), TransferError> {
        let mut inner = self.inner.write();

        if let Some(err) = &inner.forced_failure {
            return Err(err.clone());
        }
        // Stricter than a plain recording ledger: self-payment is refused (code 2).
        if from == to {
            return Err(TransferError::SameAccount(from.clone()));
        }

        if self.metered {
            let available = inner.balances.get(from).copied().unwrap_or(0);
            if available < amount {
                return Err(TransferError::InsufficientFunds {
                    required: amount,
                    available,
                });
            }
            inner.balances.insert(from.clone(), available - amount);
            let credited = inner.balances.entry(to.clone()).or_default();
            *credited = credited.saturating_add(amount);
        }

        inner
            .transfers
            .push(FeeTransfer::new(amount, from.clone(), to.clone()));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str) -> Principal {
        Principal::new(id)
    }

    #[test]
    fn test_unmetered_records_transfers() {
        let ledger = InMemoryLedger::new();
        ledger.transfer(500, &p("ST1TEST"), &p("ST2TEST")).unwrap();
        assert_eq!(
            ledger.transfers(),
            vec![FeeTransfer::new(500, p("ST1TEST"), p("ST2TEST"))]
        );
        assert_eq!(ledger.balance_of(&p("ST2TEST")), 0);
    }

    #[test]
    fn test_same_account_rejected() {
        let ledger = InMemoryLedger::new();
        let err = ledger.transfer(1, &p("A"), &p("A")).unwrap_err();
        assert_eq!(err, TransferError::SameAccount(p("A")));
        assert!(ledger.transfers().is_empty());
    }

    #[test]
    fn test_metered_moves_balance() {
        let ledger = InMemoryLedger::metered();
        ledger.credit("C", 800);

        ledger.transfer(500, &p("C"), &p("X")).unwrap();
        assert_eq!(ledger.balance_of(&p("C")), 300);
        assert_eq!(ledger.balance_of(&p("X")), 500);

        let err = ledger.transfer(500, &p("C"), &p("X")).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientFunds {
                required: 500,
                available: 300
            }
        );
        assert_eq!(ledger.balance_of(&p("C")), 300);
        assert_eq!(ledger.transfers().len(), 1);
    }

    #[test]
    fn test_forced_failure() {
        let ledger = InMemoryLedger::new();
        ledger.force_failure(Some(TransferError::Rejected("halted".into())));
        assert!(ledger.transfer(1, &p("A"), &p("B")).is_err());

        ledger.force_failure(None);
        assert!(ledger.transfer(1, &p("A"), &p("B")).is_ok());
        assert_eq!(ledger.transfers().len(), 1);
    }
}
