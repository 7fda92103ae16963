//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the registry depends on. External adapters implement these
//! traits to provide:
//! - Authority verification (is a caller allowed to register?)
//! - Value transfer (moving the registration fee)
//! - Event publication
//!
//! All calls are synchronous and either succeed or fail immediately.
//! The registry never retries them.

use crate::domain::value_objects::{Amount, Principal};
use crate::errors::{TransferError, VerifierError};
use crate::events::RegistryEvent;

// =============================================================================
// AUTHORITY VERIFIER
// =============================================================================

/// Oracle answering "is this principal a verified authority".
///
/// The registry consults it on every registration and never caches answers.
pub trait AuthorityVerifier: Send + Sync {
    /// Returns whether `principal` may register new varieties.
    fn is_verified_authority(&self, principal: &Principal) -> Result<bool, VerifierError>;
}

// =============================================================================
// VALUE TRANSFER
// =============================================================================

/// Ledger that executes value transfers between accounts.
///
/// Invoked exactly once per successful registration, after all validation
/// and before the record is stored. A failure aborts the registration.
pub trait ValueTransfer: Send + Sync {
    /// Move `amount` from `from` to `to`.
    fn transfer(&self, amount: Amount, from: &Principal, to: &Principal)
        -> Result<(), TransferError>;
}

// =============================================================================
// EVENT PUBLISHER
// =============================================================================

/// Sink for committed registry events.
///
/// Called while the registry's state lock is held. Implementations must not
/// call back into the registry from `publish`; the lock is not reentrant and
/// such a call deadlocks.
pub trait EventPublisher: Send + Sync {
    /// Publish one event. Publication cannot fail the operation.
    fn publish(&self, event: &RegistryEvent);
}

impl<T: AuthorityVerifier + ?Sized> AuthorityVerifier for std::sync::Arc<T> {
    fn is_verified_authority(&self, principal: &Principal) -> Result<bool, VerifierError> {
        (**self).is_verified_authority(principal)
    }
}

impl<T: ValueTransfer + ?Sized> ValueTransfer for std::sync::Arc<T> {
    fn transfer(
        &self,
        amount: Amount,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), TransferError> {
        (**self).transfer(amount, from, to)
    }
}

// =============================================================================
// TESTS
// =============================================================================
