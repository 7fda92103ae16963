//! # Authority Adapter
//!
//! In-memory set of verified authorities.

use crate::domain::value_objects::Principal;
use crate::errors::VerifierError;
use crate::ports::outbound::AuthorityVerifier;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

/// Verified-authority oracle backed by a set of principals.
#[derive(Debug, Default)]
pub struct InMemoryAuthorities {
    verified: RwLock<HashSet<Principal>>,
    /// When set, every query fails as if the oracle were unreachable.
    unavailable: AtomicBool,
}

impl InMemoryAuthorities {
    /// Create an oracle that verifies nobody.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle that verifies the given principals.
    pub fn with_authorities<I, P>(principals: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Principal>,
    {
        let oracle = Self::new();
        oracle
            .verified
            .write()
            .extend(principals.into_iter().map(Into::into));
        oracle
    }

    pub fn add(&self, principal: impl Into<Principal>) {
        self.verified.write().insert(principal.into());
    }

    pub fn clear(&self) {
        self.verified.write().clear();
    }

    /// Simulate an oracle outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl AuthorityVerifier for InMemoryAuthorities {
    fn is_verified_authority(&self, principal: &Principal) -> Result<bool, VerifierError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(VerifierError::Unavailable(
                "in-memory oracle marked unavailable".to_string(),
            ));
        }
        Ok(self.verified.read().contains(principal))
    }
}

// =============================================================================
// TESTS
// =============================================================================
