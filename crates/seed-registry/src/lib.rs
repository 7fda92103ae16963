//! # Seed Registry - Authority-Gated Variety Records
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Keeps a registry of seed variety records addressed by a 32-byte content
//! hash. Only verified authorities may register, every registration transfers
//! a fee from the caller to a single configured authority account, and each
//! record can later be retitled only by its creator.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Hash index matches records one-to-one | `domain/invariants.rs` - `check_hash_index_invariant()` |
//! | Ids are gapless from 0 | `domain/invariants.rs` - `check_gapless_ids_invariant()` |
//! | Record count never exceeds the cap | `domain/invariants.rs` - `check_capacity_invariant()` |
//! | Authority is write-once | `service.rs` - `try_set_authority()`, checked by `check_authority_write_once()` |
//! | Only creators update their records | `domain/invariants.rs` - `check_creator_updates_invariant()` |
//! | Rejected operations leave no trace | `service.rs` - all checks before the transfer |
//!
//! ## Registration Checks (first failure wins)
//!
//! | Order | Check | Code |
//! |-------|-------|------|
//! | 1 | record cap | 114 |
//! | 2 | hash is 32 bytes | 101 |
//! | 3 | title 1..=100 chars | 102 |
//! | 4 | description <= 500 chars | 103 |
//! | 5 | origin <= 100 chars | 104 |
//! | 6 | known category | 105 |
//! | 7 | known climate | 110 |
//! | 8 | yield > 0 | 111 |
//! | 9 | at most 10 traits | 115 |
//! | 10 | resistance <= 100 chars | 116 |
//! | 11 | maturity 1..=365 days | 117 |
//! | 12 | location <= 100 chars | 118 |
//! | 13 | caller is a verified authority | 100 |
//! | 14 | hash not yet registered | 106 |
//! | 15 | authority configured | 109 |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `AuthorityVerifier` | Is the caller allowed to register |
//! | `ValueTransfer` | Move the registration fee |
//! | `EventPublisher` | Observe committed transitions |
//!
//! ## Usage Example
//!
//! ```ignore
//! use seed_registry::prelude::*;
//!
//! let registry = create_test_service();
//! let ctx = CallContext::new("ST1TEST", 1);
//! registry.set_authority_contract(&ctx, Principal::new("ST2TEST"))?;
//! let id = registry.register_variety(&ctx, request)?;
//! ```

// Crate-level lints
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        CallContext, FeeTransfer, RegistrationReceipt, RegistrationRequest, Variety,
        VarietyUpdate,
    };

    // Value objects
    pub use crate::domain::value_objects::{
        Amount, BlockHeight, Category, Climate, Principal, SeedHash, VarietyId,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, check_authority_write_once, limits, InvariantCheckResult,
        InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::SeedRegistryApi;
    pub use crate::ports::outbound::{AuthorityVerifier, EventPublisher, ValueTransfer};

    // Adapters
    pub use crate::adapters::{
        InMemoryAuthorities, InMemoryEventLog, InMemoryLedger, LoggingPublisher,
    };

    // Events
    pub use crate::events::{topics, RegistryEvent};

    // Errors
    pub use crate::errors::{
        codes, ConfigError, RegistryError, TransferError, UpdateRejection, VerifierError,
    };

    // Service
    pub use crate::service::{
        create_test_service, FeePolicy, RegistryState, SeedRegistryService, ServiceConfig,
        ServiceStats,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exposes_service() {
        let registry = create_test_service();
        assert_eq!(registry.get_variety_count(), 0);
        assert_eq!(registry.get_max_varieties(), limits::DEFAULT_MAX_VARIETIES);
    }

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
