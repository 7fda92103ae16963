//! # Core Domain Entities
//!
//! Records held by the registry and the inputs that create or modify them.

use crate::domain::value_objects::{
    hex_bytes, Amount, BlockHeight, Category, Climate, Principal, SeedHash, VarietyId,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Who is calling and when.
///
/// Every state-changing operation receives this explicitly instead of
/// reading an ambient caller or clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Identity the call is attributed to.
    pub caller: Principal,
    /// Current logical time.
    pub block_height: BlockHeight,
}

impl CallContext {
    /// Creates a context for `caller` at `block_height`.
    #[must_use]
    pub fn new(caller: impl Into<Principal>, block_height: BlockHeight) -> Self {
        Self {
            caller: caller.into(),
            block_height,
        }
    }
}

// =============================================================================
// REGISTRATION REQUEST
// =============================================================================

/// Raw, unvalidated inputs to a registration.
///
/// Category and climate arrive as names so an unknown value can be reported
/// with its own error code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Content hash; must be exactly 32 bytes.
    #[serde(with = "hex_bytes")]
    pub hash: Vec<u8>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub origin: String,
    pub category: String,
    pub climate: String,
    pub yield_potential: u64,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub resistance: String,
    pub maturity_days: u64,
    #[serde(default)]
    pub location: String,
}

// =============================================================================
// VARIETY
// =============================================================================

/// A registered seed variety.
///
/// Only `title`, `description` and `timestamp` ever change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    pub hash: SeedHash,
    pub title: String,
    pub description: String,
    pub origin: String,
    pub category: Category,
    pub climate: Climate,
    pub yield_potential: u64,
    pub traits: Vec<String>,
    pub resistance: String,
    pub maturity_days: u64,
    pub location: String,
    /// Creation height, replaced by the update height on each update.
    pub timestamp: BlockHeight,
    /// The only identity allowed to update this record.
    pub creator: Principal,
    /// Active flag. Always true; there is no deactivation.
    pub status: bool,
}

/// The most recent update applied to a variety.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyUpdate {
    pub update_title: String,
    pub update_description: String,
    pub update_timestamp: BlockHeight,
    pub updater: Principal,
}

/// Outcome of a committed registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub id: VarietyId,
    /// Fee actually transferred to the authority.
    pub fee: Amount,
}

// =============================================================================
// FEE TRANSFER
// =============================================================================

/// A value transfer requested by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTransfer {
    pub amount: Amount,
    pub from: Principal,
    pub to: Principal,
}

impl FeeTransfer {
    #[must_use]
    pub fn new(amount: Amount, from: Principal, to: Principal) -> Self {
        Self { amount, from, to }
    }
}
