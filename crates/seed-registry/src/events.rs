//! # Event Schema
//!
//! Events published after each committed state transition.
//! Rejected operations publish nothing.

use crate::domain::value_objects::{Amount, BlockHeight, Principal, SeedHash, VarietyId};
use serde::{Deserialize, Serialize};

/// A committed registry state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// The write-once authority was configured.
    AuthorityConfigured { authority: Principal },

    /// The registration fee changed.
    RegistrationFeeChanged {
        old_fee: Amount,
        new_fee: Amount,
        changed_by: Principal,
    },

    /// A new variety was registered and its fee transferred.
    VarietyRegistered {
        id: VarietyId,
        hash: SeedHash,
        creator: Principal,
        fee: Amount,
        block_height: BlockHeight,
    },

    /// A variety's title and description were replaced.
    VarietyUpdated {
        id: VarietyId,
        updater: Principal,
        block_height: BlockHeight,
    },
}

impl RegistryEvent {
    /// Short topic name, used as a log and metric label.
    #[must_use]
    pub fn topic(&self) -> &'static str {
        match self {
            Self::AuthorityConfigured { .. } => topics::AUTHORITY_CONFIGURED,
            Self::RegistrationFeeChanged { .. } => topics::FEE_CHANGED,
            Self::VarietyRegistered { .. } => topics::VARIETY_REGISTERED,
            Self::VarietyUpdated { .. } => topics::VARIETY_UPDATED,
        }
    }
}

/// Event topic names.
pub mod topics {
    pub const AUTHORITY_CONFIGURED: &str = "registry.authority_configured";
    pub const FEE_CHANGED: &str = "registry.fee_changed";
    pub const VARIETY_REGISTERED: &str = "registry.variety_registered";
    pub const VARIETY_UPDATED: &str = "registry.variety_updated";
}
