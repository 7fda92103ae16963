//! # Error Types
//!
//! All error types for registry operations and their collaborators.
//!
//! Registration failures carry a stable numeric code (see [`codes`]).
//! Authority, fee and update failures are generic rejections and report
//! no code, matching the registry's result contract.

use crate::domain::value_objects::{Amount, Principal, SeedHash, VarietyId};
use thiserror::Error;

// =============================================================================
// RESULT CODES
// =============================================================================

/// Stable numeric result codes.
pub mod codes {
    pub const ERR_NOT_AUTHORIZED: u32 = 100;
    pub const ERR_INVALID_HASH: u32 = 101;
    pub const ERR_INVALID_TITLE: u32 = 102;
    pub const ERR_INVALID_DESCRIPTION: u32 = 103;
    pub const ERR_INVALID_ORIGIN: u32 = 104;
    pub const ERR_INVALID_CATEGORY: u32 = 105;
    pub const ERR_VARIETY_ALREADY_EXISTS: u32 = 106;
    /// Reserved. Lookups answer `None` and update failures carry no code.
    pub const ERR_VARIETY_NOT_FOUND: u32 = 107;
    pub const ERR_AUTHORITY_NOT_VERIFIED: u32 = 109;
    pub const ERR_INVALID_CLIMATE: u32 = 110;
    pub const ERR_INVALID_YIELD: u32 = 111;
    /// Reserved. Update failures carry no code.
    pub const ERR_INVALID_UPDATE_PARAM: u32 = 113;
    pub const ERR_MAX_VARIETIES_EXCEEDED: u32 = 114;
    pub const ERR_INVALID_TRAITS: u32 = 115;
    pub const ERR_INVALID_RESISTANCE: u32 = 116;
    pub const ERR_INVALID_MATURITY: u32 = 117;
    pub const ERR_INVALID_LOCATION: u32 = 118;

    /// Ledger codes surfaced from a failed fee transfer.
    pub const TRANSFER_INSUFFICIENT_FUNDS: u32 = 1;
    pub const TRANSFER_SAME_ACCOUNT: u32 = 2;
    pub const TRANSFER_REJECTED: u32 = 4;
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not a verified authority.
    #[error("caller {0} is not a verified authority")]
    NotAuthorized(Principal),

    /// Hash is not exactly 32 bytes.
    #[error("invalid hash length: {0} bytes, expected 32")]
    InvalidHash(usize),

    /// Title is empty or longer than 100 chars.
    #[error("invalid title length: {0}")]
    InvalidTitle(usize),

    /// Description longer than 500 chars.
    #[error("invalid description length: {0}")]
    InvalidDescription(usize),

    /// Origin longer than 100 chars.
    #[error("invalid origin length: {0}")]
    InvalidOrigin(usize),

    /// Category name not recognised.
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    /// Hash already registered.
    #[error("variety already exists for hash {0}")]
    VarietyAlreadyExists(SeedHash),

    /// No authority contract has been configured.
    #[error("authority contract not configured")]
    AuthorityNotVerified,

    /// Climate name not recognised.
    #[error("invalid climate: {0:?}")]
    InvalidClimate(String),

    /// Yield potential must be positive.
    #[error("invalid yield potential: {0}")]
    InvalidYield(u64),

    /// Update parameters rejected.
    #[error("update rejected: {0}")]
    UpdateRejected(#[from] UpdateRejection),

    /// Registry is at capacity.
    #[error("max varieties exceeded: limit {max}")]
    MaxVarietiesExceeded { max: u64 },

    /// More than 10 traits.
    #[error("invalid traits count: {0}")]
    InvalidTraits(usize),

    /// Resistance longer than 100 chars.
    #[error("invalid resistance length: {0}")]
    InvalidResistance(usize),

    /// Maturity outside (0, 365].
    #[error("invalid maturity days: {0}")]
    InvalidMaturity(u64),

    /// Location longer than 100 chars.
    #[error("invalid location length: {0}")]
    InvalidLocation(usize),

    /// Tried to configure the burn identity as authority.
    #[error("invalid authority contract: {0}")]
    InvalidAuthority(Principal),

    /// Authority is write-once.
    #[error("authority contract already set to {0}")]
    AuthorityAlreadySet(Principal),

    /// Fee change without a configured authority.
    #[error("registration fee requires a configured authority")]
    FeeAuthorityMissing,

    /// Fee change by a caller other than the authority (strict fee policy).
    #[error("caller {0} may not change the registration fee")]
    FeeChangeUnauthorized(Principal),

    /// Authority verification collaborator failed.
    #[error("authority verification failed: {0}")]
    Verifier(#[from] VerifierError),

    /// Fee transfer collaborator failed.
    #[error("fee transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

impl RegistryError {
    /// Numeric result code, or `None` for generic rejections.
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        use codes::*;
        let code = match self {
            Self::NotAuthorized(_) | Self::Verifier(_) => ERR_NOT_AUTHORIZED,
            Self::InvalidHash(_) => ERR_INVALID_HASH,
            Self::InvalidTitle(_) => ERR_INVALID_TITLE,
            Self::InvalidDescription(_) => ERR_INVALID_DESCRIPTION,
            Self::InvalidOrigin(_) => ERR_INVALID_ORIGIN,
            Self::InvalidCategory(_) => ERR_INVALID_CATEGORY,
            Self::VarietyAlreadyExists(_) => ERR_VARIETY_ALREADY_EXISTS,
            Self::AuthorityNotVerified => ERR_AUTHORITY_NOT_VERIFIED,
            Self::InvalidClimate(_) => ERR_INVALID_CLIMATE,
            Self::InvalidYield(_) => ERR_INVALID_YIELD,
            Self::MaxVarietiesExceeded { .. } => ERR_MAX_VARIETIES_EXCEEDED,
            Self::InvalidTraits(_) => ERR_INVALID_TRAITS,
            Self::InvalidResistance(_) => ERR_INVALID_RESISTANCE,
            Self::InvalidMaturity(_) => ERR_INVALID_MATURITY,
            Self::InvalidLocation(_) => ERR_INVALID_LOCATION,
            Self::Transfer(err) => err.code(),
            Self::UpdateRejected(_)
            | Self::InvalidAuthority(_)
            | Self::AuthorityAlreadySet(_)
            | Self::FeeAuthorityMissing
            | Self::FeeChangeUnauthorized(_) => return None,
        };
        Some(code)
    }

    /// Returns true if the failure came from a collaborator rather than
    /// from input or registry state.
    #[must_use]
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Verifier(_) | Self::Transfer(_))
    }
}

/// Why an update was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateRejection {
    #[error("variety {0} does not exist")]
    NotFound(VarietyId),

    #[error("caller {caller} is not the creator {creator}")]
    NotCreator { caller: Principal, creator: Principal },

    #[error("title length {0} outside 1..=100")]
    InvalidTitle(usize),

    #[error("description length {0} exceeds 500")]
    InvalidDescription(usize),
}

// =============================================================================
// COLLABORATOR ERRORS
// =============================================================================

/// Errors from the value-transfer collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Sender balance below the amount.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    /// Sender and recipient are the same account.
    #[error("sender and recipient are the same account: {0}")]
    SameAccount(Principal),

    /// Ledger refused the transfer for another reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

impl TransferError {
    /// Ledger result code.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::InsufficientFunds { .. } => codes::TRANSFER_INSUFFICIENT_FUNDS,
            Self::SameAccount(_) => codes::TRANSFER_SAME_ACCOUNT,
            Self::Rejected(_) => codes::TRANSFER_REJECTED,
        }
    }
}

/// Errors from the authority-verification collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// Oracle could not be reached.
    #[error("authority oracle unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Invalid service configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// The record cap must allow at least one record.
    #[error("max varieties must be greater than zero")]
    ZeroMaxVarieties,
}

// =============================================================================
// TESTS
// =============================================================================
