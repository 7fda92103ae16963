//! # Driving Ports (API - Inbound)
//!
//! The public API of the registry. Every state-changing operation takes an
//! explicit [`CallContext`] carrying the caller and the current block height.
//!
//! Each call is one atomic transition: it either commits fully or leaves the
//! registry exactly as it was.

use crate::domain::entities::{
    CallContext, RegistrationReceipt, RegistrationRequest, Variety, VarietyUpdate,
};
use crate::domain::value_objects::{Amount, Principal, VarietyId};
use crate::errors::RegistryError;

/// Primary API for the seed variety registry.
///
/// ## Usage
///
/// ```ignore
/// let ctx = CallContext::new("ST1TEST", height);
/// registry.set_authority_contract(&ctx, Principal::new("ST2TEST"))?;
/// let id = registry.register_variety(&ctx, request)?;
/// ```
pub trait SeedRegistryApi: Send + Sync {
    // === Configuration ===

    /// Configure the fee-receiving authority. Write-once.
    ///
    /// Fails if `authority` is the burn identity or an authority is already set.
    fn set_authority_contract(
        &self,
        ctx: &CallContext,
        authority: Principal,
    ) -> Result<(), RegistryError>;

    /// Replace the registration fee. Requires a configured authority.
    fn set_registration_fee(&self, ctx: &CallContext, fee: Amount) -> Result<(), RegistryError>;

    // === Transitions ===

    /// Register a new variety, charging the registration fee to the caller.
    ///
    /// # Returns
    ///
    /// * `VarietyId` - The id assigned to the new record
    fn register_variety(
        &self,
        ctx: &CallContext,
        request: RegistrationRequest,
    ) -> Result<VarietyId, RegistryError> {
        self.register_variety_receipt(ctx, request)
            .map(|receipt| receipt.id)
    }

    /// Same as [`register_variety`](Self::register_variety), also reporting
    /// the fee charged inside the same transition.
    fn register_variety_receipt(
        &self,
        ctx: &CallContext,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistryError>;

    /// Replace title and description of a variety the caller created.
    fn update_variety(
        &self,
        ctx: &CallContext,
        id: VarietyId,
        title: String,
        description: String,
    ) -> Result<(), RegistryError>;

    // === Queries ===

    fn get_variety(&self, id: VarietyId) -> Option<Variety>;

    /// The latest update applied to a variety, if any.
    fn get_variety_update(&self, id: VarietyId) -> Option<VarietyUpdate>;

    /// Number of issued ids.
    fn get_variety_count(&self) -> u64;

    /// Whether a hash is registered. Hashes of the wrong length are never
    /// registered.
    fn check_variety_existence(&self, hash: &[u8]) -> bool;

    fn get_variety_id_by_hash(&self, hash: &[u8]) -> Option<VarietyId>;

    fn get_registration_fee(&self) -> Amount;

    fn get_authority_contract(&self) -> Option<Principal>;

    fn get_max_varieties(&self) -> u64;
}
