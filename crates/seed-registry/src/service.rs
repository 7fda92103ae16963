//! # Seed Registry Service
//!
//! Owns the registry state and implements [`SeedRegistryApi`].
//!
//! ## Concurrency
//!
//! All state lives behind one `parking_lot::Mutex`. Every operation takes the
//! lock once and holds it through validation, collaborator calls, mutation
//! and event publication, so operations never interleave.
//!
//! ## Registration order
//!
//! 1. capacity, 2-12. field checks (see `domain::services`),
//! 13. caller verified, 14. hash unused, 15. authority configured,
//! then the fee transfer, then the insert. Any failure leaves state untouched.

use crate::adapters::{InMemoryAuthorities, InMemoryLedger, LoggingPublisher};
use crate::domain::entities::{
    CallContext, RegistrationReceipt, RegistrationRequest, Variety, VarietyUpdate,
};
use crate::domain::invariants::{check_all_invariants, limits, InvariantCheckResult};
use crate::domain::services::{validate_registration_fields, validate_update_fields};
use crate::domain::store::VarietyStore;
use crate::domain::value_objects::{Amount, Principal, SeedHash, VarietyId};
use crate::errors::{ConfigError, RegistryError, UpdateRejection};
use crate::events::RegistryEvent;
use crate::ports::inbound::SeedRegistryApi;
use crate::ports::outbound::{AuthorityVerifier, EventPublisher, ValueTransfer};

use parking_lot::{Mutex, RwLock};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Who may change the registration fee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeePolicy {
    /// Anyone, once an authority is configured.
    #[default]
    AuthorityConfigured,
    /// Only the configured authority itself.
    AuthorityOnly,
}

impl FromStr for FeePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authority-configured" => Ok(Self::AuthorityConfigured),
            "authority-only" => Ok(Self::AuthorityOnly),
            other => Err(ConfigError::InvalidValue {
                key: "SEED_FEE_POLICY",
                value: other.to_string(),
            }),
        }
    }
}

/// Registry service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Hard cap on records ever created.
    pub max_varieties: u64,
    /// Initial registration fee.
    pub registration_fee: Amount,
    /// Fee change gate.
    pub fee_policy: FeePolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_varieties: limits::DEFAULT_MAX_VARIETIES,
            registration_fee: limits::DEFAULT_REGISTRATION_FEE,
            fee_policy: FeePolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEED_MAX_VARIETIES`: record cap (default: 10000)
    /// - `SEED_REGISTRATION_FEE`: initial fee (default: 500)
    /// - `SEED_FEE_POLICY`: `authority-configured` | `authority-only`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SEED_MAX_VARIETIES") {
            config.max_varieties = parse_u64("SEED_MAX_VARIETIES", &raw)?;
        }
        if let Some(raw) = lookup("SEED_REGISTRATION_FEE") {
            config.registration_fee = parse_u64("SEED_REGISTRATION_FEE", &raw)?;
        }
        if let Some(raw) = lookup("SEED_FEE_POLICY") {
            config.fee_policy = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_varieties == 0 {
            return Err(ConfigError::ZeroMaxVarieties);
        }
        Ok(())
    }
}

fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

// =============================================================================
// STATE
// =============================================================================

/// Everything the registry persists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryState {
    store: VarietyStore,
    authority: Option<Principal>,
    registration_fee: Amount,
    max_varieties: u64,
}

impl RegistryState {
    fn new(config: &ServiceConfig) -> Self {
        Self {
            store: VarietyStore::new(),
            authority: None,
            registration_fee: config.registration_fee,
            max_varieties: config.max_varieties,
        }
    }

    #[must_use]
    pub fn store(&self) -> &VarietyStore {
        &self.store
    }

    #[must_use]
    pub fn authority(&self) -> Option<&Principal> {
        self.authority.as_ref()
    }

    #[must_use]
    pub fn registration_fee(&self) -> Amount {
        self.registration_fee
    }

    #[must_use]
    pub fn max_varieties(&self) -> u64 {
        self.max_varieties
    }
}

/// Statistics for the registry service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Successful registrations.
    pub registrations: u64,
    /// Rejected registrations.
    pub registration_rejections: u64,
    /// Applied updates.
    pub updates: u64,
    /// Rejected updates.
    pub update_rejections: u64,
    /// Successful authority/fee changes.
    pub config_changes: u64,
    /// Rejected authority/fee changes.
    pub config_rejections: u64,
    /// Total fees transferred to the authority.
    pub fees_collected: Amount,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The seed variety registry.
pub struct SeedRegistryService<V: AuthorityVerifier, T: ValueTransfer> {
    config: ServiceConfig,
    verifier: V,
    ledger: T,
    events: Arc<dyn EventPublisher>,
    state: Mutex<RegistryState>,
    stats: RwLock<ServiceStats>,
}

impl<V: AuthorityVerifier, T: ValueTransfer> SeedRegistryService<V, T> {
    /// Create a registry with empty state.
    pub fn new(verifier: V, ledger: T, config: ServiceConfig) -> Self {
        let state = RegistryState::new(&config);
        Self {
            config,
            verifier,
            ledger,
            events: Arc::new(LoggingPublisher),
            state: Mutex::new(state),
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Replace the event sink.
    #[must_use]
    pub fn with_event_publisher(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[must_use]
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    #[must_use]
    pub fn ledger(&self) -> &T {
        &self.ledger
    }

    /// Current service statistics.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// A copy of the full registry state.
    #[must_use]
    pub fn snapshot(&self) -> RegistryState {
        self.state.lock().clone()
    }

    /// Run every state invariant check against the current state.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        let state = self.state.lock();
        check_all_invariants(&state.store, state.max_varieties)
    }

    fn try_set_authority(&self, authority: Principal) -> Result<(), RegistryError> {
        if authority.is_burn() {
            return Err(RegistryError::InvalidAuthority(authority));
        }
        let mut state = self.state.lock();
        if let Some(existing) = &state.authority {
            return Err(RegistryError::AuthorityAlreadySet(existing.clone()));
        }
        state.authority = Some(authority.clone());
        self.events
            .publish(&RegistryEvent::AuthorityConfigured { authority });
        Ok(())
    }

    /// Returns the previous fee.
    fn try_set_fee(&self, ctx: &CallContext, fee: Amount) -> Result<Amount, RegistryError> {
        let mut state = self.state.lock();
        let Some(authority) = &state.authority else {
            return Err(RegistryError::FeeAuthorityMissing);
        };
        if self.config.fee_policy == FeePolicy::AuthorityOnly && *authority != ctx.caller {
            return Err(RegistryError::FeeChangeUnauthorized(ctx.caller.clone()));
        }
        let old_fee = std::mem::replace(&mut state.registration_fee, fee);
        self.events.publish(&RegistryEvent::RegistrationFeeChanged {
            old_fee,
            new_fee: fee,
            changed_by: ctx.caller.clone(),
        });
        Ok(old_fee)
    }

    fn try_register(
        &self,
        ctx: &CallContext,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistryError> {
        let mut state = self.state.lock();

        if state.store.next_id() >= state.max_varieties {
            return Err(RegistryError::MaxVarietiesExceeded {
                max: state.max_varieties,
            });
        }

        let fields = validate_registration_fields(&request)?;

        if !self.verifier.is_verified_authority(&ctx.caller)? {
            return Err(RegistryError::NotAuthorized(ctx.caller.clone()));
        }

        if state.store.contains_hash(&fields.hash) {
            return Err(RegistryError::VarietyAlreadyExists(fields.hash));
        }

        let authority = state
            .authority
            .clone()
            .ok_or(RegistryError::AuthorityNotVerified)?;

        // Last fallible step; nothing has been written yet.
        let fee = state.registration_fee;
        self.ledger.transfer(fee, &ctx.caller, &authority)?;

        let RegistrationRequest {
            title,
            description,
            origin,
            yield_potential,
            traits,
            resistance,
            maturity_days,
            location,
            ..
        } = request;

        let id = state.store.insert(Variety {
            hash: fields.hash,
            title,
            description,
            origin,
            category: fields.category,
            climate: fields.climate,
            yield_potential,
            traits,
            resistance,
            maturity_days,
            location,
            timestamp: ctx.block_height,
            creator: ctx.caller.clone(),
            status: true,
        });
        debug_assert!(check_all_invariants(&state.store, state.max_varieties).is_valid());

        self.events.publish(&RegistryEvent::VarietyRegistered {
            id,
            hash: fields.hash,
            creator: ctx.caller.clone(),
            fee,
            block_height: ctx.block_height,
        });

        Ok(RegistrationReceipt { id, fee })
    }

    fn try_update(
        &self,
        ctx: &CallContext,
        id: VarietyId,
        title: String,
        description: String,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.lock();

        let variety = state
            .store
            .get(id)
            .ok_or(UpdateRejection::NotFound(id))?;
        if variety.creator != ctx.caller {
            return Err(UpdateRejection::NotCreator {
                caller: ctx.caller.clone(),
                creator: variety.creator.clone(),
            }
            .into());
        }
        validate_update_fields(&title, &description)?;

        let applied =
            state
                .store
                .apply_update(id, title, description, ctx.block_height, ctx.caller.clone());
        debug_assert!(applied);

        self.events.publish(&RegistryEvent::VarietyUpdated {
            id,
            updater: ctx.caller.clone(),
            block_height: ctx.block_height,
        });
        Ok(())
    }

    fn record_config_outcome(&self, result: &Result<(), RegistryError>) {
        let mut stats = self.stats.write();
        match result {
            Ok(()) => stats.config_changes += 1,
            Err(_) => stats.config_rejections += 1,
        }
    }
}

/// Create a registry with in-memory adapters, `ST1TEST` as the only
/// verified authority, and default configuration.
#[must_use]
pub fn create_test_service() -> SeedRegistryService<InMemoryAuthorities, InMemoryLedger> {
    SeedRegistryService::new(
        InMemoryAuthorities::with_authorities(["ST1TEST"]),
        InMemoryLedger::new(),
        ServiceConfig::default(),
    )
}

// =============================================================================
// SeedRegistryApi Implementation
// =============================================================================

impl<V: AuthorityVerifier, T: ValueTransfer> SeedRegistryApi for SeedRegistryService<V, T> {
    #[instrument(skip(self, ctx, authority), fields(caller = %ctx.caller, authority = %authority))]
    fn set_authority_contract(
        &self,
        ctx: &CallContext,
        authority: Principal,
    ) -> Result<(), RegistryError> {
        let result = self.try_set_authority(authority);
        match &result {
            Ok(()) => info!("Authority contract configured"),
            Err(e) => warn!(error = %e, "Authority contract rejected"),
        }
        self.record_config_outcome(&result);
        result
    }

    #[instrument(skip(self, ctx), fields(caller = %ctx.caller))]
    fn set_registration_fee(&self, ctx: &CallContext, fee: Amount) -> Result<(), RegistryError> {
        let result = self.try_set_fee(ctx, fee);
        match &result {
            Ok(old_fee) => info!(old_fee, new_fee = fee, "Registration fee changed"),
            Err(e) => warn!(error = %e, "Registration fee change rejected"),
        }
        let result = result.map(|_| ());
        self.record_config_outcome(&result);
        result
    }

    #[instrument(
        skip(self, ctx, request),
        fields(caller = %ctx.caller, block_height = ctx.block_height, title = %request.title)
    )]
    fn register_variety_receipt(
        &self,
        ctx: &CallContext,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistryError> {
        let result = self.try_register(ctx, request);

        let mut stats = self.stats.write();
        match result {
            Ok(receipt) => {
                stats.registrations += 1;
                stats.fees_collected = stats.fees_collected.saturating_add(receipt.fee);
                info!(id = receipt.id, fee = receipt.fee, "Variety registered");
                Ok(receipt)
            }
            Err(e) => {
                stats.registration_rejections += 1;
                warn!(code = ?e.code(), error = %e, "Variety registration rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self, ctx, title, description), fields(caller = %ctx.caller))]
    fn update_variety(
        &self,
        ctx: &CallContext,
        id: VarietyId,
        title: String,
        description: String,
    ) -> Result<(), RegistryError> {
        let result = self.try_update(ctx, id, title, description);

        let mut stats = self.stats.write();
        match &result {
            Ok(()) => {
                stats.updates += 1;
                info!("Variety updated");
            }
            Err(e) => {
                stats.update_rejections += 1;
                warn!(error = %e, "Variety update rejected");
            }
        }
        result
    }

    fn get_variety(&self, id: VarietyId) -> Option<Variety> {
        self.state.lock().store.get(id).cloned()
    }

    fn get_variety_update(&self, id: VarietyId) -> Option<VarietyUpdate> {
        self.state.lock().store.latest_update(id).cloned()
    }

    fn get_variety_count(&self) -> u64 {
        self.state.lock().store.next_id()
    }

    fn check_variety_existence(&self, hash: &[u8]) -> bool {
        self.get_variety_id_by_hash(hash).is_some()
    }

    fn get_variety_id_by_hash(&self, hash: &[u8]) -> Option<VarietyId> {
        let Some(hash) = SeedHash::from_slice(hash) else {
            debug!(len = hash.len(), "Lookup with malformed hash");
            return None;
        };
        self.state.lock().store.id_by_hash(&hash)
    }

    fn get_registration_fee(&self) -> Amount {
        self.state.lock().registration_fee
    }

    fn get_authority_contract(&self) -> Option<Principal> {
        self.state.lock().authority.clone()
    }

    fn get_max_varieties(&self) -> u64 {
        self.state.lock().max_varieties
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEventLog;
    use crate::domain::invariants::check_authority_write_once;
    use crate::domain::value_objects::Category;
    use crate::errors::{codes, TransferError, VerifierError};

    fn ctx(caller: &str) -> CallContext {
        CallContext::new(caller, 0)
    }

    fn request(seed: u8) -> RegistrationRequest {
        RegistrationRequest {
            hash: vec![seed; 32],
            title: "Tomato Heritage".to_string(),
            description: "Red juicy tomatoes".to_string(),
            origin: "Italy".to_string(),
            category: "vegetable".to_string(),
            climate: "temperate".to_string(),
            yield_potential: 500,
            traits: vec!["drought-resistant".to_string()],
            resistance: "pest-resistant".to_string(),
            maturity_days: 90,
            location: "Farm A".to_string(),
        }
    }

    fn configured_service() -> SeedRegistryService<InMemoryAuthorities, InMemoryLedger> {
        let service = create_test_service();
        service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST2TEST"))
            .unwrap();
        service
    }

    #[test]
    fn test_create_service() {
        let service = create_test_service();
        assert_eq!(service.get_variety_count(), 0);
        assert_eq!(service.get_registration_fee(), 500);
        assert_eq!(service.get_max_varieties(), 10_000);
        assert_eq!(service.get_authority_contract(), None);
        assert_eq!(service.stats(), ServiceStats::default());
    }

    #[test]
    fn test_register_success() {
        let service = configured_service();
        let id = service
            .register_variety(&CallContext::new("ST1TEST", 42), request(1))
            .unwrap();
        assert_eq!(id, 0);

        let variety = service.get_variety(0).unwrap();
        assert_eq!(variety.category, Category::Vegetable);
        assert_eq!(variety.timestamp, 42);
        assert_eq!(variety.creator, Principal::new("ST1TEST"));
        assert!(variety.status);

        let stats = service.stats();
        assert_eq!(stats.registrations, 1);
        assert_eq!(stats.fees_collected, 500);
        assert!(service.check_invariants().is_valid());
    }

    #[test]
    fn test_receipt_reports_charged_fee() {
        let service = configured_service();
        service.set_registration_fee(&ctx("ST1TEST"), 750).unwrap();

        let receipt = service
            .register_variety_receipt(&ctx("ST1TEST"), request(1))
            .unwrap();
        assert_eq!(receipt, RegistrationReceipt { id: 0, fee: 750 });
        assert_eq!(service.ledger().transfers()[0].amount, receipt.fee);
    }

    #[test]
    fn test_capacity_checked_before_fields() {
        let service = SeedRegistryService::new(
            InMemoryAuthorities::with_authorities(["ST1TEST"]),
            InMemoryLedger::new(),
            ServiceConfig {
                max_varieties: 1,
                ..ServiceConfig::default()
            },
        );
        service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST2TEST"))
            .unwrap();
        service.register_variety(&ctx("ST1TEST"), request(1)).unwrap();

        let mut bad = request(2);
        bad.hash = vec![0u8; 3];
        let err = service.register_variety(&ctx("ST1TEST"), bad).unwrap_err();
        assert_eq!(err.code(), Some(codes::ERR_MAX_VARIETIES_EXCEEDED));
    }

    #[test]
    fn test_authorization_checked_before_duplicate() {
        let service = configured_service();
        service.register_variety(&ctx("ST1TEST"), request(1)).unwrap();

        let err = service
            .register_variety(&ctx("ST9OTHER"), request(1))
            .unwrap_err();
        assert_eq!(err.code(), Some(codes::ERR_NOT_AUTHORIZED));
    }

    #[test]
    fn test_unconfigured_authority_rejected() {
        let service = create_test_service();
        let err = service
            .register_variety(&ctx("ST1TEST"), request(3))
            .unwrap_err();
        assert_eq!(err.code(), Some(codes::ERR_AUTHORITY_NOT_VERIFIED));
        assert!(service.ledger().transfers().is_empty());
    }

    #[test]
    fn test_verifier_outage_aborts() {
        let service = configured_service();
        service.verifier().set_unavailable(true);
        let err = service
            .register_variety(&ctx("ST1TEST"), request(1))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Verifier(VerifierError::Unavailable(
                "in-memory oracle marked unavailable".to_string()
            ))
        );
        assert_eq!(service.get_variety_count(), 0);
    }

    #[test]
    fn test_transfer_failure_leaves_state_unchanged() {
        let service = configured_service();
        let before = service.snapshot();
        service
            .ledger()
            .force_failure(Some(TransferError::Rejected("halted".into())));

        let err = service
            .register_variety(&ctx("ST1TEST"), request(1))
            .unwrap_err();
        assert_eq!(err.code(), Some(codes::TRANSFER_REJECTED));
        assert_eq!(service.snapshot(), before);
        assert!(!service.check_variety_existence(&[1u8; 32]));
    }

    #[test]
    fn test_authority_is_write_once() {
        let service = create_test_service();
        service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST2TEST"))
            .unwrap();
        let before = service.snapshot();
        let err = service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST3TEST"))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::AuthorityAlreadySet(Principal::new("ST2TEST"))
        );
        assert_eq!(
            service.get_authority_contract(),
            Some(Principal::new("ST2TEST"))
        );
        assert!(check_authority_write_once(
            before.authority(),
            service.snapshot().authority()
        ));
        assert_eq!(service.stats().config_rejections, 1);
    }

    #[test]
    fn test_burn_authority_rejected() {
        let service = create_test_service();
        let err = service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new(Principal::BURN_ADDRESS))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidAuthority(_)));
        assert_eq!(service.get_authority_contract(), None);
    }

    #[test]
    fn test_fee_change_any_caller_by_default() {
        let service = configured_service();
        service
            .set_registration_fee(&ctx("ST9ANYONE"), 1000)
            .unwrap();
        assert_eq!(service.get_registration_fee(), 1000);
    }

    #[test]
    fn test_fee_change_authority_only_policy() {
        let service = SeedRegistryService::new(
            InMemoryAuthorities::with_authorities(["ST1TEST"]),
            InMemoryLedger::new(),
            ServiceConfig {
                fee_policy: FeePolicy::AuthorityOnly,
                ..ServiceConfig::default()
            },
        );
        service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST2TEST"))
            .unwrap();

        let err = service
            .set_registration_fee(&ctx("ST1TEST"), 1000)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::FeeChangeUnauthorized(Principal::new("ST1TEST"))
        );
        assert_eq!(service.get_registration_fee(), 500);

        service.set_registration_fee(&ctx("ST2TEST"), 1000).unwrap();
        assert_eq!(service.get_registration_fee(), 1000);
    }

    #[test]
    fn test_update_rejections() {
        let service = configured_service();
        service.register_variety(&ctx("ST1TEST"), request(7)).unwrap();

        let err = service
            .update_variety(&ctx("ST1TEST"), 99, "T".into(), String::new())
            .unwrap_err();
        assert_eq!(err, RegistryError::UpdateRejected(UpdateRejection::NotFound(99)));

        let err = service
            .update_variety(&ctx("ST3FAKE"), 0, "New Title".into(), "New Desc".into())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UpdateRejected(UpdateRejection::NotCreator { .. })
        ));

        let err = service
            .update_variety(&ctx("ST1TEST"), 0, String::new(), String::new())
            .unwrap_err();
        assert_eq!(err.code(), None);
        assert!(service.get_variety_update(0).is_none());
        assert_eq!(service.stats().update_rejections, 3);
    }

    #[test]
    fn test_events_published_on_commit_only() {
        let log = Arc::new(InMemoryEventLog::new());
        let service = create_test_service().with_event_publisher(log.clone());

        let _ = service.register_variety(&ctx("ST1TEST"), request(1));
        assert!(log.is_empty());

        service
            .set_authority_contract(&ctx("ST1TEST"), Principal::new("ST2TEST"))
            .unwrap();
        service.register_variety(&ctx("ST1TEST"), request(1)).unwrap();
        service
            .update_variety(&ctx("ST1TEST"), 0, "New".into(), String::new())
            .unwrap();

        let topics: Vec<_> = log.events().iter().map(RegistryEvent::topic).collect();
        assert_eq!(
            topics,
            vec![
                crate::events::topics::AUTHORITY_CONFIGURED,
                crate::events::topics::VARIETY_REGISTERED,
                crate::events::topics::VARIETY_UPDATED,
            ]
        );
    }

    #[test]
    fn test_malformed_hash_lookup() {
        let service = configured_service();
        service.register_variety(&ctx("ST1TEST"), request(1)).unwrap();
        assert!(service.check_variety_existence(&[1u8; 32]));
        assert!(!service.check_variety_existence(&[1u8; 31]));
        assert_eq!(service.get_variety_id_by_hash(&[1u8; 32]), Some(0));
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServiceConfig::from_lookup(|key| match key {
            "SEED_MAX_VARIETIES" => Some("5".to_string()),
            "SEED_FEE_POLICY" => Some("authority-only".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.max_varieties, 5);
        assert_eq!(config.registration_fee, 500);
        assert_eq!(config.fee_policy, FeePolicy::AuthorityOnly);

        let err = ServiceConfig::from_lookup(|key| {
            (key == "SEED_REGISTRATION_FEE").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "SEED_REGISTRATION_FEE", .. }));

        let err = ServiceConfig::from_lookup(|key| {
            (key == "SEED_MAX_VARIETIES").then(|| "0".to_string())
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroMaxVarieties);
    }
}
