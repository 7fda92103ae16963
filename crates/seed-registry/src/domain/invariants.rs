//! # Domain Invariants
//!
//! Invariants that MUST hold for the registry state after every operation:
//!
//! - INVARIANT-1: Hash uniqueness (every hash maps to exactly one record)
//! - INVARIANT-2: Gapless ids (`0..next_id` are all issued)
//! - INVARIANT-3: Capacity (`next_id <= max_varieties`)
//! - INVARIANT-4: Authority write-once
//! - INVARIANT-5: Creator-only updates

use crate::domain::store::VarietyStore;
use crate::domain::value_objects::Principal;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Hash Uniqueness
///
/// The hash index and the primary table describe the same set of records.
#[must_use]
pub fn check_hash_index_invariant(store: &VarietyStore) -> bool {
    store.hash_index_len() == store.len()
        && store
            .iter()
            .all(|(id, variety)| store.id_by_hash(&variety.hash) == Some(id))
}

/// INVARIANT-2: Gapless Ids
#[must_use]
pub fn check_gapless_ids_invariant(store: &VarietyStore) -> bool {
    store.len() as u64 == store.next_id()
        && store.iter().enumerate().all(|(i, (id, _))| i as u64 == id)
}

/// INVARIANT-3: Capacity
#[must_use]
pub fn check_capacity_invariant(store: &VarietyStore, max_varieties: u64) -> bool {
    store.next_id() <= max_varieties
}

/// INVARIANT-4: Authority Write-Once
///
/// Once set, the authority never changes or clears.
#[must_use]
pub fn check_authority_write_once(before: Option<&Principal>, after: Option<&Principal>) -> bool {
    match before {
        Some(previous) => after == Some(previous),
        None => true,
    }
}

/// INVARIANT-5: Creator-Only Updates
///
/// Every retained update was made by the record's creator.
#[must_use]
pub fn check_creator_updates_invariant(store: &VarietyStore) -> bool {
    store.iter().all(|(id, variety)| {
        store
            .latest_update(id)
            .map_or(true, |update| update.updater == variety.creator)
    })
}

/// Check all state invariants at once.
#[must_use]
pub fn check_all_invariants(store: &VarietyStore, max_varieties: u64) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_hash_index_invariant(store) {
        violations.push(InvariantViolation::HashIndexMismatch {
            records: store.len(),
            indexed: store.hash_index_len(),
        });
    }

    if !check_gapless_ids_invariant(store) {
        violations.push(InvariantViolation::IdGap {
            next_id: store.next_id(),
            records: store.len(),
        });
    }

    if !check_capacity_invariant(store, max_varieties) {
        violations.push(InvariantViolation::CapacityExceeded {
            count: store.next_id(),
            max: max_varieties,
        });
    }

    if !check_creator_updates_invariant(store) {
        violations.push(InvariantViolation::ForeignUpdate);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Hash index and primary table disagree.
    HashIndexMismatch { records: usize, indexed: usize },
    /// Issued ids are not contiguous from zero.
    IdGap { next_id: u64, records: usize },
    /// More records than the configured cap.
    CapacityExceeded { count: u64, max: u64 },
    /// An update was recorded for someone other than the creator.
    ForeignUpdate,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashIndexMismatch { records, indexed } => {
                write!(f, "hash index mismatch: {records} records, {indexed} indexed")
            }
            Self::IdGap { next_id, records } => {
                write!(f, "id gap: next id {next_id}, {records} records")
            }
            Self::CapacityExceeded { count, max } => {
                write!(f, "capacity exceeded: {count} > {max}")
            }
            Self::ForeignUpdate => write!(f, "update recorded for non-creator"),
        }
    }
}

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Field limits for registrations and updates.
pub mod limits {
    /// Maximum title length (min is 1).
    pub const MAX_TITLE_LEN: usize = 100;

    /// Maximum description length.
    pub const MAX_DESCRIPTION_LEN: usize = 500;

    /// Maximum origin length.
    pub const MAX_ORIGIN_LEN: usize = 100;

    /// Maximum number of traits.
    pub const MAX_TRAITS: usize = 10;

    /// Maximum resistance length.
    pub const MAX_RESISTANCE_LEN: usize = 100;

    /// Maximum days to maturity (min is 1).
    pub const MAX_MATURITY_DAYS: u64 = 365;

    /// Maximum location length.
    pub const MAX_LOCATION_LEN: usize = 100;

    /// Default cap on total records.
    pub const DEFAULT_MAX_VARIETIES: u64 = 10_000;

    /// Default registration fee.
    pub const DEFAULT_REGISTRATION_FEE: u64 = 500;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Variety;
    use crate::domain::value_objects::{Category, Climate, SeedHash};

    fn variety(seed: u8, creator: &str) -> Variety {
        Variety {
            hash: SeedHash::new([seed; 32]),
            title: "Title".to_string(),
            description: String::new(),
            origin: String::new(),
            category: Category::Grain,
            climate: Climate::Cold,
            yield_potential: 1,
            traits: Vec::new(),
            resistance: String::new(),
            maturity_days: 30,
            location: String::new(),
            timestamp: 0,
            creator: Principal::new(creator),
            status: true,
        }
    }

    #[test]
    fn test_empty_store_valid() {
        let store = VarietyStore::new();
        assert!(check_all_invariants(&store, 1).is_valid());
    }

    #[test]
    fn test_populated_store_valid() {
        let mut store = VarietyStore::new();
        store.insert(variety(1, "C"));
        store.insert(variety(2, "C"));
        assert!(check_hash_index_invariant(&store));
        assert!(check_gapless_ids_invariant(&store));
        assert!(check_capacity_invariant(&store, 2));
        assert!(!check_capacity_invariant(&store, 1));
    }

    #[test]
    fn test_capacity_violation_reported() {
        let mut store = VarietyStore::new();
        store.insert(variety(1, "C"));
        store.insert(variety(2, "C"));

        match check_all_invariants(&store, 1) {
            InvariantCheckResult::Invalid(violations) => {
                assert_eq!(
                    violations,
                    vec![InvariantViolation::CapacityExceeded { count: 2, max: 1 }]
                );
            }
            InvariantCheckResult::Valid => panic!("Expected capacity violation"),
        }
    }

    #[test]
    fn test_authority_write_once() {
        let x = Principal::new("X");
        let y = Principal::new("Y");
        assert!(check_authority_write_once(None, None));
        assert!(check_authority_write_once(None, Some(&x)));
        assert!(check_authority_write_once(Some(&x), Some(&x)));
        assert!(!check_authority_write_once(Some(&x), Some(&y)));
        assert!(!check_authority_write_once(Some(&x), None));
    }

    #[test]
    fn test_violation_display() {
        let v = InvariantViolation::IdGap {
            next_id: 3,
            records: 2,
        };
        assert_eq!(v.to_string(), "id gap: next id 3, 2 records");
    }
}
