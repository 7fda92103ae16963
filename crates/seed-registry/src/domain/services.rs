//! # Domain Services
//!
//! Pure validation of registration and update inputs.
//!
//! Field checks run in a fixed order and stop at the first failure, so the
//! reported error (and its code) is deterministic for any input.

use crate::domain::entities::RegistrationRequest;
use crate::domain::invariants::limits;
use crate::domain::value_objects::{Category, Climate, SeedHash};
use crate::errors::{RegistryError, UpdateRejection};

/// Parts of a registration that change type once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedFields {
    pub hash: SeedHash,
    pub category: Category,
    pub climate: Climate,
}

/// Length in characters.
#[must_use]
pub fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates the registration fields in order: hash, title, description,
/// origin, category, climate, yield, traits, resistance, maturity, location.
pub fn validate_registration_fields(
    request: &RegistrationRequest,
) -> Result<ValidatedFields, RegistryError> {
    let hash = SeedHash::from_slice(&request.hash)
        .ok_or(RegistryError::InvalidHash(request.hash.len()))?;

    let title = text_len(&request.title);
    if title == 0 || title > limits::MAX_TITLE_LEN {
        return Err(RegistryError::InvalidTitle(title));
    }

    let description = text_len(&request.description);
    if description > limits::MAX_DESCRIPTION_LEN {
        return Err(RegistryError::InvalidDescription(description));
    }

    let origin = text_len(&request.origin);
    if origin > limits::MAX_ORIGIN_LEN {
        return Err(RegistryError::InvalidOrigin(origin));
    }

    let category = request
        .category
        .parse::<Category>()
        .map_err(|()| RegistryError::InvalidCategory(request.category.clone()))?;

    let climate = request
        .climate
        .parse::<Climate>()
        .map_err(|()| RegistryError::InvalidClimate(request.climate.clone()))?;

    if request.yield_potential == 0 {
        return Err(RegistryError::InvalidYield(request.yield_potential));
    }

    if request.traits.len() > limits::MAX_TRAITS {
        return Err(RegistryError::InvalidTraits(request.traits.len()));
    }

    let resistance = text_len(&request.resistance);
    if resistance > limits::MAX_RESISTANCE_LEN {
        return Err(RegistryError::InvalidResistance(resistance));
    }

    if request.maturity_days == 0 || request.maturity_days > limits::MAX_MATURITY_DAYS {
        return Err(RegistryError::InvalidMaturity(request.maturity_days));
    }

    let location = text_len(&request.location);
    if location > limits::MAX_LOCATION_LEN {
        return Err(RegistryError::InvalidLocation(location));
    }

    Ok(ValidatedFields {
        hash,
        category,
        climate,
    })
}

/// Validates a new title and description for an update.
pub fn validate_update_fields(title: &str, description: &str) -> Result<(), UpdateRejection> {
    let title = text_len(title);
    if title == 0 || title > limits::MAX_TITLE_LEN {
        return Err(UpdateRejection::InvalidTitle(title));
    }
    let description = text_len(description);
    if description > limits::MAX_DESCRIPTION_LEN {
        return Err(UpdateRejection::InvalidDescription(description));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
