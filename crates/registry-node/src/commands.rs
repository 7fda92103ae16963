//! # Command Protocol
//!
//! One JSON object per input line, tagged by `op`. Hashes are hex strings
//! with an optional `0x` prefix.
//!
//! ```text
//! {"op":"set_authority_contract","caller":"ST1TEST","authority":"ST2TEST"}
//! {"op":"register_variety","caller":"ST1TEST","variety":{"hash":"0101..","title":"Tomato",...}}
//! {"op":"get_variety","id":0}
//! ```
//!
//! Every command yields one [`Response`] line.

use seed_registry::domain::value_objects::hex_bytes;
use seed_registry::prelude::{Amount, Principal, RegistrationRequest, RegistryError, VarietyId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command read from the input stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    SetAuthorityContract {
        caller: Principal,
        authority: Principal,
    },
    SetRegistrationFee {
        caller: Principal,
        fee: Amount,
    },
    RegisterVariety {
        caller: Principal,
        variety: RegistrationRequest,
    },
    UpdateVariety {
        caller: Principal,
        id: VarietyId,
        title: String,
        #[serde(default)]
        description: String,
    },
    GetVariety {
        id: VarietyId,
    },
    GetVarietyUpdate {
        id: VarietyId,
    },
    GetVarietyCount,
    CheckVarietyExistence {
        #[serde(with = "hex_bytes")]
        hash: Vec<u8>,
    },
    GetVarietyIdByHash {
        #[serde(with = "hex_bytes")]
        hash: Vec<u8>,
    },
    GetRegistrationFee,
    GetAuthorityContract,
    GetMaxVarieties,
    /// Move the logical clock forward.
    AdvanceBlock {
        #[serde(default = "one_block")]
        blocks: u64,
    },
    /// Render Prometheus metrics.
    Metrics,
}

fn one_block() -> u64 {
    1
}

impl Command {
    /// Short name used as a log field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAuthorityContract { .. } => "set_authority_contract",
            Self::SetRegistrationFee { .. } => "set_registration_fee",
            Self::RegisterVariety { .. } => "register_variety",
            Self::UpdateVariety { .. } => "update_variety",
            Self::GetVariety { .. } => "get_variety",
            Self::GetVarietyUpdate { .. } => "get_variety_update",
            Self::GetVarietyCount => "get_variety_count",
            Self::CheckVarietyExistence { .. } => "check_variety_existence",
            Self::GetVarietyIdByHash { .. } => "get_variety_id_by_hash",
            Self::GetRegistrationFee => "get_registration_fee",
            Self::GetAuthorityContract => "get_authority_contract",
            Self::GetMaxVarieties => "get_max_varieties",
            Self::AdvanceBlock { .. } => "advance_block",
            Self::Metrics => "metrics",
        }
    }
}

/// Result of one command: `ok` plus a payload, a numeric code, or `false`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    pub value: Value,
}

impl Response {
    pub fn ok(value: impl Into<Value>) -> Self {
        Self {
            ok: true,
            value: value.into(),
        }
    }

    /// Serialize `payload` as the success value.
    pub fn ok_json<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => Self::ok(value),
            Err(e) => Self::failure(Value::String(format!("encode error: {e}"))),
        }
    }

    pub fn failure(value: Value) -> Self {
        Self { ok: false, value }
    }

    /// A numeric code where the error has one, `false` otherwise.
    #[must_use]
    pub fn from_error(err: &RegistryError) -> Self {
        match err.code() {
            Some(code) => Self::failure(Value::from(code)),
            None => Self::failure(Value::Bool(false)),
        }
    }

    /// Reply to an input line that is not a valid command.
    #[must_use]
    pub fn parse_error(err: &serde_json::Error) -> Self {
        Self::failure(Value::String(format!("parse error: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_registry::prelude::{codes, UpdateRejection};
    use serde_json::json;

    #[test]
    fn test_parse_register_command() {
        let line = json!({
            "op": "register_variety",
            "caller": "ST1TEST",
            "variety": {
                "hash": "01".repeat(32),
                "title": "Tomato Heritage",
                "category": "vegetable",
                "climate": "temperate",
                "yield_potential": 500,
                "maturity_days": 90
            }
        })
        .to_string();

        let Command::RegisterVariety { caller, variety } = serde_json::from_str(&line).unwrap()
        else {
            panic!("wrong command");
        };
        assert_eq!(caller, Principal::new("ST1TEST"));
        assert_eq!(variety.hash, vec![1u8; 32]);
        assert!(variety.traits.is_empty());
        assert_eq!(variety.location, "");
    }

    #[test]
    fn test_advance_block_defaults_to_one() {
        let cmd: Command = serde_json::from_str(r#"{"op":"advance_block"}"#).unwrap();
        assert_eq!(cmd, Command::AdvanceBlock { blocks: 1 });
        assert_eq!(cmd.name(), "advance_block");
    }

    #[test]
    fn test_unit_commands() {
        let cmd: Command = serde_json::from_str(r#"{"op":"get_variety_count"}"#).unwrap();
        assert_eq!(cmd, Command::GetVarietyCount);
        let cmd: Command = serde_json::from_str(r#"{"op":"get_max_varieties"}"#).unwrap();
        assert_eq!(cmd.name(), "get_max_varieties");
    }

    #[test]
    fn test_unknown_op_is_error() {
        assert!(serde_json::from_str::<Command>(r#"{"op":"delete_variety","id":0}"#).is_err());
    }

    #[test]
    fn test_error_responses() {
        let response = Response::from_error(&RegistryError::InvalidHash(31));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"ok": false, "value": codes::ERR_INVALID_HASH})
        );

        let response = Response::from_error(&UpdateRejection::NotFound(9).into());
        assert_eq!(response, Response::failure(Value::Bool(false)));
    }
}
