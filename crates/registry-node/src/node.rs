//! # Registry Node
//!
//! Owns a registry and the logical clock, turns [`Command`]s into registry
//! calls, and records metrics for every outcome.

use seed_registry::prelude::*;
use seed_telemetry::metric_inc;
use seed_telemetry::metrics::{self, outcome};
use serde_json::Value;
use tracing::{debug, warn};

use crate::commands::{Command, Response};

/// Drives a registry with commands.
pub struct RegistryNode<R: SeedRegistryApi> {
    registry: R,
    block_height: BlockHeight,
}

impl<R: SeedRegistryApi> RegistryNode<R> {
    /// Wrap `registry`, starting the clock at height 0.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            block_height: 0,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    #[must_use]
    pub fn block_height(&self) -> BlockHeight {
        self.block_height
    }

    fn context(&self, caller: Principal) -> CallContext {
        CallContext {
            caller,
            block_height: self.block_height,
        }
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Command>(line) {
            Ok(command) => self.handle(command),
            Err(e) => {
                metric_inc!(metrics::MALFORMED_COMMANDS);
                warn!(error = %e, "Malformed command");
                Response::parse_error(&e)
            }
        }
    }

    /// Execute one command.
    pub fn handle(&mut self, command: Command) -> Response {
        let _timer = seed_telemetry::time_histogram!(metrics::COMMAND_DURATION);
        debug!(op = command.name(), height = self.block_height, "Handling command");

        match command {
            Command::SetAuthorityContract { caller, authority } => {
                let result = self
                    .registry
                    .set_authority_contract(&self.context(caller), authority);
                record_config("authority", result.is_ok());
                unit_response(result)
            }
            Command::SetRegistrationFee { caller, fee } => {
                let result = self
                    .registry
                    .set_registration_fee(&self.context(caller), fee);
                record_config("fee", result.is_ok());
                unit_response(result)
            }
            Command::RegisterVariety { caller, variety } => {
                match self
                    .registry
                    .register_variety_receipt(&self.context(caller), variety)
                {
                    Ok(receipt) => {
                        metric_inc!(metrics::REGISTRATIONS, &[outcome::ACCEPTED]);
                        metrics::FEES_COLLECTED.inc_by(receipt.fee);
                        metrics::VARIETY_COUNT
                            .set(i64::try_from(self.registry.get_variety_count()).unwrap_or(i64::MAX));
                        Response::ok(receipt.id)
                    }
                    Err(e) => {
                        metric_inc!(metrics::REGISTRATIONS, &[outcome::REJECTED]);
                        let code = e.code().map_or_else(|| "none".to_string(), |c| c.to_string());
                        metric_inc!(metrics::REGISTRATION_REJECTIONS, &[code.as_str()]);
                        Response::from_error(&e)
                    }
                }
            }
            Command::UpdateVariety {
                caller,
                id,
                title,
                description,
            } => {
                let result =
                    self.registry
                        .update_variety(&self.context(caller), id, title, description);
                let label = if result.is_ok() {
                    outcome::ACCEPTED
                } else {
                    outcome::REJECTED
                };
                metric_inc!(metrics::UPDATES, &[label]);
                unit_response(result)
            }
            Command::GetVariety { id } => Response::ok_json(&self.registry.get_variety(id)),
            Command::GetVarietyUpdate { id } => {
                Response::ok_json(&self.registry.get_variety_update(id))
            }
            Command::GetVarietyCount => Response::ok(self.registry.get_variety_count()),
            Command::CheckVarietyExistence { hash } => {
                Response::ok(self.registry.check_variety_existence(&hash))
            }
            Command::GetVarietyIdByHash { hash } => {
                Response::ok_json(&self.registry.get_variety_id_by_hash(&hash))
            }
            Command::GetRegistrationFee => Response::ok(self.registry.get_registration_fee()),
            Command::GetAuthorityContract => {
                Response::ok_json(&self.registry.get_authority_contract())
            }
            Command::GetMaxVarieties => Response::ok(self.registry.get_max_varieties()),
            Command::AdvanceBlock { blocks } => {
                self.block_height = self.block_height.saturating_add(blocks);
                Response::ok(self.block_height)
            }
            Command::Metrics => match metrics::encode_metrics() {
                Ok(text) => Response::ok(text),
                Err(e) => Response::failure(Value::String(e.to_string())),
            },
        }
    }
}

fn unit_response(result: Result<(), RegistryError>) -> Response {
    match result {
        Ok(()) => Response::ok(true),
        Err(e) => Response::from_error(&e),
    }
}

fn record_config(operation: &str, accepted: bool) {
    let label = if accepted {
        outcome::ACCEPTED
    } else {
        outcome::REJECTED
    };
    metric_inc!(metrics::CONFIG_CHANGES, &[operation, label]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node() -> RegistryNode<SeedRegistryService<InMemoryAuthorities, InMemoryLedger>> {
        RegistryNode::new(create_test_service())
    }

    fn register_line(fill: &str, caller: &str) -> String {
        json!({
            "op": "register_variety",
            "caller": caller,
            "variety": {
                "hash": fill.repeat(32),
                "title": "Tomato Heritage",
                "description": "Red juicy tomatoes",
                "origin": "Italy",
                "category": "vegetable",
                "climate": "temperate",
                "yield_potential": 500,
                "traits": ["drought-resistant"],
                "resistance": "pest-resistant",
                "maturity_days": 90,
                "location": "Farm A"
            }
        })
        .to_string()
    }

    #[test]
    fn test_register_before_authority() {
        let mut node = node();
        let response = node.handle_line(&register_line("03", "ST1TEST"));
        assert_eq!(response, Response::failure(json!(codes::ERR_AUTHORITY_NOT_VERIFIED)));
    }

    #[test]
    fn test_full_flow() {
        let mut node = node();
        let response = node.handle_line(
            r#"{"op":"set_authority_contract","caller":"ST1TEST","authority":"ST2TEST"}"#,
        );
        assert_eq!(response, Response::ok(true));

        assert_eq!(node.handle_line(r#"{"op":"advance_block","blocks":5}"#), Response::ok(5u64));
        assert_eq!(node.handle_line(&register_line("01", "ST1TEST")), Response::ok(0u64));

        let response = node.handle_line(r#"{"op":"get_variety","id":0}"#);
        assert!(response.ok);
        assert_eq!(response.value["timestamp"], json!(5));
        assert_eq!(response.value["category"], json!("vegetable"));
        assert_eq!(response.value["creator"], json!("ST1TEST"));

        let response = node.handle_line(&json!({
            "op": "check_variety_existence",
            "hash": format!("0x{}", "01".repeat(32)),
        }).to_string());
        assert_eq!(response, Response::ok(true));

        assert_eq!(
            node.handle_line(r#"{"op":"get_variety_count"}"#),
            Response::ok(1u64)
        );
        assert_eq!(
            node.registry().ledger().transfers(),
            vec![FeeTransfer::new(500, Principal::new("ST1TEST"), Principal::new("ST2TEST"))]
        );
    }

    /// Delegates to the test service but refuses fee queries, so
    /// registration must take its fee from the receipt.
    struct NoFeeQueries(SeedRegistryService<InMemoryAuthorities, InMemoryLedger>);

    impl SeedRegistryApi for NoFeeQueries {
        fn set_authority_contract(
            &self,
            ctx: &CallContext,
            authority: Principal,
        ) -> Result<(), RegistryError> {
            self.0.set_authority_contract(ctx, authority)
        }
        fn set_registration_fee(&self, ctx: &CallContext, fee: Amount) -> Result<(), RegistryError> {
            self.0.set_registration_fee(ctx, fee)
        }
        fn register_variety_receipt(
            &self,
            ctx: &CallContext,
            request: RegistrationRequest,
        ) -> Result<RegistrationReceipt, RegistryError> {
            self.0.register_variety_receipt(ctx, request)
        }
        fn update_variety(
            &self,
            ctx: &CallContext,
            id: VarietyId,
            title: String,
            description: String,
        ) -> Result<(), RegistryError> {
            self.0.update_variety(ctx, id, title, description)
        }
        fn get_variety(&self, id: VarietyId) -> Option<Variety> {
            self.0.get_variety(id)
        }
        fn get_variety_update(&self, id: VarietyId) -> Option<VarietyUpdate> {
            self.0.get_variety_update(id)
        }
        fn get_variety_count(&self) -> u64 {
            self.0.get_variety_count()
        }
        fn check_variety_existence(&self, hash: &[u8]) -> bool {
            self.0.check_variety_existence(hash)
        }
        fn get_variety_id_by_hash(&self, hash: &[u8]) -> Option<VarietyId> {
            self.0.get_variety_id_by_hash(hash)
        }
        fn get_registration_fee(&self) -> Amount {
            panic!("fee queried outside the registration transition")
        }
        fn get_authority_contract(&self) -> Option<Principal> {
            self.0.get_authority_contract()
        }
        fn get_max_varieties(&self) -> u64 {
            self.0.get_max_varieties()
        }
    }

    #[test]
    fn test_registration_fee_comes_from_receipt() {
        let mut node = RegistryNode::new(NoFeeQueries(create_test_service()));
        node.handle_line(
            r#"{"op":"set_authority_contract","caller":"ST1TEST","authority":"ST2TEST"}"#,
        );
        node.handle_line(r#"{"op":"set_registration_fee","caller":"ST1TEST","fee":900}"#);

        assert_eq!(node.handle_line(&register_line("01", "ST1TEST")), Response::ok(0u64));
        assert_eq!(node.registry().0.stats().fees_collected, 900);
    }

    #[test]
    fn test_update_failures_are_false() {
        let mut node = node();
        let response = node.handle_line(
            r#"{"op":"update_variety","caller":"ST1TEST","id":99,"title":"New","description":"x"}"#,
        );
        assert_eq!(response, Response::failure(json!(false)));
    }

    #[test]
    fn test_missing_variety_is_null() {
        let mut node = node();
        assert_eq!(
            node.handle_line(r#"{"op":"get_variety","id":4}"#),
            Response::ok(Value::Null)
        );
        assert_eq!(
            node.handle_line(r#"{"op":"get_max_varieties"}"#),
            Response::ok(10_000u64)
        );
    }

    #[test]
    fn test_parse_error_keeps_state() {
        let mut node = node();
        let response = node.handle_line("{not json");
        assert!(!response.ok);
        assert!(response.value.as_str().unwrap().starts_with("parse error"));
        assert_eq!(node.block_height(), 0);
    }

    #[test]
    fn test_bad_hex_is_parse_error() {
        let mut node = node();
        let response = node.handle_line(r#"{"op":"check_variety_existence","hash":"zz"}"#);
        assert!(!response.ok);
    }

    #[test]
    fn test_metrics_command() {
        seed_telemetry::register_metrics().unwrap();
        let mut node = node();
        node.handle_line(&register_line("01", "ST1TEST"));
        let response = node.handle_line(r#"{"op":"metrics"}"#);
        assert!(response.ok);
        assert!(response
            .value
            .as_str()
            .unwrap()
            .contains("seed_registry_registrations_total"));
    }
}
