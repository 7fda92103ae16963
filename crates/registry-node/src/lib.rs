//! # Registry Node Library
//!
//! Exposes the node's modules for testing. The entry point is the `main.rs`
//! binary.
//!
//! - `cli/` - command-line arguments and config overrides
//! - `commands/` - the JSON command protocol
//! - `node/` - command execution against a registry
//! - `runner/` - the line loop over async input and output

pub mod cli;
pub mod commands;
pub mod node;
pub mod runner;

pub use cli::Args;
pub use commands::{Command, Response};
pub use node::RegistryNode;
pub use runner::{run, RunSummary};

use seed_registry::prelude::{
    InMemoryAuthorities, InMemoryLedger, SeedRegistryService, ServiceConfig,
};

/// The registry type the binary runs.
pub type InMemoryRegistry = SeedRegistryService<InMemoryAuthorities, InMemoryLedger>;

/// Build a node over in-memory collaborators.
pub fn build_node(authorities: &[String], config: ServiceConfig) -> RegistryNode<InMemoryRegistry> {
    let verifier = InMemoryAuthorities::with_authorities(authorities.iter().map(String::as_str));
    RegistryNode::new(SeedRegistryService::new(
        verifier,
        InMemoryLedger::new(),
        config,
    ))
}
