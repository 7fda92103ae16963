//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the seed variety registry.
//!
//! - **Driving Ports (Inbound)**: `SeedRegistryApi`
//! - **Driven Ports (Outbound)**: `AuthorityVerifier`, `ValueTransfer`, `EventPublisher`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
