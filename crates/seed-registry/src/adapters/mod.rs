//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the outbound ports. Used by tests and by
//! the node binary; a deployment against a real ledger or oracle supplies
//! its own implementations of the same traits.

pub mod authorities;
pub mod event_log;
pub mod ledger;

pub use authorities::*;
pub use event_log::*;
pub use ledger::*;
