//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the seed variety registry.
//! NO I/O, NO locking, NO collaborator calls.
//!
//! - This is the **inner layer** of the hexagonal architecture.
//! - Dependencies point INWARD only (adapters and the service depend on
//!   this, not vice versa).

pub mod entities;
pub mod invariants;
pub mod services;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use services::*;
pub use store::*;
pub use value_objects::*;
