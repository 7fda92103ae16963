//! # Event Adapters
//!
//! Event sinks: an in-memory journal for tests and inspection, and a
//! publisher that writes each event to the tracing log.

use crate::events::RegistryEvent;
use crate::ports::outbound::EventPublisher;
use parking_lot::RwLock;
use tracing::info;

/// Collects every published event in order.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: &RegistryEvent) {
        self.events.write().push(event.clone());
    }
}

/// Writes events to the log at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPublisher;

impl EventPublisher for LoggingPublisher {
    fn publish(&self, event: &RegistryEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => info!(topic = event.topic(), %payload, "Registry event"),
            Err(e) => info!(topic = event.topic(), error = %e, "Registry event (unserializable)"),
        }
    }
}
