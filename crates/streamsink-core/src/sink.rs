//! The inbound sink entry point.
//!
//! This module defines the single consumer the message transport hands every
//! inbound message to, and provides an in-memory forwarder for testing and
//! local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, instrument, trace};

use crate::forward::{ForwardError, Forwarder};
use crate::message::Message;
use crate::resolve::DestinationResolver;

/// The sink entry point: receives every inbound message and delegates to the
/// single active forwarder chosen at startup.
///
/// Holds no mutable state, so concurrent deliveries from the transport are
/// safe. Errors are surfaced synchronously to the caller, which owns any
/// retry or dead-lettering policy.
pub struct Sink<F: Forwarder> {
    forwarder: F,
}

impl<F: Forwarder> Sink<F> {
    pub fn new(forwarder: F) -> Self {
        Self { forwarder }
    }

    /// Handle one inbound message.
    #[instrument(skip(self, message), level = "trace")]
    pub async fn on_message(&self, message: &Message) -> Result<(), ForwardError> {
        match self.forwarder.forward(message).await {
            Ok(()) => {
                trace!("forwarded message of {} bytes", message.payload().len());
                Ok(())
            }
            Err(e) => {
                error!("failed to forward message: {}", e);
                Err(e)
            }
        }
    }
}

/// In-memory forwarder for testing and local development.
///
/// Resolves each message's destination and records the payload under it,
/// preserving arrival order per destination.
#[derive(Clone)]
pub struct InMemoryForwarder {
    resolver: Arc<dyn DestinationResolver>,
    writes: Arc<Mutex<HashMap<String, Vec<Vec<u8>>>>>,
}

impl InMemoryForwarder {
    pub fn new(resolver: impl DestinationResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
            writes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Payloads recorded under `destination`, in arrival order.
    pub async fn written(&self, destination: &str) -> Vec<Vec<u8>> {
        let writes = self.writes.lock().await;
        writes.get(destination).cloned().unwrap_or_default()
    }

    /// All destinations that have received at least one payload.
    pub async fn destinations(&self) -> Vec<String> {
        let writes = self.writes.lock().await;
        writes.keys().cloned().collect()
    }
}

#[async_trait]
impl Forwarder for InMemoryForwarder {
    async fn forward(&self, message: &Message) -> Result<(), ForwardError> {
        let destination = self.resolver.resolve_required(message)?;
        let mut writes = self.writes.lock().await;
        writes
            .entry(destination)
            .or_default()
            .push(message.payload().to_vec());
        Ok(())
    }
}
