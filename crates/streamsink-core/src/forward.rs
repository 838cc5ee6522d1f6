//! The forwarding seam between the sink and a concrete store.

use async_trait::async_trait;
use thiserror::Error;

use crate::message::Message;
use crate::resolve::ResolveError;

/// Errors raised while forwarding a single message.
///
/// Both variants are per-message and recoverable by the caller; retry and
/// dead-lettering policy belongs to the inbound transport, not here.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("destination resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    #[error("store error: {0}")]
    Store(String),
}

/// Writes one message to its destination in the external store.
///
/// Implementations hold no per-call mutable state, so concurrent `forward`
/// calls are safe; the shared store connection's thread-safety is the store
/// client's concern.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, message: &Message) -> Result<(), ForwardError>;
}
