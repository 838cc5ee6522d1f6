//! Key-write forwarder: appends payloads to a Redis list.

use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{error, instrument, trace};

use streamsink_core::{DestinationResolver, ForwardError, Forwarder, Message};

use crate::client::RedisClient;

/// Appends each message's payload to the tail of the Redis list stored under
/// the resolved key, preserving arrival order within a key.
#[derive(Clone)]
pub struct RedisKeyWriter {
    client: RedisClient,
    resolver: Arc<dyn DestinationResolver>,
}

impl RedisKeyWriter {
    /// Create a key writer over the shared client and a key resolver.
    pub fn new(client: RedisClient, resolver: impl DestinationResolver + 'static) -> Self {
        Self {
            client,
            resolver: Arc::new(resolver),
        }
    }
}

#[async_trait]
impl Forwarder for RedisKeyWriter {
    #[instrument(skip(self, message), level = "trace")]
    async fn forward(&self, message: &Message) -> Result<(), ForwardError> {
        let key = self.resolver.resolve_required(message)?;

        let mut conn = self.client.conn.clone();
        let _len: i64 = conn.rpush(&key, message.payload()).await.map_err(|e| {
            error!("Redis error while appending to list {}: {}", key, e);
            ForwardError::Store(e.to_string())
        })?;

        trace!("appended payload to list {}", key);
        Ok(())
    }
}
