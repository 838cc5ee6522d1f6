//! Queue-push forwarder: Redis list used as a queue.

use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{error, instrument, trace};

use streamsink_core::{DestinationResolver, ForwardError, Forwarder, Message};

use crate::client::RedisClient;

/// Pushes each message's payload onto the head of the resolved queue.
///
/// Producers LPUSH and consumers pop the tail, so a successful push means
/// the payload is as durable as the Redis instance holding the list.
#[derive(Clone)]
pub struct RedisQueuePusher {
    client: RedisClient,
    resolver: Arc<dyn DestinationResolver>,
}

impl RedisQueuePusher {
    /// Create a queue pusher over the shared client and a queue resolver.
    pub fn new(client: RedisClient, resolver: impl DestinationResolver + 'static) -> Self {
        Self {
            client,
            resolver: Arc::new(resolver),
        }
    }
}

#[async_trait]
impl Forwarder for RedisQueuePusher {
    #[instrument(skip(self, message), level = "trace")]
    async fn forward(&self, message: &Message) -> Result<(), ForwardError> {
        let queue = self.resolver.resolve_required(message)?;

        let mut conn = self.client.conn.clone();
        let _len: i64 = conn.lpush(&queue, message.payload()).await.map_err(|e| {
            error!("Redis error while pushing to queue {}: {}", queue, e);
            ForwardError::Store(e.to_string())
        })?;

        trace!("pushed payload onto queue {}", queue);
        Ok(())
    }
}
