//! Topic-publish forwarder: Redis pub/sub.

use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{error, instrument, trace};

use streamsink_core::{DestinationResolver, ForwardError, Forwarder, Message};

use crate::client::RedisClient;

/// Publishes each message's payload to the resolved pub/sub channel.
///
/// Fire-and-forget, at-most-once: the subscriber count returned by PUBLISH
/// is ignored, so a message published with no subscribers attached is
/// silently dropped by Redis and that is not an error here.
#[derive(Clone)]
pub struct RedisTopicPublisher {
    client: RedisClient,
    resolver: Arc<dyn DestinationResolver>,
}

impl RedisTopicPublisher {
    /// Create a publisher over the shared client and a topic resolver.
    pub fn new(client: RedisClient, resolver: impl DestinationResolver + 'static) -> Self {
        Self {
            client,
            resolver: Arc::new(resolver),
        }
    }
}

#[async_trait]
impl Forwarder for RedisTopicPublisher {
    #[instrument(skip(self, message), level = "trace")]
    async fn forward(&self, message: &Message) -> Result<(), ForwardError> {
        let topic = self.resolver.resolve_required(message)?;

        let mut conn = self.client.conn.clone();
        let receivers: i64 = conn.publish(&topic, message.payload()).await.map_err(|e| {
            error!("Redis error while publishing to {}: {}", topic, e);
            ForwardError::Store(e.to_string())
        })?;

        trace!("published payload to {} ({} receivers)", topic, receivers);
        Ok(())
    }
}
