//! Startup selection of the active Redis forwarder.

use async_trait::async_trait;

use streamsink_core::{
    ConfigError, DeliveryMode, ForwardError, Forwarder, Message, SinkConfig,
};

use crate::client::RedisClient;
use crate::key_write::RedisKeyWriter;
use crate::publish::RedisTopicPublisher;
use crate::queue_push::RedisQueuePusher;

/// The one active forwarder, chosen exactly once at startup.
///
/// Each variant carries only the state its mode needs; forwarding matches
/// exhaustively instead of re-checking configuration flags per message.
#[derive(Clone)]
pub enum RedisForwarder {
    KeyWrite(RedisKeyWriter),
    TopicPublish(RedisTopicPublisher),
    QueuePush(RedisQueuePusher),
}

impl RedisForwarder {
    /// Build the forwarder for an already-selected delivery mode.
    ///
    /// The client is passed explicitly; nothing here reaches for an ambient
    /// connection.
    pub fn from_mode(client: RedisClient, mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::KeyWrite(template) => {
                Self::KeyWrite(RedisKeyWriter::new(client, template))
            }
            DeliveryMode::TopicPublish(template) => {
                Self::TopicPublish(RedisTopicPublisher::new(client, template))
            }
            DeliveryMode::QueuePush(template) => {
                Self::QueuePush(RedisQueuePusher::new(client, template))
            }
        }
    }

    /// Select the delivery mode from `config` and build its forwarder.
    ///
    /// Fails with a [`ConfigError`] on contradictory or malformed
    /// configuration; a sink must not start in that case.
    pub fn from_config(client: RedisClient, config: &SinkConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_mode(client, config.delivery_mode()?))
    }
}

#[async_trait]
impl Forwarder for RedisForwarder {
    async fn forward(&self, message: &Message) -> Result<(), ForwardError> {
        match self {
            Self::KeyWrite(f) => f.forward(message).await,
            Self::TopicPublish(f) => f.forward(message).await,
            Self::QueuePush(f) => f.forward(message).await,
        }
    }
}
