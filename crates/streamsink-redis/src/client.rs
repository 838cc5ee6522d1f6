//! Redis client handle shared by the forwarders.

use crate::config::RedisConfig;
use redis::{aio::ConnectionManager, Client, RedisError};
use thiserror::Error;

/// Errors that can occur while establishing the Redis connection.
#[derive(Debug, Error)]
pub enum RedisClientError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),
    #[error("Other error: {0}")]
    Other(String),
}

/// A cheaply clonable handle over a multiplexed Redis connection.
///
/// One client is built at startup and shared by whichever forwarder variant
/// the configuration selects. Reconnection is the connection manager's job.
#[derive(Clone)]
pub struct RedisClient {
    pub(crate) conn: ConnectionManager,
}

impl RedisClient {
    /// Connect with the given configuration.
    pub async fn new(config: RedisConfig) -> Result<Self, RedisClientError> {
        let url = config.build_connection_url();
        let client = Client::open(url)?;
        let conn = tokio::time::timeout(config.connection_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                RedisClientError::Other(format!(
                    "timed out connecting to Redis after {:?}",
                    config.connection_timeout
                ))
            })??;

        Ok(Self { conn })
    }
}
