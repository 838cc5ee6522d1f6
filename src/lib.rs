//! # Streamsink - a Redis sink for inbound message streams
//!
//! This crate forwards each inbound message's payload into Redis using one
//! of three mutually exclusive delivery modes, chosen once at startup:
//!
//! - **key**: append the payload to the Redis list under a resolved key
//! - **topic**: publish the payload to a resolved pub/sub channel
//! - **queue**: push the payload onto a resolved queue
//!
//! Destinations are templates over message headers, evaluated per message.
//! The Redis layer is feature-gated:
//!
//! ```toml
//! [dependencies]
//! streamsink = { version = "0.1", features = ["redis"] }
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! # #[cfg(feature = "redis")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use streamsink::core::{Message, Sink, SinkConfig};
//! use streamsink::redis::{RedisClient, RedisConfig, RedisForwarder};
//!
//! let client = RedisClient::new(RedisConfig::new("redis://127.0.0.1:6379/")).await?;
//! let config = SinkConfig::new().with_key("orders:{region}");
//! let sink = Sink::new(RedisForwarder::from_config(client, &config)?);
//!
//! let message = Message::text("order payload").with_header("region", "eu");
//! sink.on_message(&message).await?;
//! # Ok(())
//! # }
//! ```

/// Initialize tracing with default settings.
pub fn init() {
    tracing_subscriber::fmt::init();
}

// Re-export the core module (always included)
pub use streamsink_core as core;

// Re-export the Redis forwarders
#[cfg(feature = "redis")]
pub use streamsink_redis as redis;
