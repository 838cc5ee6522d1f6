//! Redis forwarders for the streamsink message sink.
//!
//! This crate provides the Redis-backed implementations of the forwarding
//! seam defined in streamsink-core:
//!
//! - `RedisKeyWriter`: appends payloads to a Redis list under a resolved key
//! - `RedisTopicPublisher`: publishes payloads to a resolved pub/sub channel
//! - `RedisQueuePusher`: pushes payloads onto a resolved queue
//! - `RedisForwarder`: the tagged union over the three, selected once at
//!   startup from a `SinkConfig`

mod client;
mod config;
mod forwarder;
mod key_write;
mod publish;
mod queue_push;

pub use client::{RedisClient, RedisClientError};
pub use config::RedisConfig;
pub use forwarder::RedisForwarder;
pub use key_write::RedisKeyWriter;
pub use publish::RedisTopicPublisher;
pub use queue_push::RedisQueuePusher;
