//! Core abstractions for the streamsink Redis sink.
//!
//! This crate is store-agnostic: it defines the inbound [`Message`]
//! envelope, destination resolution, delivery-mode configuration, the
//! [`Forwarder`] seam a concrete store plugs into, and the [`Sink`] entry
//! point the transport delivers into. The Redis implementations live in
//! `streamsink-redis`.

pub mod config;
pub mod forward;
pub mod message;
pub mod resolve;
pub mod sink;

pub use config::{ConfigError, DeliveryMode, SinkConfig, DEFAULT_TOPIC};
pub use forward::{ForwardError, Forwarder};
pub use message::Message;
pub use resolve::{DestinationResolver, ResolveError, Template, TemplateError};
pub use sink::{InMemoryForwarder, Sink};
