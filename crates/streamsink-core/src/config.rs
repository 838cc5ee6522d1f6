//! Sink configuration and delivery-mode selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::{Template, TemplateError};

/// Topic used when no destination expression is configured at all.
pub const DEFAULT_TOPIC: &str = "streamsink";

/// Errors in the sink configuration, raised once at startup.
///
/// These are fatal: a sink with a broken configuration must not start.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cannot configure both a key and a queue destination")]
    AmbiguousMode,
    #[error("destination expression for {0} is empty")]
    EmptyExpression(&'static str),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// The three mutually exclusive delivery modes, chosen exactly once at
/// startup. Each variant carries only the destination template relevant to
/// it, so forwarding never has to re-check which mode is active.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryMode {
    /// Append payloads to the Redis list stored under the resolved key.
    KeyWrite(Template),
    /// Publish payloads to the resolved pub/sub channel.
    TopicPublish(Template),
    /// Push payloads onto the resolved queue.
    QueuePush(Template),
}

/// Destination configuration for the sink.
///
/// At most one of `key` and `queue` may be set; when neither is, the sink
/// publishes to `topic` (defaulting to [`DEFAULT_TOPIC`]). Each field is a
/// destination template, evaluated per message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub key: Option<String>,
    pub queue: Option<String>,
    pub topic: Option<String>,
}

impl SinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key expression (selects list-write mode).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the queue expression (selects queue-push mode).
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Set the topic expression used when neither key nor queue is set.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Select the delivery mode for this configuration.
    ///
    /// Runs once at startup. An explicitly configured but empty expression
    /// is rejected here; it is almost certainly an operator mistake, unlike
    /// leaving the option unset.
    pub fn delivery_mode(&self) -> Result<DeliveryMode, ConfigError> {
        match (&self.key, &self.queue) {
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousMode),
            (Some(key), None) => {
                Ok(DeliveryMode::KeyWrite(Self::parse_expression("key", key)?))
            }
            (None, Some(queue)) => {
                Ok(DeliveryMode::QueuePush(Self::parse_expression("queue", queue)?))
            }
            (None, None) => {
                let topic = match &self.topic {
                    Some(topic) => Self::parse_expression("topic", topic)?,
                    None => Template::parse(DEFAULT_TOPIC)?,
                };
                Ok(DeliveryMode::TopicPublish(topic))
            }
        }
    }

    fn parse_expression(field: &'static str, expression: &str) -> Result<Template, ConfigError> {
        if expression.is_empty() {
            return Err(ConfigError::EmptyExpression(field));
        }
        Ok(Template::parse(expression)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_selects_key_write() {
        let mode = SinkConfig::new().with_key("foo").delivery_mode().unwrap();
        match mode {
            DeliveryMode::KeyWrite(t) => assert_eq!(t.source(), "foo"),
            other => panic!("expected KeyWrite, got {other:?}"),
        }
    }

    #[test]
    fn queue_selects_queue_push() {
        let mode = SinkConfig::new().with_queue("jobs").delivery_mode().unwrap();
        match mode {
            DeliveryMode::QueuePush(t) => assert_eq!(t.source(), "jobs"),
            other => panic!("expected QueuePush, got {other:?}"),
        }
    }

    #[test]
    fn all_empty_defaults_to_topic_publish() {
        let mode = SinkConfig::new().delivery_mode().unwrap();
        match mode {
            DeliveryMode::TopicPublish(t) => assert_eq!(t.source(), DEFAULT_TOPIC),
            other => panic!("expected TopicPublish, got {other:?}"),
        }
    }

    #[test]
    fn explicit_topic_wins_over_default() {
        let mode = SinkConfig::new()
            .with_topic("events:{tenant}")
            .delivery_mode()
            .unwrap();
        match mode {
            DeliveryMode::TopicPublish(t) => assert_eq!(t.source(), "events:{tenant}"),
            other => panic!("expected TopicPublish, got {other:?}"),
        }
    }

    #[test]
    fn key_and_queue_together_is_fatal() {
        let err = SinkConfig::new()
            .with_key("foo")
            .with_queue("bar")
            .delivery_mode()
            .unwrap_err();
        assert_eq!(err, ConfigError::AmbiguousMode);
    }

    #[test]
    fn explicitly_empty_expression_is_fatal() {
        let err = SinkConfig::new().with_key("").delivery_mode().unwrap_err();
        assert_eq!(err, ConfigError::EmptyExpression("key"));
        let err = SinkConfig::new().with_topic("").delivery_mode().unwrap_err();
        assert_eq!(err, ConfigError::EmptyExpression("topic"));
    }

    #[test]
    fn malformed_expression_fails_at_startup() {
        let err = SinkConfig::new()
            .with_key("events:{tenant")
            .delivery_mode()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Template(_)));
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: SinkConfig =
            serde_json::from_str(r#"{"key": "foo"}"#).expect("deserialize");
        assert_eq!(config.key.as_deref(), Some("foo"));
        assert_eq!(config.queue, None);
        assert_eq!(config.topic, None);
    }
}
