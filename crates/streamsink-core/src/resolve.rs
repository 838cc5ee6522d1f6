//! Destination resolution.
//!
//! A destination resolver turns an inbound [`Message`] into the name of the
//! Redis key, channel or queue it should be written to. Resolution is a pure
//! function of the message plus startup configuration and runs fresh for
//! every message, so per-message routing works out of the box.

use serde_json::Value;
use thiserror::Error;

use crate::message::Message;

/// Errors raised while evaluating a destination for a specific message.
///
/// These affect only the message being resolved; they are surfaced to the
/// caller and never retried here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("message has no header named {0:?}")]
    MissingHeader(String),
    #[error("header {0:?} is not a scalar value")]
    UnsupportedHeader(String),
    #[error("resolved destination name is empty")]
    EmptyDestination,
}

/// Errors raised while parsing a destination template at startup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateError {
    #[error("unclosed '{{' in destination template {0:?}")]
    Unclosed(String),
    #[error("empty placeholder in destination template {0:?}")]
    EmptyPlaceholder(String),
    #[error("unmatched '}}' in destination template {0:?}")]
    UnmatchedClose(String),
}

/// A function from message to destination name.
///
/// Implementations must yield a non-empty name; callers go through
/// [`resolve_required`](DestinationResolver::resolve_required), which rejects
/// an empty result with [`ResolveError::EmptyDestination`].
pub trait DestinationResolver: Send + Sync {
    fn resolve(&self, message: &Message) -> Result<String, ResolveError>;

    /// Resolve and enforce the non-empty invariant.
    fn resolve_required(&self, message: &Message) -> Result<String, ResolveError> {
        let name = self.resolve(message)?;
        if name.is_empty() {
            return Err(ResolveError::EmptyDestination);
        }
        Ok(name)
    }
}

/// Any `Fn(&Message) -> Result<String, ResolveError>` closure is a resolver.
impl<F> DestinationResolver for F
where
    F: Fn(&Message) -> Result<String, ResolveError> + Send + Sync,
{
    fn resolve(&self, message: &Message) -> Result<String, ResolveError> {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Header(String),
}

/// A destination expression parsed from configuration.
///
/// The syntax is literal text with `{header}` placeholders, substituted per
/// message from the message's headers. A template without placeholders is a
/// static destination. Parsing happens once at startup; malformed templates
/// never make it past configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template expression, validating placeholder syntax.
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed(source));
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(source));
                    }
                    segments.push(Segment::Header(name));
                }
                '}' => return Err(TemplateError::UnmatchedClose(source)),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source, segments })
    }

    /// The expression this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True if the template contains no placeholders.
    pub fn is_static(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Header(_)))
    }
}

impl DestinationResolver for Template {
    fn resolve(&self, message: &Message) -> Result<String, ResolveError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Header(name) => {
                    let value = message
                        .header(name)
                        .ok_or_else(|| ResolveError::MissingHeader(name.clone()))?;
                    match value {
                        Value::String(s) => out.push_str(s),
                        Value::Number(n) => out.push_str(&n.to_string()),
                        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                        _ => return Err(ResolveError::UnsupportedHeader(name.clone())),
                    }
                }
            }
        }
        Ok(out)
    }
}
