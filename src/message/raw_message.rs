//! Raw inbound message as handed over by the transport.
//!
//! Uses `bytes::Bytes` so converters can share the body without copying.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::RawMessage;
//!
//! let message = RawMessage::new(&b"hello"[..]).with_content_type("text/plain");
//!
//! assert_eq!(message.body(), Some(&b"hello"[..]));
//! assert_eq!(message.content_type(), Some("text/plain"));
//! ```

use bytes::Bytes;

/// A delivered message body and its metadata.
///
/// Read-only to serdes: every accessor borrows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    body: Option<Bytes>,
    content_type: Option<String>,
    exchange: Option<String>,
    routing_key: Option<String>,
    delivery_tag: u64,
}

impl RawMessage {
    /// Create a message with a body.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Create a message with no body at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a message from an optional body.
    pub fn from_body(body: Option<Bytes>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    /// Set the content type hint.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the exchange the message was published to.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Set the routing key the message was published with.
    pub fn with_routing_key(mut self, routing_key: impl Into<String>) -> Self {
        self.routing_key = Some(routing_key.into());
        self
    }

    /// Set the broker delivery tag.
    pub fn with_delivery_tag(mut self, delivery_tag: u64) -> Self {
        self.delivery_tag = delivery_tag;
        self
    }

    /// Get the body bytes, if any.
    #[inline]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Get a clone of the body as Bytes (cheap, zero-copy).
    #[inline]
    pub fn body_bytes(&self) -> Option<Bytes> {
        self.body.clone()
    }

    /// Check if the message carries a body.
    #[inline]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Get the body length (0 when absent).
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.as_ref().map_or(0, Bytes::len)
    }

    /// Get the content type hint.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the exchange name.
    #[inline]
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// Get the routing key.
    #[inline]
    pub fn routing_key(&self) -> Option<&str> {
        self.routing_key.as_deref()
    }

    /// Get the delivery tag.
    #[inline]
    pub fn delivery_tag(&self) -> u64 {
        self.delivery_tag
    }
}
