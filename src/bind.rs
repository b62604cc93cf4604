//! Adapters for the code on either side of the registry.
//!
//! - [`BodyBinder`] - turns a delivered message into a listener argument
//! - [`PayloadEncoder`] - turns a value into a body before publishing
//!
//! Both hold an `Arc<SerdesRegistry>` and are cheap to clone.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rabbit_serdes::{BodyBinder, PayloadEncoder, RawMessage, SerdesRegistry};
//!
//! let registry = Arc::new(SerdesRegistry::with_defaults());
//! let encoder = PayloadEncoder::new(registry.clone());
//! let binder = BodyBinder::new(registry);
//!
//! let body = encoder.encode(Some(&"hello".to_string())).unwrap();
//! let message = RawMessage::from_body(body);
//!
//! let arg: Option<String> = binder.bind(&message).unwrap();
//! assert_eq!(arg.as_deref(), Some("hello"));
//! ```

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::registry::SerdesRegistry;
use crate::value::{Value, ValueType, WireType};

/// Binds a message body to a declared argument type.
#[derive(Clone, Debug)]
pub struct BodyBinder {
    registry: Arc<SerdesRegistry>,
}

impl BodyBinder {
    /// Create a binder over a registry.
    pub fn new(registry: Arc<SerdesRegistry>) -> Self {
        Self { registry }
    }

    /// Check if a body can be bound to `value_type` at all.
    pub fn can_bind(&self, value_type: &ValueType) -> bool {
        self.registry.supports(value_type)
    }

    /// Bind the body to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SerdesError::UnsupportedType`] when no serdes
    /// claims `T`, or the serdes error for a malformed body.
    pub fn bind<T: WireType>(&self, message: &RawMessage) -> Result<Option<T>> {
        let bound = self.registry.deserialize_typed(message);
        if let Err(e) = &bound {
            log_bind_failure(message, &T::value_type(), e);
        }
        bound
    }

    /// Bind the body to a type known only at runtime.
    pub fn bind_value(&self, message: &RawMessage, value_type: &ValueType) -> Result<Option<Value>> {
        let bound = self.registry.deserialize(message, value_type);
        if let Err(e) = &bound {
            log_bind_failure(message, value_type, e);
        }
        bound
    }

    /// Get the underlying registry.
    pub fn registry(&self) -> &Arc<SerdesRegistry> {
        &self.registry
    }
}

fn log_bind_failure(message: &RawMessage, value_type: &ValueType, error: &SerdesError) {
    tracing::debug!(
        "Failed to bind body (delivery tag {}) as {}: {}",
        message.delivery_tag(),
        value_type,
        error
    );
}

/// Encodes values into message bodies for publishing.
#[derive(Clone, Debug)]
pub struct PayloadEncoder {
    registry: Arc<SerdesRegistry>,
}

impl PayloadEncoder {
    /// Create an encoder over a registry.
    pub fn new(registry: Arc<SerdesRegistry>) -> Self {
        Self { registry }
    }

    /// Encode a typed value. An absent value yields an absent body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SerdesError::UnsupportedType`] when no serdes claims `T`.
    pub fn encode<T: WireType>(&self, value: Option<&T>) -> Result<Option<Bytes>> {
        self.registry.serialize_typed(value)
    }

    /// Encode a runtime value.
    pub fn encode_value(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        self.registry.serialize_opt(value)
    }

    /// Get the underlying registry.
    pub fn registry(&self) -> &Arc<SerdesRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ByteView;
    use tracing_test::traced_test;

    fn pair() -> (PayloadEncoder, BodyBinder) {
        let registry = Arc::new(SerdesRegistry::with_defaults());
        (PayloadEncoder::new(registry.clone()), BodyBinder::new(registry))
    }

    #[test]
    fn test_encode_then_bind_int() {
        let (encoder, binder) = pair();
        let body = encoder.encode(Some(&-7i32)).unwrap();
        assert_eq!(body.as_deref(), Some(&[0xFF, 0xFF, 0xFF, 0xF9][..]));

        let arg: Option<i32> = binder.bind(&RawMessage::from_body(body)).unwrap();
        assert_eq!(arg, Some(-7));
    }

    #[test]
    fn test_bind_byte_view() {
        let (_, binder) = pair();
        let message = RawMessage::new(&b"view"[..]);
        let arg: Option<ByteView> = binder.bind(&message).unwrap();
        assert_eq!(arg, Some(ByteView::from_static(b"view")));
    }

    #[test]
    fn test_bind_absent_body() {
        let (_, binder) = pair();
        let arg: Option<f64> = binder.bind(&RawMessage::empty()).unwrap();
        assert!(arg.is_none());
    }

    #[test]
    fn test_bind_malformed_body() {
        let (_, binder) = pair();
        let err = binder
            .bind::<i64>(&RawMessage::new(vec![0; 3]).with_delivery_tag(9))
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_bind_unsupported() {
        let registry = Arc::new(SerdesRegistry::builder().build());
        let binder = BodyBinder::new(registry);

        assert!(!binder.can_bind(&ValueType::Text));
        let err = binder.bind::<String>(&RawMessage::new(&b"x"[..])).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_bind_value_runtime_type() {
        let (_, binder) = pair();
        let value = binder
            .bind_value(&RawMessage::new(vec![0x01, 0x02]), &ValueType::Short)
            .unwrap();
        assert_eq!(value, Some(Value::Short(258)));
    }

    #[traced_test]
    #[test]
    fn test_bind_failures_are_logged() {
        let (_, binder) = pair();

        let message = RawMessage::new(vec![0; 3]).with_delivery_tag(9);
        assert!(binder.bind::<i64>(&message).is_err());
        assert!(logs_contain("delivery tag 9"));

        let message = RawMessage::new(vec![0; 5]).with_delivery_tag(11);
        assert!(binder.bind_value(&message, &ValueType::Short).is_err());
        assert!(logs_contain("Failed to bind body (delivery tag 11) as i16"));
    }

    #[test]
    fn test_encode_value_absent() {
        let (encoder, _) = pair();
        assert!(encoder.encode_value(None).unwrap().is_none());
        assert!(encoder.encode::<Bytes>(None).unwrap().is_none());
    }
}
