//! Raw serdes - pass-through for binary payloads.
//!
//! Used when the payload is already serialized or is raw bytes.
//! Both serdes are zero-copy: they hand out `Bytes` that share memory
//! with the input.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use rabbit_serdes::serdes::{BytesSerdes, Serdes};
//! use rabbit_serdes::Value;
//!
//! let bytes = Bytes::from_static(b"zero copy");
//! let passed = BytesSerdes.serialize(Some(&Value::Bytes(bytes.clone()))).unwrap().unwrap();
//! assert_eq!(passed.as_ptr(), bytes.as_ptr()); // Same memory
//! ```

use bytes::Bytes;

use super::{unsupported, Serdes};
use crate::error::Result;
use crate::message::{ByteView, RawMessage};
use crate::value::{Value, ValueType};

/// Raw byte sequence serdes (identity both ways).
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesSerdes;

impl Serdes for BytesSerdes {
    fn name(&self) -> &str {
        "bytes"
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        *value_type == ValueType::Bytes
    }

    #[inline]
    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(Value::Bytes(bytes)) => Ok(Some(bytes.clone())),
            Some(other) => Err(unsupported(other)),
        }
    }

    #[inline]
    fn deserialize(&self, message: &RawMessage, _value_type: &ValueType) -> Result<Option<Value>> {
        Ok(message.body_bytes().map(Value::Bytes))
    }
}

/// Byte view serdes.
///
/// Serializes the bytes between the view's position and its end. The view
/// is only borrowed, so its position is the same afterwards. Deserializes
/// into a fresh view positioned at the start of the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteBufferSerdes;

impl Serdes for ByteBufferSerdes {
    fn name(&self) -> &str {
        "byte_buffer"
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        *value_type == ValueType::ByteBuffer
    }

    #[inline]
    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(Value::ByteBuffer(view)) => Ok(Some(view.remaining_bytes())),
            Some(other) => Err(unsupported(other)),
        }
    }

    #[inline]
    fn deserialize(&self, message: &RawMessage, _value_type: &ValueType) -> Result<Option<Value>> {
        Ok(message
            .body_bytes()
            .map(|body| Value::ByteBuffer(ByteView::new(body))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;

    #[test]
    fn test_bytes_round_trip() {
        let original = Bytes::from_static(b"hello world");
        let serialized = BytesSerdes
            .serialize(Some(&Value::Bytes(original.clone())))
            .unwrap()
            .unwrap();
        let value = BytesSerdes
            .deserialize(&RawMessage::new(serialized), &ValueType::Bytes)
            .unwrap();
        assert_eq!(value, Some(Value::Bytes(original)));
    }

    #[test]
    fn test_bytes_empty() {
        let serialized = BytesSerdes
            .serialize(Some(&Value::Bytes(Bytes::new())))
            .unwrap()
            .unwrap();
        assert!(serialized.is_empty());

        let value = BytesSerdes
            .deserialize(&RawMessage::new(serialized), &ValueType::Bytes)
            .unwrap();
        assert_eq!(value, Some(Value::Bytes(Bytes::new())));
    }

    #[test]
    fn test_binary_data_preserved() {
        // Test that all byte values are preserved
        let all_bytes: Vec<u8> = (0..=255).collect();
        let message = RawMessage::new(all_bytes.clone());
        match BytesSerdes.deserialize(&message, &ValueType::Bytes).unwrap() {
            Some(Value::Bytes(bytes)) => assert_eq!(&bytes[..], &all_bytes[..]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_bytes_zero_copy() {
        let body = Bytes::from_static(b"test data");
        let message = RawMessage::new(body.clone());
        match BytesSerdes.deserialize(&message, &ValueType::Bytes).unwrap() {
            Some(Value::Bytes(bytes)) => assert_eq!(bytes.as_ptr(), body.as_ptr()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bytes_absent() {
        assert!(BytesSerdes.serialize(None).unwrap().is_none());
        assert!(BytesSerdes
            .deserialize(&RawMessage::empty(), &ValueType::Bytes)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_byte_buffer_serializes_remaining() {
        let mut view = ByteView::from_static(b"skip:keep");
        view.advance(5);

        let serialized = ByteBufferSerdes
            .serialize(Some(&Value::ByteBuffer(view.clone())))
            .unwrap()
            .unwrap();
        assert_eq!(&serialized[..], b"keep");
    }

    #[test]
    fn test_byte_buffer_does_not_consume_view() {
        let mut view = ByteView::from_static(&[0x00, 0x2A, 0x01, 0x02]);
        view.advance(1);
        let value = Value::ByteBuffer(view);

        let first = ByteBufferSerdes.serialize(Some(&value)).unwrap().unwrap();
        let second = ByteBufferSerdes.serialize(Some(&value)).unwrap().unwrap();
        assert_eq!(first, second);

        // The caller can still read the same bytes afterwards
        match value {
            Value::ByteBuffer(mut view) => {
                assert_eq!(view.position(), 1);
                assert_eq!(view.get_u8(), 0x2A);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_byte_buffer_deserialize_wraps_body() {
        let message = RawMessage::new(Bytes::from_static(b"\x00\x07tail"));
        match ByteBufferSerdes
            .deserialize(&message, &ValueType::ByteBuffer)
            .unwrap()
        {
            Some(Value::ByteBuffer(mut view)) => {
                assert_eq!(view.position(), 0);
                assert_eq!(view.get_u16(), 7);
                assert_eq!(&view.remaining_bytes()[..], b"tail");
            }
            other => panic!("unexpected {:?}", other),
        }
        // Message body is untouched
        assert_eq!(message.body(), Some(&b"\x00\x07tail"[..]));
    }

    #[test]
    fn test_byte_buffer_absent() {
        assert!(ByteBufferSerdes.serialize(None).unwrap().is_none());
        assert!(ByteBufferSerdes
            .deserialize(&RawMessage::empty(), &ValueType::ByteBuffer)
            .unwrap()
            .is_none());
    }
}
