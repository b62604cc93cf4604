//! Text-based serdes: UTF-8 strings and UUIDs in canonical text form.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::serdes::{Serdes, UuidSerdes};
//! use rabbit_serdes::{RawMessage, Value, ValueType};
//! use uuid::Uuid;
//!
//! let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
//! let bytes = UuidSerdes.serialize(Some(&Value::Uuid(id))).unwrap().unwrap();
//! assert_eq!(&bytes[..], b"123e4567-e89b-12d3-a456-426614174000");
//! ```

use bytes::Bytes;
use uuid::Uuid;

use super::{unsupported, Serdes};
use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::value::{Value, ValueType};

/// Length of the canonical hyphenated UUID text.
const CANONICAL_UUID_LEN: usize = 36;

/// UTF-8 text serdes.
///
/// Any byte sequence is accepted on decode; invalid UTF-8 sequences are
/// replaced with U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSerdes;

impl TextSerdes {
    /// Encode a string as UTF-8.
    #[inline]
    pub fn encode(text: &str) -> Bytes {
        Bytes::copy_from_slice(text.as_bytes())
    }

    /// Decode UTF-8 bytes.
    pub fn decode(body: &[u8]) -> String {
        String::from_utf8_lossy(body).into_owned()
    }
}

impl Serdes for TextSerdes {
    fn name(&self) -> &str {
        "text"
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        *value_type == ValueType::Text
    }

    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(Value::Text(text)) => Ok(Some(Self::encode(text))),
            Some(other) => Err(unsupported(other)),
        }
    }

    fn deserialize(&self, message: &RawMessage, _value_type: &ValueType) -> Result<Option<Value>> {
        Ok(message.body().map(|body| Value::Text(Self::decode(body))))
    }
}

/// UUID serdes, carried as canonical hyphenated text through [`TextSerdes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSerdes;

impl UuidSerdes {
    /// Parse canonical hyphenated UUID text.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::MalformedPayload`] for any other form.
    pub fn parse(text: &str) -> Result<Uuid> {
        if text.len() != CANONICAL_UUID_LEN {
            return Err(SerdesError::malformed(
                "Uuid",
                format!("expected {} characters, got {}", CANONICAL_UUID_LEN, text.len()),
            ));
        }
        Uuid::try_parse(text).map_err(|e| SerdesError::malformed("Uuid", e.to_string()))
    }
}

impl Serdes for UuidSerdes {
    fn name(&self) -> &str {
        "uuid"
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        *value_type == ValueType::Uuid
    }

    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(Value::Uuid(id)) => {
                let text = Value::Text(id.hyphenated().to_string());
                TextSerdes.serialize(Some(&text))
            }
            Some(other) => Err(unsupported(other)),
        }
    }

    fn deserialize(&self, message: &RawMessage, _value_type: &ValueType) -> Result<Option<Value>> {
        match TextSerdes.deserialize(message, &ValueType::Text)? {
            Some(Value::Text(text)) => Self::parse(&text).map(|id| Some(Value::Uuid(id))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn test_text_round_trip() {
        let bytes = TextSerdes
            .serialize(Some(&Value::from("héllo wörld")))
            .unwrap()
            .unwrap();
        assert_eq!(&bytes[..], "héllo wörld".as_bytes());

        let value = TextSerdes
            .deserialize(&RawMessage::new(bytes), &ValueType::Text)
            .unwrap();
        assert_eq!(value, Some(Value::from("héllo wörld")));
    }

    #[test]
    fn test_text_empty_body() {
        let value = TextSerdes
            .deserialize(&RawMessage::new(Bytes::new()), &ValueType::Text)
            .unwrap();
        assert_eq!(value, Some(Value::from("")));
    }

    #[test]
    fn test_text_invalid_utf8_is_lossy() {
        let value = TextSerdes
            .deserialize(&RawMessage::new(vec![b'a', 0xFF, b'b']), &ValueType::Text)
            .unwrap();
        assert_eq!(value, Some(Value::from("a\u{FFFD}b")));
    }

    #[test]
    fn test_text_absent() {
        assert!(TextSerdes.serialize(None).unwrap().is_none());
        assert!(TextSerdes
            .deserialize(&RawMessage::empty(), &ValueType::Text)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_text_supports() {
        assert!(TextSerdes.supports(&ValueType::Text));
        assert!(!TextSerdes.supports(&ValueType::Uuid));
        assert!(!TextSerdes.supports(&ValueType::named("String")));
    }

    #[test]
    fn test_uuid_serializes_canonical_text() {
        let id = Uuid::parse_str(CANONICAL).unwrap();
        let bytes = UuidSerdes.serialize(Some(&Value::Uuid(id))).unwrap().unwrap();
        assert_eq!(&bytes[..], CANONICAL.as_bytes());
    }

    #[test]
    fn test_uuid_round_trip() {
        let id = Uuid::parse_str(CANONICAL).unwrap();
        let message = RawMessage::new(CANONICAL.as_bytes().to_vec());
        let value = UuidSerdes.deserialize(&message, &ValueType::Uuid).unwrap();
        assert_eq!(value, Some(Value::Uuid(id)));
    }

    #[test]
    fn test_uuid_uppercase_accepted() {
        let message = RawMessage::new(CANONICAL.to_uppercase().into_bytes());
        let value = UuidSerdes.deserialize(&message, &ValueType::Uuid).unwrap();
        assert_eq!(value, Some(Value::Uuid(Uuid::parse_str(CANONICAL).unwrap())));
    }

    #[test]
    fn test_uuid_rejects_garbage() {
        let message = RawMessage::new(&b"not-a-uuid"[..]);
        let err = UuidSerdes.deserialize(&message, &ValueType::Uuid).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_uuid_rejects_non_canonical_forms() {
        for text in [
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-42661417400g",
        ] {
            let message = RawMessage::new(text.as_bytes().to_vec());
            let err = UuidSerdes.deserialize(&message, &ValueType::Uuid).unwrap_err();
            assert!(err.is_malformed(), "{} should be rejected", text);
        }
    }

    #[test]
    fn test_uuid_absent() {
        assert!(UuidSerdes.serialize(None).unwrap().is_none());
        assert!(UuidSerdes
            .deserialize(&RawMessage::empty(), &ValueType::Uuid)
            .unwrap()
            .is_none());
    }
}
