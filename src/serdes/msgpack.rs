//! MsgPack serdes for named structured values, using `rmp-serde`.
//!
//! **CRITICAL**: Always use `to_vec_named`, NEVER `to_vec`!
//! Consumers on other platforms expect struct-as-map format.
//!
//! # Why `to_vec_named`?
//!
//! - `to_vec` serializes structs as arrays (positional)
//! - `to_vec_named` serializes structs as maps (with field names)
//! - Field order then stops being part of the wire contract
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::serdes::MsgPackCodec;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Message {
//!     id: u32,
//!     content: String,
//! }
//!
//! let msg = Message { id: 42, content: "hello".to_string() };
//! let encoded = MsgPackCodec::encode(&msg).unwrap();
//! let decoded: Message = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, msg);
//! ```

use std::collections::HashSet;

use bytes::Bytes;
use serde::de::IgnoredAny;

use super::{unsupported, Serdes};
use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::value::{Value, ValueType};

/// MessagePack codec for structured data.
///
/// Uses `rmp_serde::to_vec_named` so structs are serialized as maps
/// (with field names) rather than arrays (positional).
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value to MsgPack bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
        // CRITICAL: to_vec_named, NOT to_vec!
        Ok(rmp_serde::to_vec_named(value)?)
    }

    /// Decode MsgPack bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::MalformedPayload`] if the bytes cannot be
    /// deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Self::decode_as(std::any::type_name::<T>(), bytes)
    }

    /// Decode MsgPack bytes, reporting failures against `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::MalformedPayload`] naming `type_name`.
    pub fn decode_as<T: serde::de::DeserializeOwned>(type_name: &str, bytes: &[u8]) -> Result<T> {
        rmp_serde::from_slice(bytes).map_err(|e| SerdesError::malformed(type_name, e.to_string()))
    }

    /// Check that `bytes` hold one well-formed MsgPack value.
    ///
    /// Accepts every MsgPack family, including `bin`, `ext` and maps with
    /// non-string keys.
    pub fn validate(type_name: &str, bytes: &[u8]) -> Result<()> {
        Self::decode_as::<IgnoredAny>(type_name, bytes).map(|_| ())
    }
}

/// Serdes for [`Value::Named`] payloads encoded as MessagePack.
///
/// Named values already hold their MsgPack encoding, so both directions
/// share the buffer. Inbound bodies are checked for well-formedness only.
///
/// Claims either every named type or only the names it was built with.
#[derive(Debug, Clone, Default)]
pub struct MsgPackSerdes {
    accepted: Option<HashSet<String>>,
}

impl MsgPackSerdes {
    /// Accept every named type.
    pub fn accept_all() -> Self {
        Self { accepted: None }
    }

    /// Accept only the given type names.
    pub fn for_types<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: Some(names.into_iter().map(Into::into).collect()),
        }
    }
}

impl Serdes for MsgPackSerdes {
    fn name(&self) -> &str {
        "msgpack"
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        match (value_type, &self.accepted) {
            (ValueType::Named(_), None) => true,
            (ValueType::Named(name), Some(accepted)) => accepted.contains(&**name),
            _ => false,
        }
    }

    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            None => Ok(None),
            Some(Value::Named { payload, .. }) => Ok(Some(payload.clone())),
            Some(other) => Err(unsupported(other)),
        }
    }

    fn deserialize(&self, message: &RawMessage, value_type: &ValueType) -> Result<Option<Value>> {
        let ValueType::Named(type_name) = value_type else {
            return Err(SerdesError::UnsupportedType(value_type.clone()));
        };
        let Some(body) = message.body_bytes() else {
            return Ok(None);
        };

        MsgPackCodec::validate(type_name, &body)?;
        Ok(Some(Value::Named {
            type_name: type_name.clone(),
            payload: body,
        }))
    }
}
