//! Serdes module - type-bound converters between values and payload bytes.
//!
//! Every converter implements [`Serdes`]:
//!
//! - [`TextSerdes`] - UTF-8 text
//! - [`ShortSerdes`], [`IntSerdes`], [`LongSerdes`] - big-endian integers
//! - [`FloatSerdes`], [`DoubleSerdes`] - big-endian IEEE-754 bit patterns
//! - [`BytesSerdes`], [`ByteBufferSerdes`] - zero-copy passthrough
//! - [`UuidSerdes`] - canonical UUID text
//! - [`MsgPackSerdes`] - named structured values as MessagePack maps
//!
//! Converters are grouped into a [`SerdesFamily`], which is itself a
//! [`Serdes`] and is what the registry stores.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::serdes::{primitive_family, Serdes};
//! use rabbit_serdes::{RawMessage, Value, ValueType};
//!
//! let family = primitive_family();
//! assert!(family.supports(&ValueType::Int));
//!
//! let bytes = family.serialize(Some(&Value::Int(1))).unwrap().unwrap();
//! assert_eq!(&bytes[..], &[0, 0, 0, 1]);
//!
//! let value = family.deserialize(&RawMessage::new(bytes), &ValueType::Int).unwrap();
//! assert_eq!(value, Some(Value::Int(1)));
//! ```

mod family;
mod msgpack;
mod numeric;
mod raw;
mod text;

use bytes::Bytes;

use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::value::{Value, ValueType};

pub use family::{
    default_primitive_serdes, primitive_family, structured_family, FamilyBuilder, SerdesFamily,
    PRIMITIVE_FAMILY, STRUCTURED_FAMILY,
};
pub use msgpack::{MsgPackCodec, MsgPackSerdes};
pub use numeric::{DoubleSerdes, FloatSerdes, IntSerdes, LongSerdes, ShortSerdes};
pub use raw::{ByteBufferSerdes, BytesSerdes};
pub use text::{TextSerdes, UuidSerdes};

/// A converter between values of some types and payload bytes.
///
/// Implementations hold no mutable state. `serialize` and `deserialize` are
/// only called for types where `supports` returned true.
pub trait Serdes: Send + Sync + 'static {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Check if this serdes handles `value_type`.
    fn supports(&self, value_type: &ValueType) -> bool;

    /// Serialize a value. An absent value yields an absent payload.
    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>>;

    /// Deserialize a message body. An absent body yields an absent value.
    fn deserialize(&self, message: &RawMessage, value_type: &ValueType) -> Result<Option<Value>>;
}

/// Error for a value handed to a serdes that does not handle its type.
pub(crate) fn unsupported(value: &Value) -> SerdesError {
    SerdesError::UnsupportedType(value.value_type())
}
