//! Value module - declared type tags and runtime values.
//!
//! Every payload a serdes produces or consumes is a [`Value`], and every
//! lookup in the registry is keyed by a [`ValueType`]. Both are closed enums
//! with one variant per primitive, plus a named variant for application types.
//!
//! Rust types map onto these tags through [`WireType`].

mod wire_type;

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use uuid::Uuid;

use crate::message::ByteView;

pub use wire_type::{Structured, StructuredType, WireType};

/// Declared type of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// UTF-8 text.
    Text,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit IEEE-754 float.
    Float,
    /// 64-bit IEEE-754 float.
    Double,
    /// Raw byte sequence.
    Bytes,
    /// Positioned byte view.
    ByteBuffer,
    /// UUID carried as canonical text.
    Uuid,
    /// Application-defined type, identified by name.
    Named(Cow<'static, str>),
}

impl ValueType {
    /// Create a named type tag.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }

    /// Name used in logs and error messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Text => "String",
            Self::Short => "i16",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Bytes => "Bytes",
            Self::ByteBuffer => "ByteView",
            Self::Uuid => "Uuid",
            Self::Named(name) => &**name,
        }
    }

}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime payload value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text.
    Text(String),
    /// 16-bit signed integer.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Raw bytes.
    Bytes(Bytes),
    /// Byte view.
    ByteBuffer(ByteView),
    /// UUID.
    Uuid(Uuid),
    /// Application-defined structured value.
    Named {
        /// Type name the value was declared with.
        type_name: Cow<'static, str>,
        /// Content encoded as a single MessagePack value.
        payload: Bytes,
    },
}

impl Value {
    /// Type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Short(_) => ValueType::Short,
            Self::Int(_) => ValueType::Int,
            Self::Long(_) => ValueType::Long,
            Self::Float(_) => ValueType::Float,
            Self::Double(_) => ValueType::Double,
            Self::Bytes(_) => ValueType::Bytes,
            Self::ByteBuffer(_) => ValueType::ByteBuffer,
            Self::Uuid(_) => ValueType::Uuid,
            Self::Named { type_name, .. } => ValueType::Named(type_name.clone()),
        }
    }

    /// Create a named structured value from its MessagePack encoding.
    pub fn named(type_name: impl Into<Cow<'static, str>>, payload: impl Into<Bytes>) -> Self {
        Self::Named {
            type_name: type_name.into(),
            payload: payload.into(),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<ByteView> for Value {
    fn from(v: ByteView) -> Self {
        Self::ByteBuffer(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}
