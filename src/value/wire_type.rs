//! Bridge between Rust types and [`Value`].
//!
//! Implemented for the primitive Rust types and for [`Structured`], so
//! collaborators can call the registry with concrete types.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::{Structured, StructuredType, ValueType, WireType};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Order {
//!     id: u32,
//! }
//!
//! impl StructuredType for Order {
//!     const TYPE_NAME: &'static str = "Order";
//! }
//!
//! assert_eq!(i32::value_type(), ValueType::Int);
//! assert_eq!(Structured::<Order>::value_type(), ValueType::named("Order"));
//! ```

use std::borrow::Cow;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{Value, ValueType};
use crate::error::{Result, SerdesError};
use crate::message::ByteView;
use crate::serdes::MsgPackCodec;

/// A Rust type with a registry type tag.
pub trait WireType: Sized {
    /// Type tag used to resolve a serdes.
    fn value_type() -> ValueType;

    /// Convert into a runtime value.
    fn to_value(&self) -> Result<Value>;

    /// Convert from a runtime value produced by a serdes.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::MalformedPayload`] if the value has another type.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T: WireType>(value: &Value) -> SerdesError {
    SerdesError::malformed(
        T::value_type().to_string(),
        format!("serdes produced a {} value", value.value_type()),
    )
}

macro_rules! primitive_wire_type {
    ($ty:ty, $variant:ident) => {
        impl WireType for $ty {
            fn value_type() -> ValueType {
                ValueType::$variant
            }

            fn to_value(&self) -> Result<Value> {
                Ok(Value::$variant(self.clone()))
            }

            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

primitive_wire_type!(String, Text);
primitive_wire_type!(i16, Short);
primitive_wire_type!(i32, Int);
primitive_wire_type!(i64, Long);
primitive_wire_type!(f32, Float);
primitive_wire_type!(f64, Double);
primitive_wire_type!(Bytes, Bytes);
primitive_wire_type!(ByteView, ByteBuffer);
primitive_wire_type!(Uuid, Uuid);

/// An application type carried as a named structured value.
pub trait StructuredType: Serialize + DeserializeOwned {
    /// Registry name of the type.
    const TYPE_NAME: &'static str;
}

/// Wrapper that lets any [`StructuredType`] travel through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structured<T>(pub T);

impl<T> Structured<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: StructuredType> WireType for Structured<T> {
    fn value_type() -> ValueType {
        ValueType::Named(Cow::Borrowed(T::TYPE_NAME))
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::named(T::TYPE_NAME, MsgPackCodec::encode(&self.0)?))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Named { type_name, payload } if type_name == T::TYPE_NAME => {
                MsgPackCodec::decode_as(T::TYPE_NAME, &payload).map(Structured)
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
