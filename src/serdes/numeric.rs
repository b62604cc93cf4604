//! Fixed-width numeric serdes.
//!
//! All multi-byte values are Big Endian:
//! ```text
//! ┌────────┬───────┬──────────────────────────────┐
//! │ Type   │ Width │ Layout                       │
//! ├────────┼───────┼──────────────────────────────┤
//! │ i16    │ 2     │ two's complement, BE         │
//! │ i32    │ 4     │ two's complement, BE         │
//! │ i64    │ 8     │ two's complement, BE         │
//! │ f32    │ 4     │ raw IEEE-754 bits, BE        │
//! │ f64    │ 8     │ raw IEEE-754 bits, BE        │
//! └────────┴───────┴──────────────────────────────┘
//! ```
//!
//! A body of any other length is rejected, never truncated or padded.

use bytes::Bytes;

use super::{unsupported, Serdes};
use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::value::{Value, ValueType};

/// Take exactly `N` bytes from a body.
fn exact<const N: usize>(body: &[u8], value_type: &ValueType) -> Result<[u8; N]> {
    <[u8; N]>::try_from(body).map_err(|_| {
        SerdesError::malformed(
            value_type.name(),
            format!("expected {} bytes, got {}", N, body.len()),
        )
    })
}

macro_rules! fixed_width_serdes {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Serdes for $name {
            fn name(&self) -> &str {
                $label
            }

            fn supports(&self, value_type: &ValueType) -> bool {
                *value_type == ValueType::$variant
            }

            fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
                match value {
                    None => Ok(None),
                    Some(Value::$variant(v)) => Ok(Some(Bytes::copy_from_slice(&v.to_be_bytes()))),
                    Some(other) => Err(unsupported(other)),
                }
            }

            fn deserialize(
                &self,
                message: &RawMessage,
                _value_type: &ValueType,
            ) -> Result<Option<Value>> {
                message
                    .body()
                    .map(|body| {
                        exact(body, &ValueType::$variant)
                            .map(|raw| Value::$variant(<$ty>::from_be_bytes(raw)))
                    })
                    .transpose()
            }
        }
    };
}

fixed_width_serdes!(
    /// 16-bit signed integer serdes (2 bytes, BE).
    ShortSerdes, Short, i16, "i16"
);
fixed_width_serdes!(
    /// 32-bit signed integer serdes (4 bytes, BE).
    IntSerdes, Int, i32, "i32"
);
fixed_width_serdes!(
    /// 64-bit signed integer serdes (8 bytes, BE).
    LongSerdes, Long, i64, "i64"
);
fixed_width_serdes!(
    /// 32-bit float serdes (4 bytes, raw bits, BE).
    FloatSerdes, Float, f32, "f32"
);
fixed_width_serdes!(
    /// 64-bit float serdes (8 bytes, raw bits, BE).
    DoubleSerdes, Double, f64, "f64"
);
