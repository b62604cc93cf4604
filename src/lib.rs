//! # rabbit-serdes
//!
//! Typed payload serdes registry for RabbitMQ messaging clients.
//!
//! This crate converts between application values and the raw message body
//! carried on the wire, picking the converter from the declared type of the
//! value being published or consumed.
//!
//! ## Architecture
//!
//! - **Serdes** (`serdes`): one converter per type. Primitives use fixed,
//!   documented layouts (big-endian integers and floats, UTF-8 text,
//!   canonical UUID text, zero-copy bytes)
//! - **Families**: ordered bundles of serdes registered together
//! - **Registry** (`registry`): families ordered by priority; the first
//!   one that supports a type handles it
//!
//! Transport, routing and acknowledgement are left to the caller.
//!
//! ## Example
//!
//! ```
//! use rabbit_serdes::{RawMessage, SerdesRegistry, Value, ValueType};
//!
//! let registry = SerdesRegistry::with_defaults();
//!
//! let body = registry.serialize(&Value::Int(1)).unwrap();
//! assert_eq!(body.as_deref(), Some(&[0u8, 0, 0, 1][..]));
//!
//! let message = RawMessage::from_body(body);
//! let value = registry.deserialize(&message, &ValueType::Int).unwrap();
//! assert_eq!(value, Some(Value::Int(1)));
//! ```

pub mod bind;
pub mod config;
pub mod error;
pub mod message;
pub mod registry;
pub mod serdes;
pub mod value;

pub use bind::{BodyBinder, PayloadEncoder};
pub use config::SerdesConfig;
pub use error::{Result, SerdesError};
pub use message::{ByteView, RawMessage};
pub use registry::{RegistryBuilder, SerdesRegistry, PRIMITIVE_PRIORITY, STRUCTURED_PRIORITY};
pub use serdes::{FamilyBuilder, Serdes, SerdesFamily};
pub use value::{Structured, StructuredType, Value, ValueType, WireType};
