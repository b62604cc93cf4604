//! Error types for rabbit-serdes.

use thiserror::Error;

use crate::value::ValueType;

/// Main error type for all serdes operations.
///
/// An absent body or absent value is never an error: converters report it
/// as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SerdesError {
    /// No registered serdes claims the requested type.
    #[error("No serdes registered for type: {0}")]
    UnsupportedType(ValueType),

    /// A serdes matched the type but the payload violates its wire contract.
    #[error("Malformed payload for {type_name}: {reason}")]
    MalformedPayload {
        /// Name of the type being decoded.
        type_name: String,
        /// What was wrong with the payload.
        reason: String,
    },

    /// MsgPack serialization error (structured family).
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    /// JSON error (configuration text).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerdesError {
    /// Build a [`SerdesError::MalformedPayload`].
    pub fn malformed(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error means no serdes claimed the type.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    /// Check if this error means the payload broke the type's wire contract.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload { .. })
    }
}

/// Result type alias using SerdesError.
pub type Result<T> = std::result::Result<T, SerdesError>;
