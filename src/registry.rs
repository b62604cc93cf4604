//! Serdes registry for resolving a converter by declared type.
//!
//! The registry holds serdes families ordered by priority. Lower priority
//! values are tried first; families with equal priority keep registration
//! order. The built-in primitive family sits at [`PRIMITIVE_PRIORITY`] so
//! anything registered below it can take over a primitive type.
//!
//! The registry is built once and then only read, so it can be shared
//! across threads behind an `Arc` without locking.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::{RawMessage, SerdesRegistry, ValueType};
//!
//! let registry = SerdesRegistry::with_defaults();
//!
//! let bytes = registry.serialize_typed(Some(&258i16)).unwrap().unwrap();
//! assert_eq!(&bytes[..], &[0x01, 0x02]);
//!
//! let back: Option<i16> = registry.deserialize_typed(&RawMessage::new(bytes)).unwrap();
//! assert_eq!(back, Some(258));
//!
//! assert!(registry.resolve(&ValueType::Text).is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::config::SerdesConfig;
use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::serdes::{primitive_family, structured_family, MsgPackSerdes, Serdes};
use crate::value::{Value, ValueType, WireType};

/// Priority of the built-in primitive family.
pub const PRIMITIVE_PRIORITY: i32 = 100;

/// Priority of the built-in structured (MsgPack) family.
pub const STRUCTURED_PRIORITY: i32 = 200;

/// Entry for a registered family.
struct FamilyEntry {
    /// Lower resolves first.
    priority: i32,
    /// The family (or single serdes).
    serdes: Arc<dyn Serdes>,
}

/// Ordered, immutable set of serdes families.
pub struct SerdesRegistry {
    /// Sorted by priority, then registration order.
    entries: Vec<FamilyEntry>,
}

impl SerdesRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with the built-in families at their default priorities.
    pub fn with_defaults() -> Self {
        Self::from_config(&SerdesConfig::default())
    }

    /// Registry with the built-in families as configured.
    pub fn from_config(config: &SerdesConfig) -> Self {
        RegistryBuilder::from_config(config).build()
    }

    /// Find the first family, in priority order, that supports `value_type`.
    pub fn resolve(&self, value_type: &ValueType) -> Option<Arc<dyn Serdes>> {
        let found = self
            .entries
            .iter()
            .find(|entry| entry.serdes.supports(value_type));

        match found {
            Some(entry) => {
                tracing::trace!(
                    "Resolved {} to {} (priority {})",
                    value_type,
                    entry.serdes.name(),
                    entry.priority
                );
                Some(entry.serdes.clone())
            }
            None => {
                tracing::debug!("No serdes registered for {}", value_type);
                None
            }
        }
    }

    /// Check if any family supports `value_type`.
    pub fn supports(&self, value_type: &ValueType) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.serdes.supports(value_type))
    }

    fn require(&self, value_type: &ValueType) -> Result<Arc<dyn Serdes>> {
        self.resolve(value_type)
            .ok_or_else(|| SerdesError::UnsupportedType(value_type.clone()))
    }

    /// Serialize a value with the serdes resolved for its type.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::UnsupportedType`] if nothing claims the type.
    pub fn serialize(&self, value: &Value) -> Result<Option<Bytes>> {
        self.require(&value.value_type())?.serialize(Some(value))
    }

    /// Serialize an optional value. An absent value yields an absent payload.
    pub fn serialize_opt(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        match value {
            Some(value) => self.serialize(value),
            None => Ok(None),
        }
    }

    /// Deserialize a message body as `value_type`.
    ///
    /// # Errors
    ///
    /// Returns [`SerdesError::UnsupportedType`] if nothing claims the type,
    /// or whatever the resolved serdes reports for a malformed body.
    pub fn deserialize(&self, message: &RawMessage, value_type: &ValueType) -> Result<Option<Value>> {
        self.require(value_type)?.deserialize(message, value_type)
    }

    /// Serialize a typed value.
    ///
    /// The serdes is resolved from `T` even when `value` is absent, so an
    /// unsupported `T` is reported either way.
    pub fn serialize_typed<T: WireType>(&self, value: Option<&T>) -> Result<Option<Bytes>> {
        let serdes = self.require(&T::value_type())?;
        match value {
            Some(value) => serdes.serialize(Some(&value.to_value()?)),
            None => Ok(None),
        }
    }

    /// Deserialize a message body into `T`.
    pub fn deserialize_typed<T: WireType>(&self, message: &RawMessage) -> Result<Option<T>> {
        self.deserialize(message, &T::value_type())?
            .map(T::from_value)
            .transpose()
    }

    /// Registered families as `(priority, name)`, in resolution order.
    pub fn families(&self) -> impl Iterator<Item = (i32, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.priority, entry.serdes.name()))
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no families are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SerdesRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for SerdesRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.families()).finish()
    }
}

/// Builder for [`SerdesRegistry`].
///
/// Families may be registered in any order; `build` sorts them.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<FamilyEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the built-in families as configured.
    pub fn from_config(config: &SerdesConfig) -> Self {
        let builder = Self::new().register(primitive_family(), config.primitive_priority);
        if !config.structured_enabled {
            return builder;
        }

        let msgpack = if config.structured_types.is_empty() {
            MsgPackSerdes::accept_all()
        } else {
            MsgPackSerdes::for_types(config.structured_types.iter().cloned())
        };
        builder.register(structured_family(msgpack), config.structured_priority)
    }

    /// Register a family (or single serdes) at `priority`.
    pub fn register(self, serdes: impl Serdes, priority: i32) -> Self {
        self.register_arc(Arc::new(serdes), priority)
    }

    /// Register a shared family at `priority`.
    pub fn register_arc(mut self, serdes: Arc<dyn Serdes>, priority: i32) -> Self {
        tracing::debug!("Registering serdes {} at priority {}", serdes.name(), priority);
        self.entries.push(FamilyEntry { priority, serdes });
        self
    }

    /// Freeze the registry.
    pub fn build(mut self) -> SerdesRegistry {
        // Stable: equal priorities keep registration order
        self.entries.sort_by_key(|entry| entry.priority);
        tracing::debug!("Built serdes registry with {} families", self.entries.len());
        SerdesRegistry {
            entries: self.entries,
        }
    }
}
