//! Serdes families - ordered bundles of converters registered together.
//!
//! A family presents its members to the registry as a single [`Serdes`]:
//! it supports a type when any member does, and delegates to the first
//! member (in build order) that supports it.
//!
//! Families are composed explicitly. To customise the primitive set, start
//! from [`default_primitive_serdes`] or [`FamilyBuilder::primitive`] and
//! replace or drop individual members.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::serdes::{FamilyBuilder, Serdes};
//! use rabbit_serdes::ValueType;
//!
//! let family = FamilyBuilder::primitive()
//!     .without(&ValueType::Uuid)
//!     .build();
//!
//! assert!(family.supports(&ValueType::Text));
//! assert!(!family.supports(&ValueType::Uuid));
//! ```

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use super::{
    unsupported, ByteBufferSerdes, BytesSerdes, DoubleSerdes, FloatSerdes, IntSerdes, LongSerdes,
    MsgPackSerdes, Serdes, ShortSerdes, TextSerdes, UuidSerdes,
};
use crate::error::{Result, SerdesError};
use crate::message::RawMessage;
use crate::value::{Value, ValueType};

/// Name of the built-in primitive family.
pub const PRIMITIVE_FAMILY: &str = "primitive";

/// Name of the built-in structured family.
pub const STRUCTURED_FAMILY: &str = "structured";

/// The built-in primitive converters, in lookup order.
pub fn default_primitive_serdes() -> Vec<Arc<dyn Serdes>> {
    vec![
        Arc::new(TextSerdes),
        Arc::new(ShortSerdes),
        Arc::new(IntSerdes),
        Arc::new(LongSerdes),
        Arc::new(FloatSerdes),
        Arc::new(DoubleSerdes),
        Arc::new(BytesSerdes),
        Arc::new(ByteBufferSerdes),
        Arc::new(UuidSerdes),
    ]
}

/// Build the primitive family from [`default_primitive_serdes`].
pub fn primitive_family() -> SerdesFamily {
    FamilyBuilder::primitive().build()
}

/// Build the structured family around a [`MsgPackSerdes`].
pub fn structured_family(serdes: MsgPackSerdes) -> SerdesFamily {
    FamilyBuilder::new(STRUCTURED_FAMILY).with(serdes).build()
}

/// A named, ordered bundle of serdes.
pub struct SerdesFamily {
    name: String,
    members: Vec<Arc<dyn Serdes>>,
}

impl SerdesFamily {
    /// Start building a family.
    pub fn builder(name: impl Into<String>) -> FamilyBuilder {
        FamilyBuilder::new(name)
    }

    /// Find the member that handles `value_type`.
    pub fn find(&self, value_type: &ValueType) -> Option<&Arc<dyn Serdes>> {
        self.members.iter().find(|m| m.supports(value_type))
    }

    /// Members in lookup order.
    pub fn members(&self) -> &[Arc<dyn Serdes>] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the family has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Debug for SerdesFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdesFamily")
            .field("name", &self.name)
            .field(
                "members",
                &self.members.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Serdes for SerdesFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, value_type: &ValueType) -> bool {
        self.find(value_type).is_some()
    }

    fn serialize(&self, value: Option<&Value>) -> Result<Option<Bytes>> {
        let Some(value) = value else {
            return Ok(None);
        };
        self.find(&value.value_type())
            .ok_or_else(|| unsupported(value))?
            .serialize(Some(value))
    }

    fn deserialize(&self, message: &RawMessage, value_type: &ValueType) -> Result<Option<Value>> {
        self.find(value_type)
            .ok_or_else(|| SerdesError::UnsupportedType(value_type.clone()))?
            .deserialize(message, value_type)
    }
}

/// Builder for [`SerdesFamily`].
pub struct FamilyBuilder {
    name: String,
    members: Vec<Arc<dyn Serdes>>,
}

impl FamilyBuilder {
    /// Create an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Create a builder seeded with the built-in primitive converters.
    pub fn primitive() -> Self {
        Self::from_members(PRIMITIVE_FAMILY, default_primitive_serdes())
    }

    /// Create a builder from an explicit member list.
    pub fn from_members(name: impl Into<String>, members: Vec<Arc<dyn Serdes>>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Append a serdes.
    pub fn with(self, serdes: impl Serdes) -> Self {
        self.with_arc(Arc::new(serdes))
    }

    /// Append a shared serdes.
    pub fn with_arc(mut self, serdes: Arc<dyn Serdes>) -> Self {
        self.members.push(serdes);
        self
    }

    /// Swap the member handling `value_type` for `serdes`, keeping its slot.
    ///
    /// Appends when no member handles the type.
    pub fn replace(mut self, value_type: &ValueType, serdes: impl Serdes) -> Self {
        let serdes: Arc<dyn Serdes> = Arc::new(serdes);
        match self.members.iter().position(|m| m.supports(value_type)) {
            Some(index) => self.members[index] = serdes,
            None => self.members.push(serdes),
        }
        self
    }

    /// Drop every member handling `value_type`.
    pub fn without(mut self, value_type: &ValueType) -> Self {
        self.members.retain(|m| !m.supports(value_type));
        self
    }

    /// Finish the family.
    pub fn build(self) -> SerdesFamily {
        SerdesFamily {
            name: self.name,
            members: self.members,
        }
    }
}
