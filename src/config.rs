//! Registry configuration.
//!
//! Controls where the built-in families sit in the resolution order and
//! which named types the structured family claims. Can be loaded from JSON;
//! missing fields take their defaults.
//!
//! # Example
//!
//! ```
//! use rabbit_serdes::SerdesConfig;
//!
//! let config = SerdesConfig::from_json(r#"{ "primitive_priority": 500 }"#).unwrap();
//! assert_eq!(config.primitive_priority, 500);
//! assert!(config.structured_enabled);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{PRIMITIVE_PRIORITY, STRUCTURED_PRIORITY};

/// Configuration for the built-in families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerdesConfig {
    /// Priority of the primitive family.
    pub primitive_priority: i32,
    /// Whether the MsgPack structured family is registered.
    pub structured_enabled: bool,
    /// Priority of the structured family.
    pub structured_priority: i32,
    /// Named types the structured family claims. Empty means all.
    pub structured_types: Vec<String>,
}

impl Default for SerdesConfig {
    fn default() -> Self {
        Self {
            primitive_priority: PRIMITIVE_PRIORITY,
            structured_enabled: true,
            structured_priority: STRUCTURED_PRIORITY,
            structured_types: Vec::new(),
        }
    }
}

impl SerdesConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SerdesError::Json`] if the text is not valid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the primitive family priority.
    pub fn with_primitive_priority(mut self, priority: i32) -> Self {
        self.primitive_priority = priority;
        self
    }

    /// Enable or disable the structured family.
    pub fn with_structured_enabled(mut self, enabled: bool) -> Self {
        self.structured_enabled = enabled;
        self
    }

    /// Set the structured family priority.
    pub fn with_structured_priority(mut self, priority: i32) -> Self {
        self.structured_priority = priority;
        self
    }

    /// Restrict the structured family to the given type names.
    pub fn with_structured_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.structured_types = names.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SerdesConfig::default();
        assert_eq!(config.primitive_priority, 100);
        assert_eq!(config.structured_priority, 200);
        assert!(config.structured_enabled);
        assert!(config.structured_types.is_empty());
    }

    #[test]
    fn test_from_json_full() {
        let config = SerdesConfig::from_json(
            r#"{
                "primitive_priority": 10,
                "structured_enabled": false,
                "structured_priority": 20,
                "structured_types": ["Order", "Invoice"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            SerdesConfig::default()
                .with_primitive_priority(10)
                .with_structured_enabled(false)
                .with_structured_priority(20)
                .with_structured_types(["Order", "Invoice"])
        );
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(SerdesConfig::from_json("{}").unwrap(), SerdesConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SerdesConfig::from_json(r#"{ "primitive_priority": "high" }"#).unwrap_err();
        assert!(matches!(err, crate::SerdesError::Json(_)));
    }
}
