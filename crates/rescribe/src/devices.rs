//! Device descriptor catalog.
//!
//! An opaque `device name -> context-option overrides` lookup supplied by an
//! external catalog. The contents are not interpreted here beyond field-wise
//! comparison against explicit context options during header synthesis.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::value::JsValue;

/// Named device presets for context-option generation.
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    devices: HashMap<String, JsValue>,
}

impl DeviceCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device descriptor under a name.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: JsValue) {
        self.devices.insert(name.into(), descriptor);
    }

    /// Look up a device descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JsValue> {
        self.devices.get(name)
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// True when no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Parse a catalog from a JSON object of `name -> descriptor` entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let devices = raw
            .into_iter()
            .map(|(name, descriptor)| (name, JsValue::from(descriptor)))
            .collect();
        Ok(Self { devices })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_maps_descriptors() {
        let catalog = DeviceCatalog::from_json(
            r#"{
                "Pixel 2": {
                    "userAgent": "Mozilla/5.0 (Linux; Android 8.0; Pixel 2)",
                    "hasTouch": true,
                    "isMobile": true
                }
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        let descriptor = catalog.get("Pixel 2").unwrap();
        let JsValue::Object(fields) = descriptor else {
            panic!("descriptor should be an object");
        };
        assert!(fields.iter().any(|(key, _)| key == "hasTouch"));
        assert!(catalog.get("Pixel 3").is_none());
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(DeviceCatalog::from_json("[1, 2]").is_err());
    }

    #[test]
    fn insert_and_get() {
        let mut catalog = DeviceCatalog::new();
        assert!(catalog.is_empty());
        catalog.insert("Pixel 2", JsValue::object([("hasTouch", JsValue::Bool(true))]));
        assert!(catalog.get("Pixel 2").is_some());
    }
}
