//! Binding-override configuration types.
//!
//! Responsibilities:
//! - Define the serializable shape of user binding overrides.
//!
//! Does NOT handle:
//! - Gesture parsing or validation (see `overrides` module).
//!
//! Invariants:
//! - `BindingOverrides` uses `BTreeMap` for deterministic serialization.
//! - Keys are command tokens ("Copy", "EditorCommands.PasteSpecial"),
//!   values are gesture strings ("Ctrl+Shift+V"); both stay as strings
//!   until compiled against a registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-defined gesture overrides, keyed by command token.
///
/// Only commands explicitly listed here gain an override binding; all
/// other commands keep their library default gestures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingOverrides {
    /// Map of command token -> gesture string.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl BindingOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the gesture string for a command token, if any.
    pub fn get(&self, command: &str) -> Option<&str> {
        self.overrides.get(command).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_get() {
        let empty = BindingOverrides::default();
        assert!(empty.is_empty());
        assert_eq!(empty.get("Copy"), None);

        let mut overrides = BindingOverrides::default();
        overrides
            .overrides
            .insert("Copy".to_string(), "Ctrl+Shift+C".to_string());
        assert!(!overrides.is_empty());
        assert_eq!(overrides.get("Copy"), Some("Ctrl+Shift+C"));
    }

    #[test]
    fn serde_round_trip() {
        let mut overrides = BindingOverrides::default();
        overrides
            .overrides
            .insert("Find".to_string(), "F7".to_string());
        overrides
            .overrides
            .insert("Refresh".to_string(), "Ctrl+R".to_string());

        let json = serde_json::to_string(&overrides).unwrap();
        let parsed: BindingOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.overrides, overrides.overrides);
    }

    #[test]
    fn missing_field_deserializes_to_empty() {
        let parsed: BindingOverrides = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }
}
