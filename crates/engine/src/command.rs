//! Routed command objects.
//!
//! A routed command carries identity and default gestures only; what a
//! command *does* is decided at dispatch time by whichever binding resolves
//! for the target element. Commands are immutable once constructed and are
//! shared as `Arc<RoutedCommand>`.

use std::fmt;
use std::sync::Arc;

use crate::gesture::Gesture;
use crate::registry::RegistryError;

/// A named, owner-scoped command.
///
/// Identity is the (name, owner) pair; two commands with equal identity
/// compare equal regardless of display text or gesture sets.
#[derive(Debug, Clone)]
pub struct RoutedCommand {
    name: String,
    owner: String,
    text: Option<String>,
    default_gestures: Vec<Gesture>,
}

impl RoutedCommand {
    /// Construct a command. The owner type name must be non-empty; commands
    /// without an owner cannot be routed or serialized.
    pub fn new(
        name: &str,
        owner: &str,
        text: Option<&str>,
        default_gestures: Vec<Gesture>,
    ) -> Result<Self, RegistryError> {
        if owner.trim().is_empty() {
            return Err(RegistryError::InvalidOwner {
                command: name.to_string(),
            });
        }
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidName);
        }
        Ok(Self {
            name: name.to_string(),
            owner: owner.to_string(),
            text: text.map(str::to_string),
            default_gestures,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Optional display text (e.g. "Print Preview" for `PrintPreview`).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Default gestures in insertion order. Order is significant: the
    /// matcher tries them front to back and the first hit wins.
    pub fn default_gestures(&self) -> &[Gesture] {
        &self.default_gestures
    }

    /// True if `other` names the same (name, owner) pair.
    pub fn same_identity(&self, other: &RoutedCommand) -> bool {
        self.name == other.name && self.owner == other.owner
    }
}

impl PartialEq for RoutedCommand {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for RoutedCommand {}

impl fmt::Display for RoutedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// Convenience alias used throughout the engine.
pub type CommandRef = Arc<RoutedCommand>;
