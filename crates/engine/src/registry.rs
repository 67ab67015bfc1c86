//! Command registry.
//!
//! Responsibilities:
//! - Hold registered commands keyed by (name, owner), in registration order.
//! - Guarantee idempotent registration: the first registration for a key
//!   wins and later ones hand back the existing instance.
//!
//! Does NOT handle:
//! - Binding commands to handlers (see `binding` and `table`).
//! - String conversion (see `convert`).
//!
//! Invariants:
//! - Append-only: commands are never removed for the life of the registry.
//! - Mutation is guarded by a single lock; the expected usage is a setup
//!   phase that registers everything, followed by read-mostly steady state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::command::{CommandRef, RoutedCommand};
use crate::gesture::Gesture;

/// Errors raised while constructing or registering commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Command construction was given an empty owner type name.
    #[error("command '{command}' has no owner type")]
    InvalidOwner {
        /// Name of the command being constructed
        command: String,
    },

    /// Command construction was given an empty name.
    #[error("command name is empty")]
    InvalidName,
}

#[derive(Default)]
struct RegistryInner {
    by_key: HashMap<(String, String), usize>,
    ordered: Vec<CommandRef>,
}

/// Append-only store of routed commands.
///
/// Registries are plain values: tests build a private one per scenario, the
/// standard command library owns the only process-wide instance (see
/// `library::standard_registry`).
#[derive(Default)]
pub struct CommandRegistry {
    inner: Mutex<RegistryInner>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, or return the existing instance for the same
    /// (name, owner) key. On the duplicate path the supplied text and
    /// gestures are ignored; the first registration wins.
    pub fn register(
        &self,
        name: &str,
        owner: &str,
        text: Option<&str>,
        default_gestures: Vec<Gesture>,
    ) -> Result<CommandRef, RegistryError> {
        // Validate before taking the lock so a failed registration leaves
        // no partial state behind.
        let command = RoutedCommand::new(name, owner, text, default_gestures)?;

        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let key = (name.to_string(), owner.to_string());
        if let Some(&index) = inner.by_key.get(&key) {
            tracing::debug!(name, owner, "duplicate registration, returning existing");
            return Ok(Arc::clone(&inner.ordered[index]));
        }

        let command = Arc::new(command);
        let index = inner.ordered.len();
        inner.ordered.push(Arc::clone(&command));
        inner.by_key.insert(key, index);
        tracing::debug!(name, owner, index, "registered command");
        Ok(command)
    }

    /// Look up a command by its (name, owner) identity.
    pub fn lookup(&self, name: &str, owner: &str) -> Option<CommandRef> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .by_key
            .get(&(name.to_string(), owner.to_string()))
            .map(|&index| Arc::clone(&inner.ordered[index]))
    }

    /// All commands in registration order.
    pub fn commands(&self) -> Vec<CommandRef> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.ordered.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
