//! Class-scope binding table.
//!
//! Responsibilities:
//! - Register bindings once per class, shared by every element of that
//!   class and its subclasses.
//! - Resolve a command for an element class by walking the parent chain.
//!
//! Does NOT handle:
//! - Instance bindings (those live on the element).
//!
//! Invariants:
//! - Registration happens during a setup phase; `freeze()` seals the table
//!   and later registration fails without mutating anything.
//! - Within one class, resolution is most-recently-registered first; across
//!   classes, the element's own class always beats its ancestors.

use std::collections::HashMap;

use crate::binding::{CollectionError, CommandBinding};
use crate::command::RoutedCommand;

/// Two-level store: class hierarchy plus per-class binding lists.
#[derive(Debug, Default)]
pub struct ClassBindingTable {
    parents: HashMap<String, String>,
    bindings: HashMap<String, Vec<CommandBinding>>,
    frozen: bool,
}

impl ClassBindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class and its parent. Classes without a declared parent
    /// are roots; the resolution walk ends there.
    pub fn register_class(&mut self, class: &str, parent: Option<&str>) -> Result<(), CollectionError> {
        if self.frozen {
            return Err(CollectionError::Sealed);
        }
        if let Some(parent) = parent {
            self.parents.insert(class.to_string(), parent.to_string());
        }
        tracing::debug!(class, parent, "registered element class");
        Ok(())
    }

    /// Register a class-scope binding. Applies to `class` and every class
    /// that declares it as an ancestor.
    pub fn register(&mut self, class: &str, binding: CommandBinding) -> Result<(), CollectionError> {
        if self.frozen {
            return Err(CollectionError::Sealed);
        }
        tracing::debug!(class, command = %binding.command(), "registered class binding");
        self.bindings.entry(class.to_string()).or_default().push(binding);
        Ok(())
    }

    /// Seal the table. Irreversible; resolution keeps working.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Resolve a binding for `command` starting at `class` and walking up
    /// the parent chain. Most-recently-registered binding wins within each
    /// class.
    pub fn resolve(&self, command: &RoutedCommand, class: &str) -> Option<&CommandBinding> {
        let mut current = Some(class);
        let mut visited = 0usize;
        while let Some(class) = current {
            if let Some(bindings) = self.bindings.get(class)
                && let Some(binding) = bindings.iter().rev().find(|b| b.handles(command))
            {
                return Some(binding);
            }
            current = self.parents.get(class).map(String::as_str);
            // Cycle guard: a malformed hierarchy must not hang resolution.
            visited += 1;
            if visited > self.parents.len() + 1 {
                tracing::warn!(class, "class hierarchy cycle detected during resolution");
                return None;
            }
        }
        None
    }
}
