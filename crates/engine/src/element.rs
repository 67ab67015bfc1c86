//! Input elements and the command target capability.
//!
//! Elements are the leaves dispatch routes against: each owns an instance
//! binding collection (consulted before class bindings) and an input
//! binding collection (consulted before library default gestures).
//!
//! Element kinds form a hierarchy, represented by a class name plus parent
//! links registered on the class binding table rather than by type
//! inheritance; `CommandTarget` is the capability check that gates
//! dispatch.

use crate::binding::{BindingCollection, InputBindingCollection};

/// Capability trait for dispatch targets.
///
/// Anything can be offered as a target; only targets that expose an
/// `Element` are structurally valid. A `None` return makes dispatch fail
/// with an invalid-target error without invoking any handler.
pub trait CommandTarget {
    fn input_element(&self) -> Option<&Element>;
}

/// A named element with a class and its two instance-scope collections.
#[derive(Debug)]
pub struct Element {
    name: String,
    class: String,
    command_bindings: BindingCollection,
    input_bindings: InputBindingCollection,
}

impl Element {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            command_bindings: BindingCollection::new(),
            input_bindings: InputBindingCollection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn command_bindings(&self) -> &BindingCollection {
        &self.command_bindings
    }

    pub fn command_bindings_mut(&mut self) -> &mut BindingCollection {
        &mut self.command_bindings
    }

    pub fn input_bindings(&self) -> &InputBindingCollection {
        &self.input_bindings
    }

    pub fn input_bindings_mut(&mut self) -> &mut InputBindingCollection {
        &mut self.input_bindings
    }
}

impl CommandTarget for Element {
    fn input_element(&self) -> Option<&Element> {
        Some(self)
    }
}
