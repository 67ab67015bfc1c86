//! Gesture-to-command resolution.
//!
//! Resolution order: the focused element's input bindings (instance scope,
//! most-recently-added first), then every registered command's default
//! gestures (library scope, registration order, gestures in insertion
//! order). First exact match wins; there is no partial or prefix matching.

use crate::command::CommandRef;
use crate::element::Element;
use crate::gesture::InputEvent;
use crate::registry::CommandRegistry;

/// Matches normalized input events against instance and library gestures.
pub struct GestureMatcher<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> GestureMatcher<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `event` to a command, or `None` when nothing matches.
    pub fn resolve(&self, event: &InputEvent, focused: Option<&Element>) -> Option<CommandRef> {
        if let Some(element) = focused
            && let Some(command) = element.input_bindings().match_event(event)
        {
            tracing::debug!(command = %command, element = element.name(), "instance gesture matched");
            return Some(command);
        }

        for command in self.registry.commands() {
            if command.default_gestures().iter().any(|g| g.matches(event)) {
                tracing::debug!(command = %command, "library gesture matched");
                return Some(command);
            }
        }

        None
    }
}
