//! Command dispatch.
//!
//! Responsibilities:
//! - Validate the dispatch target before any routing happens.
//! - Resolve at most one binding (instance scope first, then class scope)
//!   and invoke its handler at most once, synchronously.
//!
//! Does NOT handle:
//! - Gesture-to-command resolution (see `matcher`).
//! - Binding storage (see `binding`, `element`, `table`).
//!
//! Invariants:
//! - A failed target check invokes zero handlers.
//! - Exactly one handler runs per successful `execute` call; routing stops
//!   at the first resolved binding even if it is suppressed or handler-less.

use serde_json::Value;
use thiserror::Error;

use crate::binding::{CommandBinding, ExecutionContext};
use crate::command::CommandRef;
use crate::element::{CommandTarget, Element};
use crate::table::ClassBindingTable;

/// Errors raised by target validation, before routing begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The supplied target does not expose the input element capability.
    #[error("dispatch target does not implement the input element capability")]
    InvalidTarget,

    /// No target was supplied and the engine has no default context to
    /// route to, so the argument set is structurally empty.
    #[error("no dispatch target and no default context configured")]
    NullTarget,
}

/// What happened to an `execute` call that passed target validation.
///
/// These are expected control-flow results, not errors: "nothing was bound"
/// and "the predicate said no" are ordinary outcomes for a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A binding resolved, its predicate allowed execution, and its
    /// handler ran exactly once.
    Executed,
    /// A binding resolved but its can-execute predicate returned false.
    Suppressed,
    /// A binding resolved and was allowed, but carries no execute handler.
    NoHandler,
    /// No binding resolved in any scope.
    NoBinding,
}

/// The dispatch engine: class-scope bindings plus an optional default
/// context for target-less execution.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    class_bindings: ClassBindingTable,
    default_context: Option<Element>,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an element that target-less `execute` calls route to.
    pub fn with_default_context(mut self, element: Element) -> Self {
        self.default_context = Some(element);
        self
    }

    pub fn class_bindings(&self) -> &ClassBindingTable {
        &self.class_bindings
    }

    pub fn class_bindings_mut(&mut self) -> &mut ClassBindingTable {
        &mut self.class_bindings
    }

    pub fn default_context(&self) -> Option<&Element> {
        self.default_context.as_ref()
    }

    /// Execute `command` against `target`.
    ///
    /// Target validation runs before any routing: a target without the
    /// input element capability fails with `InvalidTarget`; a missing
    /// target routes to the default context, and if there is none the call
    /// fails with `NullTarget`. In both failure cases zero handlers run.
    pub fn execute(
        &self,
        command: &CommandRef,
        parameter: Option<&Value>,
        target: Option<&dyn CommandTarget>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let element = match target {
            Some(target) => target.input_element().ok_or(DispatchError::InvalidTarget)?,
            None => self
                .default_context
                .as_ref()
                .ok_or(DispatchError::NullTarget)?,
        };

        let binding = self.resolve(command, element);
        let Some(binding) = binding else {
            tracing::debug!(command = %command, element = element.name(), "no binding resolved");
            return Ok(DispatchOutcome::NoBinding);
        };

        let ctx = ExecutionContext {
            command,
            parameter,
            target: Some(element.name()),
        };

        if !binding.can_execute(&ctx) {
            tracing::debug!(command = %command, element = element.name(), "execution suppressed");
            return Ok(DispatchOutcome::Suppressed);
        }

        if binding.invoke(&ctx) {
            tracing::debug!(command = %command, element = element.name(), "handler invoked");
            Ok(DispatchOutcome::Executed)
        } else {
            Ok(DispatchOutcome::NoHandler)
        }
    }

    /// Resolve the binding `execute` would use, without invoking anything.
    /// Instance bindings win over class bindings; the class walk covers the
    /// element's class and its ancestors.
    pub fn resolve<'a>(
        &'a self,
        command: &CommandRef,
        element: &'a Element,
    ) -> Option<&'a CommandBinding> {
        element
            .command_bindings()
            .resolve(command)
            .or_else(|| self.class_bindings.resolve(command, element.class()))
    }
}
