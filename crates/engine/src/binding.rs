//! Command and input bindings, and their ordered collections.
//!
//! Responsibilities:
//! - Associate commands with execute handlers and can-execute predicates.
//! - Associate gestures with commands (input bindings).
//! - Provide ordered, sealable collections with all-or-nothing mutation.
//!
//! Does NOT handle:
//! - Class-scope bindings (see `table`).
//! - Resolution across scopes (see `dispatch` and `matcher`).
//!
//! Invariants:
//! - A sealed collection never mutates: a rejected `add` leaves `len` and
//!   contents untouched, and `is_sealed` is stable across the failed call.
//! - Resolution order within a collection is most-recently-added first.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::command::{CommandRef, RoutedCommand};
use crate::gesture::{Gesture, InputEvent};

/// Error raised when mutating a sealed collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection has been sealed and no longer accepts mutation.
    #[error("binding collection is sealed")]
    Sealed,
}

/// Context handed to execute handlers and can-execute predicates.
#[derive(Debug)]
pub struct ExecutionContext<'a> {
    /// The command being executed
    pub command: &'a CommandRef,
    /// Optional caller-supplied parameter
    pub parameter: Option<&'a Value>,
    /// Name of the element the execution resolved against
    pub target: Option<&'a str>,
}

/// Boxed execute handler. Handlers run synchronously on the dispatching
/// thread and must complete before control returns to the engine.
pub type ExecuteFn = Box<dyn Fn(&ExecutionContext<'_>)>;

/// Boxed can-execute predicate.
pub type CanExecuteFn = Box<dyn Fn(&ExecutionContext<'_>) -> bool>;

/// Associates a command with at most one execute handler and at most one
/// can-execute predicate, plus an optional gesture for input routing.
pub struct CommandBinding {
    command: CommandRef,
    execute: Option<ExecuteFn>,
    can_execute: Option<CanExecuteFn>,
    gesture: Option<Gesture>,
}

impl CommandBinding {
    pub fn new(command: CommandRef) -> Self {
        Self {
            command,
            execute: None,
            can_execute: None,
            gesture: None,
        }
    }

    pub fn with_execute(mut self, handler: impl Fn(&ExecutionContext<'_>) + 'static) -> Self {
        self.execute = Some(Box::new(handler));
        self
    }

    pub fn with_can_execute(
        mut self,
        predicate: impl Fn(&ExecutionContext<'_>) -> bool + 'static,
    ) -> Self {
        self.can_execute = Some(Box::new(predicate));
        self
    }

    pub fn with_gesture(mut self, gesture: Gesture) -> Self {
        self.gesture = Some(gesture);
        self
    }

    pub fn command(&self) -> &CommandRef {
        &self.command
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    pub fn has_execute_handler(&self) -> bool {
        self.execute.is_some()
    }

    /// True if `command` is the command this binding handles.
    pub fn handles(&self, command: &RoutedCommand) -> bool {
        self.command.same_identity(command)
    }

    /// Evaluate the can-execute predicate; a binding without one is always
    /// executable.
    pub fn can_execute(&self, ctx: &ExecutionContext<'_>) -> bool {
        match &self.can_execute {
            Some(predicate) => predicate(ctx),
            None => true,
        }
    }

    /// Invoke the execute handler if present. Returns whether a handler ran.
    pub fn invoke(&self, ctx: &ExecutionContext<'_>) -> bool {
        match &self.execute {
            Some(handler) => {
                handler(ctx);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CommandBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBinding")
            .field("command", &self.command.to_string())
            .field("execute", &self.execute.is_some())
            .field("can_execute", &self.can_execute.is_some())
            .field("gesture", &self.gesture)
            .finish()
    }
}

/// Associates a gesture with a command, element-scope.
#[derive(Debug, Clone)]
pub struct InputBinding {
    gesture: Gesture,
    command: CommandRef,
}

impl InputBinding {
    pub fn new(gesture: Gesture, command: CommandRef) -> Self {
        Self { gesture, command }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn command(&self) -> &CommandRef {
        &self.command
    }
}

/// Ordered, sealable sequence of command bindings.
#[derive(Debug, Default)]
pub struct BindingCollection {
    items: Vec<CommandBinding>,
    sealed: bool,
}

impl BindingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the collection rejects mutation. Stable across rejected
    /// calls; only `seal()` changes it, and only in one direction.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Make the collection read-only. Irreversible.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn add(&mut self, binding: CommandBinding) -> Result<(), CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        self.items.push(binding);
        Ok(())
    }

    /// Add every binding in `bindings`. All-or-nothing: on a sealed
    /// collection nothing is added.
    pub fn add_range(
        &mut self,
        bindings: impl IntoIterator<Item = CommandBinding>,
    ) -> Result<usize, CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        let before = self.items.len();
        self.items.extend(bindings);
        Ok(self.items.len() - before)
    }

    /// Remove the most-recently-added binding for `command`. Removing a
    /// command with no binding present is a no-op returning `false`.
    pub fn remove(&mut self, command: &RoutedCommand) -> Result<bool, CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        match self.items.iter().rposition(|b| b.handles(command)) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) -> Result<(), CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        self.items.clear();
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandBinding> {
        self.items.iter()
    }

    /// First binding for `command`, scanning most-recently-added first.
    pub fn resolve(&self, command: &RoutedCommand) -> Option<&CommandBinding> {
        self.items.iter().rev().find(|b| b.handles(command))
    }
}

/// Ordered, sealable sequence of input bindings.
#[derive(Debug, Default)]
pub struct InputBindingCollection {
    items: Vec<InputBinding>,
    sealed: bool,
}

impl InputBindingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn add(&mut self, binding: InputBinding) -> Result<(), CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        self.items.push(binding);
        Ok(())
    }

    pub fn add_range(
        &mut self,
        bindings: impl IntoIterator<Item = InputBinding>,
    ) -> Result<usize, CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        let before = self.items.len();
        self.items.extend(bindings);
        Ok(self.items.len() - before)
    }

    /// Remove the most-recently-added binding whose gesture equals
    /// `gesture`. Absent gesture is a no-op returning `false`.
    pub fn remove(&mut self, gesture: Gesture) -> Result<bool, CollectionError> {
        if self.sealed {
            return Err(CollectionError::Sealed);
        }
        match self.items.iter().rposition(|b| b.gesture() == gesture) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputBinding> {
        self.items.iter()
    }

    /// First command whose gesture matches `event`, most-recently-added
    /// first.
    pub fn match_event(&self, event: &InputEvent) -> Option<CommandRef> {
        self.items
            .iter()
            .rev()
            .find(|b| b.gesture().matches(event))
            .map(|b| Arc::clone(b.command()))
    }
}
