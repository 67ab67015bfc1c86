//! Routed-command dispatch and gesture matching.
//!
//! This crate is the core of keyroute: commands are named, owner-scoped
//! objects; gestures resolve input events to commands; execution routes
//! through instance bindings, then class bindings, to at most one handler.
//!
//! The engine is single-threaded by design: registration happens during a
//! setup phase, handlers run synchronously on the dispatching thread, and
//! nothing here blocks or suspends.

pub mod binding;
pub mod command;
pub mod convert;
pub mod dispatch;
pub mod element;
pub mod gesture;
pub mod key;
pub mod library;
pub mod matcher;
pub mod modifiers;
pub mod registry;
pub mod table;

pub use binding::{
    BindingCollection, CollectionError, CommandBinding, ExecutionContext, InputBinding,
    InputBindingCollection,
};
pub use command::{CommandRef, RoutedCommand};
pub use convert::{FormatError, format_command, parse_command, parse_gesture, parse_key_gesture};
pub use dispatch::{DispatchEngine, DispatchError, DispatchOutcome};
pub use element::{CommandTarget, Element};
pub use gesture::{Gesture, GestureError, InputEvent, KeyGesture, MouseAction, MouseGesture};
pub use key::Key;
pub use matcher::GestureMatcher;
pub use modifiers::Modifiers;
pub use registry::{CommandRegistry, RegistryError};
pub use table::ClassBindingTable;
