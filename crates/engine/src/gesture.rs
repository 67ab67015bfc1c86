//! Input gestures and normalized input events.
//!
//! Responsibilities:
//! - Define key and mouse gestures and their construction-time validation.
//! - Match gestures against normalized input events (exact match only, no
//!   prefix or chord sequences).
//!
//! Does NOT handle:
//! - Gesture string parsing and formatting (see `convert` module).
//!
//! Invariants:
//! - A `KeyGesture` over a printable key always carries at least one
//!   modifier; this is enforced at construction and cannot be bypassed by
//!   public callers.

use std::fmt;

use thiserror::Error;

use crate::key::Key;
use crate::modifiers::Modifiers;

/// Error raised when a gesture definition is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GestureError {
    /// A printable key was bound without any modifier. Such a gesture would
    /// shadow ordinary text input.
    #[error("key '{key}' requires at least one modifier to form a gesture")]
    UnsupportedGesture {
        /// Token name of the offending key
        key: String,
    },
}

/// A mouse action that can participate in a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Single left-button click
    LeftClick,
    /// Single right-button click
    RightClick,
    /// Single middle-button click
    MiddleClick,
    /// Wheel-button click
    WheelClick,
    /// Left-button double click
    LeftDoubleClick,
    /// Right-button double click
    RightDoubleClick,
    /// Middle-button double click
    MiddleDoubleClick,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::LeftClick => "LeftClick",
            Self::RightClick => "RightClick",
            Self::MiddleClick => "MiddleClick",
            Self::WheelClick => "WheelClick",
            Self::LeftDoubleClick => "LeftDoubleClick",
            Self::RightDoubleClick => "RightDoubleClick",
            Self::MiddleDoubleClick => "MiddleDoubleClick",
        };
        write!(f, "{}", token)
    }
}

/// A key + modifier-mask gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyGesture {
    key: Key,
    modifiers: Modifiers,
}

impl KeyGesture {
    /// Build a key gesture, rejecting bare printable keys.
    pub fn new(key: Key, modifiers: Modifiers) -> Result<Self, GestureError> {
        if key.requires_modifier() && modifiers.is_empty() {
            return Err(GestureError::UnsupportedGesture {
                key: key.to_string(),
            });
        }
        Ok(Self { key, modifiers })
    }

    /// Construct without validation. Reserved for curated tables and for
    /// callers that have already validated the combination.
    pub(crate) fn from_parts(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Exact match: key code and the full modifier mask must both match.
    pub fn matches(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { key, modifiers } => {
                *key == self.key && *modifiers == self.modifiers
            }
            InputEvent::Mouse { .. } => false,
        }
    }
}

impl fmt::Display for KeyGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// A mouse action + modifier-mask gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseGesture {
    action: MouseAction,
    modifiers: Modifiers,
}

impl MouseGesture {
    /// Mouse gestures have no bare-action restriction: clicks do not
    /// collide with text input.
    pub fn new(action: MouseAction, modifiers: Modifiers) -> Self {
        Self { action, modifiers }
    }

    pub fn action(&self) -> MouseAction {
        self.action
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn matches(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Mouse { action, modifiers } => {
                *action == self.action && *modifiers == self.modifiers
            }
            InputEvent::Key { .. } => false,
        }
    }
}

impl fmt::Display for MouseGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.action)
        } else {
            write!(f, "{}+{}", self.modifiers, self.action)
        }
    }
}

/// Either kind of gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Key(KeyGesture),
    Mouse(MouseGesture),
}

impl Gesture {
    pub fn matches(&self, event: &InputEvent) -> bool {
        match self {
            Self::Key(g) => g.matches(event),
            Self::Mouse(g) => g.matches(event),
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(g) => write!(f, "{}", g),
            Self::Mouse(g) => write!(f, "{}", g),
        }
    }
}

impl From<KeyGesture> for Gesture {
    fn from(g: KeyGesture) -> Self {
        Self::Key(g)
    }
}

impl From<MouseGesture> for Gesture {
    fn from(g: MouseGesture) -> Self {
        Self::Mouse(g)
    }
}

/// A normalized physical input event, as delivered by whatever input
/// backend feeds the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key press with the active modifier mask
    Key { key: Key, modifiers: Modifiers },
    /// Mouse action with the active modifier mask
    Mouse {
        action: MouseAction,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        Self::Key { key, modifiers }
    }

    pub fn mouse(action: MouseAction, modifiers: Modifiers) -> Self {
        Self::Mouse { action, modifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_printable_key_is_rejected() {
        let result = KeyGesture::new(Key::Char('x'), Modifiers::empty());
        assert_eq!(
            result,
            Err(GestureError::UnsupportedGesture {
                key: "x".to_string()
            })
        );

        let result = KeyGesture::new(Key::Char('7'), Modifiers::empty());
        assert!(matches!(
            result,
            Err(GestureError::UnsupportedGesture { .. })
        ));
    }

    #[test]
    fn modified_printable_key_is_accepted() {
        let gesture = KeyGesture::new(Key::Char('x'), Modifiers::CONTROL).unwrap();
        assert_eq!(gesture.key(), Key::Char('x'));
        assert_eq!(gesture.modifiers(), Modifiers::CONTROL);
    }

    #[test]
    fn exception_keys_are_accepted_bare() {
        assert!(KeyGesture::new(Key::F(1), Modifiers::empty()).is_ok());
        assert!(KeyGesture::new(Key::Delete, Modifiers::empty()).is_ok());
        assert!(KeyGesture::new(Key::Esc, Modifiers::empty()).is_ok());
        assert!(KeyGesture::new(Key::BrowserBack, Modifiers::empty()).is_ok());
    }

    #[test]
    fn key_gesture_requires_exact_modifier_mask() {
        let gesture = KeyGesture::new(Key::Char('c'), Modifiers::CONTROL).unwrap();

        assert!(gesture.matches(&InputEvent::key(Key::Char('c'), Modifiers::CONTROL)));
        assert!(!gesture.matches(&InputEvent::key(
            Key::Char('c'),
            Modifiers::CONTROL | Modifiers::SHIFT
        )));
        assert!(!gesture.matches(&InputEvent::key(Key::Char('c'), Modifiers::empty())));
    }

    #[test]
    fn key_gesture_never_matches_mouse_event() {
        let gesture = KeyGesture::new(Key::Enter, Modifiers::empty()).unwrap();
        assert!(!gesture.matches(&InputEvent::mouse(MouseAction::LeftClick, Modifiers::empty())));
    }

    #[test]
    fn mouse_gesture_matching() {
        let gesture = MouseGesture::new(MouseAction::RightClick, Modifiers::ALT);
        assert!(gesture.matches(&InputEvent::mouse(MouseAction::RightClick, Modifiers::ALT)));
        assert!(!gesture.matches(&InputEvent::mouse(
            MouseAction::RightClick,
            Modifiers::empty()
        )));
        assert!(!gesture.matches(&InputEvent::mouse(MouseAction::LeftClick, Modifiers::ALT)));
    }

    #[test]
    fn display_forms() {
        let g = KeyGesture::new(Key::F(14), Modifiers::CONTROL | Modifiers::SHIFT).unwrap();
        assert_eq!(g.to_string(), "Ctrl+Shift+F14");

        let g = KeyGesture::new(Key::Delete, Modifiers::empty()).unwrap();
        assert_eq!(g.to_string(), "Delete");

        let g = MouseGesture::new(MouseAction::RightClick, Modifiers::ALT);
        assert_eq!(g.to_string(), "Alt+RightClick");

        let g: Gesture = MouseGesture::new(MouseAction::WheelClick, Modifiers::empty()).into();
        assert_eq!(g.to_string(), "WheelClick");
    }
}
