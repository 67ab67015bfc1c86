//! Key codes for gesture definitions and input events.
//!
//! Responsibilities:
//! - Define the engine-owned key code enum and its canonical token names.
//! - Classify keys that may appear in a gesture without modifiers.
//!
//! Does NOT handle:
//! - Gesture string parsing (see `convert` module).
//! - Integration with any terminal/windowing backend (adapters live in the
//!   consuming crates).

use std::fmt;

/// A key code as it appears in gestures and input events.
///
/// Token names (the `Display` output) are the canonical spelling used in
/// gesture strings, e.g. `"F5"`, `"PageDown"`, `"BrowserBack"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key (e.g., 'a', '1', '?')
    Char(char),
    /// Function key F1-F24
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// BackTab (Shift+Tab) key
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Context-menu (Apps) key
    Apps,
    /// Browser back media key
    BrowserBack,
    /// Browser home media key
    BrowserHome,
    /// Browser stop media key
    BrowserStop,
}

impl Key {
    /// Whether this key produces text input and therefore needs at least one
    /// modifier to be usable in a key gesture.
    ///
    /// Character keys and Space collide with typing; everything else
    /// (function keys, navigation keys, editing keys) is a designated
    /// exception and may be bound bare.
    pub fn requires_modifier(self) -> bool {
        matches!(self, Self::Char(_) | Self::Space)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::Apps => write!(f, "Apps"),
            Self::BrowserBack => write!(f, "BrowserBack"),
            Self::BrowserHome => write!(f, "BrowserHome"),
            Self::BrowserStop => write!(f, "BrowserStop"),
        }
    }
}
