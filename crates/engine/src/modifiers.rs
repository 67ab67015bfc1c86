//! Modifier key flags.
//!
//! Invariants:
//! - Canonical display order is Ctrl, Alt, Shift, Super — gesture strings
//!   are emitted in this order regardless of parse order.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier mask for key and mouse gestures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Control key
        const CONTROL = 0b0001;
        /// Alt/Option key
        const ALT = 0b0010;
        /// Shift key
        const SHIFT = 0b0100;
        /// Super/Windows/Command key
        const SUPER = 0b1000;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Self::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(Self::ALT) {
            parts.push("Alt");
        }
        if self.contains(Self::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(Self::SUPER) {
            parts.push("Super");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty() {
        assert_eq!(Modifiers::empty().to_string(), "None");
    }

    #[test]
    fn display_canonical_order() {
        let all = Modifiers::CONTROL | Modifiers::ALT | Modifiers::SHIFT | Modifiers::SUPER;
        assert_eq!(all.to_string(), "Ctrl+Alt+Shift+Super");

        // Order is canonical even when flags are combined differently
        let shuffled = Modifiers::SHIFT | Modifiers::CONTROL;
        assert_eq!(shuffled.to_string(), "Ctrl+Shift");
    }
}
