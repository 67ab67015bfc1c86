//! String conversion for gestures and commands.
//!
//! Responsibilities:
//! - Parse human-readable gesture strings ("Ctrl+Shift+F14", "Alt+RightClick")
//!   into structured gestures, and format them back.
//! - Convert commands to and from their textual form: "Owner.Name", or a
//!   bare "Name" for standard library commands.
//!
//! Does NOT handle:
//! - Runtime event matching (see `matcher`).
//! - Config file loading (see the config crate).
//!
//! Invariants:
//! - Modifier and named-key tokens are case-insensitive; character keys are
//!   case-sensitive ('x' and 'X' are different gestures).
//! - Formatting always emits modifiers in canonical order, so
//!   parse(format(g)) == g for every valid gesture.

use thiserror::Error;

use crate::command::CommandRef;
use crate::gesture::{Gesture, GestureError, KeyGesture, MouseAction, MouseGesture};
use crate::key::Key;
use crate::library;
use crate::modifiers::Modifiers;
use crate::registry::CommandRegistry;

/// Errors raised while converting strings to gestures or commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Key name did not match any known token.
    #[error("unknown key name: '{name}'")]
    UnknownKey {
        /// The unrecognized token
        name: String,
    },

    /// Gesture string had the wrong shape (e.g. two key tokens, or only
    /// modifiers).
    #[error("malformed gesture: '{input}'. Expected format like 'Ctrl+X', 'Shift+F10', 'Alt+RightClick'")]
    Malformed {
        /// The offending input string
        input: String,
    },

    /// The gesture parsed but is not a supported combination.
    #[error(transparent)]
    Unsupported(#[from] GestureError),

    /// Command string did not name a known command.
    #[error("unknown command: '{name}'")]
    UnknownCommand {
        /// The unrecognized command token
        name: String,
    },

    /// Command string was empty.
    #[error("command string is empty")]
    EmptyCommand,
}

/// Parse a single modifier token. Returns `None` for non-modifier tokens.
fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifiers::CONTROL),
        "alt" => Some(Modifiers::ALT),
        "shift" => Some(Modifiers::SHIFT),
        "super" | "win" | "windows" => Some(Modifiers::SUPER),
        _ => None,
    }
}

/// Parse a key token (no modifiers).
pub fn parse_key(name: &str) -> Result<Key, FormatError> {
    let lower = name.to_ascii_lowercase();

    match lower.as_str() {
        "esc" | "escape" => return Ok(Key::Esc),
        "enter" | "return" => return Ok(Key::Enter),
        "space" => return Ok(Key::Space),
        "tab" => return Ok(Key::Tab),
        "backtab" => return Ok(Key::BackTab),
        "backspace" | "back" => return Ok(Key::Backspace),
        "delete" | "del" => return Ok(Key::Delete),
        "insert" | "ins" => return Ok(Key::Insert),
        "home" => return Ok(Key::Home),
        "end" => return Ok(Key::End),
        "pageup" | "pgup" => return Ok(Key::PageUp),
        "pagedown" | "pgdn" => return Ok(Key::PageDown),
        "up" => return Ok(Key::Up),
        "down" => return Ok(Key::Down),
        "left" => return Ok(Key::Left),
        "right" => return Ok(Key::Right),
        "apps" | "menu" => return Ok(Key::Apps),
        "browserback" => return Ok(Key::BrowserBack),
        "browserhome" => return Ok(Key::BrowserHome),
        "browserstop" => return Ok(Key::BrowserStop),
        _ => {}
    }

    if let Some(num) = lower.strip_prefix('f')
        && let Ok(num) = num.parse::<u8>()
        && (1..=24).contains(&num)
    {
        return Ok(Key::F(num));
    }

    let chars: Vec<char> = name.chars().collect();
    if chars.len() == 1 {
        return Ok(Key::Char(chars[0]));
    }

    Err(FormatError::UnknownKey {
        name: name.to_string(),
    })
}

/// Parse a mouse action token. Returns `None` for non-mouse tokens.
fn parse_mouse_action(token: &str) -> Option<MouseAction> {
    match token.to_ascii_lowercase().as_str() {
        "leftclick" => Some(MouseAction::LeftClick),
        "rightclick" => Some(MouseAction::RightClick),
        "middleclick" => Some(MouseAction::MiddleClick),
        "wheelclick" => Some(MouseAction::WheelClick),
        "leftdoubleclick" => Some(MouseAction::LeftDoubleClick),
        "rightdoubleclick" => Some(MouseAction::RightDoubleClick),
        "middledoubleclick" => Some(MouseAction::MiddleDoubleClick),
        _ => None,
    }
}

/// Split a gesture string into (modifier mask, trailing primary token).
fn split_gesture(input: &str) -> Result<(Modifiers, &str), FormatError> {
    let mut modifiers = Modifiers::empty();
    let mut primary = "";

    for part in input.split('+').map(str::trim) {
        if let Some(flag) = parse_modifier(part) {
            modifiers |= flag;
        } else if primary.is_empty() && !part.is_empty() {
            primary = part;
        } else {
            // Second non-modifier token, or an empty token from "Ctrl++x"
            return Err(FormatError::Malformed {
                input: input.to_string(),
            });
        }
    }

    if primary.is_empty() {
        return Err(FormatError::Malformed {
            input: input.to_string(),
        });
    }

    Ok((modifiers, primary))
}

/// Parse a gesture string. An empty or whitespace-only string is the
/// explicit "no gesture" value and yields `Ok(None)`.
pub fn parse_gesture(input: &str) -> Result<Option<Gesture>, FormatError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let (modifiers, primary) = split_gesture(input)?;

    if let Some(action) = parse_mouse_action(primary) {
        return Ok(Some(MouseGesture::new(action, modifiers).into()));
    }

    let key = parse_key(primary)?;
    // Shift+Tab arrives as BackTab from most backends; normalize so the
    // two spellings define the same gesture.
    let (key, modifiers) = if key == Key::Tab && modifiers.contains(Modifiers::SHIFT) {
        (Key::BackTab, modifiers - Modifiers::SHIFT)
    } else {
        (key, modifiers)
    };
    let gesture = KeyGesture::new(key, modifiers)?;
    Ok(Some(gesture.into()))
}

/// Parse a gesture string that must be a key gesture.
pub fn parse_key_gesture(input: &str) -> Result<Option<KeyGesture>, FormatError> {
    match parse_gesture(input)? {
        None => Ok(None),
        Some(Gesture::Key(g)) => Ok(Some(g)),
        Some(Gesture::Mouse(_)) => Err(FormatError::Malformed {
            input: input.to_string(),
        }),
    }
}

/// Format a command: bare name for standard library commands, otherwise
/// "Owner.Name".
pub fn format_command(command: &CommandRef) -> String {
    if library::is_library_owner(command.owner()) {
        command.name().to_string()
    } else {
        format!("{}.{}", command.owner(), command.name())
    }
}

/// Parse a command token against a registry.
///
/// "Owner.Name" looks up the exact (name, owner) pair. A bare "Name"
/// searches the standard library owners in precedence order, which is how
/// the legacy aliases (`Delete`, `Stop`) resolve to their
/// `ApplicationCommands` instance.
pub fn parse_command(input: &str, registry: &CommandRegistry) -> Result<CommandRef, FormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::EmptyCommand);
    }

    if let Some((owner, name)) = input.rsplit_once('.') {
        return registry
            .lookup(name, owner)
            .ok_or_else(|| FormatError::UnknownCommand {
                name: input.to_string(),
            });
    }

    for owner in library::LIBRARY_OWNERS {
        if let Some(command) = registry.lookup(input, owner) {
            return Ok(command);
        }
    }

    Err(FormatError::UnknownCommand {
        name: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_modified_char() {
        let gesture = parse_gesture("Ctrl+x").unwrap().unwrap();
        assert_eq!(gesture.to_string(), "Ctrl+x");
    }

    #[test]
    fn parse_is_case_sensitive_for_chars() {
        let lower = parse_gesture("Ctrl+x").unwrap().unwrap();
        let upper = parse_gesture("Ctrl+X").unwrap().unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn parse_is_case_insensitive_for_modifiers_and_named_keys() {
        assert_eq!(
            parse_gesture("CTRL+SHIFT+f14").unwrap(),
            parse_gesture("ctrl+shift+F14").unwrap()
        );
        assert_eq!(
            parse_gesture("alt+pageup").unwrap(),
            parse_gesture("Alt+PageUp").unwrap()
        );
    }

    #[test]
    fn parse_accepts_any_modifier_order() {
        let a = parse_gesture("Shift+Ctrl+F14").unwrap().unwrap();
        let b = parse_gesture("Ctrl+Shift+F14").unwrap().unwrap();
        assert_eq!(a, b);
        // Output is always canonical
        assert_eq!(a.to_string(), "Ctrl+Shift+F14");
    }

    #[test]
    fn parse_tolerates_spaces() {
        let g = parse_gesture("Ctrl + Shift + x").unwrap().unwrap();
        assert_eq!(g.to_string(), "Ctrl+Shift+x");
    }

    #[test]
    fn empty_string_is_no_gesture() {
        assert_eq!(parse_gesture(""), Ok(None));
        assert_eq!(parse_gesture("   "), Ok(None));
    }

    #[test]
    fn bare_printable_key_is_unsupported() {
        let result = parse_gesture("x");
        assert!(matches!(result, Err(FormatError::Unsupported(_))));
    }

    #[test]
    fn only_modifiers_is_malformed() {
        assert!(matches!(
            parse_gesture("Ctrl+Shift"),
            Err(FormatError::Malformed { .. })
        ));
    }

    #[test]
    fn two_primary_tokens_is_malformed() {
        assert!(matches!(
            parse_gesture("Ctrl+x+y"),
            Err(FormatError::Malformed { .. })
        ));
    }

    #[test]
    fn unknown_key_name() {
        assert!(matches!(
            parse_gesture("Ctrl+Unknown"),
            Err(FormatError::UnknownKey { .. })
        ));
    }

    #[test]
    fn shift_tab_normalizes_to_backtab() {
        let a = parse_gesture("Shift+Tab").unwrap().unwrap();
        let b = parse_gesture("BackTab").unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mouse_gesture_round_trip() {
        let g = parse_gesture("Alt+RightClick").unwrap().unwrap();
        assert_eq!(g.to_string(), "Alt+RightClick");

        let g = parse_gesture("Ctrl+Shift+WheelClick").unwrap().unwrap();
        assert_eq!(g.to_string(), "Ctrl+Shift+WheelClick");
    }

    #[test]
    fn key_gesture_rejects_mouse_tokens() {
        assert!(matches!(
            parse_key_gesture("Alt+RightClick"),
            Err(FormatError::Malformed { .. })
        ));
    }

    #[test]
    fn function_key_range() {
        assert!(parse_gesture("F24").unwrap().is_some());
        assert!(matches!(
            parse_gesture("F0"),
            Err(FormatError::UnknownKey { .. })
        ));
        assert!(matches!(
            parse_gesture("F25"),
            Err(FormatError::UnknownKey { .. })
        ));
    }

    mod command_tokens {
        use super::*;
        use crate::library;
        use crate::registry::CommandRegistry;

        fn registry() -> CommandRegistry {
            let registry = CommandRegistry::new();
            library::install(&registry).unwrap();
            registry
        }

        #[test]
        fn bare_name_resolves_library_command() {
            let registry = registry();
            let cut = parse_command("Cut", &registry).unwrap();
            assert_eq!(cut.owner(), library::APPLICATION);
            assert_eq!(format_command(&cut), "Cut");
        }

        #[test]
        fn qualified_name_resolves_exact_owner() {
            let registry = registry();
            let delete = parse_command("EditingCommands.Delete", &registry).unwrap();
            assert_eq!(delete.owner(), library::EDITING);
        }

        #[test]
        fn legacy_alias_resolves_to_application_owner() {
            let registry = registry();
            for alias in library::LEGACY_ALIASES {
                let command = parse_command(alias, &registry).unwrap();
                assert_eq!(command.owner(), library::APPLICATION);
            }
        }

        #[test]
        fn custom_owner_formats_qualified() {
            let registry = registry();
            let command = registry
                .register("Deploy", "ShipCommands", None, Vec::new())
                .unwrap();
            assert_eq!(format_command(&command), "ShipCommands.Deploy");
            let parsed = parse_command("ShipCommands.Deploy", &registry).unwrap();
            assert!(std::sync::Arc::ptr_eq(&command, &parsed));
        }

        #[test]
        fn unknown_and_empty_commands_fail() {
            let registry = registry();
            assert!(matches!(
                parse_command("NoSuchCommand", &registry),
                Err(FormatError::UnknownCommand { .. })
            ));
            assert!(matches!(
                parse_command("", &registry),
                Err(FormatError::EmptyCommand)
            ));
        }
    }
}
