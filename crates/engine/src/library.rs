//! Standard command library.
//!
//! Responsibilities:
//! - Define the stock command owners (application, component, navigation,
//!   media, editing) and their default gesture tables.
//! - Own the single process-wide registry instance.
//!
//! Invariants:
//! - Bare command names are unique across owners except for the legacy
//!   aliases listed in `LEGACY_ALIASES`; those resolve to the
//!   `ApplicationCommands` instance when parsed without an owner prefix.
//! - Default gestures are listed most-preferred first; insertion order is
//!   the matcher's tie-break.

use std::sync::OnceLock;

use crate::gesture::{Gesture, KeyGesture};
use crate::key::Key;
use crate::modifiers::Modifiers;
use crate::registry::{CommandRegistry, RegistryError};

/// Owner type name for application-level commands (Cut, Copy, Paste, ...).
pub const APPLICATION: &str = "ApplicationCommands";
/// Owner type name for focus/selection movement commands.
pub const COMPONENT: &str = "ComponentCommands";
/// Owner type name for browser-style navigation commands.
pub const NAVIGATION: &str = "NavigationCommands";
/// Owner type name for media transport commands.
pub const MEDIA: &str = "MediaCommands";
/// Owner type name for text editing commands.
pub const EDITING: &str = "EditingCommands";

/// Library owners in bare-name resolution precedence order.
pub const LIBRARY_OWNERS: [&str; 5] = [APPLICATION, COMPONENT, NAVIGATION, MEDIA, EDITING];

/// Command names that exist under more than one library owner. Bare-name
/// parsing resolves these to the `ApplicationCommands` instance; they are
/// excluded from the bare-name round-trip guarantee.
pub const LEGACY_ALIASES: [&str; 2] = ["Delete", "Stop"];

const CTRL: Modifiers = Modifiers::CONTROL;
const ALT: Modifiers = Modifiers::ALT;
const SHIFT: Modifiers = Modifiers::SHIFT;
const NONE: Modifiers = Modifiers::empty();

type GestureSpec = (Key, Modifiers);
type CommandSpec = (&'static str, &'static [GestureSpec]);

const APPLICATION_COMMANDS: &[CommandSpec] = &[
    ("Close", &[]),
    ("ContextMenu", &[(Key::F(10), SHIFT), (Key::Apps, NONE)]),
    ("Copy", &[(Key::Char('C'), CTRL), (Key::Insert, CTRL)]),
    ("CorrectionList", &[]),
    ("Cut", &[(Key::Char('X'), CTRL), (Key::Delete, SHIFT)]),
    ("Delete", &[(Key::Delete, NONE)]),
    ("Find", &[(Key::Char('F'), CTRL)]),
    ("Help", &[(Key::F(1), NONE)]),
    ("New", &[(Key::Char('N'), CTRL)]),
    ("Open", &[(Key::Char('O'), CTRL)]),
    ("Paste", &[(Key::Char('V'), CTRL), (Key::Insert, SHIFT)]),
    ("Print", &[(Key::Char('P'), CTRL)]),
    ("PrintPreview", &[(Key::F(2), CTRL)]),
    ("Properties", &[(Key::F(4), NONE)]),
    ("Redo", &[(Key::Char('Y'), CTRL)]),
    ("Replace", &[(Key::Char('H'), CTRL)]),
    ("Save", &[(Key::Char('S'), CTRL)]),
    ("SaveAs", &[]),
    ("SelectAll", &[(Key::Char('A'), CTRL)]),
    ("Stop", &[(Key::Esc, NONE)]),
    ("Undo", &[(Key::Char('Z'), CTRL)]),
];

const COMPONENT_COMMANDS: &[CommandSpec] = &[
    ("ExtendSelectionDown", &[(Key::Down, SHIFT)]),
    ("ExtendSelectionLeft", &[(Key::Left, SHIFT)]),
    ("ExtendSelectionRight", &[(Key::Right, SHIFT)]),
    ("ExtendSelectionUp", &[(Key::Up, SHIFT)]),
    ("MoveDown", &[(Key::Down, NONE)]),
    ("MoveFocusBack", &[(Key::Left, CTRL)]),
    ("MoveFocusDown", &[(Key::Down, CTRL)]),
    ("MoveFocusForward", &[(Key::Right, CTRL)]),
    ("MoveFocusPageDown", &[(Key::PageDown, CTRL)]),
    ("MoveFocusPageUp", &[(Key::PageUp, CTRL)]),
    ("MoveFocusUp", &[(Key::Up, CTRL)]),
    ("MoveLeft", &[(Key::Left, NONE)]),
    ("MoveRight", &[(Key::Right, NONE)]),
    ("MoveToEnd", &[(Key::End, NONE)]),
    ("MoveToHome", &[(Key::Home, NONE)]),
    ("MoveToPageDown", &[(Key::PageDown, NONE)]),
    ("MoveToPageUp", &[(Key::PageUp, NONE)]),
    ("MoveUp", &[(Key::Up, NONE)]),
    ("ScrollByLine", &[]),
    ("ScrollPageDown", &[(Key::PageDown, NONE)]),
    ("ScrollPageLeft", &[]),
    ("ScrollPageRight", &[]),
    ("ScrollPageUp", &[(Key::PageUp, NONE)]),
    ("SelectToEnd", &[(Key::End, SHIFT)]),
    ("SelectToHome", &[(Key::Home, SHIFT)]),
    ("SelectToPageDown", &[(Key::PageDown, SHIFT)]),
    ("SelectToPageUp", &[(Key::PageUp, SHIFT)]),
];

const NAVIGATION_COMMANDS: &[CommandSpec] = &[
    ("BrowseBack", &[(Key::Left, ALT), (Key::Backspace, NONE)]),
    ("BrowseForward", &[(Key::Right, ALT), (Key::Backspace, SHIFT)]),
    ("BrowseHome", &[(Key::Home, ALT), (Key::BrowserHome, NONE)]),
    ("BrowseStop", &[(Key::Esc, ALT), (Key::BrowserStop, NONE)]),
    ("DecreaseZoom", &[]),
    ("Favorites", &[(Key::Char('I'), CTRL)]),
    ("FirstPage", &[]),
    ("GoToPage", &[]),
    ("IncreaseZoom", &[]),
    ("LastPage", &[]),
    ("NextPage", &[]),
    ("PreviousPage", &[]),
    ("Refresh", &[(Key::F(5), NONE)]),
    ("Search", &[(Key::F(3), NONE)]),
    ("Zoom", &[]),
];

const MEDIA_COMMANDS: &[CommandSpec] = &[
    ("BoostBass", &[]),
    ("ChannelDown", &[]),
    ("ChannelUp", &[]),
    ("DecreaseBass", &[]),
    ("DecreaseMicrophoneVolume", &[]),
    ("DecreaseTreble", &[]),
    ("DecreaseVolume", &[]),
    ("FastForward", &[]),
    ("IncreaseBass", &[]),
    ("IncreaseMicrophoneVolume", &[]),
    ("IncreaseTreble", &[]),
    ("IncreaseVolume", &[]),
    ("MuteMicrophoneVolume", &[]),
    ("MuteVolume", &[]),
    ("NextTrack", &[]),
    ("Pause", &[]),
    ("Play", &[]),
    ("PreviousTrack", &[]),
    ("Record", &[]),
    ("Rewind", &[]),
    ("Select", &[]),
    ("Stop", &[]),
    ("ToggleMicrophoneOnOff", &[]),
    ("TogglePlayPause", &[]),
];

const EDITING_COMMANDS: &[CommandSpec] = &[
    ("AlignCenter", &[]),
    ("AlignJustify", &[]),
    ("AlignLeft", &[]),
    ("AlignRight", &[]),
    ("Backspace", &[]),
    ("DecreaseFontSize", &[]),
    ("DecreaseIndentation", &[]),
    ("Delete", &[]),
    ("DeleteNextWord", &[]),
    ("DeletePreviousWord", &[]),
    ("EnterLineBreak", &[]),
    ("EnterParagraphBreak", &[]),
    ("IncreaseFontSize", &[]),
    ("IncreaseIndentation", &[]),
    ("TabBackward", &[]),
    ("TabForward", &[]),
    ("ToggleBold", &[]),
    ("ToggleInsert", &[]),
    ("ToggleItalic", &[]),
    ("ToggleUnderline", &[]),
];

const OWNER_TABLES: [(&str, &[CommandSpec]); 5] = [
    (APPLICATION, APPLICATION_COMMANDS),
    (COMPONENT, COMPONENT_COMMANDS),
    (NAVIGATION, NAVIGATION_COMMANDS),
    (MEDIA, MEDIA_COMMANDS),
    (EDITING, EDITING_COMMANDS),
];

/// Install the full standard library into a registry.
///
/// Safe to call more than once against the same registry; registration is
/// idempotent. Tests use this to populate private registries instead of
/// sharing the process-wide one.
pub fn install(registry: &CommandRegistry) -> Result<(), RegistryError> {
    for (owner, table) in OWNER_TABLES {
        for (name, gestures) in table {
            let gestures: Vec<Gesture> = gestures
                .iter()
                .map(|&(key, modifiers)| KeyGesture::from_parts(key, modifiers).into())
                .collect();
            registry.register(name, owner, Some(&display_text(name)), gestures)?;
        }
    }
    Ok(())
}

/// The process-wide registry holding the standard library.
///
/// Initialized lazily on first use and never mutated afterwards except
/// through `CommandRegistry::register`, which is idempotent.
pub fn standard_registry() -> &'static CommandRegistry {
    static REGISTRY: OnceLock<CommandRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let registry = CommandRegistry::new();
        if let Err(e) = install(&registry) {
            tracing::error!("failed to install standard command library: {e}");
        }
        tracing::info!(commands = registry.len(), "standard command library ready");
        registry
    })
}

/// True if `owner` is one of the standard library owners.
pub fn is_library_owner(owner: &str) -> bool {
    LIBRARY_OWNERS.contains(&owner)
}

/// Derive display text from a CamelCase command name: `PrintPreview`
/// becomes `Print Preview`.
fn display_text(name: &str) -> String {
    let mut text = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            text.push(' ');
        }
        text.push(c);
    }
    text
}
