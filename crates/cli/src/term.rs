//! Crossterm event adaptation.
//!
//! The engine defines its own key and modifier model; this module converts
//! crossterm's terminal events into engine input events for the
//! interactive mode. Keys crossterm reports that the engine has no notion
//! of (media keys, kitty-protocol extras) map to `None` and are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keyroute_engine::{InputEvent, Key, Modifiers};

fn modifiers_from(m: KeyModifiers) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if m.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CONTROL;
    }
    if m.contains(KeyModifiers::ALT) {
        modifiers |= Modifiers::ALT;
    }
    if m.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::SUPER) {
        modifiers |= Modifiers::SUPER;
    }
    modifiers
}

/// Convert a crossterm key event into an engine input event.
pub fn input_event_from_key(event: KeyEvent) -> Option<InputEvent> {
    let key = match event.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Menu => Key::Apps,
        _ => return None,
    };

    // Terminals report BackTab with SHIFT still set; the engine models the
    // pair as a single key.
    let mut modifiers = modifiers_from(event.modifiers);
    if key == Key::BackTab {
        modifiers -= Modifiers::SHIFT;
    }

    Some(InputEvent::key(key, modifiers))
}
