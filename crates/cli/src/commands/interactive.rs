//! `keyroute interactive` — resolve live terminal keys against the
//! standard library.
//!
//! Reads key events in raw mode, converts them to engine input events, and
//! prints the command each one resolves to. An optional JSON overrides
//! file rebinds gestures on the synthetic focused element first.

use std::fs;
use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use keyroute_config::BindingOverrides;
use keyroute_engine::library::standard_registry;
use keyroute_engine::{Element, GestureMatcher};

use crate::term::input_event_from_key;

/// Restores the terminal even on early return or panic unwind.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub fn run(overrides: Option<&Path>) -> Result<()> {
    let registry = standard_registry();

    let mut terminal = Element::new("terminal", "Terminal");
    if let Some(path) = overrides {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading overrides '{}'", path.display()))?;
        let parsed: BindingOverrides = serde_json::from_str(&text)
            .with_context(|| format!("parsing overrides '{}'", path.display()))?;
        let compiled = keyroute_config::compile(&parsed, registry)?;
        let count = compiled.len();
        for binding in compiled.iter() {
            let _ = terminal.input_bindings_mut().add(binding.clone());
        }
        println!("loaded {} override binding(s)", count);
    }

    println!("press keys to resolve commands; Ctrl+Q exits");
    let _guard = RawModeGuard::enable()?;
    let matcher = GestureMatcher::new(registry);

    loop {
        let event = read().context("reading terminal event")?;
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        let Some(input) = input_event_from_key(key) else {
            continue;
        };

        // Raw mode needs explicit carriage returns.
        match matcher.resolve(&input, Some(&terminal)) {
            Some(command) => print!(
                "{:?} -> {} ({})\r\n",
                input,
                command.name(),
                command.owner()
            ),
            None => print!("{:?} -> <unbound>\r\n", input),
        }
        stdout().flush().context("flushing output")?;
    }

    Ok(())
}
