//! `keyroute convert` — canonicalize gesture and command tokens.
//!
//! Tries the input as a gesture first, then as a command token against the
//! standard library. Both succeed by printing the canonical spelling, so
//! the round-trip behavior of the converters can be checked from a shell.

use anyhow::Result;
use serde_json::json;

use keyroute_engine::library::standard_registry;
use keyroute_engine::{FormatError, Gesture, format_command, parse_command, parse_gesture};

enum Converted {
    Gesture(Gesture),
    NoGesture,
    Command(String),
}

fn convert(input: &str) -> Result<Converted, FormatError> {
    match parse_gesture(input) {
        Ok(Some(gesture)) => return Ok(Converted::Gesture(gesture)),
        Ok(None) => return Ok(Converted::NoGesture),
        // Not gesture-shaped; fall through and try a command token. A
        // gesture-shaped input with a bad key or bare printable key is
        // still a gesture error.
        Err(FormatError::UnknownKey { .. }) if !input.contains('+') => {}
        Err(e) => return Err(e),
    }

    let command = parse_command(input, standard_registry())?;
    Ok(Converted::Command(format_command(&command)))
}

pub fn run(input: &str, output: &str) -> Result<()> {
    let converted = convert(input)?;

    if output == "json" {
        let value = match &converted {
            Converted::Gesture(g) => json!({"kind": "gesture", "canonical": g.to_string()}),
            Converted::NoGesture => json!({"kind": "gesture", "canonical": null}),
            Converted::Command(token) => json!({"kind": "command", "canonical": token}),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match converted {
        Converted::Gesture(g) => println!("gesture: {}", g),
        Converted::NoGesture => println!("gesture: <none>"),
        Converted::Command(token) => println!("command: {}", token),
    }
    Ok(())
}
