//! Validation and compilation of binding overrides.
//!
//! Responsibilities:
//! - Validate override maps: parseable gestures, no reserved gestures, no
//!   two commands on the same gesture.
//! - Compile a validated map into an engine `InputBindingCollection`,
//!   all-or-nothing.
//!
//! Does NOT handle:
//! - Persisting override files (callers own the I/O).
//! - Runtime matching (the compiled collection is handed to an element or
//!   matcher).

use keyroute_engine::{
    CommandRegistry, FormatError, Gesture, InputBinding, InputBindingCollection, parse_command,
    parse_gesture,
};
use thiserror::Error;

use crate::types::BindingOverrides;

/// Errors raised while validating or compiling overrides.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// Entry's gesture or command token did not parse.
    #[error("invalid binding for '{command}': {source}")]
    Invalid {
        /// The command token of the offending entry
        command: String,
        #[source]
        source: FormatError,
    },

    /// The gesture is reserved and cannot be rebound.
    #[error("reserved gesture: '{gesture}' cannot be rebound")]
    Reserved {
        /// Canonical form of the reserved gesture
        gesture: String,
    },

    /// Two commands were assigned the same gesture.
    #[error("conflicting bindings: '{gesture}' is assigned to both {first} and {second}")]
    Conflict {
        /// Canonical form of the shared gesture
        gesture: String,
        /// First command token using the gesture
        first: String,
        /// Second command token using the gesture
        second: String,
    },
}

/// Gestures that always stay with the library and cannot be taken over by
/// overrides (clipboard copy and undo). Character keys are case-sensitive,
/// so both spellings are listed.
pub const RESERVED_GESTURES: &[&str] = &["Ctrl+C", "Ctrl+c", "Ctrl+Z", "Ctrl+z"];

fn reserved_gestures() -> Vec<Gesture> {
    // The constants are canonical gesture strings; parsing them cannot fail.
    RESERVED_GESTURES
        .iter()
        .filter_map(|s| parse_gesture(s).ok().flatten())
        .collect()
}

/// Validate an override map without touching a registry.
///
/// Checks gesture syntax, reserved gestures, and conflicts. Command tokens
/// are resolved later, at compile time, because validation must be possible
/// before any registry exists.
pub fn validate(overrides: &BindingOverrides) -> Result<(), OverrideError> {
    let reserved = reserved_gestures();
    let mut seen: Vec<(Gesture, &str)> = Vec::new();

    for (command, gesture_str) in &overrides.overrides {
        let gesture = parse_gesture(gesture_str).map_err(|source| OverrideError::Invalid {
            command: command.clone(),
            source,
        })?;
        // An empty gesture string is an explicit "no gesture" entry; it
        // binds nothing and cannot conflict.
        let Some(gesture) = gesture else {
            continue;
        };

        if reserved.contains(&gesture) {
            return Err(OverrideError::Reserved {
                gesture: gesture.to_string(),
            });
        }

        if let Some((_, first)) = seen.iter().find(|(g, _)| *g == gesture) {
            return Err(OverrideError::Conflict {
                gesture: gesture.to_string(),
                first: (*first).to_string(),
                second: command.clone(),
            });
        }
        seen.push((gesture, command));
    }

    Ok(())
}

/// Compile overrides into an input binding collection against `registry`.
///
/// All-or-nothing: any invalid entry fails the whole compilation and
/// nothing is produced, so a failed setup leaves no partial bindings
/// behind. Entries with an empty gesture string are skipped.
pub fn compile(
    overrides: &BindingOverrides,
    registry: &CommandRegistry,
) -> Result<InputBindingCollection, OverrideError> {
    validate(overrides)?;

    let mut collection = InputBindingCollection::new();
    for (command_token, gesture_str) in &overrides.overrides {
        let Some(gesture) =
            parse_gesture(gesture_str).map_err(|source| OverrideError::Invalid {
                command: command_token.clone(),
                source,
            })?
        else {
            tracing::debug!(command = %command_token, "override has no gesture, skipping");
            continue;
        };

        let command =
            parse_command(command_token, registry).map_err(|source| OverrideError::Invalid {
                command: command_token.clone(),
                source,
            })?;

        // The collection is freshly built and unsealed; add cannot fail.
        let _ = collection.add(InputBinding::new(gesture, command));
    }

    tracing::info!(bindings = collection.len(), "compiled binding overrides");
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use keyroute_engine::library;

    fn overrides(entries: &[(&str, &str)]) -> BindingOverrides {
        let mut map = BTreeMap::new();
        for (command, gesture) in entries {
            map.insert((*command).to_string(), (*gesture).to_string());
        }
        BindingOverrides { overrides: map }
    }

    fn registry() -> CommandRegistry {
        let registry = CommandRegistry::new();
        library::install(&registry).unwrap();
        registry
    }

    #[test]
    fn valid_overrides_pass() {
        let overrides = overrides(&[("Find", "F7"), ("Refresh", "Ctrl+R")]);
        assert!(validate(&overrides).is_ok());
    }

    #[test]
    fn reserved_gesture_is_rejected() {
        let overrides1 = overrides(&[("Find", "Ctrl+C")]);
        assert!(matches!(
            validate(&overrides1),
            Err(OverrideError::Reserved { .. })
        ));

        // Modifier spelling and case do not evade the reservation.
        let overrides = overrides(&[("Find", "control+C")]);
        assert!(matches!(
            validate(&overrides),
            Err(OverrideError::Reserved { .. })
        ));
    }

    #[test]
    fn conflicting_gestures_are_rejected() {
        let overrides = overrides(&[("Find", "F7"), ("Refresh", "F7")]);
        let err = validate(&overrides).unwrap_err();
        assert!(matches!(err, OverrideError::Conflict { .. }));
    }

    #[test]
    fn conflict_detection_normalizes_spelling() {
        let overrides = overrides(&[("Find", "Shift+Ctrl+R"), ("Refresh", "ctrl+shift+R")]);
        assert!(matches!(
            validate(&overrides),
            Err(OverrideError::Conflict { .. })
        ));
    }

    #[test]
    fn invalid_gesture_syntax_is_rejected() {
        let overrides = overrides(&[("Find", "Ctrl+NoSuchKey")]);
        assert!(matches!(
            validate(&overrides),
            Err(OverrideError::Invalid { .. })
        ));
    }

    #[test]
    fn compile_produces_bindings() {
        let registry = registry();
        let overrides = overrides(&[("Find", "F7"), ("Refresh", "Ctrl+R")]);
        let collection = compile(&overrides, &registry).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_sealed());
    }

    #[test]
    fn compile_of_empty_map_yields_empty_collection() {
        let registry = registry();
        let collection = compile(&BindingOverrides::default(), &registry).unwrap();
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn compile_fails_wholesale_on_unknown_command() {
        let registry = registry();
        let overrides = overrides(&[("Find", "F7"), ("NoSuchCommand", "F8")]);
        assert!(matches!(
            compile(&overrides, &registry),
            Err(OverrideError::Invalid { .. })
        ));
    }

    #[test]
    fn empty_gesture_entry_is_skipped() {
        let registry = registry();
        let overrides = overrides(&[("Find", ""), ("Refresh", "Ctrl+R")]);
        let collection = compile(&overrides, &registry).unwrap();
        assert_eq!(collection.len(), 1);
    }
}
