//! `keyroute simulate` — replay a scenario file and verify its responses.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::scenario::{self, Scenario};

/// Returns whether the recorded responses matched the expectations.
pub fn run(script: &Path, verbose: bool) -> Result<bool> {
    let text = fs::read_to_string(script)
        .with_context(|| format!("reading scenario '{}'", script.display()))?;
    let parsed: Scenario = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario '{}'", script.display()))?;

    let report = scenario::run(&parsed, |input, resolved| {
        if verbose {
            match resolved {
                Some(result) => println!("  {} -> {}", input, result),
                None => println!("  {} -> <unbound>", input),
            }
        }
    })?;

    if report.matches() {
        println!(
            "ok: {} input(s), {} response(s)",
            parsed.inputs.len(),
            report.responses.len()
        );
        Ok(true)
    } else {
        eprintln!("response mismatch:\n{}", report.diff());
        Ok(false)
    }
}
