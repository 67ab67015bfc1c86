//! `keyroute commands` — list the standard command library.

use anyhow::Result;
use serde_json::json;

use keyroute_engine::format_command;
use keyroute_engine::library::standard_registry;

use crate::formatters::render_table;

pub fn run(owner: Option<&str>, with_gestures: bool, output: &str) -> Result<()> {
    let commands: Vec<_> = standard_registry()
        .commands()
        .into_iter()
        .filter(|c| owner.is_none_or(|o| c.owner() == o))
        .filter(|c| !with_gestures || !c.default_gestures().is_empty())
        .collect();

    if output == "json" {
        let entries: Vec<_> = commands
            .iter()
            .map(|c| {
                json!({
                    "name": c.name(),
                    "owner": c.owner(),
                    "text": c.text(),
                    "token": format_command(c),
                    "gestures": c
                        .default_gestures()
                        .iter()
                        .map(|g| g.to_string())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = commands
        .iter()
        .map(|c| {
            vec![
                c.owner().to_string(),
                c.name().to_string(),
                c.default_gestures()
                    .iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        })
        .collect();

    print!("{}", render_table(&["OWNER", "NAME", "GESTURES"], &rows));
    println!("\n{} command(s)", rows.len());
    Ok(())
}
