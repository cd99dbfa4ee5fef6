pub mod cli;
pub mod create;
pub mod report;
pub mod settings;
pub mod telemetry;

use std::fmt::Display;

use serde::Serialize;

/// Writes a report to stdout, pretty JSON with `--json`.
pub fn print_output<T: Serialize + Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", value);
    }
    Ok(())
}
