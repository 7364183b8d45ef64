//! Implementation of `devinv list <file>`.
//!
//! Parses an inventory file and prints every device sorted by type priority
//! (gateway, switch, access point) with MAC address as the tie-break.
//!
//! Exit codes: 0 = listed, 2 = parse failure.
use std::io::Write as _;

use devinv_core::{DeviceEntry, parse_inventory, sort_devices};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_device_rows;

/// Runs the `list` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — content is not a valid inventory file.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let file = parse_inventory(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let mut devices = file.devices;
    sort_devices(&mut devices);
    let entries: Vec<DeviceEntry> = devices.iter().map(DeviceEntry::from).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_device_rows(&mut out, &entries).map_err(|e| stdout_error(&e))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                source: "list".to_owned(),
                detail: format!("JSON serialization failed: {e}"),
            })?;
            writeln!(out, "{json}").map_err(|e| stdout_error(&e))?;
        }
    }
    Ok(())
}

fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
