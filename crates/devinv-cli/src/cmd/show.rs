//! Implementation of `devinv show <file> <mac>`.
//!
//! Looks a single device up by MAC address and prints its listing entry.
//! This is a flat lookup: no cycle check runs and the uplink pointer is not
//! resolved, so the command works even on an inventory the topology views
//! would reject.
//!
//! Exit codes: 0 = entry printed, 1 = device not found, 2 = parse failure
//! or malformed MAC argument.
use std::io::Write as _;

use devinv_core::{DeviceEntry, MacAddr, parse_inventory};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_device_rows;

/// Runs the `show` command.
///
/// # Errors
///
/// - [`CliError::InvalidMacArgument`] — the MAC argument is malformed.
/// - [`CliError::ParseFailed`] — content is not a valid inventory file.
/// - [`CliError::DeviceNotFound`] — no device carries the given MAC.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(content: &str, mac_address: &str, format: &OutputFormat) -> Result<(), CliError> {
    let target = MacAddr::try_from(mac_address).map_err(|e| CliError::InvalidMacArgument {
        detail: e.to_string(),
    })?;

    let file = parse_inventory(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let device = file
        .devices
        .iter()
        .find(|d| d.mac_address == target)
        .ok_or_else(|| CliError::DeviceNotFound {
            mac_address: target.to_string(),
        })?;
    let entry = DeviceEntry::from(device);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_device_rows(&mut out, std::slice::from_ref(&entry))
                .map_err(|e| stdout_error(&e))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entry).map_err(|e| CliError::IoError {
                source: "show".to_owned(),
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
