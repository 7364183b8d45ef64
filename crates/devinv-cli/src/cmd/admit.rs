//! Implementation of `devinv admit <file> --mac ... --device-type ... [--uplink ...]`.
//!
//! Dry-runs the admission rules for a candidate device against the file's
//! inventory. The file itself is never modified; the command only reports
//! whether the candidate would be accepted.
//!
//! Rule order matches the engine: self-reference, uplink presence, uplink
//! existence, MAC uniqueness, uplink device type.
//!
//! Exit codes: 0 = admissible, 1 = a rule refused the candidate,
//! 2 = parse failure or malformed MAC argument.
use std::io::Write as _;

use devinv_core::{Device, DeviceType, MacAddr, check_admission, parse_inventory};

use crate::OutputFormat;
use crate::cli::DeviceTypeArg;
use crate::error::CliError;

/// Runs the `admit` command.
///
/// # Errors
///
/// - [`CliError::InvalidMacArgument`] — `--mac` or `--uplink` is malformed.
/// - [`CliError::ParseFailed`] — content is not a valid inventory file.
/// - [`CliError::AdmissionRefused`] — an admission rule refused the candidate.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(
    content: &str,
    mac: &str,
    device_type: DeviceTypeArg,
    uplink: Option<&str>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let candidate = build_candidate(mac, device_type, uplink)?;

    let file = parse_inventory(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    check_admission(&candidate, &file.devices).map_err(|e| CliError::AdmissionRefused {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            writeln!(
                out,
                "admissible: {} {}",
                candidate.device_type, candidate.mac_address
            )
            .map_err(|e| stdout_error(&e))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&candidate).map_err(|e| CliError::IoError {
                source: "admit".to_owned(),
                detail: format!("JSON serialization failed: {e}"),
            })?;
            writeln!(out, "{json}").map_err(|e| stdout_error(&e))?;
        }
    }
    Ok(())
}

/// Builds the candidate [`Device`] from the raw CLI arguments, validating
/// both MAC addresses up front.
fn build_candidate(
    mac: &str,
    device_type: DeviceTypeArg,
    uplink: Option<&str>,
) -> Result<Device, CliError> {
    let mac_address = MacAddr::try_from(mac).map_err(|e| CliError::InvalidMacArgument {
        detail: e.to_string(),
    })?;
    let uplink_mac_address = match uplink {
        Some(raw) => Some(
            MacAddr::try_from(raw).map_err(|e| CliError::InvalidMacArgument {
                detail: e.to_string(),
            })?,
        ),
        None => None,
    };
    Ok(Device::new(
        DeviceType::from(device_type),
        mac_address,
        uplink_mac_address,
    ))
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
