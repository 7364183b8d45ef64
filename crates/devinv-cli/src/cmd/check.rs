//! Implementation of `devinv check <file>`.
//!
//! Parses an inventory file and runs the uplink cycle check. On success a
//! short confirmation is printed; on failure the full cycle path is reported
//! and the process exits with code 1.
//!
//! Exit codes: 0 = acyclic, 1 = cycle detected, 2 = parse failure.
use std::io::Write as _;

use devinv_core::{parse_inventory, validate_acyclic};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `check` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — content is not a valid inventory file.
/// - [`CliError::CycleDetected`] — the uplink graph contains a cycle.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let file = parse_inventory(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    validate_acyclic(&file.devices).map_err(|e| CliError::CycleDetected {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match format {
        OutputFormat::Human => writeln!(
            out,
            "ok: topology is acyclic ({} devices)",
            file.devices.len()
        ),
        OutputFormat::Json => writeln!(out, "{}", success_report(file.devices.len())),
    };
    result.map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// The JSON success payload.
fn success_report(device_count: usize) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "device_count": device_count,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
