//! Implementation of `devinv topology <file>`.
//!
//! Parses an inventory file, runs the cycle check, and prints the full
//! topology forest. Devices whose uplink is absent from the inventory hang
//! below a placeholder root carrying the referenced MAC.
//!
//! Exit codes: 0 = forest printed, 1 = cycle detected, 2 = parse failure.
use std::io::Write as _;

use devinv_core::{build_forest, parse_inventory, validate_acyclic};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_forest;

/// Runs the `topology` command.
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

    let forest = build_forest(&file.devices);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_forest(&mut out, &forest).map_err(|e| stdout_error(&e))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&forest).map_err(|e| CliError::IoError {
                source: "topology".to_owned(),
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

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    const TWO_TIER: &str = r#"{
        "devices": [
            {"device_type": "gateway", "mac_address": "AA:00:00:00:00:01"},
            {"device_type": "switch", "mac_address": "AA:00:00:00:00:02",
             "uplink_mac_address": "AA:00:00:00:00:01"},
            {"device_type": "access_point", "mac_address": "AA:00:00:00:00:03",
             "uplink_mac_address": "AA:00:00:00:00:02"}
        ]
    }"#;

    #[test]
    fn run_builds_forest_in_both_formats() {
        assert!(run(TWO_TIER, &OutputFormat::Human).is_ok());
        assert!(run(TWO_TIER, &OutputFormat::Json).is_ok());
    }

    #[test]
    fn run_empty_inventory_prints_empty_forest() {
        assert!(run(r#"{"devices": []}"#, &OutputFormat::Human).is_ok());
        assert!(run(r#"{"devices": []}"#, &OutputFormat::Json).is_ok());
    }

    #[test]
    fn run_cycle_is_rejected_before_rendering() {
        let cyclic = r#"{
            "devices": [
                {"device_type": "switch", "mac_address": "AA:00:00:00:00:01",
                 "uplink_mac_address": "AA:00:00:00:00:01"}
            ]
        }"#;
        let err = run(cyclic, &OutputFormat::Human).expect_err("self-loop must fail");
        assert!(matches!(err, CliError::CycleDetected { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn run_invalid_json_returns_parse_failed() {
        let err = run("[]", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::ParseFailed { .. }));
    }
}
