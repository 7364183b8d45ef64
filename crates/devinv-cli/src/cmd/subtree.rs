//! Implementation of `devinv subtree <file> <mac>`.
//!
//! Parses an inventory file, runs the cycle check, and prints the topology
//! subtree rooted at the given MAC address. Placeholder MACs (uplinks that
//! are referenced but not present as devices) are not queryable roots.
//!
//! Exit codes: 0 = subtree printed, 1 = cycle or device not found,
//! 2 = parse failure or malformed MAC argument.
use std::io::Write as _;

use devinv_core::{MacAddr, build_subtree, parse_inventory, validate_acyclic};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_tree;

/// Runs the `subtree` command.
///
/// The MAC argument is validated before anything is parsed, so a malformed
/// MAC is always an input failure regardless of the file's contents.
///
/// # Errors
///
/// - [`CliError::InvalidMacArgument`] — the MAC argument is malformed.
/// - [`CliError::ParseFailed`] — content is not a valid inventory file.
/// - [`CliError::CycleDetected`] — the uplink graph contains a cycle.
/// - [`CliError::DeviceNotFound`] — no device carries the given MAC.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(content: &str, mac_address: &str, format: &OutputFormat) -> Result<(), CliError> {
    let root = MacAddr::try_from(mac_address).map_err(|e| CliError::InvalidMacArgument {
        detail: e.to_string(),
    })?;

    let file = parse_inventory(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    validate_acyclic(&file.devices).map_err(|e| CliError::CycleDetected {
        detail: e.to_string(),
    })?;

    let subtree = build_subtree(&file.devices, &root).ok_or_else(|| CliError::DeviceNotFound {
        mac_address: root.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_tree(&mut out, &subtree).map_err(|e| stdout_error(&e))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&subtree).map_err(|e| CliError::IoError {
                source: "subtree".to_owned(),
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
    fn run_prints_interior_subtree() {
        assert!(run(TWO_TIER, "AA:00:00:00:00:02", &OutputFormat::Human).is_ok());
        assert!(run(TWO_TIER, "AA:00:00:00:00:02", &OutputFormat::Json).is_ok());
    }

    #[test]
    fn run_unknown_mac_returns_not_found() {
        let err =
            run(TWO_TIER, "FF:FF:FF:FF:FF:FF", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::DeviceNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.message().contains("FF:FF:FF:FF:FF:FF"));
    }

    #[test]
    fn run_malformed_mac_is_an_input_failure() {
        let err = run(TWO_TIER, "not-a-mac", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::InvalidMacArgument { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn run_malformed_mac_beats_parse_failure() {
        // MAC syntax is checked before the file content is even parsed.
        let err = run("not json", "nope", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::InvalidMacArgument { .. }));
    }

    #[test]
    fn run_placeholder_mac_is_not_found() {
        let dangling = r#"{
            "devices": [
                {"device_type": "switch", "mac_address": "AA:00:00:00:00:01",
                 "uplink_mac_address": "BB:00:00:00:00:99"}
            ]
        }"#;
        let err =
            run(dangling, "BB:00:00:00:00:99", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::DeviceNotFound { .. }));
    }

    #[test]
    fn run_cycle_is_reported_before_lookup() {
        let cyclic = r#"{
            "devices": [
                {"device_type": "switch", "mac_address": "AA:00:00:00:00:01",
                 "uplink_mac_address": "AA:00:00:00:00:02"},
                {"device_type": "switch", "mac_address": "AA:00:00:00:00:02",
                 "uplink_mac_address": "AA:00:00:00:00:01"}
            ]
        }"#;
        let err =
            run(cyclic, "FF:FF:FF:FF:FF:FF", &OutputFormat::Human).expect_err("should fail");
        assert!(matches!(err, CliError::CycleDetected { .. }));
    }
}
