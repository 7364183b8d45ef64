//! Implementation of `devinv init`.
//!
//! Prints a small, valid example inventory file to stdout: one gateway, one
//! switch behind it, and one access point behind the switch. The output can
//! be piped straight back into any other subcommand.
//!
//! Exit codes: 0 = always succeeds unless stdout write fails.
use std::io::Write as _;

use devinv_core::{Device, DeviceType, InventoryFile, MacAddr};

use crate::error::CliError;

/// Runs the `init` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written. The hardcoded
/// MAC addresses always validate; a failure there is reported as an internal
/// serialization error rather than reaching for a panic.
pub fn run() -> Result<(), CliError> {
    let file = build_example_file()?;

    let json = serde_json::to_string_pretty(&file).map_err(|e| CliError::IoError {
        source: "init".to_owned(),
        detail: format!("JSON serialization failed: {e}"),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{json}").map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Builds the example [`InventoryFile`]: gateway, switch, access point.
fn build_example_file() -> Result<InventoryFile, CliError> {
    let gateway_mac = example_mac("00:1A:2B:3C:4D:5E")?;
    let switch_mac = example_mac("00:1A:2B:3C:4D:5F")?;
    let ap_mac = example_mac("00:1A:2B:3C:4D:60")?;

    let devices = vec![
        Device::new(DeviceType::Gateway, gateway_mac.clone(), None),
        Device::new(DeviceType::Switch, switch_mac.clone(), Some(gateway_mac)),
        Device::new(DeviceType::AccessPoint, ap_mac, Some(switch_mac)),
    ];

    Ok(InventoryFile {
        name: Some("example-network".to_owned()),
        devices,
        extra: serde_json::Map::new(),
    })
}

fn example_mac(raw: &str) -> Result<MacAddr, CliError> {
    MacAddr::try_from(raw).map_err(|e| CliError::IoError {
        source: "init".to_owned(),
        detail: format!("example MAC is invalid: {e}"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
