/// Top-level inventory file representation and JSON decoding.
///
/// [`InventoryFile`] is the bulk-load boundary: seed data and CLI input both
/// arrive as one of these. Decoding deliberately bypasses the admission
/// rules — a file may carry dangling uplink references or other pre-existing
/// bad data, which the read-time engine tolerates and the cycle check
/// reports. Only per-field shape validation (MAC format, known device types)
/// runs here, via the serde impls on the underlying types.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::structures::Device;

// ---------------------------------------------------------------------------
// InventoryFile
// ---------------------------------------------------------------------------

/// The top-level device inventory file.
///
/// Deserialize from JSON with [`parse_inventory`]; serialize back with
/// `serde_json`. Unknown top-level fields round-trip via
/// [`InventoryFile::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryFile {
    /// Optional human-readable inventory name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Flat list of device records (may be empty).
    pub devices: Vec<Device>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Errors produced when decoding an inventory file from JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryDecodeError {
    /// The input is not valid JSON, or does not match the inventory schema
    /// (including per-field shape failures such as a malformed MAC address).
    Json {
        /// 1-based line of the first offending token.
        line: usize,
        /// 1-based column of the first offending token.
        column: usize,
        /// The underlying serde error message.
        detail: String,
    },
}

impl fmt::Display for InventoryDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json {
                line,
                column,
                detail,
            } => write!(f, "invalid inventory file: line {line}, column {column}: {detail}"),
        }
    }
}

impl std::error::Error for InventoryDecodeError {}

/// Parses JSON text into an [`InventoryFile`].
///
/// # Errors
///
/// Returns [`InventoryDecodeError::Json`] with line/column detail when the
/// text is not valid JSON or any field fails shape validation.
pub fn parse_inventory(content: &str) -> Result<InventoryFile, InventoryDecodeError> {
    serde_json::from_str(content).map_err(|e| InventoryDecodeError::Json {
        line: e.line(),
        column: e.column(),
        detail: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
