/// `Device` and `DeviceEntry` structs for the inventory data model.
///
/// Key design decisions:
/// - `uplink_mac_address` is `Option<MacAddr>` and omitted from JSON when
///   absent; a missing uplink means "root" to the read-time engine.
/// - `#[serde(flatten)] pub extra` preserves unknown JSON fields across round
///   trips, so a file written by a newer producer survives re-serialization.
///   Do not add `#[serde(deny_unknown_fields)]` here.
use serde::{Deserialize, Serialize};

use crate::enums::DeviceType;
use crate::newtypes::MacAddr;

// ---------------------------------------------------------------------------
// Device
// ---------------------------------------------------------------------------

/// A single device record in the flat inventory.
///
/// Identity is the MAC address (unique within an admitted inventory; the
/// read-time engine tolerates violations in bulk-loaded data). The uplink is
/// a same-collection back-reference by identifier, not by handle — resolving
/// it is the topology engine's job. Devices are created by the admission
/// path or by seeding and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    /// Device classification.
    pub device_type: DeviceType,

    /// Canonical MAC address identifying this device.
    pub mac_address: MacAddr,

    /// MAC address of the device this one connects upward to.
    ///
    /// Absent for root devices. May reference a MAC with no matching device
    /// when the record entered via bulk load; the engine treats such a
    /// dangling reference as "effectively a root", never as an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplink_mac_address: Option<MacAddr>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Device {
    /// Builds a device record with no extra fields.
    pub fn new(
        device_type: DeviceType,
        mac_address: MacAddr,
        uplink_mac_address: Option<MacAddr>,
    ) -> Self {
        Self {
            device_type,
            mac_address,
            uplink_mac_address,
            extra: serde_json::Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// DeviceEntry
// ---------------------------------------------------------------------------

/// The uplink-free projection of a [`Device`] used by flat listings.
///
/// Listings expose what a device *is*, not where it hangs; the uplink is an
/// input to the topology views, not part of the listing contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeviceEntry {
    /// Device classification.
    pub device_type: DeviceType,
    /// Canonical MAC address identifying this device.
    pub mac_address: MacAddr,
}

impl From<&Device> for DeviceEntry {
    fn from(device: &Device) -> Self {
        Self {
            device_type: device.device_type,
            mac_address: device.mac_address.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
