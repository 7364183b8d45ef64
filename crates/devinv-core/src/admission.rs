/// Admission rules: the structural checks a candidate device must pass
/// before the store persists it.
///
/// These are cheap, pure predicates over the candidate plus the *current*
/// collection (the candidate is not yet a member). They are the narrow
/// write-time guard; the cycle check is the broad read-time guard that
/// catches whatever slips past them through bulk loading.
use std::fmt;

use crate::enums::DeviceType;
use crate::newtypes::MacAddr;
use crate::structures::Device;

// ---------------------------------------------------------------------------
// AdmissionError
// ---------------------------------------------------------------------------

/// A structural admission rule was violated.
///
/// Every variant is caller-correctable and names the offending MAC address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// The candidate's own MAC equals its declared uplink MAC.
    SelfUplink {
        /// The MAC that points at itself.
        mac_address: MacAddr,
    },

    /// The candidate declares no uplink at all.
    ///
    /// New devices always join below an existing one; root devices enter the
    /// inventory only through seeding.
    MissingUplink {
        /// The candidate's MAC.
        mac_address: MacAddr,
    },

    /// The declared uplink MAC matches no existing device.
    UnknownUplink {
        /// The uplink MAC that could not be resolved.
        uplink_mac_address: MacAddr,
    },

    /// An existing device already carries the candidate's MAC.
    DuplicateMacAddress {
        /// The duplicated MAC.
        mac_address: MacAddr,
    },

    /// The declared uplink resolves to an access point.
    ///
    /// Access points are leaf-only: they connect wireless clients, never
    /// downstream wired devices.
    UplinkIsAccessPoint {
        /// The access point's MAC.
        uplink_mac_address: MacAddr,
    },
}

impl fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfUplink { mac_address } => write!(
                f,
                "device {mac_address} must differ from its own uplink MAC address"
            ),
            Self::MissingUplink { mac_address } => write!(
                f,
                "device {mac_address} declares no uplink MAC address; new devices must join below an existing one"
            ),
            Self::UnknownUplink { uplink_mac_address } => write!(
                f,
                "a device with MAC address {uplink_mac_address} does not exist"
            ),
            Self::DuplicateMacAddress { mac_address } => write!(
                f,
                "a device with MAC address {mac_address} already exists"
            ),
            Self::UplinkIsAccessPoint { uplink_mac_address } => write!(
                f,
                "access point {uplink_mac_address} only connects wireless clients and cannot be an uplink"
            ),
        }
    }
}

impl std::error::Error for AdmissionError {}

// ---------------------------------------------------------------------------
// check_admission
// ---------------------------------------------------------------------------

/// Applies the admission rules, in order, to `candidate` against `devices`.
///
/// Rule order is fixed and observable through which violation is reported
/// first:
/// 1. self-reference rejection,
/// 2. uplink declared and resolving to an existing device,
/// 3. MAC uniqueness,
/// 4. the uplink must not be an access point.
///
/// # Errors
///
/// The first violated rule's [`AdmissionError`]. `Ok(())` means the store
/// may persist the candidate.
pub fn check_admission(candidate: &Device, devices: &[Device]) -> Result<(), AdmissionError> {
    // Rule 1: self-reference. Checked before existence so a self-pointing
    // candidate is rejected even against an empty collection.
    if candidate.uplink_mac_address.as_ref() == Some(&candidate.mac_address) {
        return Err(AdmissionError::SelfUplink {
            mac_address: candidate.mac_address.clone(),
        });
    }

    // Rule 2: the uplink must be declared and must exist.
    let Some(uplink) = &candidate.uplink_mac_address else {
        return Err(AdmissionError::MissingUplink {
            mac_address: candidate.mac_address.clone(),
        });
    };
    if !devices.iter().any(|d| &d.mac_address == uplink) {
        return Err(AdmissionError::UnknownUplink {
            uplink_mac_address: uplink.clone(),
        });
    }

    // Rule 3: MAC uniqueness.
    if devices
        .iter()
        .any(|d| d.mac_address == candidate.mac_address)
    {
        return Err(AdmissionError::DuplicateMacAddress {
            mac_address: candidate.mac_address.clone(),
        });
    }

    // Rule 4: the uplink device must accept downstream wired devices.
    if devices
        .iter()
        .any(|d| &d.mac_address == uplink && d.device_type == DeviceType::AccessPoint)
    {
        return Err(AdmissionError::UplinkIsAccessPoint {
            uplink_mac_address: uplink.clone(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
