/// Deterministic ordering for flat device listings.
///
/// Devices sort by type priority (gateway < switch < access point), then by
/// MAC address in ascending lexicographic order. The MAC tie-break makes the
/// result a strict total order: no two distinct devices compare equal, so
/// the output is fully deterministic and sorting is idempotent.
use std::cmp::Ordering;

use crate::structures::Device;

/// Sorts `devices` in place by type priority, then MAC address.
///
/// Pure apart from the in-place permutation: no I/O, no allocation beyond
/// what the sort itself needs. An empty slice is a no-op.
pub fn sort_devices(devices: &mut [Device]) {
    devices.sort_by(compare_devices);
}

/// The listing order: type priority first, MAC address as tie-break.
fn compare_devices(a: &Device, b: &Device) -> Ordering {
    a.device_type
        .priority()
        .cmp(&b.device_type.priority())
        .then_with(|| a.mac_address.cmp(&b.mac_address))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::enums::DeviceType;
    use crate::newtypes::MacAddr;

    fn device(device_type: DeviceType, mac: &str) -> Device {
        Device::new(
            device_type,
            MacAddr::try_from(mac).expect("valid MAC"),
            None,
        )
    }

    fn macs(devices: &[Device]) -> Vec<&str> {
        devices.iter().map(|d| d.mac_address.as_str()).collect()
    }

    #[test]
    fn empty_input_is_a_noop() {
        let mut devices: Vec<Device> = Vec::new();
        sort_devices(&mut devices);
        assert!(devices.is_empty());
    }

    #[test]
    fn orders_by_type_priority_first() {
        let mut devices = vec![
            device(DeviceType::AccessPoint, "AA:00:00:00:00:01"),
            device(DeviceType::Gateway, "FF:00:00:00:00:01"),
            device(DeviceType::Switch, "BB:00:00:00:00:01"),
        ];
        sort_devices(&mut devices);
        assert_eq!(
            macs(&devices),
            vec![
                "FF:00:00:00:00:01", // gateway despite highest MAC
                "BB:00:00:00:00:01",
                "AA:00:00:00:00:01",
            ]
        );
    }

    #[test]
    fn ties_break_by_mac_ascending() {
        let mut devices = vec![
            device(DeviceType::Switch, "AA:00:00:00:00:03"),
            device(DeviceType::Switch, "AA:00:00:00:00:01"),
            device(DeviceType::Switch, "AA:00:00:00:00:02"),
        ];
        sort_devices(&mut devices);
        assert_eq!(
            macs(&devices),
            vec![
                "AA:00:00:00:00:01",
                "AA:00:00:00:00:02",
                "AA:00:00:00:00:03",
            ]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut devices = vec![
            device(DeviceType::AccessPoint, "AA:00:00:00:00:03"),
            device(DeviceType::Gateway, "AA:00:00:00:00:01"),
            device(DeviceType::Switch, "AA:00:00:00:00:02"),
        ];
        sort_devices(&mut devices);
        let once = devices.clone();
        sort_devices(&mut devices);
        assert_eq!(devices, once);
    }

    #[test]
    fn spec_example_ordering() {
        // gateway AA:01, switch AA:02, access point AA:03 — already the
        // listing order regardless of input permutation.
        let mut devices = vec![
            device(DeviceType::AccessPoint, "AA:00:00:00:00:03"),
            device(DeviceType::Switch, "AA:00:00:00:00:02"),
            device(DeviceType::Gateway, "AA:00:00:00:00:01"),
        ];
        sort_devices(&mut devices);
        assert_eq!(devices[0].device_type, DeviceType::Gateway);
        assert_eq!(devices[1].device_type, DeviceType::Switch);
        assert_eq!(devices[2].device_type, DeviceType::AccessPoint);
    }
}
