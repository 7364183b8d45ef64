/// Human-readable rendering: device listing rows and ASCII topology trees.
///
/// All functions are generic over `std::io::Write` so that tests can render
/// into a `Vec<u8>` instead of capturing stdout. JSON output does not pass
/// through this module; commands serialize core types directly with
/// `serde_json`.
use std::io::Write;

use devinv_core::{DeviceEntry, TopologyNode};

/// Column width for the device type, sized for `access_point` plus padding.
const TYPE_COLUMN_WIDTH: usize = 14;

// ---------------------------------------------------------------------------
// Device listing
// ---------------------------------------------------------------------------

/// Writes one line per device: type column, then MAC address.
///
/// ```text
/// gateway       00:1A:2B:3C:4D:5E
/// switch        00:1A:2B:3C:4D:5F
/// access_point  00:1A:2B:3C:4D:61
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_device_rows<W: Write>(writer: &mut W, entries: &[DeviceEntry]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(
            writer,
            "{:<width$}{}",
            entry.device_type.as_str(),
            entry.mac_address,
            width = TYPE_COLUMN_WIDTH,
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Topology trees
// ---------------------------------------------------------------------------

/// Writes a single topology tree with two-space indentation per depth level.
///
/// ```text
/// 00:1A:2B:3C:4D:5E
///   00:1A:2B:3C:4D:5F
///     00:1A:2B:3C:4D:61
///   00:1A:2B:3C:4D:60
/// ```
///
/// Traversal is iterative; children are pushed in reverse so they pop in
/// their stored order.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_tree<W: Write>(writer: &mut W, root: &TopologyNode) -> std::io::Result<()> {
    let mut stack: Vec<(&TopologyNode, usize)> = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        writeln!(writer, "{:indent$}{}", "", node.mac_address, indent = depth * 2)?;
        for child in node.linked_devices.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    Ok(())
}

/// Writes every tree of a forest in order, with no separator between trees.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_forest<W: Write>(writer: &mut W, forest: &[TopologyNode]) -> std::io::Result<()> {
    for root in forest {
        write_tree(writer, root)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use devinv_core::{Device, DeviceType, MacAddr, build_forest};

    use super::*;

    fn mac(s: &str) -> MacAddr {
        MacAddr::try_from(s).expect("valid MAC")
    }

    fn rendered<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec cannot fail");
        String::from_utf8(buf).expect("rendered output is UTF-8")
    }

    #[test]
    fn device_rows_align_the_mac_column() {
        let entries = vec![
            DeviceEntry {
                device_type: DeviceType::Gateway,
                mac_address: mac("00:1A:2B:3C:4D:5E"),
            },
            DeviceEntry {
                device_type: DeviceType::AccessPoint,
                mac_address: mac("00:1A:2B:3C:4D:61"),
            },
        ];
        let out = rendered(|w| write_device_rows(w, &entries));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        // Both MACs start at the same column.
        let col0 = lines[0].find("00:1A").expect("MAC present");
        let col1 = lines[1].find("00:1A").expect("MAC present");
        assert_eq!(col0, col1);
        assert!(lines[0].starts_with("gateway"));
        assert!(lines[1].starts_with("access_point"));
    }

    #[test]
    fn empty_listing_renders_nothing() {
        let out = rendered(|w| write_device_rows(w, &[]));
        assert_eq!(out, "");
    }

    #[test]
    fn tree_indents_two_spaces_per_level() {
        let devices = vec![
            Device::new(DeviceType::Gateway, mac("AA:00:00:00:00:01"), None),
            Device::new(
                DeviceType::Switch,
                mac("AA:00:00:00:00:02"),
                Some(mac("AA:00:00:00:00:01")),
            ),
            Device::new(
                DeviceType::AccessPoint,
                mac("AA:00:00:00:00:03"),
                Some(mac("AA:00:00:00:00:02")),
            ),
        ];
        let forest = build_forest(&devices);
        let out = rendered(|w| write_forest(w, &forest));
        assert_eq!(
            out,
            "AA:00:00:00:00:01\n  AA:00:00:00:00:02\n    AA:00:00:00:00:03\n"
        );
    }

    #[test]
    fn sibling_subtrees_render_in_stored_order() {
        let devices = vec![
            Device::new(DeviceType::Gateway, mac("AA:00:00:00:00:01"), None),
            Device::new(
                DeviceType::Switch,
                mac("AA:00:00:00:00:02"),
                Some(mac("AA:00:00:00:00:01")),
            ),
            Device::new(
                DeviceType::Switch,
                mac("AA:00:00:00:00:03"),
                Some(mac("AA:00:00:00:00:01")),
            ),
        ];
        let forest = build_forest(&devices);
        let out = rendered(|w| write_forest(w, &forest));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1].trim(), "AA:00:00:00:00:02");
        assert_eq!(lines[2].trim(), "AA:00:00:00:00:03");
    }

    #[test]
    fn forest_concatenates_roots() {
        let devices = vec![
            Device::new(DeviceType::Gateway, mac("AA:00:00:00:00:01"), None),
            Device::new(DeviceType::Gateway, mac("AA:00:00:00:00:02"), None),
        ];
        let forest = build_forest(&devices);
        let out = rendered(|w| write_forest(w, &forest));
        assert_eq!(out, "AA:00:00:00:00:01\nAA:00:00:00:00:02\n");
    }
}
