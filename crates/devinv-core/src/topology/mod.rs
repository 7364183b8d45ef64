/// Topology engine: uplink-graph construction, cycle detection, and
/// forest/subtree reconstruction from the flat device collection.
///
/// # Two-Pass Construction
///
/// [`build_graph`] runs two passes over the collection:
/// 1. **Device pass** — inserts one node per device MAC into the
///    `StableDiGraph` and records the `mac → NodeIndex` mapping. A duplicate
///    MAC is tolerated first-wins: read-time code must not fail on data the
///    store never admitted.
/// 2. **Uplink pass** — resolves each device's uplink reference and inserts
///    a directed points-to-uplink edge. A reference to a MAC with no
///    matching device materializes a *placeholder* node
///    (`device_index: None`) rather than failing; dangling references are
///    read-time legal and only the admission rules forbid creating new ones.
///
/// # Caller contract
///
/// [`cycles::validate_acyclic`] must succeed before
/// [`forest::build_forest`] or [`forest::build_subtree`] is called: the
/// construction algorithms assume acyclicity and carry no loop guard of
/// their own.
pub mod cycles;
pub mod forest;

pub use cycles::{CycleError, validate_acyclic};
pub use forest::{TopologyNode, build_forest, build_subtree};

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::newtypes::MacAddr;
use crate::structures::Device;

/// Weight stored inline on each uplink-graph node.
///
/// Kept small so traversal loops stay cache-friendly; the full [`Device`]
/// record, when one exists, is reached via `device_index` into the slice the
/// graph was built from.
#[derive(Debug, Clone)]
pub struct NodeWeight {
    /// The MAC address this node stands for.
    pub mac_address: MacAddr,
    /// Index into the originating device slice, or `None` for a placeholder
    /// node materialized from a dangling uplink reference.
    pub device_index: Option<usize>,
}

/// The uplink graph: one node per MAC address seen in the collection
/// (device or referenced uplink), one edge per resolvable uplink pointer,
/// directed child → uplink.
#[derive(Debug, Clone)]
pub struct DeviceGraph {
    graph: StableDiGraph<NodeWeight, ()>,
    index: HashMap<MacAddr, NodeIndex>,
}

impl DeviceGraph {
    /// Returns the underlying petgraph structure.
    pub fn graph(&self) -> &StableDiGraph<NodeWeight, ()> {
        &self.graph
    }

    /// Resolves a MAC address to its node index, if present.
    pub fn node_index(&self, mac: &MacAddr) -> Option<NodeIndex> {
        self.index.get(mac).copied()
    }

    /// Returns the MAC address stored on `idx`, if the index is valid.
    pub fn mac(&self, idx: NodeIndex) -> Option<&MacAddr> {
        self.graph.node_weight(idx).map(|w| &w.mac_address)
    }

    /// Follows the single outgoing uplink edge of `idx`, if any.
    ///
    /// Out-degree is at most one by construction (a device has at most one
    /// uplink pointer; placeholders have none).
    pub fn uplink(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .next()
    }

    /// Returns `true` when `idx` stands for a real device rather than a
    /// placeholder materialized from a dangling reference.
    pub fn is_device(&self, idx: NodeIndex) -> bool {
        self.graph
            .node_weight(idx)
            .is_some_and(|w| w.device_index.is_some())
    }

    /// Number of nodes, placeholders included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Builds the uplink graph from the flat device collection.
///
/// Never fails: duplicate MACs are kept first-wins and dangling uplink
/// references become placeholder nodes. See the module docs for why both
/// forms of bad data are tolerated here.
pub fn build_graph(devices: &[Device]) -> DeviceGraph {
    let mut graph: StableDiGraph<NodeWeight, ()> = StableDiGraph::new();
    let mut index: HashMap<MacAddr, NodeIndex> = HashMap::new();

    // Device pass: one node per distinct device MAC, first occurrence wins.
    for (data_index, device) in devices.iter().enumerate() {
        if index.contains_key(&device.mac_address) {
            continue;
        }
        let idx = graph.add_node(NodeWeight {
            mac_address: device.mac_address.clone(),
            device_index: Some(data_index),
        });
        index.insert(device.mac_address.clone(), idx);
    }

    // Uplink pass: resolve pointers, materializing placeholders as needed.
    for (data_index, device) in devices.iter().enumerate() {
        let Some(uplink) = &device.uplink_mac_address else {
            continue;
        };
        let Some(&child) = index.get(&device.mac_address) else {
            continue;
        };
        // First-wins: only the record that owns the node contributes its
        // uplink edge; later duplicates are ignored entirely.
        let owns = graph
            .node_weight(child)
            .and_then(|w| w.device_index)
            == Some(data_index);
        if !owns {
            continue;
        }
        let parent = match index.get(uplink) {
            Some(&idx) => idx,
            None => {
                let idx = graph.add_node(NodeWeight {
                    mac_address: uplink.clone(),
                    device_index: None,
                });
                index.insert(uplink.clone(), idx);
                idx
            }
        };
        graph.add_edge(child, parent, ());
    }

    DeviceGraph { graph, index }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::enums::DeviceType;

    fn mac(s: &str) -> MacAddr {
        MacAddr::try_from(s).expect("valid MAC")
    }

    fn device(m: &str, uplink: Option<&str>) -> Device {
        Device::new(DeviceType::Switch, mac(m), uplink.map(mac))
    }

    #[test]
    fn empty_collection_builds_empty_graph() {
        let g = build_graph(&[]);
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn chain_builds_one_edge_per_uplink() {
        let devices = vec![
            device("AA:00:00:00:00:01", None),
            device("AA:00:00:00:00:02", Some("AA:00:00:00:00:01")),
            device("AA:00:00:00:00:03", Some("AA:00:00:00:00:02")),
        ];
        let g = build_graph(&devices);
        assert_eq!(g.node_count(), 3);

        let c = g.node_index(&mac("AA:00:00:00:00:03")).expect("node");
        let b = g.uplink(c).expect("c uplinks to b");
        assert_eq!(g.mac(b).map(|m| m.as_str()), Some("AA:00:00:00:00:02"));
        let a = g.uplink(b).expect("b uplinks to a");
        assert_eq!(g.mac(a).map(|m| m.as_str()), Some("AA:00:00:00:00:01"));
        assert!(g.uplink(a).is_none(), "a is a root");
    }

    #[test]
    fn dangling_uplink_materializes_placeholder() {
        let devices = vec![device("AA:00:00:00:00:01", Some("AA:00:00:00:00:99"))];
        let g = build_graph(&devices);
        assert_eq!(g.node_count(), 2);

        let ghost = g.node_index(&mac("AA:00:00:00:00:99")).expect("placeholder");
        assert!(!g.is_device(ghost));
        assert!(g.uplink(ghost).is_none());

        let d = g.node_index(&mac("AA:00:00:00:00:01")).expect("device");
        assert!(g.is_device(d));
        assert_eq!(g.uplink(d), Some(ghost));
    }

    #[test]
    fn duplicate_mac_is_first_wins() {
        let devices = vec![
            device("AA:00:00:00:00:01", None),
            device("AA:00:00:00:00:01", Some("AA:00:00:00:00:02")),
        ];
        let g = build_graph(&devices);
        // One node for the duplicated MAC, no edge from the losing record.
        assert_eq!(g.node_count(), 1);
        let idx = g.node_index(&mac("AA:00:00:00:00:01")).expect("node");
        assert!(g.uplink(idx).is_none());
    }

    #[test]
    fn self_reference_builds_self_loop() {
        // Pre-existing bad data: the graph represents it; the cycle check
        // is what reports it.
        let devices = vec![device("AA:00:00:00:00:01", Some("AA:00:00:00:00:01"))];
        let g = build_graph(&devices);
        assert_eq!(g.node_count(), 1);
        let idx = g.node_index(&mac("AA:00:00:00:00:01")).expect("node");
        assert_eq!(g.uplink(idx), Some(idx));
    }
}
