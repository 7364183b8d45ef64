/// Forest and subtree reconstruction from the flat device collection.
///
/// Both constructions share one shape: an arena of slots keyed by MAC, with
/// parent/child relations expressed as slot indices, assembled into owned
/// [`TopologyNode`] trees at the end. Slot indices sidestep cyclic-ownership
/// concerns entirely — the engine never needs a back-pointer from child to
/// parent — and assembly walks an explicit stack, so tree depth never maps
/// onto call-stack depth.
///
/// # Caller contract
///
/// Acyclicity must be established first via
/// [`crate::topology::validate_acyclic`]. These functions carry no loop
/// guard; feeding them a cyclic collection is a contract violation, not a
/// handled case.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::newtypes::MacAddr;
use crate::structures::Device;

// ---------------------------------------------------------------------------
// TopologyNode
// ---------------------------------------------------------------------------

/// A tree-shaped projection of one MAC address and everything hanging below
/// it.
///
/// Children appear in the order their devices were encountered while
/// scanning the flat collection — stable within one invocation, but not a
/// contractual ordering. Each node exclusively owns its children; the
/// projection is a tree, never a shared graph. Constructed fresh on every
/// query and discarded with the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TopologyNode {
    /// The MAC address this node stands for.
    pub mac_address: MacAddr,
    /// Devices whose uplink resolves to this node.
    pub linked_devices: Vec<TopologyNode>,
}

impl TopologyNode {
    /// A leaf node with no linked devices.
    pub fn leaf(mac_address: MacAddr) -> Self {
        Self {
            mac_address,
            linked_devices: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// One arena slot: a MAC plus the slot indices of its children.
struct Slot {
    mac_address: MacAddr,
    children: Vec<usize>,
    has_parent: bool,
}

/// Arena of slots with a MAC-keyed index, filled in scan order.
struct Arena {
    slots: Vec<Slot>,
    by_mac: HashMap<MacAddr, usize>,
}

impl Arena {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_mac: HashMap::new(),
        }
    }

    /// Returns the slot index for `mac`, creating a slot on first sight.
    fn intern(&mut self, mac: &MacAddr) -> usize {
        if let Some(&idx) = self.by_mac.get(mac) {
            return idx;
        }
        let idx = self.slots.len();
        self.slots.push(Slot {
            mac_address: mac.clone(),
            children: Vec::new(),
            has_parent: false,
        });
        self.by_mac.insert(mac.clone(), idx);
        idx
    }

    fn lookup(&self, mac: &MacAddr) -> Option<usize> {
        self.by_mac.get(mac).copied()
    }

    /// Attaches `child` under `parent` and marks the child as non-root.
    fn attach(&mut self, parent: usize, child: usize) {
        self.slots[parent].children.push(child);
        self.slots[child].has_parent = true;
    }

    /// Converts the subtree rooted at `root` into an owned [`TopologyNode`].
    ///
    /// Iterative post-order over an explicit stack: children are assembled
    /// before their parent and moved out of a scratch table, so each slot is
    /// consumed exactly once.
    fn assemble(&self, root: usize) -> TopologyNode {
        let mut built: Vec<Option<TopologyNode>> = (0..self.slots.len()).map(|_| None).collect();

        // (slot index, next child cursor)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let idx = frame.0;
            let cursor = frame.1;
            let slot = &self.slots[idx];
            if cursor < slot.children.len() {
                frame.1 += 1;
                let child = slot.children[cursor];
                stack.push((child, 0));
                continue;
            }
            // All children built: collect them in insertion order.
            stack.pop();
            let linked_devices: Vec<TopologyNode> = slot
                .children
                .iter()
                .filter_map(|&c| built[c].take())
                .collect();
            built[idx] = Some(TopologyNode {
                mac_address: slot.mac_address.clone(),
                linked_devices,
            });
        }

        built[root]
            .take()
            .unwrap_or_else(|| TopologyNode::leaf(self.slots[root].mac_address.clone()))
    }
}

/// Devices deduplicated first-wins by MAC, matching the graph builder's
/// read-time leniency.
fn distinct_devices(devices: &[Device]) -> Vec<&Device> {
    let mut seen: HashMap<&MacAddr, ()> = HashMap::new();
    let mut out = Vec::with_capacity(devices.len());
    for device in devices {
        if seen.insert(&device.mac_address, ()).is_none() {
            out.push(device);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Builds the full forest implied by a cycle-free device collection.
///
/// One slot is interned per distinct MAC seen either as a device identifier
/// or as a referenced uplink, so a dangling uplink reference materializes a
/// placeholder node rather than losing its child. Every device with an
/// uplink attaches below it; whatever is never attached below something —
/// uplink-free devices and placeholders alike — comes back as a root, in
/// first-sight order.
pub fn build_forest(devices: &[Device]) -> Vec<TopologyNode> {
    let devices = distinct_devices(devices);
    let mut arena = Arena::new();

    for device in &devices {
        arena.intern(&device.mac_address);
        if let Some(uplink) = &device.uplink_mac_address {
            arena.intern(uplink);
        }
    }

    for device in &devices {
        if let Some(uplink) = &device.uplink_mac_address {
            let parent = arena.intern(uplink);
            let child = arena.intern(&device.mac_address);
            arena.attach(parent, child);
        }
    }

    (0..arena.slots.len())
        .filter(|&idx| !arena.slots[idx].has_parent)
        .map(|idx| arena.assemble(idx))
        .collect()
}

/// Builds the subtree rooted at `root_mac` from a cycle-free collection.
///
/// Unlike [`build_forest`], only real devices get nodes here — a dangling
/// uplink neither materializes a placeholder nor attaches its child to one.
/// Any device MAC is a legal query target, structural root or not; its
/// ancestors simply do not appear in the result. `None` is the normal
/// not-found outcome, not an error.
pub fn build_subtree(devices: &[Device], root_mac: &MacAddr) -> Option<TopologyNode> {
    let devices = distinct_devices(devices);
    let mut arena = Arena::new();

    for device in &devices {
        arena.intern(&device.mac_address);
    }

    for device in &devices {
        let Some(uplink) = &device.uplink_mac_address else {
            continue;
        };
        let Some(parent) = arena.lookup(uplink) else {
            continue;
        };
        let Some(child) = arena.lookup(&device.mac_address) else {
            continue;
        };
        if parent != child {
            arena.attach(parent, child);
        }
    }

    arena.lookup(root_mac).map(|idx| arena.assemble(idx))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
