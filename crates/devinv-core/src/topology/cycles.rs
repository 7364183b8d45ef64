/// Cycle detection over the points-to-uplink graph.
///
/// # Algorithm
///
/// Three-color depth-first search: every node starts *unvisited*, is colored
/// *in-progress* while it sits on the active uplink chain, and *done* once
/// everything reachable from it has been proven acyclic. The walk starts
/// from every not-yet-visited node, so disconnected components and multiple
/// roots are all covered.
///
/// Because out-degree is at most one (a device has a single uplink pointer),
/// the "DFS" from a start node is a plain chain walk kept on an explicit
/// path stack — no recursion, so stack depth is bounded for arbitrarily deep
/// inventories and the cycle path is reconstructed by slicing the stack
/// rather than by unwinding call frames.
///
/// Reaching an *in-progress* node proves a cycle: the reported path is the
/// active stack truncated to start at the first occurrence of that node, in
/// traversal order. Reaching a *done* node, or running off the chain (root
/// or dangling reference), ends the walk cleanly.
use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::NodeIndex;

use crate::newtypes::MacAddr;
use crate::structures::Device;
use crate::topology::{DeviceGraph, build_graph};

// ---------------------------------------------------------------------------
// CycleError
// ---------------------------------------------------------------------------

/// The stored topology contains a directed uplink cycle.
///
/// `path` lists exactly the cycle's member MAC addresses, starting at the
/// node where the cycle closes back on itself and following uplink edges in
/// traversal order. A self-referencing device yields a one-element path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// The cycle members in traversal order.
    pub path: Vec<MacAddr>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a cycle has been detected in the topology: ")?;
        for (i, mac) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(mac.as_str())?;
        }
        // Close the loop in the rendering so the report reads as a cycle.
        if let Some(first) = self.path.first() {
            write!(f, " -> {first}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CycleError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Node coloring for the three-color search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Validates that the uplink graph implied by `devices` is acyclic.
///
/// Dangling uplink references never fail this check: an edge to a
/// nonexistent MAC is simply not followed. Callers must invoke this before
/// [`crate::topology::build_forest`] or [`crate::topology::build_subtree`];
/// those constructions assume acyclicity.
///
/// # Errors
///
/// Returns [`CycleError`] carrying the first detected cycle's members.
pub fn validate_acyclic(devices: &[Device]) -> Result<(), CycleError> {
    detect_cycle(&build_graph(devices))
}

/// Runs the three-color search over an already-built [`DeviceGraph`].
///
/// Split out so callers that keep a graph around (the store does not, but
/// tests do) can avoid rebuilding it.
pub fn detect_cycle(graph: &DeviceGraph) -> Result<(), CycleError> {
    let g = graph.graph();
    let mut colors: HashMap<NodeIndex, Color> = HashMap::with_capacity(g.node_count());

    for start in g.node_indices() {
        if *colors.get(&start).unwrap_or(&Color::Unvisited) != Color::Unvisited {
            continue;
        }

        // The active uplink chain from `start`.
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut current = Some(start);

        while let Some(idx) = current {
            match *colors.get(&idx).unwrap_or(&Color::Unvisited) {
                // Already proven acyclic from here; nothing more to learn.
                Color::Done => break,
                // Back-edge onto the active chain: the cycle closes at `idx`.
                Color::InProgress => {
                    return Err(CycleError {
                        path: cycle_members(graph, &path, idx),
                    });
                }
                Color::Unvisited => {
                    colors.insert(idx, Color::InProgress);
                    path.push(idx);
                    current = graph.uplink(idx);
                }
            }
        }

        // Chain ended at a root, a dangling reference, or a done node:
        // everything on it is now proven acyclic.
        for idx in path {
            colors.insert(idx, Color::Done);
        }
    }

    Ok(())
}

/// Slices the active path at the first occurrence of `closing`, yielding the
/// cycle members in traversal order.
fn cycle_members(graph: &DeviceGraph, path: &[NodeIndex], closing: NodeIndex) -> Vec<MacAddr> {
    let start = path.iter().position(|&idx| idx == closing).unwrap_or(0);
    path[start..]
        .iter()
        .filter_map(|&idx| graph.mac(idx).cloned())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
