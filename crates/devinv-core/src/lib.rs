#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod admission;
pub mod enums;
pub mod file;
pub mod newtypes;
pub mod sorting;
pub mod store;
pub mod structures;
pub mod topology;

pub use admission::{AdmissionError, check_admission};
pub use enums::DeviceType;
pub use file::{InventoryDecodeError, InventoryFile, parse_inventory};
pub use newtypes::{MacAddr, NewtypeError};
pub use sorting::sort_devices;
pub use store::DeviceStore;
pub use structures::{Device, DeviceEntry};
pub use topology::{
    CycleError, DeviceGraph, NodeWeight, TopologyNode, build_forest, build_graph, build_subtree,
    validate_acyclic,
};

/// Returns the current version of the devinv-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
