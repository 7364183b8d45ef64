/// In-memory device store: the persistence collaborator around the engine.
///
/// Holds the flat device collection and wires the write-time guard
/// (admission rules) and the read-time guard (cycle check) into the right
/// call sites. The store is deliberately dumb about structure: topology
/// questions are answered by handing an immutable snapshot of the
/// collection to the engine, which produces fresh output with no aliasing
/// back into store-owned data.
///
/// Concurrency is the caller's concern — the store is a plain single-owner
/// value with no interior locking; wrap it if the surrounding system serves
/// concurrent requests.
use crate::admission::{AdmissionError, check_admission};
use crate::newtypes::MacAddr;
use crate::sorting::sort_devices;
use crate::structures::Device;
use crate::topology::{CycleError, TopologyNode, build_forest, build_subtree, validate_acyclic};

/// The flat device inventory.
#[derive(Debug, Clone, Default)]
pub struct DeviceStore {
    devices: Vec<Device>,
}

impl DeviceStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads `devices` without running the admission rules.
    ///
    /// This is the seeding path: it may introduce roots, dangling uplink
    /// references, and (from bad sources) even cycles. The read-time engine
    /// tolerates the first two and reports the third.
    pub fn seed(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// Admits and persists a new device.
    ///
    /// # Errors
    ///
    /// The first violated [`AdmissionError`]; the store is unchanged on
    /// failure.
    pub fn add(&mut self, device: Device) -> Result<(), AdmissionError> {
        check_admission(&device, &self.devices)?;
        self.devices.push(device);
        Ok(())
    }

    /// Looks a device up by its MAC address.
    pub fn find_by_mac(&self, mac: &MacAddr) -> Option<&Device> {
        self.devices.iter().find(|d| &d.mac_address == mac)
    }

    /// The raw collection, in insertion order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of stored devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the store holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// A sorted copy of the collection (type priority, then MAC).
    pub fn all_sorted(&self) -> Vec<Device> {
        let mut devices = self.devices.clone();
        sort_devices(&mut devices);
        devices
    }

    /// The full forest view, preceded by the mandatory cycle check.
    ///
    /// # Errors
    ///
    /// [`CycleError`] when the stored data contains an uplink cycle; no
    /// forest is built in that case.
    pub fn topology(&self) -> Result<Vec<TopologyNode>, CycleError> {
        validate_acyclic(&self.devices)?;
        Ok(build_forest(&self.devices))
    }

    /// The subtree rooted at `root_mac`, preceded by the mandatory cycle
    /// check. `Ok(None)` means the MAC is not in the inventory.
    ///
    /// # Errors
    ///
    /// [`CycleError`] when the stored data contains an uplink cycle.
    pub fn subtree(&self, root_mac: &MacAddr) -> Result<Option<TopologyNode>, CycleError> {
        validate_acyclic(&self.devices)?;
        Ok(build_subtree(&self.devices, root_mac))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
