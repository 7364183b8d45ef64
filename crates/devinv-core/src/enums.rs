/// The device type classification used throughout the inventory.
///
/// Serializes to/from `snake_case` JSON strings. The set is closed: an
/// unknown string is a deserialization error, not an extension point —
/// the admission and ordering rules are defined exhaustively over these
/// three variants.
use serde::{Deserialize, Serialize};

/// Network device classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Uplink to the outside world; the natural root of a topology.
    Gateway,
    /// Wired aggregation point; may carry downstream devices.
    Switch,
    /// Wireless edge device; connects clients, never other inventory devices.
    AccessPoint,
}

impl DeviceType {
    /// Returns the `snake_case` string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gateway => "gateway",
            Self::Switch => "switch",
            Self::AccessPoint => "access_point",
        }
    }

    /// Fixed ordering priority used by the device listing:
    /// gateway (1) < switch (2) < access point (3).
    pub fn priority(self) -> u8 {
        match self {
            Self::Gateway => 1,
            Self::Switch => 2,
            Self::AccessPoint => 3,
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&DeviceType::Gateway).expect("serialize"),
            "\"gateway\""
        );
        assert_eq!(
            serde_json::to_string(&DeviceType::AccessPoint).expect("serialize"),
            "\"access_point\""
        );
    }

    #[test]
    fn deserializes_from_snake_case() {
        let t: DeviceType = serde_json::from_str("\"switch\"").expect("deserialize");
        assert_eq!(t, DeviceType::Switch);
    }

    #[test]
    fn rejects_unknown_variant() {
        let result: Result<DeviceType, _> = serde_json::from_str("\"router\"");
        assert!(result.is_err(), "the classification set is closed");
    }

    #[test]
    fn rejects_screaming_case() {
        let result: Result<DeviceType, _> = serde_json::from_str("\"GATEWAY\"");
        assert!(result.is_err());
    }

    #[test]
    fn priority_order_is_gateway_switch_access_point() {
        assert!(DeviceType::Gateway.priority() < DeviceType::Switch.priority());
        assert!(DeviceType::Switch.priority() < DeviceType::AccessPoint.priority());
    }

    #[test]
    fn as_str_matches_serde_form() {
        for t in [
            DeviceType::Gateway,
            DeviceType::Switch,
            DeviceType::AccessPoint,
        ] {
            let json = serde_json::to_string(&t).expect("serialize");
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(DeviceType::AccessPoint.to_string(), "access_point");
    }
}
