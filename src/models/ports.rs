//! Serial port discovery models
//!
//! The service reports one candidate per (port, baud) probe. For the
//! configuration form only the distinct port names matter; when the
//! service sees no physical ports at all, a platform-appropriate fixed
//! list keeps the form usable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A serial port reported as hosting a detected registrar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortCandidate {
    /// Port name
    pub port: String,
    /// Guessed communication speed
    pub baud: i64,
    /// Device identity string read from the registrar
    #[serde(default)]
    pub device: String,
    /// Registrar-level probe error, empty on clean detection
    #[serde(default)]
    pub err: String,
}

/// Collapse raw candidates to the distinct, lexicographically sorted
/// set of port names
pub fn collapse_ports(candidates: &[PortCandidate]) -> Vec<String> {
    let set: BTreeSet<&str> = candidates.iter().map(|c| c.port.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Fixed fallback port list for a platform with no reported ports.
///
/// Windows gets `com1..com16` in ascending numeric order; every other
/// platform gets `/dev/ttyS0..15` plus `/dev/ttyUSB0..15`, sorted
/// lexicographically.
pub fn fallback_ports(os: &str) -> Vec<String> {
    if os == "windows" {
        (1..=16).map(|i| format!("com{}", i)).collect()
    } else {
        let set: BTreeSet<String> = (0..16)
            .map(|i| format!("/dev/ttyS{}", i))
            .chain((0..16).map(|i| format!("/dev/ttyUSB{}", i)))
            .collect();
        set.into_iter().collect()
    }
}
