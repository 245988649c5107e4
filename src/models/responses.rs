//! Service API response models
//!
//! The registry endpoints answer with a flattened shape — the id list
//! under `deviceids` and each profile keyed directly by its id at the
//! top level — so the registry response keeps the profile objects raw
//! until [`RegistryResponse::into_registry`] types them.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::device::DeviceProfile;
use super::ports::PortCandidate;
use super::registry::DeviceRegistry;
use crate::errors::{KkmCtlError, Result};

/// Response of `GET /api/GetServSetting` and `PUT /api/SetServSetting`
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "deviceids")]
    pub device_ids: Vec<String>,
    /// Profiles keyed by device id, plus whatever else the service adds
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RegistryResponse {
    /// Type the per-id profile objects and build the registry
    pub fn into_registry(self) -> Result<DeviceRegistry> {
        let mut profiles = HashMap::new();
        for id in &self.device_ids {
            let raw = self.extra.get(id).ok_or_else(|| {
                KkmCtlError::Serialization(format!(
                    "registry response lists device '{}' but carries no profile for it",
                    id
                ))
            })?;
            let profile: DeviceProfile = serde_json::from_value(raw.clone())?;
            profiles.insert(id.clone(), profile);
        }
        Ok(DeviceRegistry::from_parts(self.device_ids, profiles))
    }
}

/// Response of `GET /api/getPorts`
#[derive(Debug, Clone, Deserialize)]
pub struct PortScanResponse {
    #[serde(default)]
    pub error: bool,
    /// Platform tag of the service host (`windows`, `linux`, ...)
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub ports: Vec<PortCandidate>,
}

/// Response of `GET /api/SearchKKM`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub devices: Vec<PortCandidate>,
}

/// Response of `POST /api/run/{device}/{command}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Raw response bytes rendered by the service; older builds emit an
    /// array of strings, newer ones a single string
    #[serde(default, deserialize_with = "retdata_string")]
    pub retdata: String,
    /// Human-readable result description
    #[serde(default)]
    pub resdescr: String,
    /// Registrar-level error string, populated independently of `error`
    #[serde(default, rename = "kkmerr")]
    pub kkm_err: String,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
}

impl CommandResult {
    /// Display string for a successful dispatch: `retdata` and
    /// `resdescr` joined by a newline
    pub fn display_text(&self) -> String {
        match (self.retdata.is_empty(), self.resdescr.is_empty()) {
            (false, false) => format!("{}\n{}", self.retdata, self.resdescr),
            (true, _) => self.resdescr.clone(),
            (_, true) => self.retdata.clone(),
        }
    }
}

fn retdata_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RetData {
        One(String),
        Many(Vec<String>),
    }

    Ok(match RetData::deserialize(deserializer)? {
        RetData::One(s) => s,
        RetData::Many(parts) => parts.join("\n"),
    })
}
