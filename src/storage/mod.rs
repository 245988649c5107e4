//! Durable persistence of the operator's active device selection
//!
//! The selection survives restarts the way the browser console kept it
//! in local storage: a single string value. The file-backed store keeps
//! it in a small RON file under the platform data directory; tests use
//! the in-memory variant.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::errors::{KkmCtlError, Result};

/// Durable store holding the active device id. Missing or empty means
/// "no prior selection".
pub trait ActiveDeviceStore: Send + Sync {
    fn load(&self) -> Result<String>;
    fn save(&self, device_id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSelection {
    active_device: String,
}

/// RON file store under the platform data directory
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_local_dir>/kkmctl/active_device.ron`
    pub fn default_location() -> Result<Self> {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::APP_NAME);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join("active_device.ron")))
    }
}

impl ActiveDeviceStore for FileStore {
    fn load(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        let stored: StoredSelection = ron::from_str(&text)
            .map_err(|e| KkmCtlError::Storage(format!("active device store is corrupt: {}", e)))?;
        Ok(stored.active_device)
    }

    fn save(&self, device_id: &str) -> Result<()> {
        let stored = StoredSelection {
            active_device: device_id.to_string(),
        };
        let text = ron::ser::to_string_pretty(&stored, ron::ser::PrettyConfig::default())
            .map_err(|e| KkmCtlError::Storage(format!("could not serialize selection: {}", e)))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<String>,
}

impl MemoryStore {
    pub fn new(initial: &str) -> Self {
        Self {
            value: Mutex::new(initial.to_string()),
        }
    }
}

impl ActiveDeviceStore for MemoryStore {
    fn load(&self) -> Result<String> {
        Ok(self.value.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, device_id: &str) -> Result<()> {
        *self.value.lock().expect("store lock poisoned") = device_id.to_string();
        Ok(())
    }
}
