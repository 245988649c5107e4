//! Device registry container
//!
//! An explicit ordered associative container: id → profile plus the
//! companion ordered id list the service reports. The registry is only
//! ever replaced wholesale from a service response, never merged.

use std::collections::HashMap;

use super::device::DeviceProfile;

/// The full set of configured registrar profiles known to the service
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    profiles: HashMap<String, DeviceProfile>,
    device_ids: Vec<String>,
}

impl DeviceRegistry {
    /// Build a registry from a service-reported id order and profile map.
    /// Ids without a matching profile are dropped.
    pub fn from_parts(device_ids: Vec<String>, profiles: HashMap<String, DeviceProfile>) -> Self {
        let device_ids = device_ids
            .into_iter()
            .filter(|id| profiles.contains_key(id))
            .collect();
        Self {
            profiles,
            device_ids,
        }
    }

    /// Ordered device ids
    pub fn device_ids(&self) -> &[String] {
        &self.device_ids
    }

    /// Profile for an id, if configured
    pub fn get(&self, device_id: &str) -> Option<&DeviceProfile> {
        self.profiles.get(device_id)
    }

    pub fn contains(&self, device_id: &str) -> bool {
        self.profiles.contains_key(device_id)
    }

    /// First id in service order, the default active selection
    pub fn first_id(&self) -> Option<&str> {
        self.device_ids.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.device_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.device_ids.is_empty()
    }
}
