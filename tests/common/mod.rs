//! Shared test doubles for controller tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

use kkmctl::api::Backend;
use kkmctl::controller::DeviceConsole;
use kkmctl::errors::{KkmCtlError, Result};
use kkmctl::models::{
    CommandResult, DeviceProfile, PortScanResponse, RegistryResponse, SearchResponse,
};
use kkmctl::storage::MemoryStore;

/// Programmable in-process backend.
///
/// Responses are raw JSON values parsed through the same serde models
/// the HTTP client uses; `Value::Null` simulates a transport failure.
/// Command responses form a queue consumed in call order, each entry
/// optionally gated on a [`Notify`] so tests control resolve order.
pub struct MockBackend {
    pub registry_response: Mutex<Value>,
    pub store_response: Mutex<Value>,
    pub ports_response: Mutex<Value>,
    pub search_response: Mutex<Value>,
    pub command_responses: Mutex<VecDeque<(Value, Option<Arc<Notify>>)>>,
    /// Names of backend calls in invocation order
    pub calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            registry_response: Mutex::new(json!({"error": false, "deviceids": []})),
            store_response: Mutex::new(json!({"error": false, "deviceids": []})),
            ports_response: Mutex::new(json!({"error": false, "os": "linux", "ports": []})),
            search_response: Mutex::new(json!({"error": false, "devices": []})),
            command_responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_registry(&self, value: Value) {
        *self.registry_response.lock().unwrap() = value;
    }

    pub fn set_store_response(&self, value: Value) {
        *self.store_response.lock().unwrap() = value;
    }

    pub fn set_ports(&self, value: Value) {
        *self.ports_response.lock().unwrap() = value;
    }

    pub fn set_search(&self, value: Value) {
        *self.search_response.lock().unwrap() = value;
    }

    pub fn queue_command_response(&self, value: Value, gate: Option<Arc<Notify>>) {
        self.command_responses
            .lock()
            .unwrap()
            .push_back((value, gate));
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    if value.is_null() {
        return Err(KkmCtlError::Backend("connection refused".to_string()));
    }
    serde_json::from_value(value).map_err(Into::into)
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch_registry(&self) -> Result<RegistryResponse> {
        self.record("fetch_registry");
        parse(self.registry_response.lock().unwrap().clone())
    }

    async fn store_profile(&self, _profile: &DeviceProfile) -> Result<RegistryResponse> {
        self.record("store_profile");
        parse(self.store_response.lock().unwrap().clone())
    }

    async fn scan_ports(&self) -> Result<PortScanResponse> {
        self.record("scan_ports");
        parse(self.ports_response.lock().unwrap().clone())
    }

    async fn search_devices(&self) -> Result<SearchResponse> {
        self.record("search_devices");
        parse(self.search_response.lock().unwrap().clone())
    }

    async fn run_command(
        &self,
        device_id: &str,
        command: &str,
        _params: &[i64],
    ) -> Result<CommandResult> {
        self.record(&format!("run_command {}/{}", device_id, command));
        let entry = self.command_responses.lock().unwrap().pop_front();
        match entry {
            Some((value, gate)) => {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                parse(value)
            }
            None => Err(KkmCtlError::Backend("no response queued".to_string())),
        }
    }
}

/// Profile JSON the way the service reports it
pub fn profile_json(device_id: &str, name: &str) -> Value {
    let mut profile = DeviceProfile::with_defaults(device_id);
    profile.name = name.to_string();
    serde_json::to_value(&profile).unwrap()
}

/// Registry response JSON in the service's flattened shape
pub fn registry_json(ids: &[&str]) -> Value {
    let mut value = json!({"error": false, "deviceids": ids});
    for id in ids {
        value[*id] = profile_json(id, &format!("device {}", id));
    }
    value
}

pub fn console_with(backend: Arc<MockBackend>, stored_id: &str) -> DeviceConsole {
    DeviceConsole::new(backend, Arc::new(MemoryStore::new(stored_id)))
}
