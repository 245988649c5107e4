//! Device session and command dispatch controller
//!
//! [`DeviceConsole`] owns the registry state, port/device discovery,
//! configuration sync, durable persistence of the active device, and the
//! request/response lifecycle for command execution. Shared state sits
//! behind an `Arc<RwLock<_>>`; every mutation happens in a synchronous
//! section after a service response has resolved, so concurrent
//! operations interleave only at await points. Discovery and registry
//! fetch write disjoint fields and run concurrently with no ordering
//! imposed. Overlapping command dispatches are last-to-resolve-wins.

pub mod state;

pub use state::{ConsoleState, NotificationState};

use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;

use crate::api::Backend;
use crate::models::{DeviceProfile, PortCandidate, ProfileForm, collapse_ports, fallback_ports};
use crate::storage::ActiveDeviceStore;

/// Error banner text when a device search comes back empty
pub const NO_DEVICES_FOUND_MSG: &str = "no registrar devices found";

/// The console controller; cheap to clone, all clones share state
#[derive(Clone)]
pub struct DeviceConsole {
    backend: Arc<dyn Backend>,
    store: Arc<dyn ActiveDeviceStore>,
    state: Arc<RwLock<ConsoleState>>,
}

impl DeviceConsole {
    pub fn new(backend: Arc<dyn Backend>, store: Arc<dyn ActiveDeviceStore>) -> Self {
        Self {
            backend,
            store,
            state: Arc::new(RwLock::new(ConsoleState::default())),
        }
    }

    /// Snapshot of the current state for the presentation layer
    pub async fn state(&self) -> ConsoleState {
        self.state.read().await.clone()
    }

    /// Dismiss both notification banners
    pub async fn dismiss_notifications(&self) {
        self.state.write().await.notifications.dismiss();
    }

    /// Enumerate serial ports on the service host.
    ///
    /// A non-empty report collapses to the distinct sorted port names;
    /// an empty report substitutes the platform fallback list, so the
    /// form's port list is never empty after a successful scan. On
    /// failure the list keeps its prior value.
    pub async fn discover_ports(&self) {
        {
            let mut st = self.state.write().await;
            st.notifications.clear_banners();
            st.notifications.begin_busy();
        }

        let result = self.backend.scan_ports().await;

        let mut st = self.state.write().await;
        st.notifications.end_busy();
        match result {
            Ok(scan) => {
                let collapsed = collapse_ports(&scan.ports);
                st.ports = if collapsed.is_empty() {
                    fallback_ports(&scan.os)
                } else {
                    collapsed
                };
                st.platform = scan.os;
                log::debug!("port scan found {} ports", st.ports.len());
            }
            Err(err) => {
                log::warn!("port scan failed: {}", err);
                st.notifications.raise_error(format!("port scan failed: {}", err));
            }
        }
    }

    /// Sweep ports for attached registrars and report the findings.
    pub async fn discover_devices(&self) {
        {
            let mut st = self.state.write().await;
            st.notifications.clear_banners();
            st.notifications.begin_busy();
        }

        let result = self.backend.search_devices().await;

        let mut st = self.state.write().await;
        st.notifications.end_busy();
        match result {
            Ok(found) if !found.devices.is_empty() => {
                let lines: Vec<String> = found.devices.iter().map(describe_candidate).collect();
                st.found_devices = found.devices;
                st.notifications.raise_success(lines.join("\n"));
            }
            Ok(_) => {
                st.found_devices.clear();
                st.notifications.raise_error(NO_DEVICES_FOUND_MSG);
            }
            Err(err) => {
                log::warn!("device search failed: {}", err);
                st.notifications
                    .raise_error(format!("device search failed: {}", err));
            }
        }
    }

    /// Load the registry and kick off a port scan concurrently.
    ///
    /// The two requests write disjoint state fields; their completions
    /// may land in either order.
    pub async fn load_settings(&self) {
        let scan = self.discover_ports();
        let sync = async {
            {
                let mut st = self.state.write().await;
                st.notifications.clear_banners();
            }

            let result = self.backend.fetch_registry().await;

            let mut st = self.state.write().await;
            match result {
                Ok(response) if response.error => {
                    st.notifications.raise_error(response.message);
                }
                Ok(response) => match response.into_registry() {
                    Ok(registry) => {
                        st.registry = registry;
                        st.last_refresh = Some(Local::now());
                        self.resolve_active_device(&mut st);
                    }
                    Err(err) => {
                        st.notifications
                            .raise_error(format!("registry load failed: {}", err));
                    }
                },
                Err(err) => {
                    log::warn!("registry load failed: {}", err);
                    st.notifications
                        .raise_error(format!("registry load failed: {}", err));
                }
            }
        };

        tokio::join!(scan, sync);
    }

    /// Persist the active selection, coerce the form and push the
    /// profile to the service.
    ///
    /// The active-id write happens before the push and is not rolled
    /// back when the service rejects the profile.
    pub async fn save_settings(&self, form: ProfileForm) {
        {
            let mut st = self.state.write().await;
            st.notifications.clear_banners();
            let active = st.active_device.clone();
            if let Err(err) = self.store.save(&active) {
                log::warn!("active device store write failed: {}", err);
            }
        }

        let profile = match form.into_profile() {
            Ok(profile) => profile,
            Err(err) => {
                let mut st = self.state.write().await;
                st.notifications.raise_error(err.to_string());
                return;
            }
        };

        let result = self.backend.store_profile(&profile).await;

        let mut st = self.state.write().await;
        match result {
            Ok(response) if response.error => {
                st.notifications.raise_error(response.message);
            }
            Ok(response) => match response.into_registry() {
                Ok(registry) => {
                    st.registry = registry;
                    st.last_refresh = Some(Local::now());
                    st.notifications
                        .raise_success(format!("device '{}' saved", profile.name));
                    if !st.registry.is_empty() {
                        self.resolve_active_device(&mut st);
                    }
                }
                Err(err) => {
                    st.notifications
                        .raise_error(format!("save returned a bad registry: {}", err));
                }
            },
            Err(err) => {
                log::warn!("profile save failed: {}", err);
                st.notifications.raise_error(format!("save failed: {}", err));
            }
        }
    }

    /// Persist `device_id` as the active selection and switch to it.
    pub async fn select_active_device(&self, device_id: &str) {
        let mut st = self.state.write().await;
        if let Err(err) = self.store.save(device_id) {
            log::warn!("active device store write failed: {}", err);
            st.notifications
                .raise_error(format!("could not persist selection: {}", err));
        }
        st.active_device = device_id.to_string();
    }

    /// Fetch a profile from the registry and mark it as the profile
    /// under edit. Absent ids yield `None`, not an error.
    pub async fn get_profile(&self, device_id: &str) -> Option<DeviceProfile> {
        let mut st = self.state.write().await;
        let profile = st.registry.get(device_id).cloned();
        st.edit_profile = profile.clone();
        profile
    }

    /// Dispatch one command to a device.
    ///
    /// Both `device_id` and `command` must be non-empty, otherwise the
    /// call is a silent no-op. The prior result is blanked before the
    /// request is issued, so a stale result is never shown after a new
    /// dispatch begins.
    pub async fn run_command(&self, device_id: &str, command: &str, params: &[i64]) {
        if device_id.is_empty() || command.is_empty() {
            log::debug!("run_command skipped: empty device id or command");
            return;
        }

        {
            let mut st = self.state.write().await;
            st.edit_profile = None;
            st.command_output.clear();
            st.kkm_error.clear();
            st.notifications.clear_banners();
            st.notifications.begin_busy();
        }

        let result = self.backend.run_command(device_id, command, params).await;

        let mut st = self.state.write().await;
        st.notifications.end_busy();
        match result {
            Ok(res) if res.error => {
                st.notifications.raise_error(res.message);
            }
            Ok(res) => {
                st.command_output = res.display_text();
                st.kkm_error = res.kkm_err;
            }
            Err(err) => {
                log::warn!("command '{}' failed: {}", command, err);
                st.notifications
                    .raise_error(format!("command '{}' failed: {}", command, err));
            }
        }
    }

    /// Resolve the active selection against a freshly replaced registry:
    /// the stored id when present, else the first registry id, else
    /// empty. A stored id missing from the registry is repaired to the
    /// first id so the selection never dangles.
    fn resolve_active_device(&self, st: &mut ConsoleState) {
        let stored = match self.store.load() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("active device store read failed: {}", err);
                String::new()
            }
        };

        if !stored.is_empty() && st.registry.contains(&stored) {
            st.active_device = stored;
        } else if let Some(first) = st.registry.first_id() {
            st.active_device = first.to_string();
        } else {
            st.active_device.clear();
        }
    }
}

fn describe_candidate(candidate: &PortCandidate) -> String {
    if candidate.err.is_empty() {
        format!(
            "{} ({} @ {})",
            candidate.device, candidate.port, candidate.baud
        )
    } else {
        format!(
            "{} ({} @ {}): {}",
            candidate.device, candidate.port, candidate.baud, candidate.err
        )
    }
}
