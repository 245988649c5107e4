//! Shared console state
//!
//! Everything the presentation layer binds to lives here: the registry,
//! the active selection, discovery results, the command display slot and
//! the notification flags. The controller mutates it only inside short
//! synchronous sections, never across a service await.

use chrono::{DateTime, Local};

use crate::models::{DeviceProfile, DeviceRegistry, PortCandidate};

/// Success / error banners plus the derived busy indicator.
///
/// The busy indicator is a reference-counted in-flight operation count
/// rather than a shared boolean, so overlapping operations cannot leave
/// it stranded. Banners are cleared only at the start of the next
/// operation or by explicit dismissal.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    /// Success banner visible
    pub success: bool,
    /// Error banner visible
    pub alert: bool,
    pub success_msg: String,
    pub error_msg: String,
    in_flight: u32,
}

impl NotificationState {
    /// Busy indicator, true while any operation is in flight
    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Clear both banners; called at the start of every operation
    pub fn clear_banners(&mut self) {
        self.success = false;
        self.alert = false;
        self.success_msg.clear();
        self.error_msg.clear();
    }

    pub fn begin_busy(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_busy(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn raise_success(&mut self, msg: impl Into<String>) {
        self.success = true;
        self.success_msg = msg.into();
    }

    pub fn raise_error(&mut self, msg: impl Into<String>) {
        self.alert = true;
        self.error_msg = msg.into();
    }

    /// Explicit user dismissal of both banners
    pub fn dismiss(&mut self) {
        self.success = false;
        self.alert = false;
    }
}

/// Controller state exposed to the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Configured registrar profiles, replaced wholesale on every sync
    pub registry: DeviceRegistry,
    /// Active device id, empty when nothing is selected
    pub active_device: String,
    /// Selectable port names for the configuration form; never empty
    /// after a successful scan
    pub ports: Vec<String>,
    /// Platform tag of the service host, from the last port scan
    pub platform: String,
    /// Registrars found by the last device search
    pub found_devices: Vec<PortCandidate>,
    /// Single "profile under edit" slot, distinct from the registry
    pub edit_profile: Option<DeviceProfile>,
    /// Display string of the last command result
    pub command_output: String,
    /// Registrar-level error of the last command, independent of the
    /// error banner
    pub kkm_error: String,
    pub notifications: NotificationState,
    /// When the registry was last replaced from the service
    pub last_refresh: Option<DateTime<Local>>,
}
