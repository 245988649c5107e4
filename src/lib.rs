//! KKMCTL - Fiscal Registrar Management Console
//!
//! KKMCTL is the client-side controller and command-line console for a
//! fiscal-registrar ("KKM") management service. It keeps the registry of
//! configured registrar profiles, discovers serial ports and attached
//! devices through the service, persists the operator's active device
//! selection across sessions, and dispatches ad-hoc registrar commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use controller::{ConsoleState, DeviceConsole, NotificationState};
pub use errors::*;
pub use models::*;

/// KKMCTL version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// KKMCTL application name
pub const APP_NAME: &str = "kkmctl";
