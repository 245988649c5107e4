//! Data models and types used throughout KKMCTL

pub mod device;
pub mod ports;
pub mod registry;
pub mod responses;

// Re-export commonly used types
pub use device::*;
pub use ports::*;
pub use registry::*;
pub use responses::*;
