//! Error types for KKMCTL

pub mod types;

pub use types::*;
