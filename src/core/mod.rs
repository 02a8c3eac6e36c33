// src/core/mod.rs
//! Configuration and the outbound transport to the analysis API

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::{ServiceClient, Transport, TransportError};
