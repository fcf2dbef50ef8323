//! Configuration file management.

mod manager;

pub use manager::{Config, ConfigManager, system_language};
