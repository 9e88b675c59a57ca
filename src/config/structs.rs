//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Listener and session settings.
pub mod proxy_config;

/// End of session report settings.
pub mod report_config;
