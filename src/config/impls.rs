pub mod configuration;
pub mod configuration_error;
pub mod proxy_config;
