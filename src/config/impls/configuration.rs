use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::proxy_config::ProxyConfig;
use crate::config::structs::report_config::ReportConfig;
use crate::jdwp::jdwp::HEADER_SIZE;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            proxy: ProxyConfig::default(),
            report: ReportConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Without a path the defaults are used. With `create`, a missing or broken
    /// file is replaced by the defaults and startup continues.
    pub fn load_from_file(path: Option<&str>, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match path {
            None => Configuration::init(),
            Some(path) => match Configuration::load_file(path) {
                Ok(config) => config,
                Err(error) => {
                    eprintln!("No config file found or corrupt at {path}.");
                    eprintln!("[ERROR] {error}");
                    if !create {
                        eprintln!("You can either fix {path}, or start this app using '--create-config' as parameter.");
                        return Err(error);
                    }
                    eprintln!("Creating config file {path}..");
                    let config = Configuration::init();
                    Configuration::save_from_config(&config, path)?;
                    config
                }
            }
        };
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] {error}");
            if let Some(path) = path {
                eprintln!("Fix {path} before starting the proxy.");
            }
            return Err(error);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::Invalid(format!("unknown log level '{}'", self.log_level)));
        }
        if (self.proxy.max_frame_length as usize) < HEADER_SIZE {
            return Err(ConfigurationError::Invalid(format!(
                "max_frame_length {} is smaller than the {HEADER_SIZE} byte header",
                self.proxy.max_frame_length
            )));
        }
        if self.proxy.backlog == 0 {
            return Err(ConfigurationError::Invalid("backlog must be greater than 0".to_string()));
        }
        if self.proxy.bind_address.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigurationError::Invalid(format!("bind_address '{}' is not an IP address", self.proxy.bind_address)));
        }
        Ok(())
    }
}
