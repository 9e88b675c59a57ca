use serde::{Deserialize, Serialize};
use crate::config::structs::proxy_config::ProxyConfig;
use crate::config::structs::report_config::ReportConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub proxy: ProxyConfig,
    pub report: ReportConfig,
}
