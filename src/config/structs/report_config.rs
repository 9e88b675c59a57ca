use serde::{
    Deserialize,
    Serialize
};
use crate::config::enums::report_format::ReportFormat;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}
