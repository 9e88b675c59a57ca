use crate::config::enums::report_format::ReportFormat;

/// Settings copied into every session started by one listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub cache_enabled: bool,
    pub max_frame_length: u32,
    pub report_format: ReportFormat,
}
