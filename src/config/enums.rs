pub mod configuration_error;
pub mod report_format;
