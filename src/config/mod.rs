//! Configuration management module.
//!
//! The proxy runs without any configuration file: the listening port and the
//! backend address come from the command line. A TOML file given with
//! `--config` tunes everything else.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [proxy]
//! bind_address = "0.0.0.0"
//! backlog = 128
//! max_frame_length = 16777216
//! reuse_address = true
//!
//! [report]
//! format = "text"
//! ```
//!
//! Missing sections and keys fall back to [`structs::configuration::Configuration::init`].

/// Configuration enumerations (report format, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
