//! # jdwp-proxy
//!
//! A transparent JDWP proxy that sits between a debugger and a JVM debug agent.
//!
//! ## Overview
//!
//! Debuggers tend to ask the same ReferenceType questions (signature, fields,
//! methods, source file...) over and over while stepping. As long as nothing
//! else was sent to the VM, those answers cannot change, so the proxy keeps
//! them per session and answers repeats itself. Every other packet passes
//! through untouched.
//!
//! On disconnect each session reports cache hits and misses, the debugger's
//! think time between ReferenceType commands, and how long the VM took to
//! answer the commands that were forwarded.
//!
//! ## Modules
//!
//! - [`jdwp`] - Frame codec and handshake relay
//! - [`cache`] - Per-session reply cache
//! - [`session`] - Command/reply correlation and cache rules
//! - [`stats`] - Session counters and the disconnect report
//! - [`proxy`] - Listener, session setup and directional workers
//! - [`config`] - TOML configuration
//! - [`structs`] - Command line interface
//! - [`logging`] - Logger setup

/// Per-session reply cache.
pub mod cache;

/// Configuration management module.
pub mod config;

/// JDWP frame codec.
pub mod jdwp;

/// Logger setup.
pub mod logging;

/// Listener and directional workers.
pub mod proxy;

/// Command/reply correlation.
pub mod session;

/// Session statistics.
pub mod stats;

/// Command line interface.
pub mod structs;
