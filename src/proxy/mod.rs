//! TCP side of the proxy.
//!
//! One listener accepts debugger connections. Every accepted connection gets
//! its own backend connection and its own [`crate::session`] state, then two
//! workers move frames between the pair:
//!
//! ```text
//! debugger --> [client->backend pump] --> VM
//!     ^              |  cache hit             |
//!     +--------------+                        |
//! debugger <-- [backend->client pump] <-------+
//! ```
//!
//! When either worker stops, it tells the other one through a per-session
//! watch channel and shuts down its write halves. The client->backend worker
//! writes the session report on its way out.

/// Proxy errors.
pub mod enums;

/// Implementation blocks for the listener and the pumps.
pub mod impls;

/// Listener, pump and option structures.
pub mod structs;

/// Session setup and the listener service.
#[allow(clippy::module_inception)]
pub mod proxy;
