//! Per-session correlation of commands and replies.
//!
//! A [`structs::session_state::SessionState`] is created for every accepted
//! debugger connection and shared by the two directional workers of that
//! session only. It decides, per command, whether the cache can answer or the
//! frame has to travel to the VM, remembers forwarded commands by packet id
//! until their reply shows up, and feeds the session statistics.
//!
//! # Rules
//!
//! - ReferenceType commands (command set 2) are looked up by
//!   `(command, referenceTypeID)`. A hit is answered locally with a reply that
//!   reuses the command id; a miss is forwarded and remembered.
//! - A successful reply to a remembered command stores its body. Error replies
//!   are never stored.
//! - Any command from another set flushes the whole cache, since it may have
//!   changed VM state.

/// Traffic direction and dispatch decision.
pub mod enums;

/// Implementation blocks for session state.
pub mod impls;

/// Session data structures.
pub mod structs;
