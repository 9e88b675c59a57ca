//! Per-session reply cache.
//!
//! Replies to ReferenceType commands are pure functions of the VM state for a
//! given `referenceTypeID`, until something else is sent to the VM. The cache
//! keeps the body of the latest successful reply per `(command, referenceTypeID)`
//! and is dropped as a whole whenever a command from any other set goes by.
//!
//! A cache lives inside one session only, it is never shared or persisted.

/// Implementation blocks for the cache.
pub mod impls;

/// Cache key and store structures.
pub mod structs;
