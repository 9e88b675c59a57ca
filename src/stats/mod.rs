//! Per-session statistics.
//!
//! Counters are plain atomics so both directional workers of a session can
//! update them without taking the session lock.
//!
//! # Tracked values
//!
//! - Cache hits and misses, plus the bytes answered from the cache
//! - Client idle time: spacing between consecutive ReferenceType commands
//!   of one run, as total and sample count
//! - Backend latency: time from forwarding a ReferenceType command to its
//!   reply, as total, sample count and maximum
//!
//! A [`structs::stats::Stats`] snapshot renders the one-line report written
//! when the session ends.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
