//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every metric a session can update through `SessionStatsAtomics::update_stats()`.
///
/// Durations are passed in nanoseconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    CacheHit,
    CacheMiss,
    BytesServed,
    IdleSample,
    BackendLatency,
}
