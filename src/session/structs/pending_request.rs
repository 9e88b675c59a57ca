use std::time::Instant;
use crate::cache::structs::cache_key::CacheKey;

/// A forwarded ReferenceType command waiting for its reply.
#[derive(Clone, Copy, Debug)]
pub struct PendingRequest {
    /// Where to store the reply body; `None` when the reply must not be cached.
    pub key: Option<CacheKey>,
    pub issued_at: Instant,
}
