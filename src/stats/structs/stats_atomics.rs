use std::sync::atomic::AtomicU64;

#[derive(Debug, Default)]
pub struct SessionStatsAtomics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub bytes_served: AtomicU64,
    pub idle_total_nanos: AtomicU64,
    pub idle_count: AtomicU64,
    pub backend_total_nanos: AtomicU64,
    pub backend_count: AtomicU64,
    pub backend_max_nanos: AtomicU64,
}
