use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::SessionStatsAtomics;

impl SessionStatsAtomics {
    pub fn new() -> SessionStatsAtomics {
        SessionStatsAtomics::default()
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            hits: self.hits.load(Ordering::SeqCst),
            misses: self.misses.load(Ordering::SeqCst),
            bytes_served: self.bytes_served.load(Ordering::SeqCst),
            idle_total_nanos: self.idle_total_nanos.load(Ordering::SeqCst),
            idle_count: self.idle_count.load(Ordering::SeqCst),
            backend_total_nanos: self.backend_total_nanos.load(Ordering::SeqCst),
            backend_count: self.backend_count.load(Ordering::SeqCst),
            backend_max_nanos: self.backend_max_nanos.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: u64)
    {
        match event {
            StatsEvent::CacheHit => {
                self.hits.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::CacheMiss => {
                self.misses.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::BytesServed => {
                self.bytes_served.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::IdleSample => {
                self.idle_total_nanos.fetch_add(value, Ordering::SeqCst);
                self.idle_count.fetch_add(1, Ordering::SeqCst);
            }
            StatsEvent::BackendLatency => {
                self.backend_total_nanos.fetch_add(value, Ordering::SeqCst);
                self.backend_count.fetch_add(1, Ordering::SeqCst);
                self.backend_max_nanos.fetch_max(value, Ordering::SeqCst);
            }
        }
    }
}
