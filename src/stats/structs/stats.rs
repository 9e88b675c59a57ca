use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
    pub bytes_served: u64,
    pub idle_total_nanos: u64,
    pub idle_count: u64,
    pub backend_total_nanos: u64,
    pub backend_count: u64,
    pub backend_max_nanos: u64,
}
