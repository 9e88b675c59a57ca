use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct CacheKey {
    pub command: u8,
    pub reference_id: u64,
}
