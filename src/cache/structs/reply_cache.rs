use ahash::AHashMap;
use crate::cache::structs::cache_key::CacheKey;

#[derive(Debug, Default)]
pub struct ReplyCache {
    pub(crate) entries: AHashMap<CacheKey, Vec<u8>>,
}
