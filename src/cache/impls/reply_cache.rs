use ahash::AHashMap;
use log::trace;
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::reply_cache::ReplyCache;

impl ReplyCache {
    pub fn new() -> ReplyCache {
        ReplyCache {
            entries: AHashMap::new(),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores a private copy of `body`, replacing any previous reply for `key`.
    pub fn insert(&mut self, key: CacheKey, body: &[u8]) {
        trace!("[CACHE] Storing {} bytes for {}", body.len(), key);
        self.entries.insert(key, body.to_vec());
    }

    /// Drops every entry, returns how many were held.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
