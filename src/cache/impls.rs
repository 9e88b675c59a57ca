pub mod cache_key;
pub mod reply_cache;
