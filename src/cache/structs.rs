/// `(command, referenceTypeID)` key.
pub mod cache_key;

/// Reply body store.
pub mod reply_cache;
