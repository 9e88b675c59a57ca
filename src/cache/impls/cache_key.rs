use std::fmt;
use std::fmt::Formatter;
use crate::cache::structs::cache_key::CacheKey;

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{:#018x}", self.command, self.reference_id)
    }
}
