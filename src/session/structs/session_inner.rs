use ahash::AHashMap;
use crate::cache::structs::reply_cache::ReplyCache;
use crate::session::structs::idle_run::IdleRun;
use crate::session::structs::pending_request::PendingRequest;

#[derive(Debug, Default)]
pub struct SessionInner {
    pub cache: ReplyCache,
    pub pending: AHashMap<u32, PendingRequest>,
    pub run: IdleRun,
}
