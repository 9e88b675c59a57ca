use parking_lot::Mutex;
use crate::session::structs::session_inner::SessionInner;
use crate::stats::structs::stats_atomics::SessionStatsAtomics;

pub struct SessionState {
    pub cache_enabled: bool,
    pub stats: SessionStatsAtomics,
    pub(crate) inner: Mutex<SessionInner>,
}
