use std::time::{Duration, Instant};
use log::{debug, trace};
use parking_lot::Mutex;
use crate::cache::structs::cache_key::CacheKey;
use crate::jdwp::structs::frame::Frame;
use crate::session::enums::direction::Direction;
use crate::session::enums::dispatch::Dispatch;
use crate::session::structs::pending_request::PendingRequest;
use crate::session::structs::session_inner::SessionInner;
use crate::session::structs::session_state::SessionState;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::SessionStatsAtomics;

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl SessionState {
    pub fn new(cache_enabled: bool) -> SessionState {
        SessionState {
            cache_enabled,
            stats: SessionStatsAtomics::new(),
            inner: Mutex::new(SessionInner::default()),
        }
    }

    pub fn on_command(&self, frame: &Frame, direction: Direction) -> Dispatch {
        self.on_command_at(frame, direction, Instant::now())
    }

    pub fn on_command_at(&self, frame: &Frame, direction: Direction, now: Instant) -> Dispatch {
        let mut inner = self.inner.lock();
        let cacheable = frame.is_cacheable();

        if direction == Direction::ClientToBackend && cacheable {
            if let Some(idle) = inner.run.track(now) {
                self.stats.update_stats(StatsEvent::IdleSample, as_nanos(idle));
            }
        }

        if !cacheable {
            Self::invalidate_locked(&mut inner);
            if direction == Direction::ClientToBackend {
                inner.run.end();
            }
            return Dispatch::Forward;
        }

        let key = frame.cache_key();
        if self.cache_enabled {
            if let Some(body) = key.as_ref().and_then(|key| inner.cache.get(key)) {
                self.stats.update_stats(StatsEvent::CacheHit, 1);
                self.stats.update_stats(StatsEvent::BytesServed, body.len() as u64);
                trace!("[SESSION] Cache hit for id {} ({:?})", frame.id, key);
                return Dispatch::Respond(Frame::reply(frame.id, body.to_vec()));
            }
        }

        self.stats.update_stats(StatsEvent::CacheMiss, 1);
        inner.pending.insert(frame.id, PendingRequest {
            key: if self.cache_enabled { key } else { None },
            issued_at: now,
        });
        Dispatch::Forward
    }

    pub fn on_reply(&self, frame: &Frame) {
        self.on_reply_at(frame, Instant::now())
    }

    pub fn on_reply_at(&self, frame: &Frame, now: Instant) {
        let mut inner = self.inner.lock();
        let Some(pending) = inner.pending.remove(&frame.id) else {
            trace!("[SESSION] Reply id {} has no pending command", frame.id);
            return;
        };

        let elapsed = now.saturating_duration_since(pending.issued_at);
        self.stats.update_stats(StatsEvent::BackendLatency, as_nanos(elapsed));

        if self.cache_enabled && frame.error_code() == Some(0) {
            if let Some(key) = pending.key {
                inner.cache.insert(key, &frame.body);
            }
        }
    }

    /// Flushes the cache. Commands already in flight keep their timing but
    /// lose their cache slot, so their replies cannot refill a flushed cache.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        Self::invalidate_locked(&mut inner);
    }

    fn invalidate_locked(inner: &mut SessionInner) {
        let dropped = inner.cache.clear();
        for pending in inner.pending.values_mut() {
            pending.key = None;
        }
        if dropped > 0 {
            debug!("[SESSION] Cache flushed, {dropped} entries dropped");
        }
    }

    pub fn end_run(&self) {
        self.inner.lock().run.end();
    }

    /// Closes the current run and returns the final counters.
    pub fn finish(&self) -> Stats {
        self.end_run();
        self.stats.get_stats()
    }

    pub fn get_stats(&self) -> Stats {
        self.stats.get_stats()
    }

    pub fn cached_entries(&self) -> usize {
        self.inner.lock().cache.len()
    }

    pub fn cached_body(&self, key: &CacheKey) -> Option<Vec<u8>> {
        self.inner.lock().cache.get(key).map(<[u8]>::to_vec)
    }

    pub fn pending_requests(&self) -> usize {
        self.inner.lock().pending.len()
    }

    pub fn run_active(&self) -> bool {
        self.inner.lock().run.is_active()
    }
}
