use std::time::{Duration, Instant};
use crate::session::structs::idle_run::IdleRun;

impl IdleRun {
    /// Records a client ReferenceType command at `now`. Returns the time since
    /// the previous command of the same run, nothing for the first one.
    pub fn track(&mut self, now: Instant) -> Option<Duration> {
        let sample = self.last_command.map(|last| now.saturating_duration_since(last));
        self.last_command = Some(now);
        sample
    }

    pub fn end(&mut self) {
        self.last_command = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_command.is_some()
    }
}
