use std::time::Instant;

/// Client side spacing tracker. A run is open while `last_command` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleRun {
    pub last_command: Option<Instant>,
}
