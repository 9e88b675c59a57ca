use std::sync::Arc;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{watch, Mutex};
use uuid::Uuid;
use crate::config::enums::report_format::ReportFormat;
use crate::session::enums::direction::Direction;
use crate::session::structs::session_state::SessionState;

/// One directional worker of a session.
pub struct Pump {
    pub session_id: Uuid,
    pub direction: Direction,
    pub reader: OwnedReadHalf,
    /// The peer frames are forwarded to.
    pub destination: Arc<Mutex<OwnedWriteHalf>>,
    /// The peer frames are read from, answered directly on a cache hit.
    pub source: Arc<Mutex<OwnedWriteHalf>>,
    pub state: Arc<SessionState>,
    pub stop: watch::Receiver<bool>,
    pub stop_tx: Arc<watch::Sender<bool>>,
    pub max_frame_length: u32,
    pub report_format: ReportFormat,
}
