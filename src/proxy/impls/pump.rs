use std::io;
use log::{debug, info, trace, warn};
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;
use crate::jdwp::enums::frame_error::FrameError;
use crate::jdwp::jdwp::{read_frame, write_frame};
use crate::jdwp::structs::frame::Frame;
use crate::proxy::structs::pump::Pump;
use crate::session::enums::direction::Direction;
use crate::session::enums::dispatch::Dispatch;

async fn send(peer: &Mutex<OwnedWriteHalf>, frame: &Frame) -> Result<(), io::Error> {
    let mut writer = peer.lock().await;
    write_frame(&mut *writer, frame).await
}

impl Pump {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn run(mut self) {
        let mut stop = self.stop.clone();

        loop {
            let frame = tokio::select! {
                _ = stop.changed() => {
                    debug!("[SESSION {}] {} stopped by its paired worker", self.session_id, self.direction);
                    break;
                }
                result = read_frame(&mut self.reader, self.max_frame_length) => {
                    match result {
                        Ok(Some(frame)) => frame,
                        Ok(None) => {
                            debug!("[SESSION {}] {} reached end of stream", self.session_id, self.direction);
                            break;
                        }
                        Err(FrameError::Io(e)) => {
                            debug!("[SESSION {}] {} read failed: {e}", self.session_id, self.direction);
                            break;
                        }
                        Err(e) => {
                            warn!("[SESSION {}] Protocol violation on {}: {e}, closing session", self.session_id, self.direction);
                            break;
                        }
                    }
                }
            };

            // A peer that stopped reading must not keep the session alive.
            tokio::select! {
                _ = stop.changed() => {
                    debug!("[SESSION {}] {} stopped by its paired worker while writing", self.session_id, self.direction);
                    break;
                }
                result = self.dispatch(&frame) => {
                    if let Err(e) = result {
                        debug!("[SESSION {}] {} write failed: {e}", self.session_id, self.direction);
                        break;
                    }
                }
            }
        }

        let _ = self.stop_tx.send(true);

        if self.direction == Direction::ClientToBackend {
            let stats = self.state.finish();
            info!("[SESSION {}] ReferenceType proxy stats: {}", self.session_id, stats.render(self.report_format));
        }

        // The paired worker drops its write lock once it sees the stop signal.
        let _ = self.destination.lock().await.shutdown().await;
        let _ = self.source.lock().await.shutdown().await;
    }

    async fn dispatch(&self, frame: &Frame) -> Result<(), io::Error> {
        if frame.is_reply() {
            self.state.on_reply(frame);
            return send(&self.destination, frame).await;
        }

        match self.state.on_command(frame, self.direction) {
            Dispatch::Forward => send(&self.destination, frame).await,
            Dispatch::Respond(reply) => {
                trace!("[SESSION {}] Answering id {} from cache", self.session_id, reply.id);
                send(&self.source, &reply).await
            }
        }
    }
}
