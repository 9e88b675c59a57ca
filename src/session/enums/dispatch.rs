use crate::jdwp::structs::frame::Frame;

/// What a worker does with a command it just read.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Dispatch {
    /// Send the frame, unchanged, to the other peer.
    Forward,
    /// Answer the sending peer with this frame; nothing goes to the other peer.
    Respond(Frame),
}
