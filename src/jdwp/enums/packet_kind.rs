/// What the 2 byte header field means for a given frame.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PacketKind {
    Command {
        command_set: u8,
        command: u8,
    },
    Reply {
        error_code: u16,
    },
}
