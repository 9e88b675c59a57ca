use crate::jdwp::enums::packet_kind::PacketKind;
use crate::jdwp::jdwp::FLAG_REPLY;

impl PacketKind {
    pub fn from_header(flags: u8, field: u16) -> Self {
        if flags & FLAG_REPLY != 0 {
            PacketKind::Reply { error_code: field }
        } else {
            PacketKind::Command {
                command_set: (field >> 8) as u8,
                command: field as u8,
            }
        }
    }

    pub fn header_field(&self) -> u16 {
        match *self {
            PacketKind::Command { command_set, command } => ((command_set as u16) << 8) | command as u16,
            PacketKind::Reply { error_code } => error_code,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, PacketKind::Reply { .. })
    }
}
