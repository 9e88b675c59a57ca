use crate::jdwp::enums::packet_kind::PacketKind;

/// One JDWP packet. `flags` is kept as received so a forwarded frame
/// serializes back to the exact bytes that arrived.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Frame {
    pub length: u32,
    pub id: u32,
    pub flags: u8,
    pub kind: PacketKind,
    pub body: Vec<u8>,
}
