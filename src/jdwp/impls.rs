pub mod frame;
pub mod packet_kind;
