pub mod frame_error;
pub mod packet_kind;
