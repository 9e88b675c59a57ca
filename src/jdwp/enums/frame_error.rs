use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid frame length {length}, shorter than the header")]
    InvalidLength { length: u32 },

    #[error("Frame length {length} exceeds the limit of {max} bytes")]
    FrameTooLarge { length: u32, max: u32 },
}
