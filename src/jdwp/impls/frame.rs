use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::cache::structs::cache_key::CacheKey;
use crate::jdwp::enums::frame_error::FrameError;
use crate::jdwp::enums::packet_kind::PacketKind;
use crate::jdwp::jdwp::{FLAG_REPLY, HEADER_SIZE, REFERENCE_TYPE_COMMAND_SET};
use crate::jdwp::structs::frame::Frame;

impl Frame {
    /// Builds a successful reply carrying `body`, as the backend would have sent it.
    pub fn reply(id: u32, body: Vec<u8>) -> Frame {
        Frame {
            length: (HEADER_SIZE + body.len()) as u32,
            id,
            flags: FLAG_REPLY,
            kind: PacketKind::Reply { error_code: 0 },
            body,
        }
    }

    pub fn command(id: u32, command_set: u8, command: u8, body: Vec<u8>) -> Frame {
        Frame {
            length: (HEADER_SIZE + body.len()) as u32,
            id,
            flags: 0,
            kind: PacketKind::Command { command_set, command },
            body,
        }
    }

    /// Decodes the fixed header. The returned frame has an empty body with
    /// `body_length()` bytes still to be read from the stream.
    pub fn decode_header(header: &[u8], max_frame_length: u32) -> Result<Frame, FrameError> {
        if header.len() < HEADER_SIZE {
            return Err(FrameError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "Header too short")));
        }

        let mut cursor = Cursor::new(header);
        let length = cursor.read_u32::<NetworkEndian>()?;
        let id = cursor.read_u32::<NetworkEndian>()?;
        let flags = cursor.read_u8()?;
        let field = cursor.read_u16::<NetworkEndian>()?;

        if (length as usize) < HEADER_SIZE {
            return Err(FrameError::InvalidLength { length });
        }
        if length > max_frame_length {
            return Err(FrameError::FrameTooLarge { length, max: max_frame_length });
        }

        Ok(Frame {
            length,
            id,
            flags,
            kind: PacketKind::from_header(flags, field),
            body: Vec::new(),
        })
    }

    pub fn from_bytes(bytes: &[u8], max_frame_length: u32) -> Result<Frame, FrameError> {
        let mut frame = Frame::decode_header(bytes, max_frame_length)?;
        let end = frame.length as usize;
        if bytes.len() < end {
            return Err(FrameError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "Body too short")));
        }
        frame.body = bytes[HEADER_SIZE..end].to_vec();
        Ok(frame)
    }

    pub fn body_length(&self) -> usize {
        self.length as usize - HEADER_SIZE
    }

    #[tracing::instrument(skip(self, bytes), level = "trace")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>(self.length)?;
        bytes.write_u32::<NetworkEndian>(self.id)?;
        bytes.write_u8(self.flags)?;
        bytes.write_u16::<NetworkEndian>(self.kind.header_field())?;
        bytes.write_all(&self.body)?;
        Ok(())
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(HEADER_SIZE + self.body.len());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    pub fn is_reply(&self) -> bool {
        self.kind.is_reply()
    }

    /// True for every command in the ReferenceType command set, whatever the command code.
    pub fn is_cacheable(&self) -> bool {
        matches!(self.kind, PacketKind::Command { command_set, .. } if command_set == REFERENCE_TYPE_COMMAND_SET)
    }

    /// `(command, referenceTypeID)` for a cacheable command. The reference id is the
    /// first 8 body bytes; a body shorter than that yields no key.
    pub fn cache_key(&self) -> Option<CacheKey> {
        match self.kind {
            PacketKind::Command { command_set, command } if command_set == REFERENCE_TYPE_COMMAND_SET => {
                let reference_id = Cursor::new(&self.body).read_u64::<NetworkEndian>().ok()?;
                Some(CacheKey { command, reference_id })
            }
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<u16> {
        match self.kind {
            PacketKind::Reply { error_code } => Some(error_code),
            PacketKind::Command { .. } => None,
        }
    }
}
