use log::trace;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::jdwp::enums::frame_error::FrameError;
use crate::jdwp::structs::frame::Frame;

pub const HEADER_SIZE: usize = 11;
pub const HANDSHAKE_SIZE: usize = 14;
pub const HANDSHAKE: &[u8; HANDSHAKE_SIZE] = b"JDWP-Handshake";
pub const FLAG_REPLY: u8 = 0x80;
pub const REFERENCE_TYPE_COMMAND_SET: u8 = 2;
pub const DEFAULT_MAX_FRAME_LENGTH: u32 = 16 * 1024 * 1024;

/// Fills `buffer` completely. `Ok(false)` means the peer closed the stream first.
pub async fn read_exact_or_eof<R>(reader: &mut R, buffer: &mut [u8]) -> Result<bool, std::io::Error>
where
    R: AsyncRead + Unpin,
{
    match reader.read_exact(buffer).await {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reads the next frame. Returns `Ok(None)` on a short read, which ends the
/// direction without being an error.
pub async fn read_frame<R>(reader: &mut R, max_frame_length: u32) -> Result<Option<Frame>, FrameError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_SIZE];
    if !read_exact_or_eof(reader, &mut header).await? {
        return Ok(None);
    }

    let mut frame = Frame::decode_header(&header, max_frame_length)?;
    let mut body = vec![0u8; frame.body_length()];
    if !read_exact_or_eof(reader, &mut body).await? {
        return Ok(None);
    }
    frame.body = body;

    trace!("[JDWP] Read frame id {} ({} bytes, {:?})", frame.id, frame.length, frame.kind);
    Ok(Some(frame))
}

/// Writes one frame and flushes immediately, the protocol is interactive.
pub async fn write_frame<W>(writer: &mut W, frame: &Frame) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&frame.write_to_vec()?).await?;
    writer.flush().await
}

/// Relays the handshake client -> backend, then backend -> client.
/// Returns the bytes seen in each direction; they are forwarded as-is.
#[tracing::instrument(skip_all, level = "debug")]
pub async fn relay_handshake<C, B>(client: &mut C, backend: &mut B) -> Result<([u8; HANDSHAKE_SIZE], [u8; HANDSHAKE_SIZE]), std::io::Error>
where
    C: AsyncRead + AsyncWrite + Unpin,
    B: AsyncRead + AsyncWrite + Unpin,
{
    let mut from_client = [0u8; HANDSHAKE_SIZE];
    client.read_exact(&mut from_client).await?;
    backend.write_all(&from_client).await?;
    backend.flush().await?;

    let mut from_backend = [0u8; HANDSHAKE_SIZE];
    backend.read_exact(&mut from_backend).await?;
    client.write_all(&from_backend).await?;
    client.flush().await?;

    if &from_client != HANDSHAKE || &from_backend != HANDSHAKE {
        log::debug!("[JDWP] Non-standard handshake relayed unchanged");
    }

    Ok((from_client, from_backend))
}
