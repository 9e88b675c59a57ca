#![allow(dead_code)]
use std::net::SocketAddr;
use std::time::Duration;
use jdwp_proxy::config::enums::report_format::ReportFormat;
use jdwp_proxy::jdwp::jdwp::{read_frame, write_frame, DEFAULT_MAX_FRAME_LENGTH, HANDSHAKE, HANDSHAKE_SIZE, REFERENCE_TYPE_COMMAND_SET};
use jdwp_proxy::jdwp::structs::frame::Frame;
use jdwp_proxy::proxy::structs::proxy_server::ProxyServer;
use jdwp_proxy::proxy::structs::session_options::SessionOptions;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, watch};

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_options(cache_enabled: bool) -> SessionOptions {
    SessionOptions {
        cache_enabled,
        max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
        report_format: ReportFormat::text,
    }
}

/// A ReferenceType command for `reference_id`.
pub fn reference_type_command(id: u32, command: u8, reference_id: u64) -> Frame {
    Frame::command(id, REFERENCE_TYPE_COMMAND_SET, command, reference_id.to_be_bytes().to_vec())
}

/// Body the fake VM answers with: `X` for ReferenceType, `ok` for everything else.
pub fn backend_reply_body(frame: &Frame) -> Vec<u8> {
    if frame.is_cacheable() { b"X".to_vec() } else { b"ok".to_vec() }
}

/// A fake JVM debug agent. Echoes the handshake, answers every command and
/// reports each frame it received on the returned channel.
pub async fn spawn_backend() -> (SocketAddr, mpsc::UnboundedReceiver<Frame>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut handshake = [0u8; HANDSHAKE_SIZE];
                if stream.read_exact(&mut handshake).await.is_err() {
                    return;
                }
                if stream.write_all(&handshake).await.is_err() {
                    return;
                }
                while let Ok(Some(frame)) = read_frame(&mut stream, DEFAULT_MAX_FRAME_LENGTH).await {
                    let reply = (!frame.is_reply()).then(|| Frame::reply(frame.id, backend_reply_body(&frame)));
                    let _ = tx.send(frame);
                    if let Some(reply) = reply {
                        if write_frame(&mut stream, &reply).await.is_err() {
                            return;
                        }
                    }
                }
            });
        }
    });

    (addr, rx)
}

pub async fn spawn_proxy(backend: SocketAddr, cache_enabled: bool) -> (SocketAddr, watch::Sender<bool>) {
    let server = ProxyServer::new(
        "127.0.0.1:0".parse().unwrap(),
        backend.ip().to_string(),
        backend.port(),
        create_test_options(cache_enabled),
        16,
        true,
    ).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        server.start(rx).await;
    });
    (addr, tx)
}

/// Connects like a debugger and completes the handshake.
pub async fn connect_client(proxy: SocketAddr) -> TcpStream {
    let mut stream = TcpStream::connect(proxy).await.unwrap();
    stream.write_all(HANDSHAKE).await.unwrap();
    let mut answer = [0u8; HANDSHAKE_SIZE];
    stream.read_exact(&mut answer).await.unwrap();
    assert_eq!(&answer, HANDSHAKE);
    stream
}

pub async fn request(stream: &mut TcpStream, frame: &Frame) -> Frame {
    write_frame(stream, frame).await.unwrap();
    read_reply(stream).await
}

pub async fn read_reply(stream: &mut TcpStream) -> Frame {
    tokio::time::timeout(TIMEOUT, read_frame(stream, DEFAULT_MAX_FRAME_LENGTH))
        .await
        .expect("timed out waiting for a reply")
        .unwrap()
        .expect("stream closed before a reply arrived")
}

pub async fn next_backend_frame(rx: &mut mpsc::UnboundedReceiver<Frame>) -> Frame {
    tokio::time::timeout(TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for the backend")
        .expect("backend channel closed")
}
