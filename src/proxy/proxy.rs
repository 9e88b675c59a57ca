use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use log::{error, info};
use tokio::net::TcpStream;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::jdwp::jdwp::relay_handshake;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::proxy::structs::pump::Pump;
use crate::proxy::structs::session_options::SessionOptions;
use crate::session::enums::direction::Direction;
use crate::session::structs::session_state::SessionState;
use crate::stats::structs::stats::Stats;

#[allow(clippy::too_many_arguments)]
pub async fn proxy_service(addr: SocketAddr, backend_host: String, backend_port: u16, options: SessionOptions, backlog: u32, reuse_address: bool, rx: watch::Receiver<bool>) -> JoinHandle<()>
{
    let proxy_server = ProxyServer::new(addr, backend_host.clone(), backend_port, options, backlog, reuse_address).await.unwrap_or_else(|e| {
        error!("Could not listen to the TCP port: {e}");
        exit(1);
    });
    let cache_status = if options.cache_enabled { "enabled" } else { "disabled" };
    info!("[PROXY] Starting a listener on {addr} forwarding to {backend_host}:{backend_port} with caching {cache_status}");
    tokio::spawn(async move {
        proxy_server.start(rx).await;
    })
}

/// Session sockets carry small interactive packets, Nagle stays off on both sides.
pub fn configure_stream(stream: &TcpStream) -> Result<(), std::io::Error>
{
    stream.set_nodelay(true)
}

/// Runs one debugger session to completion and returns its final counters.
#[tracing::instrument(level = "debug", skip(client, options))]
pub async fn run_session(mut client: TcpStream, peer_addr: SocketAddr, backend_host: &str, backend_port: u16, options: SessionOptions) -> Result<Stats, ProxyError>
{
    let session_id = Uuid::new_v4();

    let mut backend = TcpStream::connect((backend_host, backend_port)).await.map_err(|source| ProxyError::BackendConnect {
        address: format!("{backend_host}:{backend_port}"),
        source,
    })?;

    configure_stream(&client)?;
    configure_stream(&backend)?;

    relay_handshake(&mut client, &mut backend).await.map_err(ProxyError::Handshake)?;
    info!("[SESSION {session_id}] Handshake relayed between {peer_addr} and {backend_host}:{backend_port}");

    let state = Arc::new(SessionState::new(options.cache_enabled));
    let (client_read, client_write) = client.into_split();
    let (backend_read, backend_write) = backend.into_split();
    let client_write = Arc::new(Mutex::new(client_write));
    let backend_write = Arc::new(Mutex::new(backend_write));
    let (stop_tx, stop_rx) = watch::channel(false);
    let stop_tx = Arc::new(stop_tx);

    let commands = tokio::spawn(Pump {
        session_id,
        direction: Direction::ClientToBackend,
        reader: client_read,
        destination: backend_write.clone(),
        source: client_write.clone(),
        state: state.clone(),
        stop: stop_rx.clone(),
        stop_tx: stop_tx.clone(),
        max_frame_length: options.max_frame_length,
        report_format: options.report_format,
    }.run());

    let replies = tokio::spawn(Pump {
        session_id,
        direction: Direction::BackendToClient,
        reader: backend_read,
        destination: client_write,
        source: backend_write,
        state: state.clone(),
        stop: stop_rx,
        stop_tx,
        max_frame_length: options.max_frame_length,
        report_format: options.report_format,
    }.run());

    let (commands_result, replies_result) = tokio::join!(commands, replies);
    commands_result?;
    replies_result?;

    info!("[SESSION {session_id}] Closed session from {peer_addr}");
    Ok(state.get_stats())
}
