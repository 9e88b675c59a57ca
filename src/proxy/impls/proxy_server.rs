use std::net::SocketAddr;
use log::{info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tokio::sync::watch;
use crate::proxy::proxy::run_session;
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::proxy::structs::session_options::SessionOptions;

impl ProxyServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(bind_address: SocketAddr, backend_host: String, backend_port: u16, options: SessionOptions, backlog: u32, reuse_address: bool) -> tokio::io::Result<ProxyServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

        socket.set_reuse_address(reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.listen(backlog.min(i32::MAX as u32) as i32)?;
        socket.set_nonblocking(true)?;

        let std_listener: std::net::TcpListener = socket.into();
        let listener = TcpListener::from_std(std_listener)?;

        Ok(ProxyServer {
            listener,
            backend_host,
            backend_port,
            options,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts sessions until `rx` flips. Sessions already running are not interrupted.
    #[tracing::instrument(level = "debug", skip(self, rx))]
    pub async fn start(&self, mut rx: watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[PROXY] Stopping listener...");
                    break;
                }
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, peer_addr)) => {
                            info!("[PROXY] Accepted connection from {peer_addr}");
                            let backend_host = self.backend_host.clone();
                            let backend_port = self.backend_port;
                            let options = self.options;
                            tokio::spawn(async move {
                                if let Err(e) = run_session(stream, peer_addr, &backend_host, backend_port, options).await {
                                    warn!("[PROXY] Session from {peer_addr} ended with an error: {e}");
                                }
                            });
                        }
                        Err(e) => {
                            warn!("[PROXY] Accept failed: {e}");
                        }
                    }
                }
            }
        }
    }
}
