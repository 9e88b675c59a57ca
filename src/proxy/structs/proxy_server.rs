use tokio::net::TcpListener;
use crate::proxy::structs::session_options::SessionOptions;

#[derive(Debug)]
pub struct ProxyServer {
    pub listener: TcpListener,
    pub backend_host: String,
    pub backend_port: u16,
    pub options: SessionOptions,
}
