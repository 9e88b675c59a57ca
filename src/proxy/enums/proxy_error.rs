use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Could not connect to backend {address}: {source}")]
    BackendConnect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Handshake failed: {0}")]
    Handshake(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Session worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
