pub mod proxy_server;
pub mod pump;
