pub mod proxy_server;
pub mod pump;
pub mod session_options;
