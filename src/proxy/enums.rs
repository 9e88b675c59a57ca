pub mod proxy_error;
