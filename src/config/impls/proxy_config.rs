use crate::config::structs::proxy_config::ProxyConfig;
use crate::jdwp::jdwp::DEFAULT_MAX_FRAME_LENGTH;

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            backlog: 128,
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
            reuse_address: true,
        }
    }
}
