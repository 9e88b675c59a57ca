use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    pub bind_address: String,
    pub backlog: u32,
    pub max_frame_length: u32,
    pub reuse_address: bool,
}
