use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub veo: VeoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeoConfig {
    /// Google API key. Absent means the server runs in demo mode and never
    /// calls the upstream service.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_operations_base")]
    pub operations_base: String,
    #[serde(default = "default_demo_video_url")]
    pub demo_video_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for VeoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            operations_base: default_operations_base(),
            demo_video_url: default_demo_video_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/veo-3.1:generateVideo".to_string()
}

fn default_operations_base() -> String {
    "https://generativelanguage.googleapis.com/v1/operations/".to_string()
}

fn default_demo_video_url() -> String {
    "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4".to_string()
}
