mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads the YAML config from `CONFIG_PATH` (default `config.yaml`), then
/// applies environment overrides. A missing file is not an error: the
/// defaults are enough to run in demo mode.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&config_str)?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = env::var("GOOGLE_API_KEY") {
        if !key.is_empty() {
            config.veo.api_key = Some(key);
        }
    }
    if let Ok(base) = env::var("VEO_API_BASE") {
        config.veo.api_base = base;
    }
    if let Ok(base) = env::var("VEO_OPERATIONS_BASE") {
        config.veo.operations_base = base;
    }
}
