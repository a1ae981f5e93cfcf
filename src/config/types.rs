use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Hosted backend settings used by the connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (scheme + host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Anonymous API key sent with every request.
    #[serde(default)]
    pub api_key: String,
    /// Collection the probe counts a single row from.
    #[serde(default = "default_probe_collection")]
    pub probe_collection: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            probe_collection: default_probe_collection(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Optional color scheme override: "light" or "dark".
    #[serde(default)]
    pub theme: Option<String>,
}

fn default_base_url() -> String {
    "https://demo.freshcart.dev".to_string()
}

fn default_probe_collection() -> String {
    "products".to_string()
}

fn default_timeout() -> u32 {
    10
}
