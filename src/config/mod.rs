mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppearanceConfig, BackendConfig, Config};
