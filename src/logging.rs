use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{filter}': {source}")]
    BadFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Path of the log file, under the platform data directory.
pub fn log_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("freshcart").join("freshcart.log")
}

/// Initializes tracing with a file writer.
///
/// The TUI owns stdout, so all diagnostics go to a log file instead.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(&path).map_err(|e| LoggingError::OpenFile {
        path: path.clone(),
        source: e,
    })?;

    let env_filter = EnvFilter::try_new(filter).map_err(|e| LoggingError::BadFilter {
        filter: filter.to_string(),
        source: e,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
