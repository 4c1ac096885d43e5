//! Error types for the console.

use crate::api_client::ApiClientError;
use crate::config::ConfigError;
use crate::table::ExportError;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
