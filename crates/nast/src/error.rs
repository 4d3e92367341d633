//! CLI error types.

use nast_config::ConfigError;
use nast_transform::TransformError;
use nast_types::RecordMapError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Records(#[from] RecordMapError),

    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
