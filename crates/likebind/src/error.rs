#![forbid(unsafe_code)]

use likebind_widgets::ViewError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("view binding failed: {0}")]
    View(#[from] ViewError),
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install log subscriber: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}
