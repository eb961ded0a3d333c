#![forbid(unsafe_code)]

//! Log subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set.
/// With `json`, each event is one JSON object per line.
pub fn init(default_filter: &str, json: bool) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(AppError::Logging)
}

