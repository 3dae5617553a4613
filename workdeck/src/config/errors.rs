use thiserror::Error;

/// Errors emitted while reading the shell configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
}
