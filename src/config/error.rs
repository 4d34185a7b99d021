//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Problems loading or checking `sitemap.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read sitemap config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid sitemap config")]
    Toml(#[from] toml::de::Error),

    #[error("sitemap config validation error: {0}")]
    Validation(String),
}
