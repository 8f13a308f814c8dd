//! Portal error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("carousel needs at least one slide")]
    NoSlides,

    #[error("autoplay period must be greater than zero")]
    ZeroAutoplayPeriod,

    #[error("navigation entry has an empty label")]
    EmptyNavLabel,

    #[error("duplicate navigation entry: {0}")]
    DuplicateNavEntry(String),

    #[error("invalid path {path:?} in {owner}: paths must start with '/'")]
    InvalidPath { owner: String, path: String },

    #[error("no page registered at {0}")]
    UnknownRoute(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type PortalResult<T> = Result<T, PortalError>;
