use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),

    #[error(transparent)]
    Resolve(#[from] oi_proxy_resolve::Error),

    #[error("cannot locate the launcher executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write the install report: {0}")]
    Report(#[source] std::io::Error),

    #[error("failed waiting for {}: {source}", .path.display())]
    Wait {
        path:   PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
