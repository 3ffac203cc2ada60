//! Error types for binary resolution.

use crate::lookup::LookupError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Unsupported architecture: {platform}/{arch}")]
    UnsupportedArchitecture { platform: String, arch: String },

    #[error(
        "Failed to load optional dependency \"{package}\". Run \"npm install oi-proxy\" again or publish the platform package. Original error: {source}"
    )]
    DependencyLookupFailed {
        package: String,
        #[source]
        source:  LookupError,
    },

    #[error("Package \"{0}\" did not export a binary path")]
    InvalidExport(String),

    #[error("Binary not found at \"{}\". Try reinstalling the package.", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("empty package identifier for {platform}/{arch}")]
    EmptyIdentifier { platform: String, arch: String },
}

pub type Result<T> = std::result::Result<T, Error>;
