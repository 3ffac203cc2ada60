//! Launcher for the oi-proxy native binary.
//!
//! Two entry points share this library:
//!
//! - `oi-proxy` resolves the binary for the running platform, runs it with
//!   the caller's arguments and standard streams, and exits the way the
//!   binary exited ([`launch`]).
//! - `oi-proxy-install` runs at package installation and only reports
//!   whether resolution succeeds ([`probe`]).

pub use config::Settings;
pub use error::{Error, Result};
pub use launch::Termination;

pub mod config;
mod error;
pub mod launch;
pub mod logging;
pub mod probe;
#[cfg(unix)]
mod signal;

use oi_proxy_platform::PlatformIdentity;
use oi_proxy_resolve::{ArtifactTable, NodeModulesLookup, Resolver};
use std::{env, fs, path::PathBuf};

/// Prefix of every line the launcher prints itself.
pub const PREFIX: &str = "[oi-proxy]";

/// Resolver for the running host, searching packages from the configured
/// root or from the launcher's own installation directory.
pub fn resolver(settings: &Settings) -> Result<Resolver<NodeModulesLookup>> {
    let base = match &settings.modules_root {
        Some(root) => root.clone(),
        None => install_dir()?,
    };

    let mut lookup = NodeModulesLookup::new(base);
    if let Some(node_path) = &settings.node_path {
        lookup = lookup.node_path(node_path);
    }

    Ok(Resolver::new(
        ArtifactTable::builtin(),
        PlatformIdentity::current(),
        lookup,
    ))
}

fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .and_then(fs::canonicalize)
        .map_err(Error::CurrentExe)?;
    Ok(exe.parent().map(PathBuf::from).unwrap_or(exe))
}
