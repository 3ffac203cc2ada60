//! Turns the host platform into a validated binary path.

use crate::error::{Error, Result};
use crate::lookup::ModuleLookup;
use crate::table::ArtifactTable;
use oi_proxy_platform::PlatformIdentity;
use std::path::PathBuf;

/// Resolves the native binary for one platform.
///
/// Holds no cache: every call repeats the lookup and the existence check.
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    table:    ArtifactTable,
    platform: PlatformIdentity,
    lookup:   L,
}

impl<L> Resolver<L>
where
    L: ModuleLookup,
{
    pub fn new(table: ArtifactTable, platform: PlatformIdentity, lookup: L) -> Self {
        Self {
            table,
            platform,
            lookup,
        }
    }

    /// Path of the binary for this platform.
    ///
    /// The path existed when checked; nothing keeps it that way.
    pub fn resolve_binary_path(&self) -> Result<PathBuf> {
        let package = self.table.identifier_for(&self.platform)?;
        log::debug!("platform {} uses package {package}", self.platform);

        let export = self
            .lookup
            .lookup(package)
            .map_err(|source| Error::DependencyLookupFailed {
                package: package.to_string(),
                source,
            })?;

        let path = export
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| Error::InvalidExport(package.to_string()))?;

        if !path.exists() {
            return Err(Error::BinaryNotFound(path));
        }

        log::debug!("resolved binary {}", path.display());
        Ok(path)
    }
}
