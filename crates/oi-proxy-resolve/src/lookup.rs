//! Package lookup abstraction.
//!
//! [`ModuleLookup`] is the only contract between the resolver and the
//! package manager. It answers "what does the package named `identifier`
//! export?" and knows nothing about platforms or binaries.

use serde_json::Value;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The value a platform package exports. A well-formed package exports a
/// string holding the path of its binary.
pub type Export = Value;

const MODULES_DIR: &str = "node_modules";
const MANIFEST: &str = "package.json";
const BINARY_FIELD: &str = "binary";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Cannot find module '{0}'")]
    NotFound(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid package manifest {}: {source}", .path.display())]
    Manifest {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("package path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("{0}")]
    Other(String),
}

pub trait ModuleLookup {
    fn lookup(&self, identifier: &str) -> Result<Export, LookupError>;
}

impl<F> ModuleLookup for F
where
    F: Fn(&str) -> Result<Export, LookupError>,
{
    fn lookup(&self, identifier: &str) -> Result<Export, LookupError> { self(identifier) }
}

/// Finds installed packages the way the package manager does: in the
/// `node_modules` directory of the base directory and each of its
/// ancestors, then in each global folder.
///
/// A platform package names its binary in the `"binary"` field of its
/// `package.json`, relative to the package directory. The export is a
/// string, so a package installed under a non-UTF-8 path is reported as
/// [`LookupError::NonUtf8Path`].
#[derive(Debug, Clone)]
pub struct NodeModulesLookup {
    base:    PathBuf,
    globals: Vec<PathBuf>,
}

impl NodeModulesLookup {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base:    base.into(),
            globals: Vec::new(),
        }
    }

    /// Extra folders searched after every `node_modules` ancestor, in order.
    pub fn global_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.globals.extend(paths);
        self
    }

    /// Global folders from a `NODE_PATH`-style list.
    pub fn node_path(self, value: impl AsRef<OsStr>) -> Self {
        let paths: Vec<PathBuf> = env::split_paths(value.as_ref())
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        self.global_paths(paths)
    }

    fn candidates<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        let local = self
            .base
            .ancestors()
            .filter(|dir| dir.file_name() != Some(OsStr::new(MODULES_DIR)))
            .map(|dir| dir.join(MODULES_DIR));

        local
            .chain(self.globals.iter().cloned())
            .map(move |modules| modules.join(identifier))
    }

    fn read_export(&self, package_dir: &Path, manifest: &Path) -> Result<Export, LookupError> {
        let content = fs::read_to_string(manifest).map_err(|source| LookupError::Read {
            path: manifest.to_path_buf(),
            source,
        })?;
        let manifest_json: Value =
            serde_json::from_str(&content).map_err(|source| LookupError::Manifest {
                path: manifest.to_path_buf(),
                source,
            })?;

        let export = match manifest_json.get(BINARY_FIELD) {
            Some(Value::String(binary)) => {
                let path = package_dir.join(binary);
                let path = path.to_str().ok_or_else(|| LookupError::NonUtf8Path(path.clone()))?;
                Value::String(path.to_string())
            }
            Some(other) => other.clone(),
            None => Value::Null,
        };
        Ok(export)
    }
}

impl ModuleLookup for NodeModulesLookup {
    fn lookup(&self, identifier: &str) -> Result<Export, LookupError> {
        for package_dir in self.candidates(identifier) {
            let manifest = package_dir.join(MANIFEST);
            if manifest.is_file() {
                log::debug!("found {identifier} at {}", package_dir.display());
                return self.read_export(&package_dir, &manifest);
            }
        }
        Err(LookupError::NotFound(identifier.to_string()))
    }
}
