//! Binary resolution for the oi-proxy launcher.
//!
//! # Architecture
//!
//! Resolution is a mechanism over two injected pieces: an [`ArtifactTable`]
//! naming the platform package for each supported host, and a
//! [`ModuleLookup`] that turns a package name into whatever that package
//! exports. The [`Resolver`] validates the export and checks that the
//! binary exists on disk.
//!
//! # Example
//!
//! ```
//! use oi_proxy_platform::{Arch, Os, PlatformIdentity};
//! use oi_proxy_resolve::{ArtifactTable, Error, Export, LookupError, Resolver};
//!
//! let lookup = |id: &str| -> Result<Export, LookupError> {
//!     Err(LookupError::NotFound(id.to_string()))
//! };
//! let platform = PlatformIdentity::new(Os::Linux, Arch::Arm);
//! let resolver = Resolver::new(ArtifactTable::builtin(), platform, lookup);
//!
//! assert!(matches!(
//!     resolver.resolve_binary_path(),
//!     Err(Error::UnsupportedArchitecture { .. })
//! ));
//! ```

pub use error::{Error, Result};
pub use lookup::{Export, LookupError, ModuleLookup, NodeModulesLookup};
pub use resolver::Resolver;
pub use table::ArtifactTable;

mod error;
mod lookup;
mod resolver;
mod table;
