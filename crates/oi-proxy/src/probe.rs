//! Install-time check that the current platform has a usable binary.

use crate::PREFIX;
use oi_proxy_resolve::{ModuleLookup, Resolver};
use std::io::{self, Write};

/// Resolves once and reports the outcome. Returns the exit status for the
/// install hook: 0 on success, 1 on failure. Nothing is launched.
pub fn probe<L, O, E>(resolver: &Resolver<L>, stdout: &mut O, stderr: &mut E) -> io::Result<i32>
where
    L: ModuleLookup,
    O: Write,
    E: Write,
{
    match resolver.resolve_binary_path() {
        Ok(path) => {
            writeln!(stdout, "{PREFIX} Using binary: {}", path.display())?;
            Ok(0)
        }
        Err(err) => {
            writeln!(stderr, "{PREFIX} {err}")?;
            Ok(1)
        }
    }
}
