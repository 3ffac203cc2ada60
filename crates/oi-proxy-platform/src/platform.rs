use crate::{arch, os, Arch, Os};
use std::fmt;

/// The (operating system, architecture) pair of a host.
///
/// Read once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformIdentity {
    os:   Os,
    arch: Arch,
}

impl PlatformIdentity {
    pub fn new(os: Os, arch: Arch) -> Self { Self { os, arch } }

    /// Identity of the running host.
    pub fn current() -> Self { Self::new(os::detect(), arch::detect()) }

    pub fn os(&self) -> Os { self.os }

    pub fn arch(&self) -> Arch { self.arch }
}

impl fmt::Display for PlatformIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
