//! Operating system detection.

use std::fmt;

/// Operating systems, named the way the package manager names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Darwin,
    Linux,
    Win32,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Android,
    Aix,
    SunOs,
    Other(&'static str),
}

impl Os {
    /// Map a Rust target OS name (`std::env::consts::OS`) to an [`Os`].
    pub fn from_target(os: &'static str) -> Self {
        match os {
            "macos" => Os::Darwin,
            "linux" => Os::Linux,
            "windows" => Os::Win32,
            "freebsd" => Os::FreeBsd,
            "openbsd" => Os::OpenBsd,
            "netbsd" => Os::NetBsd,
            "android" => Os::Android,
            "aix" => Os::Aix,
            "solaris" | "illumos" => Os::SunOs,
            other => Os::Other(other),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Win32 => "win32",
            Os::FreeBsd => "freebsd",
            Os::OpenBsd => "openbsd",
            Os::NetBsd => "netbsd",
            Os::Android => "android",
            Os::Aix => "aix",
            Os::SunOs => "sunos",
            Os::Other(name) => *name,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.tag()) }
}

/// Detect the operating system the launcher was built for.
pub fn detect() -> Os { Os::from_target(std::env::consts::OS) }
