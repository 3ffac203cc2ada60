//! Architecture detection.

use std::fmt;

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X64,
    Arm64,
    Ia32,
    Arm,
    Ppc64,
    S390x,
    Riscv64,
    Loong64,
    Mips,
    Other(&'static str),
}

impl Arch {
    /// Map a Rust target architecture (`std::env::consts::ARCH`) to an [`Arch`].
    pub fn from_target(arch: &'static str) -> Self {
        match arch {
            "x86_64" => Arch::X64,
            "aarch64" => Arch::Arm64,
            "x86" => Arch::Ia32,
            "arm" => Arch::Arm,
            "powerpc64" => Arch::Ppc64,
            "s390x" => Arch::S390x,
            "riscv64" => Arch::Riscv64,
            "loongarch64" => Arch::Loong64,
            "mips" => Arch::Mips,
            other => Arch::Other(other),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
            Arch::Ia32 => "ia32",
            Arch::Arm => "arm",
            Arch::Ppc64 => "ppc64",
            Arch::S390x => "s390x",
            Arch::Riscv64 => "riscv64",
            Arch::Loong64 => "loong64",
            Arch::Mips => "mips",
            Arch::Other(name) => *name,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.tag()) }
}

/// Detect the architecture the launcher was built for.
pub fn detect() -> Arch { Arch::from_target(std::env::consts::ARCH) }
