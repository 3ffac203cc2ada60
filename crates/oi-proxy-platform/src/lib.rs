//! Platform identity for the launcher.
//!
//! A [`PlatformIdentity`] is the pair of tags the package manager uses to
//! name a host: an operating system tag such as `linux` or `win32` and a CPU
//! architecture tag such as `x64` or `arm64`.

pub use arch::Arch;
pub use os::Os;
pub use platform::PlatformIdentity;

pub mod arch;
pub mod os;
mod platform;
