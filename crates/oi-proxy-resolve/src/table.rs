//! Platform to package mapping.

use crate::error::{Error, Result};
use oi_proxy_platform::PlatformIdentity;
use std::collections::BTreeMap;

const BUILTIN: &[(&str, &str, &str)] = &[
    ("darwin", "arm64", "@oi-proxy/proxy-darwin-arm64"),
    ("darwin", "x64", "@oi-proxy/proxy-darwin-amd64"),
    ("linux", "x64", "@oi-proxy/proxy-linux-amd64"),
    ("win32", "x64", "@oi-proxy/proxy-win32-amd64"),
];

/// OS tag -> architecture tag -> platform package name.
///
/// Every identifier is non-empty; the table cannot be changed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTable {
    platforms: BTreeMap<String, BTreeMap<String, String>>,
}

impl ArtifactTable {
    /// The packages published alongside the launcher.
    pub fn builtin() -> Self {
        let mut platforms: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (os, arch, package) in BUILTIN {
            platforms
                .entry(os.to_string())
                .or_default()
                .insert(arch.to_string(), package.to_string());
        }
        Self { platforms }
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut platforms: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (os, arch, package) in entries {
            let (os, arch, package) = (os.into(), arch.into(), package.into());
            if package.is_empty() {
                return Err(Error::EmptyIdentifier { platform: os, arch });
            }
            platforms.entry(os).or_default().insert(arch, package);
        }
        Ok(Self { platforms })
    }

    /// Package name for `platform`, or the reason there is none.
    pub fn identifier_for(&self, platform: &PlatformIdentity) -> Result<&str> {
        let os = platform.os().tag();
        let arch = platform.arch().tag();

        let targets = self
            .platforms
            .get(os)
            .ok_or_else(|| Error::UnsupportedPlatform(os.to_string()))?;

        targets
            .get(arch)
            .map(String::as_str)
            .ok_or_else(|| Error::UnsupportedArchitecture {
                platform: os.to_string(),
                arch:     arch.to_string(),
            })
    }
}
