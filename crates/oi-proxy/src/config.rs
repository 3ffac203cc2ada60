//! Launcher settings.
//!
//! The launcher takes no flags of its own, so everything configurable comes
//! from the environment:
//!
//! - `OI_PROXY_LOG`: log filter, `warn` by default
//! - `OI_PROXY_MODULES_ROOT`: directory to start the package search from
//! - `NODE_PATH`: extra package folders, searched last

use crate::error::Result;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

const ENV_PREFIX: &str = "OI_PROXY_";
const MODULES_ROOT_VAR: &str = "OI_PROXY_MODULES_ROOT";
const NODE_PATH_VAR: &str = "NODE_PATH";

/// Paths are taken verbatim from the environment, never through figment's
/// value parser: `1234` or `[build]` are valid directory names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub log:          String,
    #[serde(skip)]
    pub modules_root: Option<PathBuf>,
    #[serde(skip)]
    pub node_path:    Option<OsString>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log:          "warn".to_string(),
            modules_root: None,
            node_path:    None,
        }
    }
}

impl Settings {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).only(&["log"]))
    }

    pub fn from_figment(figment: Figment) -> figment::Result<Self> {
        let mut settings: Settings = figment.extract()?;
        settings.modules_root = raw_var(MODULES_ROOT_VAR).map(PathBuf::from);
        settings.node_path = raw_var(NODE_PATH_VAR);
        Ok(settings)
    }

    pub fn load() -> Result<Self> { Ok(Self::from_figment(Self::figment())?) }
}

fn raw_var(name: &str) -> Option<OsString> { env::var_os(name).filter(|v| !v.is_empty()) }
