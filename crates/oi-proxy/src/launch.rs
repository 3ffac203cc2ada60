//! Runs the resolved binary in place of the launcher.

use crate::error::{Error, Result};
use oi_proxy_resolve::{ModuleLookup, Resolver};
use std::ffi::OsStr;
use std::process::{self, Command, ExitStatus, Stdio};

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl Termination {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Termination::Exited(code);
        }
        #[cfg(unix)]
        if let Some(signo) = status.signal() {
            return Termination::Signaled(signo);
        }
        Termination::Exited(0)
    }
}

/// Resolves the binary and runs it to completion.
///
/// `args` are passed through untouched and the child shares the launcher's
/// stdin, stdout and stderr. No child is started when resolution fails.
pub fn run<L, I, S>(resolver: &Resolver<L>, args: I) -> Result<Termination>
where
    L: ModuleLookup,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let path = resolver.resolve_binary_path()?;
    log::info!("launching {}", path.display());

    let mut child = Command::new(&path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Spawn {
            path: path.clone(),
            source,
        })?;

    #[cfg(unix)]
    let _shield = crate::signal::InteractiveShield::install();

    let status = child
        .wait()
        .map_err(|source| Error::Wait { path, source })?;

    let termination = Termination::from_status(status);
    log::debug!("child finished: {termination:?}");
    Ok(termination)
}

/// Ends the launcher the way the child ended.
pub fn exit_with(termination: Termination) -> ! {
    match termination {
        Termination::Exited(code) => process::exit(code),
        Termination::Signaled(signo) => {
            #[cfg(unix)]
            if let Err(err) = crate::signal::raise_default(signo) {
                log::warn!("cannot re-raise signal {signo}: {err}");
            }
            process::exit(128 + signo)
        }
    }
}
