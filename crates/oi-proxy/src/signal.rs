//! Signal dispositions around a running child.

use nix::sys::signal::{self, SigHandler, SigSet, Signal};

/// Signals the terminal sends to the whole foreground process group.
const INTERACTIVE: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];

/// Ignores interactive signals while alive, restoring the previous
/// handlers on drop.
///
/// Must be created after the child is spawned: ignored dispositions survive
/// `exec`, and the child has to keep the defaults.
pub(crate) struct InteractiveShield {
    previous: Vec<(Signal, SigHandler)>,
}

impl InteractiveShield {
    pub(crate) fn install() -> Self {
        let previous = INTERACTIVE
            .iter()
            .filter_map(|&sig| {
                // SAFETY: SIG_IGN installs no code that could run in signal context.
                let prev = unsafe { signal::signal(sig, SigHandler::SigIgn) }.ok()?;
                Some((sig, prev))
            })
            .collect();
        Self { previous }
    }
}

impl Drop for InteractiveShield {
    fn drop(&mut self) {
        for &(sig, handler) in &self.previous {
            // SAFETY: restores a handler that was installed before the shield.
            let _ = unsafe { signal::signal(sig, handler) };
        }
    }
}

#[cfg(test)]
pub(crate) static DISPOSITION_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Kills the current process with `signo` under its default disposition.
///
/// Returns only if the signal is unknown or its default action does not
/// terminate the process.
pub(crate) fn raise_default(signo: i32) -> nix::Result<()> {
    let sig = Signal::try_from(signo)?;

    // SAFETY: SIG_DFL installs no code that could run in signal context.
    unsafe { signal::signal(sig, SigHandler::SigDfl)? };

    let mut unblock = SigSet::empty();
    unblock.add(sig);
    unblock.thread_unblock()?;

    signal::raise(sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_restores_previous_handlers() {
        let _lock = DISPOSITION_LOCK.lock();
        let before = unsafe { signal::signal(Signal::SIGQUIT, SigHandler::SigDfl) }.unwrap();
        {
            let _shield = InteractiveShield::install();
            let during = unsafe { signal::signal(Signal::SIGQUIT, SigHandler::SigIgn) }.unwrap();
            assert_eq!(during, SigHandler::SigIgn);
        }
        let after = unsafe { signal::signal(Signal::SIGQUIT, before) }.unwrap();
        assert_eq!(after, SigHandler::SigDfl);
    }

    #[test]
    fn test_unknown_signal_is_rejected() {
        assert!(raise_default(0).is_err());
        assert!(raise_default(-1).is_err());
    }
}
