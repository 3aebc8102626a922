//! Power-save inhibition via the Termux wake-lock commands.
//!
//! Best-effort by contract: acquisition or release failing is a warning,
//! never an error. [`WakeGuard`] scopes the lock to the network phase and
//! releases on every exit path through `Drop`, including panics and a
//! cancelled sequence being dropped mid-await.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Cap on how long a wake-lock subprocess may run before it is killed.
/// A wedged child must never stall the scheduler.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Platform wake-lock capability. `true` means the lock state changed.
pub trait WakeLock {
    fn acquire(&self) -> bool;
    fn release(&self) -> bool;
}

/// Wake-lock backed by `termux-wake-lock` / `termux-wake-unlock` when the
/// Termux environment is present, no-op otherwise.
#[derive(Debug, Clone, Copy)]
pub enum SystemWakeLock {
    Termux,
    Disabled,
}

impl SystemWakeLock {
    /// Detect the runtime environment.
    pub fn detect() -> Self {
        if Path::new("/data/data/com.termux").exists() {
            SystemWakeLock::Termux
        } else {
            SystemWakeLock::Disabled
        }
    }
}

fn run_termux(program: &str) -> bool {
    wait_bounded(&mut Command::new(program), COMMAND_TIMEOUT)
}

/// Spawn `command` and wait for it to exit, killing it once `timeout`
/// elapses. Returns `true` only on a clean zero exit within the deadline.
fn wait_bounded(command: &mut Command, timeout: Duration) -> bool {
    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = match command.stdout(Stdio::null()).stderr(Stdio::null()).spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!("{program} failed: {err}");
            return false;
        }
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return true,
            Ok(Some(status)) => {
                warn!("{program} exited with {status}");
                return false;
            }
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                warn!("{program} timed out after {:.1}s", timeout.as_secs_f32());
                return false;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(50)),
            Err(err) => {
                warn!("{program} failed: {err}");
                return false;
            }
        }
    }
}

impl WakeLock for SystemWakeLock {
    fn acquire(&self) -> bool {
        match self {
            SystemWakeLock::Termux => {
                let held = run_termux("termux-wake-lock");
                if held {
                    debug!("wake-lock acquired");
                }
                held
            }
            SystemWakeLock::Disabled => false,
        }
    }

    fn release(&self) -> bool {
        match self {
            SystemWakeLock::Termux => {
                let released = run_termux("termux-wake-unlock");
                if released {
                    debug!("wake-lock released");
                }
                released
            }
            SystemWakeLock::Disabled => false,
        }
    }
}

/// RAII scope for a wake lock. Releases on drop regardless of how the
/// scope exits.
pub struct WakeGuard<'a, W: WakeLock> {
    lock: &'a W,
}

impl<'a, W: WakeLock> WakeGuard<'a, W> {
    pub fn acquire(lock: &'a W) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl<W: WakeLock> Drop for WakeGuard<'_, W> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingLock {
        acquired: AtomicUsize,
        released: AtomicUsize,
    }

    impl WakeLock for CountingLock {
        fn acquire(&self) -> bool {
            self.acquired.fetch_add(1, Ordering::SeqCst);
            true
        }
        fn release(&self) -> bool {
            self.released.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[test]
    fn guard_releases_on_scope_exit() {
        let lock = CountingLock::default();
        {
            let _guard = WakeGuard::acquire(&lock);
            assert_eq!(lock.acquired.load(Ordering::SeqCst), 1);
            assert_eq!(lock.released.load(Ordering::SeqCst), 0);
        }
        assert_eq!(lock.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn guard_releases_on_panic() {
        let lock = CountingLock::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = WakeGuard::acquire(&lock);
            panic!("sequence blew up");
        }));
        assert!(result.is_err());
        assert_eq!(lock.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_lock_is_inert() {
        let lock = SystemWakeLock::Disabled;
        assert!(!lock.acquire());
        assert!(!lock.release());
    }

    #[cfg(unix)]
    #[test]
    fn bounded_wait_reports_exit_status() {
        assert!(wait_bounded(&mut Command::new("true"), Duration::from_secs(5)));
        assert!(!wait_bounded(&mut Command::new("false"), Duration::from_secs(5)));
    }

    #[cfg(unix)]
    #[test]
    fn bounded_wait_kills_a_wedged_command() {
        let start = Instant::now();
        let mut command = Command::new("sleep");
        command.arg("60");
        assert!(!wait_bounded(&mut command, Duration::from_millis(200)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
