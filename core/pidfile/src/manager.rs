//! The pidfile state machine.
//!
//! ```text
//! Unclaimed ──validate (no live owner)──▶ Unclaimed
//! Unclaimed ──validate (live owner)─────▶ Observed(pid)
//! Unclaimed | Observed(own) ──create────▶ Owned(own)
//! Owned(own) ──remove (content matches)─▶ Unclaimed
//! Observed(other) ──create──────────────▶ AlreadyRunning, no transition
//! ```
//!
//! An empty path disables every operation: nothing is read, written or removed.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PidFileError, Result};
use crate::guard::PidFileGuard;
use crate::process::{ProcessProbe, SystemProbe};
use crate::storage::{parse_pid, read_pid_file, write_pid_atomic};

/// A pidfile at a single path, plus the PID this instance last observed or claimed.
///
/// Construction performs no I/O. Instances are independent: an application can
/// hold several for different paths. Not thread-safe; callers serialize access.
#[derive(Debug)]
pub struct PidFile<P: ProcessProbe = SystemProbe> {
    path: PathBuf,
    observed_pid: Option<u32>,
    probe: P,
}

impl PidFile<SystemProbe> {
    /// Creates a pidfile handle for `path`. An empty path disables it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_probe(path, SystemProbe)
    }
}

impl<P: ProcessProbe> PidFile<P> {
    /// Creates a pidfile handle that asks `probe` about the process table.
    pub fn with_probe(path: impl Into<PathBuf>, probe: P) -> Self {
        Self {
            path: path.into(),
            observed_pid: None,
            probe,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False when constructed with an empty path.
    pub fn is_enabled(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }

    /// The PID found by [`validate`](Self::validate) or claimed by [`create`](Self::create).
    pub fn observed_pid(&self) -> Option<u32> {
        self.observed_pid
    }

    /// Looks for a live previous owner and records its PID.
    ///
    /// A missing file, unparsable content, or a PID with no matching process all
    /// leave the state untouched and succeed. Only a genuine read failure is an error.
    pub fn validate(&mut self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let Some(contents) = read_pid_file(&self.path)? else {
            debug!(path = %self.path.display(), "No pid file present");
            return Ok(());
        };

        let Some(pid) = parse_pid(&contents) else {
            debug!(path = %self.path.display(), "Ignoring pid file with unparsable content");
            return Ok(());
        };

        if !self.probe.exists(pid) {
            debug!(pid, path = %self.path.display(), "Ignoring stale pid file");
            return Ok(());
        }

        self.observed_pid = Some(pid);
        Ok(())
    }

    /// Claims the pidfile for the current process.
    ///
    /// Fails with [`PidFileError::AlreadyRunning`] if [`validate`](Self::validate)
    /// found a different live owner. Calling it again from the owning process is a no-op.
    pub fn create(&mut self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        self.validate()?;

        let current = self.probe.current_pid();
        match self.observed_pid {
            Some(pid) if pid == current => return Ok(()),
            Some(pid) => {
                return Err(PidFileError::AlreadyRunning {
                    pid,
                    path: self.path.clone(),
                })
            }
            None => {}
        }

        self.observed_pid = Some(current);
        write_pid_atomic(&self.path, current)?;

        debug!(pid = current, path = %self.path.display(), "Pid file claimed");
        Ok(())
    }

    /// Deletes the pidfile if it still names the PID this instance claimed.
    ///
    /// Best-effort: unreadable or foreign content is left alone and no error is reported.
    pub fn remove(&self) {
        if !self.is_enabled() {
            return;
        }

        let Ok(Some(contents)) = read_pid_file(&self.path) else {
            return;
        };

        let Some(pid) = parse_pid(&contents) else {
            return;
        };

        if Some(pid) != self.observed_pid {
            debug!(pid, path = %self.path.display(), "Pid file owned by another process, leaving it");
            return;
        }

        match fs_err::remove_file(&self.path) {
            Ok(()) => debug!(pid, path = %self.path.display(), "Pid file removed"),
            Err(err) => warn!(error = %err, "Failed to remove pid file"),
        }
    }

    /// Runs [`create`](Self::create) and returns a guard that removes the file on drop.
    pub fn claim(mut self) -> Result<PidFileGuard<P>> {
        self.create()?;
        Ok(PidFileGuard::new(self))
    }
}
