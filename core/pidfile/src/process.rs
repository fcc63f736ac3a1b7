//! Process table queries used to decide whether a pidfile owner is still around.
//!
//! # Known limitation
//!
//! [`SystemProbe::exists`] only asks whether *some* process currently holds the PID.
//! Operating systems reuse PIDs, so a stale pidfile can point at an unrelated
//! process that happens to have the same id, and that process will be reported
//! as a live owner. No start time or executable name is compared. This is good
//! enough to prevent an accidental double launch; it is not a security boundary.

use sysinfo::{Pid, ProcessRefreshKind, System};

/// Answers the two questions a pidfile needs from the OS process table.
pub trait ProcessProbe {
    /// True if a process with this PID can currently be resolved.
    fn exists(&self, pid: u32) -> bool;

    /// PID of the calling process.
    fn current_pid(&self) -> u32;
}

/// The host process table, queried through `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ProcessProbe for SystemProbe {
    fn exists(&self, pid: u32) -> bool {
        // Refresh only this PID instead of scanning every process.
        let mut sys = System::new();
        let sys_pid = Pid::from(pid as usize);
        sys.refresh_process_specifics(sys_pid, ProcessRefreshKind::new());
        sys.process(sys_pid).is_some()
    }

    fn current_pid(&self) -> u32 {
        std::process::id()
    }
}
