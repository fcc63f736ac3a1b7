//! Scope-bound ownership of a claimed pidfile.

use crate::manager::PidFile;
use crate::process::{ProcessProbe, SystemProbe};

/// A claimed pidfile that is removed when the guard goes out of scope.
///
/// Removal follows [`PidFile::remove`]: if another process has rewritten the
/// file in the meantime, it is left in place.
#[derive(Debug)]
pub struct PidFileGuard<P: ProcessProbe = SystemProbe> {
    pid_file: PidFile<P>,
}

impl<P: ProcessProbe> PidFileGuard<P> {
    pub(crate) fn new(pid_file: PidFile<P>) -> Self {
        Self { pid_file }
    }

    pub fn pid_file(&self) -> &PidFile<P> {
        &self.pid_file
    }

    /// Removes the pidfile now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<P: ProcessProbe> Drop for PidFileGuard<P> {
    fn drop(&mut self) {
        self.pid_file.remove();
    }
}
