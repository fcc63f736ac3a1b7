//! Error types for pidfile operations.
//!
//! Absence and corruption of a pidfile are not errors (see [`crate::PidFile::validate`]).
//! What remains is genuine I/O failure and an ownership conflict with another
//! live process, which callers usually want to report differently.

use std::path::PathBuf;

/// All errors that can occur while validating or claiming a pidfile.
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    // ─────────────────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────────────────
    #[error("Already running on PID {pid} (or pid file '{}' is stale)", path.display())]
    AlreadyRunning { pid: u32, path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────
    // I/O
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PidFileError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PidFileError::Io {
            context: context.into(),
            source,
        }
    }

    /// True when another live process owns the pidfile.
    pub fn is_already_running(&self) -> bool {
        matches!(self, PidFileError::AlreadyRunning { .. })
    }

    /// The PID of the conflicting owner, if this is an ownership conflict.
    pub fn conflicting_pid(&self) -> Option<u32> {
        match self {
            PidFileError::AlreadyRunning { pid, .. } => Some(*pid),
            PidFileError::Io { .. } => None,
        }
    }
}

/// Convenience type alias for Results using PidFileError.
pub type Result<T> = std::result::Result<T, PidFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_running_message_names_pid_and_path() {
        let err = PidFileError::AlreadyRunning {
            pid: 4242,
            path: PathBuf::from("/run/app.pid"),
        };
        assert_eq!(
            err.to_string(),
            "Already running on PID 4242 (or pid file '/run/app.pid' is stale)"
        );
        assert!(err.is_already_running());
        assert_eq!(err.conflicting_pid(), Some(4242));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PidFileError::io("reading pid file", source);

        assert!(!err.is_already_running());
        assert_eq!(err.conflicting_pid(), None);
        assert!(err.to_string().contains("reading pid file"));
        let inner = std::error::Error::source(&err).unwrap();
        assert!(inner.to_string().contains("denied"));
    }
}
