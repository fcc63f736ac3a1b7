//! Settings block for applications that configure their pidfile from a config file.
//!
//! ```toml
//! [pid_file]
//! path = "/run/mydaemon.pid"
//! ```
//!
//! A missing block or an empty path disables the pidfile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::manager::PidFile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidFileConfig {
    /// Location of the pidfile. Empty means disabled.
    pub path: PathBuf,
}

impl PidFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_enabled(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }

    /// Builds the pidfile handle. No I/O is performed.
    pub fn into_pid_file(self) -> PidFile {
        PidFile::new(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = PidFileConfig::default();
        assert!(!config.is_enabled());
        assert!(!config.into_pid_file().is_enabled());
    }

    #[test]
    fn test_deserialize_with_path() {
        let config: PidFileConfig =
            serde_json::from_str(r#"{"path":"/run/mydaemon.pid"}"#).unwrap();
        assert!(config.is_enabled());
        assert_eq!(config, PidFileConfig::new("/run/mydaemon.pid"));
    }

    #[test]
    fn test_deserialize_missing_path_is_disabled() {
        let config: PidFileConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_into_pid_file_keeps_path() {
        let pid_file = PidFileConfig::new("/run/mydaemon.pid").into_pid_file();
        assert_eq!(pid_file.path(), std::path::Path::new("/run/mydaemon.pid"));
        assert_eq!(pid_file.observed_pid(), None);
    }
}
