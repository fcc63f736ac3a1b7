//! On-disk pidfile format and the file primitives behind it.
//!
//! A pidfile holds nothing but the decimal PID, no trailing newline. It is
//! published with temp file + rename so readers see either the old content,
//! the new content, or no file, and never a partial write.

use std::io::Write;
use std::path::Path;

use fs_err as fs;
use tempfile::NamedTempFile;

use crate::error::{PidFileError, Result};

/// Permission bits for a published pidfile: owner read/write, group and other read.
#[cfg(unix)]
pub const PIDFILE_MODE: u32 =
    (libc::S_IRUSR | libc::S_IWUSR | libc::S_IRGRP | libc::S_IROTH) as u32;

/// Reads the raw pidfile contents.
///
/// Returns `Ok(None)` when nothing exists at `path`. Any other failure
/// (permissions, I/O) is an error.
pub fn read_pid_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(PidFileError::io("reading pid file", err)),
    }
}

/// Parses the entire pidfile contents as a base-10 PID.
///
/// Nothing is trimmed: a trailing newline makes the content corrupt, as does
/// non-UTF-8 data. `0` never names an owner and also yields `None`.
pub fn parse_pid(contents: &[u8]) -> Option<u32> {
    let text = std::str::from_utf8(contents).ok()?;
    match text.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(pid) => Some(pid),
    }
}

/// Atomically replaces `path` with a pidfile containing `pid`.
///
/// The temp file is created next to `path` so the rename stays on one filesystem.
pub fn write_pid_atomic(path: &Path, pid: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        PidFileError::io(format!("creating temp file in {}", dir.display()), e)
    })?;

    tmp.write_all(pid.to_string().as_bytes()).map_err(|e| {
        PidFileError::io(format!("writing temp file for {}", path.display()), e)
    })?;

    tmp.flush().map_err(|e| {
        PidFileError::io(format!("flushing temp file for {}", path.display()), e)
    })?;

    tmp.as_file().sync_all().map_err(|e| {
        PidFileError::io(format!("syncing temp file for {}", path.display()), e)
    })?;

    tmp.persist(path).map_err(|e| {
        PidFileError::io(
            format!("persisting temp file to {}", path.display()),
            e.error,
        )
    })?;

    set_pidfile_mode(path)
}

#[cfg(unix)]
fn set_pidfile_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(PIDFILE_MODE))
        .map_err(|e| PidFileError::io("setting pid file permissions", e))
}

#[cfg(not(unix))]
fn set_pidfile_mode(_path: &Path) -> Result<()> {
    Ok(())
}
