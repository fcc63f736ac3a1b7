//! # pidfile-manager
//!
//! Claims a PID file on behalf of a daemon so that a second instance refuses to
//! start, and so init scripts and supervisors can find the running process.
//!
//! ## Design Principles
//!
//! - **Crash-safe writes**: the pidfile is written to a temp file in the same
//!   directory and renamed into place, so it is never observed half-written.
//! - **Lenient startup**: a missing, empty, corrupt, or stale pidfile never blocks a claim.
//! - **Careful cleanup**: [`PidFile::remove`] only deletes a file that still names
//!   the PID this instance claimed, and never reports errors.
//! - **Synchronous, not thread-safe**: every call is a short blocking sequence of
//!   filesystem operations. Callers provide their own synchronization.
//! - **Weak liveness**: a live owner is any process holding the recorded PID.
//!   PID reuse can make a stale file look live; see [`process`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pidfile_manager::PidFile;
//!
//! let mut pid_file = PidFile::new("/run/mydaemon.pid");
//! if let Err(err) = pid_file.create() {
//!     eprintln!("{err}");
//!     std::process::exit(1);
//! }
//!
//! // ... run the daemon ...
//!
//! pid_file.remove();
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod manager;
pub mod process;
pub mod storage;

pub use config::PidFileConfig;
pub use error::{PidFileError, Result};
pub use guard::PidFileGuard;
pub use manager::PidFile;
pub use process::{ProcessProbe, SystemProbe};
