//! Crate error type
//!
//! Failures fall into three groups: setup (open/raw-mode entry, reported
//! synchronously), loop-ending (read/flush while running, captured and
//! readable via `Keyboard::last_error`), and shutdown-path (stop/close,
//! surfaced to the caller). Variants carry `Errno` so the type stays `Clone`
//! and captured errors can be handed out as owned values.

use nix::errno::Errno;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A device or terminal file could not be opened.
    #[error("cannot open {}: {errno}", path.display())]
    Open { path: PathBuf, errno: Errno },

    /// A termios operation (raw-mode entry, restore, input flush) failed.
    #[error("terminal configuration failed: {0}")]
    Terminal(Errno),

    /// Reading from the event device failed.
    #[error("event device read failed: {0}")]
    Read(Errno),

    /// The wake pipe used to interrupt blocking reads could not be set up.
    #[error("wake pipe setup failed: {0}")]
    WakePipe(Errno),

    /// The event stream ended in the middle of a record.
    #[error("truncated input record: got {got} of {} bytes", crate::event::RECORD_SIZE)]
    TruncatedRecord { got: usize },

    /// `start` was called while the reader loop is already running.
    #[error("reader loop is already running")]
    AlreadyRunning,

    /// The reader thread could not be spawned.
    #[error("cannot spawn reader thread: {0}")]
    ThreadSpawn(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map an `std::io::Error` from opening `path` to [`Error::Open`].
    pub(crate) fn open(path: &std::path::Path, err: std::io::Error) -> Self {
        let errno = err.raw_os_error().map(Errno::from_i32).unwrap_or(Errno::EIO);
        Error::Open {
            path: path.to_path_buf(),
            errno,
        }
    }
}
