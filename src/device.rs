//! Event device access
//!
//! Opens a `/dev/input/eventN` device and reads whole input records from
//! it. The device is opened non-blocking and reads go through `poll` on the
//! device fd plus an internal wake pipe, so a blocked read can be preempted
//! by `wake()` instead of waiting for the next keystroke.

use crate::error::{Error, Result};
use crate::event::{InputRecord, RECORD_SIZE};
use log::{info, warn};
use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::poll::{poll, PollFd, PollFlags};
use nix::unistd;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, FromRawFd};
use std::path::{Path, PathBuf};

/// Result of one record read.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A whole record was read.
    Record(InputRecord),
    /// The stream ended cleanly on a record boundary.
    End,
    /// `wake()` preempted the read before a record arrived.
    Interrupted,
}

/// Handle on one input event device.
#[derive(Debug)]
pub struct EventDevice {
    file: File,
    path: PathBuf,
    /// Wake pipe: writing to `wake_tx` makes a pending `read_record` return
    /// [`ReadOutcome::Interrupted`]
    wake_rx: File,
    wake_tx: File,
}

impl EventDevice {
    /// Open the device at `path` for reading.
    ///
    /// Reading `/dev/input/event*` normally requires root or membership in
    /// the `input` group, and observes keys system-wide, not just the
    /// controlling terminal.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(OFlag::O_NONBLOCK.bits())
            .open(path)
            .map_err(|e| Error::open(path, e))?;

        let (wake_rx, wake_tx) =
            unistd::pipe2(OFlag::O_CLOEXEC | OFlag::O_NONBLOCK).map_err(Error::WakePipe)?;

        info!("input device opened: {}", path.display());

        Ok(Self {
            file,
            path: path.to_path_buf(),
            wake_rx: unsafe { File::from_raw_fd(wake_rx) },
            wake_tx: unsafe { File::from_raw_fd(wake_tx) },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one whole record, blocking until data, end-of-stream, or a
    /// wake-up. Partial reads are accumulated; a stream that ends inside a
    /// record is an error.
    pub fn read_record(&self) -> Result<ReadOutcome> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;

        loop {
            let mut fds = [
                PollFd::new(&self.file, PollFlags::POLLIN),
                PollFd::new(&self.wake_rx, PollFlags::POLLIN),
            ];
            match poll(&mut fds, -1) {
                Ok(_) => {}
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(Error::Read(e)),
            }

            if fds[1].revents().map_or(false, |r| !r.is_empty()) {
                self.clear_wake();
                return Ok(ReadOutcome::Interrupted);
            }

            match unistd::read(self.file.as_raw_fd(), &mut buf[filled..]) {
                Ok(0) => {
                    return if filled == 0 {
                        Ok(ReadOutcome::End)
                    } else {
                        Err(Error::TruncatedRecord { got: filled })
                    };
                }
                Ok(n) => {
                    filled += n;
                    if filled == RECORD_SIZE {
                        return Ok(ReadOutcome::Record(InputRecord::from_bytes(&buf)));
                    }
                }
                Err(Errno::EAGAIN) | Err(Errno::EINTR) => continue,
                Err(e) => return Err(Error::Read(e)),
            }
        }
    }

    /// Preempt a pending `read_record`. Best-effort; used by `stop`.
    pub fn wake(&self) {
        if let Err(e) = (&self.wake_tx).write_all(&[1u8]) {
            warn!("wake pipe write failed: {}", e);
        }
    }

    /// Drain the wake pipe so a stale wake-up does not end the next run.
    pub(crate) fn clear_wake(&self) {
        let mut buf = [0u8; 16];
        while matches!((&self.wake_rx).read(&mut buf), Ok(n) if n > 0) {}
    }
}

/// List candidate event devices under `/dev/input`, sorted by path.
pub fn enumerate() -> Result<Vec<PathBuf>> {
    let dir = Path::new("/dev/input");
    let mut devices = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| Error::open(dir, e))? {
        let entry = entry.map_err(|e| Error::open(dir, e))?;
        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.starts_with("event") {
            devices.push(path);
        }
    }
    devices.sort();
    Ok(devices)
}
