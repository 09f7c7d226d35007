//! Terminal mode control
//!
//! Puts the controlling terminal into a non-echoing mode while key events
//! are being consumed, so keystrokes observed through the event device do
//! not also land in the foreground program as text. The [`Terminal`] trait
//! is the seam: [`Tty`] drives `/dev/tty` via termios, tests substitute
//! their own implementation.

use crate::error::{Error, Result};
use log::info;
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Terminal mode collaborator owned by the keyboard lifecycle.
pub trait Terminal: Send + Sync {
    /// Enter non-echoing raw input mode. Failure aborts `start`.
    fn enter_raw(&self) -> Result<()>;

    /// Restore the original mode. Must be harmless when nothing was entered
    /// or a previous restore already ran.
    fn restore(&self) -> Result<()>;

    /// Discard input buffered on the terminal (the echo of keys the event
    /// device already reported). Called once per processed record.
    fn flush_input(&self) -> Result<()>;
}

/// `/dev/tty` implementation of [`Terminal`].
pub struct Tty {
    file: File,
    /// Settings saved at open time, for restoration
    saved: Mutex<Termios>,
    /// Whether raw mode is currently entered
    raw: AtomicBool,
}

const TTY_PATH: &str = "/dev/tty";

impl Tty {
    /// Open the controlling terminal and save its current settings.
    pub fn open() -> Result<Self> {
        let path = Path::new(TTY_PATH);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| Error::open(path, e))?;

        let saved = termios::tcgetattr(&file).map_err(Error::Terminal)?;

        Ok(Self {
            file,
            saved: Mutex::new(saved),
            raw: AtomicBool::new(false),
        })
    }
}

impl Terminal for Tty {
    /// Switch to cbreak-style raw mode: no echo, no line buffering,
    /// byte-at-a-time reads. Signal keys keep working.
    fn enter_raw(&self) -> Result<()> {
        let mut raw = self.saved.lock().unwrap().clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        termios::tcsetattr(&self.file, SetArg::TCSAFLUSH, &raw).map_err(Error::Terminal)?;
        self.raw.store(true, Ordering::SeqCst);
        info!("terminal switched to raw mode");
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        if !self.raw.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        let saved = self.saved.lock().unwrap().clone();
        termios::tcsetattr(&self.file, SetArg::TCSAFLUSH, &saved).map_err(Error::Terminal)?;
        info!("terminal settings restored");
        Ok(())
    }

    fn flush_input(&self) -> Result<()> {
        termios::tcflush(&self.file, termios::FlushArg::TCIFLUSH).map_err(Error::Terminal)
    }
}

impl Drop for Tty {
    fn drop(&mut self) {
        // Restore original settings on every exit path
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Requires a controlling terminal; skipped in CI.
    #[test]
    #[ignore]
    fn test_open_and_roundtrip() {
        let tty = Tty::open().expect("no controlling terminal");
        tty.enter_raw().unwrap();
        tty.restore().unwrap();
        // Second restore is a no-op.
        tty.restore().unwrap();
    }
}
