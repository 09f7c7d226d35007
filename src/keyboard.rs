//! Keyboard lifecycle and reader loop
//!
//! One background thread per [`Keyboard`] consumes raw records from the
//! event device and maintains the authoritative key-state map; foreground
//! callers query state and drain the notification mailbox concurrently.
//! `start` spawns the thread, `stop` preempts and joins it, and the
//! terminal is restored on every exit path.

use crate::device::{EventDevice, ReadOutcome};
use crate::error::{Error, Result};
use crate::event::{InputRecord, KeyAction};
use crate::keycodes::KeyCode;
use crate::mailbox::{Events, Mailbox};
use crate::state::KeyStates;
use crate::terminal::{Terminal, Tty};
use log::{debug, trace, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// State shared between the lifecycle surface and the reader thread.
struct Shared {
    states: KeyStates,
    /// Current run's mailbox; replaced by each `start`
    mailbox: Mutex<Arc<Mailbox>>,
    running: AtomicBool,
    /// The error (if any) that ended the current run. Write-once per run.
    last_error: Mutex<Option<Error>>,
}

/// Access to system-wide keyboard key state.
///
/// Reads key events directly from a `/dev/input/eventN` device, so events
/// are observed from the entire system, not just the terminal the program
/// runs in, and read access to the device (root or the `input` group) is
/// required.
///
/// All methods take `&self`; the handle can be shared across threads.
pub struct Keyboard {
    device: Arc<EventDevice>,
    terminal: Arc<dyn Terminal>,
    shared: Arc<Shared>,
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl Keyboard {
    /// Open the event device at `path` and the controlling terminal at
    /// `/dev/tty`. Either failure is reported here and nothing starts.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let tty = Tty::open()?;
        Self::open_with_terminal(path, tty)
    }

    /// Like [`open`](Self::open), with a caller-supplied [`Terminal`]
    /// implementation owning terminal-mode concerns.
    pub fn open_with_terminal<P, T>(path: P, terminal: T) -> Result<Self>
    where
        P: AsRef<Path>,
        T: Terminal + 'static,
    {
        let device = EventDevice::open(path)?;
        Ok(Self {
            device: Arc::new(device),
            terminal: Arc::new(terminal),
            shared: Arc::new(Shared {
                states: KeyStates::new(),
                mailbox: Mutex::new(Arc::new(Mailbox::closed())),
                running: AtomicBool::new(false),
                last_error: Mutex::new(None),
            }),
            reader: Mutex::new(None),
        })
    }

    /// Put the terminal into raw mode and spawn the reader thread.
    ///
    /// Key state from a previous run is cleared, a fresh event stream is
    /// installed, and the call returns immediately. Fails without starting
    /// anything if raw-mode entry fails, and with
    /// [`Error::AlreadyRunning`] if the loop is already running.
    pub fn start(&self) -> Result<()> {
        if self.shared.running.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyRunning);
        }
        if let Err(e) = self.terminal.enter_raw() {
            self.shared.running.store(false, Ordering::SeqCst);
            return Err(e);
        }

        // Join the previous run's thread (long finished once the running
        // flag is clear) and drop any stale wake-up it left behind.
        if let Some(handle) = self.reader.lock().unwrap().take() {
            let _ = handle.join();
        }
        self.device.clear_wake();

        self.shared.states.clear();
        *self.shared.last_error.lock().unwrap() = None;
        let mailbox = Arc::new(Mailbox::new());
        *self.shared.mailbox.lock().unwrap() = mailbox.clone();

        let device = self.device.clone();
        let terminal = self.terminal.clone();
        let shared = self.shared.clone();
        let spawned = thread::Builder::new()
            .name("evkey-reader".into())
            .spawn(move || reader_loop(device, terminal, shared, mailbox));
        match spawned {
            Ok(handle) => {
                *self.reader.lock().unwrap() = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.shared.running.store(false, Ordering::SeqCst);
                let _ = self.terminal.restore();
                Err(Error::ThreadSpawn(e.to_string()))
            }
        }
    }

    /// Signal the reader loop to stop, wait for it to finish, and restore
    /// the terminal. Idempotent; a second call is a no-op. Safe to call
    /// from the thread consuming [`events`](Self::events).
    pub fn stop(&self) -> Result<()> {
        self.shared.running.store(false, Ordering::SeqCst);
        self.device.wake();
        let handle = self.reader.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        self.terminal.restore()
    }

    /// Stop the loop and release the device and terminal handles.
    /// Best-effort: cleanup continues past failures and the last one is
    /// surfaced.
    pub fn close(self) -> Result<()> {
        self.stop()
        // Device and terminal close when `self` drops.
    }

    /// True if the most recent transition for `key` was a press.
    ///
    /// Keys held down when the loop stopped stay recorded as down (the loop
    /// can no longer observe their release); state resets on the next
    /// `start`.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.shared.states.is_down(key)
    }

    /// Snapshot of all keys currently down, sorted by code.
    pub fn pressed(&self) -> Vec<KeyCode> {
        self.shared.states.pressed()
    }

    /// Notification stream for the current run: yields the most recently
    /// changed key and ends when the loop stops. Call after `start`; each
    /// run gets a fresh stream. At most one concurrent consumer is
    /// supported.
    pub fn events(&self) -> Events {
        Events::new(self.shared.mailbox.lock().unwrap().clone())
    }

    /// The error that ended the reader loop, if it ended on one. `None`
    /// while the loop runs or after a clean stop/end-of-stream.
    pub fn last_error(&self) -> Option<Error> {
        self.shared.last_error.lock().unwrap().clone()
    }

    /// Whether the reader loop is currently running.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    /// Path of the underlying event device.
    pub fn device_path(&self) -> &Path {
        self.device.path()
    }
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Apply one record to the key-state map and the mailbox.
///
/// Non-key records and repeats change nothing: a repeat only means the key
/// is still held, not that a transition occurred.
fn apply_record(record: &InputRecord, states: &KeyStates, mailbox: &Mailbox) {
    if !record.is_key() {
        trace!("ignoring record of kind {:#04x}", record.kind);
        return;
    }
    let action = record.action();
    if action == KeyAction::Repeat {
        return;
    }
    let key = record.key_code();
    states.set_down(key, action.is_press());
    mailbox.post(key);
}

fn reader_loop(
    device: Arc<EventDevice>,
    terminal: Arc<dyn Terminal>,
    shared: Arc<Shared>,
    mailbox: Arc<Mailbox>,
) {
    debug!("reader loop started on {}", device.path().display());
    let mut error: Option<Error> = None;

    while shared.running.load(Ordering::SeqCst) {
        match device.read_record() {
            Ok(ReadOutcome::Record(record)) => {
                apply_record(&record, &shared.states, &mailbox);
                // Drop the keystroke's echo from the terminal stream.
                if let Err(e) = terminal.flush_input() {
                    warn!("terminal flush failed, stopping reader: {}", e);
                    error = Some(e);
                    break;
                }
            }
            // Wake-up: the running flag is re-checked at the top.
            Ok(ReadOutcome::Interrupted) => continue,
            Ok(ReadOutcome::End) => {
                debug!("input stream ended");
                break;
            }
            Err(e) => {
                warn!("device read failed, stopping reader: {}", e);
                error = Some(e);
                break;
            }
        }
    }

    // Exit order matters: record the error and restore the terminal before
    // closing the mailbox, so a consumer that observes the closed stream
    // sees the final state.
    if let Err(e) = terminal.restore() {
        warn!("terminal restore failed: {}", e);
        error = error.or(Some(e));
    }
    if let Some(e) = error {
        *shared.last_error.lock().unwrap() = Some(e);
    }
    shared.running.store(false, Ordering::SeqCst);
    mailbox.close();
    debug!("reader loop finished");
}
