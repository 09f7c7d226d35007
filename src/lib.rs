//! evkey — concurrent keyboard key-state tracking over Linux evdev.
//!
//! A background thread reads raw input records from a
//! `/dev/input/eventN` device and maintains up/down state for every key;
//! any number of threads query that state with [`Keyboard::is_down`], and
//! the [`Keyboard::events`] stream yields the most recently changed key.
//! Because events come straight from the device file, they are observed
//! system-wide (not just in the owning terminal) and reading them requires
//! root or membership in the `input` group.
//!
//! While the reader runs, the controlling terminal is held in non-echoing
//! raw mode so keystrokes do not additionally arrive as text; it is
//! restored on stop, on reader errors, and on drop.
//!
//! # Example
//!
//! ```no_run
//! use evkey::{keycodes, Keyboard};
//!
//! fn main() -> evkey::Result<()> {
//!     let kb = Keyboard::open("/dev/input/event0")?;
//!     kb.start()?;
//!
//!     for key in kb.events() {
//!         match key {
//!             keycodes::KEY_A => {
//!                 if kb.is_down(key) {
//!                     println!("A down");
//!                 } else {
//!                     println!("A up");
//!                 }
//!             }
//!             keycodes::KEY_ESC => {
//!                 kb.stop()?;
//!             }
//!             _ => {}
//!         }
//!     }
//!
//!     if let Some(err) = kb.last_error() {
//!         eprintln!("reader loop failed: {err}");
//!     }
//!     kb.close()
//! }
//! ```

pub mod device;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod keycodes;
pub mod mailbox;
pub mod state;
pub mod terminal;

pub use device::{enumerate, EventDevice, ReadOutcome};
pub use error::{Error, Result};
pub use event::{InputRecord, KeyAction};
pub use keyboard::Keyboard;
pub use keycodes::KeyCode;
pub use mailbox::{Events, Mailbox};
pub use state::KeyStates;
pub use terminal::{Terminal, Tty};
