//! Notification mailbox
//!
//! Single-slot channel carrying the most recently changed key. A post never
//! blocks the reader loop: an unconsumed prior value is discarded and
//! replaced, so a slow consumer observes only the latest change, never a
//! backlog. Closed exactly once when the loop exits; after that a receive
//! reports end-of-stream. One concurrent receiver is assumed.

use crate::keycodes::KeyCode;
use std::sync::{Arc, Condvar, Mutex};

#[derive(Debug, Default)]
struct Slot {
    value: Option<KeyCode>,
    closed: bool,
}

/// Capacity-one overwrite channel for key-change notifications.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Mutex<Slot>,
    available: Condvar,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailbox that is already closed. Stands in before the first `start`
    /// so early consumers observe an ended stream instead of blocking.
    pub(crate) fn closed() -> Self {
        let mailbox = Self::new();
        mailbox.slot.lock().unwrap().closed = true;
        mailbox
    }

    /// Deposit a key change, replacing any unconsumed one. Never blocks.
    /// Ignored after `close`.
    pub fn post(&self, key: KeyCode) {
        let mut slot = self.slot.lock().unwrap();
        if slot.closed {
            return;
        }
        slot.value = Some(key);
        self.available.notify_one();
    }

    /// Wait for the next key change. `None` means the mailbox was closed
    /// and no further values will arrive.
    pub fn recv(&self) -> Option<KeyCode> {
        let mut slot = self.slot.lock().unwrap();
        loop {
            if slot.closed {
                return None;
            }
            if let Some(key) = slot.value.take() {
                return Some(key);
            }
            slot = self.available.wait(slot).unwrap();
        }
    }

    /// Take the pending key change without blocking, if there is one.
    pub fn try_recv(&self) -> Option<KeyCode> {
        let mut slot = self.slot.lock().unwrap();
        if slot.closed {
            return None;
        }
        slot.value.take()
    }

    /// Mark the stream ended and wake a pending receiver. Idempotent.
    pub fn close(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.closed = true;
        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.slot.lock().unwrap().closed
    }
}

/// Blocking iterator over key-change notifications.
///
/// Yields each value from the mailbox and ends when the reader loop closes
/// it, so `for key in kb.events() { ... }` terminates when the loop stops.
pub struct Events {
    mailbox: Arc<Mailbox>,
}

impl Events {
    pub(crate) fn new(mailbox: Arc<Mailbox>) -> Self {
        Self { mailbox }
    }

    /// Non-blocking variant of `next`: the pending notification, if any.
    pub fn try_next(&self) -> Option<KeyCode> {
        self.mailbox.try_recv()
    }
}

impl Iterator for Events {
    type Item = KeyCode;

    fn next(&mut self) -> Option<KeyCode> {
        self.mailbox.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::{KEY_A, KEY_B, KEY_C};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_overwrite_keeps_latest() {
        let mailbox = Mailbox::new();
        mailbox.post(KEY_A);
        mailbox.post(KEY_B);
        // The overwrite law: exactly one value, the latest.
        assert_eq!(mailbox.recv(), Some(KEY_B));
        assert_eq!(mailbox.try_recv(), None);
    }

    #[test]
    fn test_recv_blocks_until_post() {
        let mailbox = Arc::new(Mailbox::new());
        let poster = mailbox.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            poster.post(KEY_C);
        });
        assert_eq!(mailbox.recv(), Some(KEY_C));
        handle.join().unwrap();
    }

    #[test]
    fn test_close_wakes_pending_receiver() {
        let mailbox = Arc::new(Mailbox::new());
        let closer = mailbox.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            closer.close();
        });
        assert_eq!(mailbox.recv(), None);
        handle.join().unwrap();
    }

    #[test]
    fn test_closed_wins_over_pending_value() {
        let mailbox = Mailbox::new();
        mailbox.post(KEY_A);
        mailbox.close();
        // No further values once the stream has ended.
        assert_eq!(mailbox.recv(), None);
        assert_eq!(mailbox.try_recv(), None);
    }

    #[test]
    fn test_post_after_close_is_ignored() {
        let mailbox = Mailbox::new();
        mailbox.close();
        mailbox.post(KEY_A);
        assert_eq!(mailbox.recv(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mailbox = Mailbox::new();
        mailbox.close();
        mailbox.close();
        assert!(mailbox.is_closed());
    }

    #[test]
    fn test_events_iterator_ends_on_close() {
        let mailbox = Arc::new(Mailbox::new());
        let poster = mailbox.clone();
        let handle = thread::spawn(move || {
            poster.post(KEY_A);
            thread::sleep(Duration::from_millis(30));
            poster.close();
        });
        let collected: Vec<KeyCode> = Events::new(mailbox).collect();
        handle.join().unwrap();
        assert!(collected.len() <= 1);
    }
}
