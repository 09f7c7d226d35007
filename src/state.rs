//! Key state map
//!
//! Mutex-guarded mapping from key code to "is down". Written only by the
//! reader loop, read by any number of foreground callers; the one lock
//! orders every access, so a reader always observes a complete write.

use crate::keycodes::KeyCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// Up/down state for every key observed so far.
///
/// Keys never observed are implicitly up. Entries are only ever written
/// while the reader loop runs; they are not removed on release (the value
/// flips to `false`) and persist after the loop stops.
#[derive(Debug, Default)]
pub struct KeyStates {
    keys: Mutex<HashMap<KeyCode, bool>>,
}

impl KeyStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Writer side only (the reader loop).
    pub fn set_down(&self, key: KeyCode, down: bool) {
        self.keys.lock().unwrap().insert(key, down);
    }

    /// True if the most recent transition for `key` was a press.
    /// False for keys never observed.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys.lock().unwrap().get(&key).copied().unwrap_or(false)
    }

    /// Snapshot of all keys currently down, sorted by code.
    pub fn pressed(&self) -> Vec<KeyCode> {
        let mut down: Vec<KeyCode> = self
            .keys
            .lock()
            .unwrap()
            .iter()
            .filter(|&(_, &d)| d)
            .map(|(&k, _)| k)
            .collect();
        down.sort();
        down
    }

    /// Forget everything. Called when a new reader run starts.
    pub fn clear(&self) {
        self.keys.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::{KEY_A, KEY_B, KEY_ESC};

    #[test]
    fn test_unobserved_keys_are_up() {
        let states = KeyStates::new();
        assert!(!states.is_down(KEY_A));
        assert!(states.pressed().is_empty());
    }

    #[test]
    fn test_set_and_query() {
        let states = KeyStates::new();
        states.set_down(KEY_A, true);
        states.set_down(KEY_B, true);
        states.set_down(KEY_A, false);
        assert!(!states.is_down(KEY_A));
        assert!(states.is_down(KEY_B));
        assert_eq!(states.pressed(), vec![KEY_B]);
    }

    #[test]
    fn test_clear() {
        let states = KeyStates::new();
        states.set_down(KEY_ESC, true);
        states.clear();
        assert!(!states.is_down(KEY_ESC));
        assert!(states.pressed().is_empty());
    }
}
