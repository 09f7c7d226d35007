//! evdev keycode constants
//!
//! The main keyboard block of Linux input event codes from
//! <linux/input-event-codes.h>, wrapped in the [`KeyCode`] newtype the rest
//! of the crate traffics in. Codes identify physical keys; they say nothing
//! about layout or shift state.

use std::fmt;

/// Opaque code naming one physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// The raw evdev code.
    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Symbolic name from <linux/input-event-codes.h>, if the code is in
    /// the table.
    pub const fn name(self) -> Option<&'static str> {
        key_name(self.0)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "KEY_{}", self.0),
        }
    }
}

// ============================================================================
// Top Row
// ============================================================================

pub const KEY_RESERVED: KeyCode = KeyCode(0);
pub const KEY_ESC: KeyCode = KeyCode(1);
pub const KEY_1: KeyCode = KeyCode(2);
pub const KEY_2: KeyCode = KeyCode(3);
pub const KEY_3: KeyCode = KeyCode(4);
pub const KEY_4: KeyCode = KeyCode(5);
pub const KEY_5: KeyCode = KeyCode(6);
pub const KEY_6: KeyCode = KeyCode(7);
pub const KEY_7: KeyCode = KeyCode(8);
pub const KEY_8: KeyCode = KeyCode(9);
pub const KEY_9: KeyCode = KeyCode(10);
pub const KEY_0: KeyCode = KeyCode(11);
pub const KEY_MINUS: KeyCode = KeyCode(12);
pub const KEY_EQUAL: KeyCode = KeyCode(13);
pub const KEY_BACKSPACE: KeyCode = KeyCode(14);

// ============================================================================
// Letter Rows
// ============================================================================

pub const KEY_TAB: KeyCode = KeyCode(15);
pub const KEY_Q: KeyCode = KeyCode(16);
pub const KEY_W: KeyCode = KeyCode(17);
pub const KEY_E: KeyCode = KeyCode(18);
pub const KEY_R: KeyCode = KeyCode(19);
pub const KEY_T: KeyCode = KeyCode(20);
pub const KEY_Y: KeyCode = KeyCode(21);
pub const KEY_U: KeyCode = KeyCode(22);
pub const KEY_I: KeyCode = KeyCode(23);
pub const KEY_O: KeyCode = KeyCode(24);
pub const KEY_P: KeyCode = KeyCode(25);
pub const KEY_LEFTBRACE: KeyCode = KeyCode(26);
pub const KEY_RIGHTBRACE: KeyCode = KeyCode(27);
pub const KEY_ENTER: KeyCode = KeyCode(28);
pub const KEY_A: KeyCode = KeyCode(30);
pub const KEY_S: KeyCode = KeyCode(31);
pub const KEY_D: KeyCode = KeyCode(32);
pub const KEY_F: KeyCode = KeyCode(33);
pub const KEY_G: KeyCode = KeyCode(34);
pub const KEY_H: KeyCode = KeyCode(35);
pub const KEY_J: KeyCode = KeyCode(36);
pub const KEY_K: KeyCode = KeyCode(37);
pub const KEY_L: KeyCode = KeyCode(38);
pub const KEY_SEMICOLON: KeyCode = KeyCode(39);
pub const KEY_APOSTROPHE: KeyCode = KeyCode(40);
pub const KEY_GRAVE: KeyCode = KeyCode(41);
pub const KEY_BACKSLASH: KeyCode = KeyCode(43);
pub const KEY_Z: KeyCode = KeyCode(44);
pub const KEY_X: KeyCode = KeyCode(45);
pub const KEY_C: KeyCode = KeyCode(46);
pub const KEY_V: KeyCode = KeyCode(47);
pub const KEY_B: KeyCode = KeyCode(48);
pub const KEY_N: KeyCode = KeyCode(49);
pub const KEY_M: KeyCode = KeyCode(50);
pub const KEY_COMMA: KeyCode = KeyCode(51);
pub const KEY_DOT: KeyCode = KeyCode(52);
pub const KEY_SLASH: KeyCode = KeyCode(53);
pub const KEY_SPACE: KeyCode = KeyCode(57);
pub const KEY_CAPSLOCK: KeyCode = KeyCode(58);

// ============================================================================
// Modifier Keys
// ============================================================================

/// Left Control key
pub const KEY_LEFTCTRL: KeyCode = KeyCode(29);
/// Left Shift key
pub const KEY_LEFTSHIFT: KeyCode = KeyCode(42);
/// Right Shift key
pub const KEY_RIGHTSHIFT: KeyCode = KeyCode(54);
/// Left Alt key
pub const KEY_LEFTALT: KeyCode = KeyCode(56);
/// Right Control key
pub const KEY_RIGHTCTRL: KeyCode = KeyCode(97);
/// Right Alt key (AltGr on some keyboards)
pub const KEY_RIGHTALT: KeyCode = KeyCode(100);
/// Left Super/Windows key
pub const KEY_LEFTMETA: KeyCode = KeyCode(125);
/// Right Super/Windows key
pub const KEY_RIGHTMETA: KeyCode = KeyCode(126);
/// Menu/Compose key
pub const KEY_COMPOSE: KeyCode = KeyCode(127);

// ============================================================================
// Function Keys
// ============================================================================

pub const KEY_F1: KeyCode = KeyCode(59);
pub const KEY_F2: KeyCode = KeyCode(60);
pub const KEY_F3: KeyCode = KeyCode(61);
pub const KEY_F4: KeyCode = KeyCode(62);
pub const KEY_F5: KeyCode = KeyCode(63);
pub const KEY_F6: KeyCode = KeyCode(64);
pub const KEY_F7: KeyCode = KeyCode(65);
pub const KEY_F8: KeyCode = KeyCode(66);
pub const KEY_F9: KeyCode = KeyCode(67);
pub const KEY_F10: KeyCode = KeyCode(68);
pub const KEY_F11: KeyCode = KeyCode(87);
pub const KEY_F12: KeyCode = KeyCode(88);

// ============================================================================
// Locks and Keypad
// ============================================================================

pub const KEY_NUMLOCK: KeyCode = KeyCode(69);
pub const KEY_SCROLLLOCK: KeyCode = KeyCode(70);
pub const KEY_KPASTERISK: KeyCode = KeyCode(55);
pub const KEY_KP7: KeyCode = KeyCode(71);
pub const KEY_KP8: KeyCode = KeyCode(72);
pub const KEY_KP9: KeyCode = KeyCode(73);
pub const KEY_KPMINUS: KeyCode = KeyCode(74);
pub const KEY_KP4: KeyCode = KeyCode(75);
pub const KEY_KP5: KeyCode = KeyCode(76);
pub const KEY_KP6: KeyCode = KeyCode(77);
pub const KEY_KPPLUS: KeyCode = KeyCode(78);
pub const KEY_KP1: KeyCode = KeyCode(79);
pub const KEY_KP2: KeyCode = KeyCode(80);
pub const KEY_KP3: KeyCode = KeyCode(81);
pub const KEY_KP0: KeyCode = KeyCode(82);
pub const KEY_KPDOT: KeyCode = KeyCode(83);
pub const KEY_KPENTER: KeyCode = KeyCode(96);
pub const KEY_KPSLASH: KeyCode = KeyCode(98);

// ============================================================================
// Navigation Keys
// ============================================================================

/// Home key
pub const KEY_HOME: KeyCode = KeyCode(102);
/// Up arrow key
pub const KEY_UP: KeyCode = KeyCode(103);
/// Page Up key
pub const KEY_PAGEUP: KeyCode = KeyCode(104);
/// Left arrow key
pub const KEY_LEFT: KeyCode = KeyCode(105);
/// Right arrow key
pub const KEY_RIGHT: KeyCode = KeyCode(106);
/// End key
pub const KEY_END: KeyCode = KeyCode(107);
/// Down arrow key
pub const KEY_DOWN: KeyCode = KeyCode(108);
/// Page Down key
pub const KEY_PAGEDOWN: KeyCode = KeyCode(109);
/// Insert key
pub const KEY_INSERT: KeyCode = KeyCode(110);
/// Delete key
pub const KEY_DELETE: KeyCode = KeyCode(111);
/// SysRq/Print Screen key
pub const KEY_SYSRQ: KeyCode = KeyCode(99);
/// Pause/Break key
pub const KEY_PAUSE: KeyCode = KeyCode(119);

// ============================================================================
// Helper Functions
// ============================================================================

/// Check if keycode is a Shift key
#[inline]
pub const fn is_shift_key(key: KeyCode) -> bool {
    key.0 == KEY_LEFTSHIFT.0 || key.0 == KEY_RIGHTSHIFT.0
}

/// Check if keycode is a Ctrl key
#[inline]
pub const fn is_ctrl_key(key: KeyCode) -> bool {
    key.0 == KEY_LEFTCTRL.0 || key.0 == KEY_RIGHTCTRL.0
}

/// Check if keycode is an Alt key
#[inline]
pub const fn is_alt_key(key: KeyCode) -> bool {
    key.0 == KEY_LEFTALT.0 || key.0 == KEY_RIGHTALT.0
}

/// Check if keycode is a modifier key (Shift, Ctrl, Alt, Super)
#[inline]
pub const fn is_modifier_key(key: KeyCode) -> bool {
    is_shift_key(key)
        || is_ctrl_key(key)
        || is_alt_key(key)
        || key.0 == KEY_LEFTMETA.0
        || key.0 == KEY_RIGHTMETA.0
}

/// Convert function key code to function key number (1-12)
/// Returns None if not a function key
#[inline]
pub const fn function_key_number(key: KeyCode) -> Option<u8> {
    match key.0 {
        59..=68 => Some((key.0 - 58) as u8),
        87 => Some(11),
        88 => Some(12),
        _ => None,
    }
}

const fn key_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "KEY_RESERVED",
        1 => "KEY_ESC",
        2 => "KEY_1",
        3 => "KEY_2",
        4 => "KEY_3",
        5 => "KEY_4",
        6 => "KEY_5",
        7 => "KEY_6",
        8 => "KEY_7",
        9 => "KEY_8",
        10 => "KEY_9",
        11 => "KEY_0",
        12 => "KEY_MINUS",
        13 => "KEY_EQUAL",
        14 => "KEY_BACKSPACE",
        15 => "KEY_TAB",
        16 => "KEY_Q",
        17 => "KEY_W",
        18 => "KEY_E",
        19 => "KEY_R",
        20 => "KEY_T",
        21 => "KEY_Y",
        22 => "KEY_U",
        23 => "KEY_I",
        24 => "KEY_O",
        25 => "KEY_P",
        26 => "KEY_LEFTBRACE",
        27 => "KEY_RIGHTBRACE",
        28 => "KEY_ENTER",
        29 => "KEY_LEFTCTRL",
        30 => "KEY_A",
        31 => "KEY_S",
        32 => "KEY_D",
        33 => "KEY_F",
        34 => "KEY_G",
        35 => "KEY_H",
        36 => "KEY_J",
        37 => "KEY_K",
        38 => "KEY_L",
        39 => "KEY_SEMICOLON",
        40 => "KEY_APOSTROPHE",
        41 => "KEY_GRAVE",
        42 => "KEY_LEFTSHIFT",
        43 => "KEY_BACKSLASH",
        44 => "KEY_Z",
        45 => "KEY_X",
        46 => "KEY_C",
        47 => "KEY_V",
        48 => "KEY_B",
        49 => "KEY_N",
        50 => "KEY_M",
        51 => "KEY_COMMA",
        52 => "KEY_DOT",
        53 => "KEY_SLASH",
        54 => "KEY_RIGHTSHIFT",
        55 => "KEY_KPASTERISK",
        56 => "KEY_LEFTALT",
        57 => "KEY_SPACE",
        58 => "KEY_CAPSLOCK",
        59 => "KEY_F1",
        60 => "KEY_F2",
        61 => "KEY_F3",
        62 => "KEY_F4",
        63 => "KEY_F5",
        64 => "KEY_F6",
        65 => "KEY_F7",
        66 => "KEY_F8",
        67 => "KEY_F9",
        68 => "KEY_F10",
        69 => "KEY_NUMLOCK",
        70 => "KEY_SCROLLLOCK",
        71 => "KEY_KP7",
        72 => "KEY_KP8",
        73 => "KEY_KP9",
        74 => "KEY_KPMINUS",
        75 => "KEY_KP4",
        76 => "KEY_KP5",
        77 => "KEY_KP6",
        78 => "KEY_KPPLUS",
        79 => "KEY_KP1",
        80 => "KEY_KP2",
        81 => "KEY_KP3",
        82 => "KEY_KP0",
        83 => "KEY_KPDOT",
        87 => "KEY_F11",
        88 => "KEY_F12",
        96 => "KEY_KPENTER",
        97 => "KEY_RIGHTCTRL",
        98 => "KEY_KPSLASH",
        99 => "KEY_SYSRQ",
        100 => "KEY_RIGHTALT",
        102 => "KEY_HOME",
        103 => "KEY_UP",
        104 => "KEY_PAGEUP",
        105 => "KEY_LEFT",
        106 => "KEY_RIGHT",
        107 => "KEY_END",
        108 => "KEY_DOWN",
        109 => "KEY_PAGEDOWN",
        110 => "KEY_INSERT",
        111 => "KEY_DELETE",
        119 => "KEY_PAUSE",
        125 => "KEY_LEFTMETA",
        126 => "KEY_RIGHTMETA",
        127 => "KEY_COMPOSE",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        assert_eq!(KEY_A.name(), Some("KEY_A"));
        assert_eq!(KEY_ESC.name(), Some("KEY_ESC"));
        assert_eq!(KEY_RIGHTMETA.name(), Some("KEY_RIGHTMETA"));
        assert_eq!(KeyCode(200).name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(KEY_SPACE.to_string(), "KEY_SPACE");
        assert_eq!(KeyCode(500).to_string(), "KEY_500");
    }

    #[test]
    fn test_modifier_helpers() {
        assert!(is_shift_key(KEY_LEFTSHIFT));
        assert!(is_shift_key(KEY_RIGHTSHIFT));
        assert!(!is_shift_key(KEY_A));
        assert!(is_ctrl_key(KEY_RIGHTCTRL));
        assert!(is_alt_key(KEY_RIGHTALT));
        assert!(is_modifier_key(KEY_LEFTMETA));
        assert!(!is_modifier_key(KEY_SPACE));
    }

    #[test]
    fn test_function_key_number() {
        assert_eq!(function_key_number(KEY_F1), Some(1));
        assert_eq!(function_key_number(KEY_F10), Some(10));
        assert_eq!(function_key_number(KEY_F11), Some(11));
        assert_eq!(function_key_number(KEY_F12), Some(12));
        assert_eq!(function_key_number(KEY_ESC), None);
        // 87/88 are F11/F12; the block in between is not function keys
        assert_eq!(function_key_number(KeyCode(69)), None);
    }
}
