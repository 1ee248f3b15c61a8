//! Android `KeyEvent` keycode to HID translation tables.
//!
//! Reference: `android.view.KeyEvent` KEYCODE_* constants (API level 11+).
//!
//! # How these tables work
//!
//! Each table is a compile-time constant array of 256 entries indexed by
//! Android keycode, like a lookup table in ROM. Every keycode this crate cares
//! about is below 256, so any larger value simply misses.
//!
//! Only **layout-independent** keys are listed here: keys that never produce
//! a character (arrows, F-keys, locks, numpad) or whose HID usage is the same
//! on every layout (space, tab, enter). Character-producing keys are resolved
//! through the active character map instead.
//!
//! A keycode appears in at most one of the four tables. The translator probes
//! them in a fixed order, so an overlap would silently shadow an entry.

use super::hid::{HardwareKey, HidKeyCode, HidModifier, MediaKey};

/// Sentinel for events that carry committed text rather than a physical key.
pub const KEYCODE_UNKNOWN: u16 = 0;
pub const KEYCODE_DPAD_UP: u16 = 19;
pub const KEYCODE_DPAD_DOWN: u16 = 20;
pub const KEYCODE_DPAD_LEFT: u16 = 21;
pub const KEYCODE_DPAD_RIGHT: u16 = 22;
pub const KEYCODE_DPAD_CENTER: u16 = 23;
pub const KEYCODE_VOLUME_UP: u16 = 24;
pub const KEYCODE_VOLUME_DOWN: u16 = 25;
pub const KEYCODE_CLEAR: u16 = 28;
pub const KEYCODE_A: u16 = 29;
pub const KEYCODE_ALT_LEFT: u16 = 57;
pub const KEYCODE_ALT_RIGHT: u16 = 58;
pub const KEYCODE_SHIFT_LEFT: u16 = 59;
pub const KEYCODE_SHIFT_RIGHT: u16 = 60;
pub const KEYCODE_TAB: u16 = 61;
pub const KEYCODE_SPACE: u16 = 62;
pub const KEYCODE_ENTER: u16 = 66;
pub const KEYCODE_DEL: u16 = 67;
pub const KEYCODE_MEDIA_PLAY_PAUSE: u16 = 85;
pub const KEYCODE_MEDIA_NEXT: u16 = 87;
pub const KEYCODE_MEDIA_PREVIOUS: u16 = 88;
pub const KEYCODE_MEDIA_REWIND: u16 = 89;
pub const KEYCODE_MEDIA_FAST_FORWARD: u16 = 90;
pub const KEYCODE_PAGE_UP: u16 = 92;
pub const KEYCODE_PAGE_DOWN: u16 = 93;
pub const KEYCODE_ESCAPE: u16 = 111;
pub const KEYCODE_FORWARD_DEL: u16 = 112;
pub const KEYCODE_CTRL_LEFT: u16 = 113;
pub const KEYCODE_CTRL_RIGHT: u16 = 114;
pub const KEYCODE_CAPS_LOCK: u16 = 115;
pub const KEYCODE_SCROLL_LOCK: u16 = 116;
pub const KEYCODE_META_LEFT: u16 = 117;
pub const KEYCODE_META_RIGHT: u16 = 118;
pub const KEYCODE_SYSRQ: u16 = 120;
pub const KEYCODE_BREAK: u16 = 121;
pub const KEYCODE_MOVE_HOME: u16 = 122;
pub const KEYCODE_MOVE_END: u16 = 123;
pub const KEYCODE_INSERT: u16 = 124;
pub const KEYCODE_MEDIA_EJECT: u16 = 129;
pub const KEYCODE_F1: u16 = 131;
pub const KEYCODE_F2: u16 = 132;
pub const KEYCODE_F3: u16 = 133;
pub const KEYCODE_F4: u16 = 134;
pub const KEYCODE_F5: u16 = 135;
pub const KEYCODE_F6: u16 = 136;
pub const KEYCODE_F7: u16 = 137;
pub const KEYCODE_F8: u16 = 138;
pub const KEYCODE_F9: u16 = 139;
pub const KEYCODE_F10: u16 = 140;
pub const KEYCODE_F11: u16 = 141;
pub const KEYCODE_F12: u16 = 142;
pub const KEYCODE_NUM_LOCK: u16 = 143;
pub const KEYCODE_NUMPAD_0: u16 = 144;
pub const KEYCODE_NUMPAD_1: u16 = 145;
pub const KEYCODE_NUMPAD_2: u16 = 146;
pub const KEYCODE_NUMPAD_3: u16 = 147;
pub const KEYCODE_NUMPAD_4: u16 = 148;
pub const KEYCODE_NUMPAD_5: u16 = 149;
pub const KEYCODE_NUMPAD_6: u16 = 150;
pub const KEYCODE_NUMPAD_7: u16 = 151;
pub const KEYCODE_NUMPAD_8: u16 = 152;
pub const KEYCODE_NUMPAD_9: u16 = 153;
pub const KEYCODE_NUMPAD_DIVIDE: u16 = 154;
pub const KEYCODE_NUMPAD_MULTIPLY: u16 = 155;
pub const KEYCODE_NUMPAD_SUBTRACT: u16 = 156;
pub const KEYCODE_NUMPAD_ADD: u16 = 157;
pub const KEYCODE_NUMPAD_DOT: u16 = 158;
pub const KEYCODE_NUMPAD_COMMA: u16 = 159;
pub const KEYCODE_NUMPAD_ENTER: u16 = 160;
pub const KEYCODE_NUMPAD_EQUALS: u16 = 161;
pub const KEYCODE_NUMPAD_LEFT_PAREN: u16 = 162;
pub const KEYCODE_NUMPAD_RIGHT_PAREN: u16 = 163;
pub const KEYCODE_VOLUME_MUTE: u16 = 164;

/// Translates an Android keycode to a HID standard key.
///
/// Returns `None` for keycodes that are not layout-independent keys.
pub fn standard_key_of(key_code: u16) -> Option<HidKeyCode> {
    match STANDARD_TABLE.get(key_code as usize) {
        Some(&HidKeyCode::Unknown) | None => None,
        Some(&code) => Some(code),
    }
}

/// Translates an Android keycode to a HID modifier bit.
pub fn modifier_of(key_code: u16) -> Option<u8> {
    non_zero(&MODIFIER_TABLE, key_code)
}

/// Translates an Android keycode to a HID hardware key bit.
pub fn hardware_key_of(key_code: u16) -> Option<u8> {
    non_zero(&HARDWARE_TABLE, key_code)
}

/// Translates an Android keycode to a HID media key bit.
pub fn media_key_of(key_code: u16) -> Option<u8> {
    non_zero(&MEDIA_TABLE, key_code)
}

fn non_zero(table: &[u8; 256], key_code: u16) -> Option<u8> {
    table
        .get(key_code as usize)
        .copied()
        .filter(|&bits| bits != 0)
}

/// Android keycode → HID standard key, indexed by keycode.
const STANDARD_TABLE: [HidKeyCode; 256] = {
    use HidKeyCode::*;
    let mut t = [Unknown; 256];

    // ── Navigation ───────────────────────────────────────────────────────────
    t[KEYCODE_DPAD_UP as usize] = ArrowUp;
    t[KEYCODE_DPAD_DOWN as usize] = ArrowDown;
    t[KEYCODE_DPAD_LEFT as usize] = ArrowLeft;
    t[KEYCODE_DPAD_RIGHT as usize] = ArrowRight;
    t[KEYCODE_DPAD_CENTER as usize] = Enter;
    t[KEYCODE_PAGE_UP as usize] = PageUp;
    t[KEYCODE_PAGE_DOWN as usize] = PageDown;
    t[KEYCODE_MOVE_HOME as usize] = Home;
    t[KEYCODE_MOVE_END as usize] = End;

    // ── Editing ──────────────────────────────────────────────────────────────
    t[KEYCODE_ENTER as usize] = Enter;
    t[KEYCODE_DEL as usize] = Backspace;
    t[KEYCODE_FORWARD_DEL as usize] = Delete;
    t[KEYCODE_INSERT as usize] = Insert;
    t[KEYCODE_CLEAR as usize] = Clear;
    t[KEYCODE_TAB as usize] = Tab;
    t[KEYCODE_SPACE as usize] = Space;
    t[KEYCODE_ESCAPE as usize] = Escape;

    // ── System and lock keys ─────────────────────────────────────────────────
    t[KEYCODE_SYSRQ as usize] = PrintScreen;
    t[KEYCODE_BREAK as usize] = Pause;
    t[KEYCODE_CAPS_LOCK as usize] = CapsLock;
    t[KEYCODE_SCROLL_LOCK as usize] = ScrollLock;
    t[KEYCODE_NUM_LOCK as usize] = NumLock;

    // ── Function keys (contiguous on both sides) ─────────────────────────────
    t[KEYCODE_F1 as usize] = F1;
    t[KEYCODE_F2 as usize] = F2;
    t[KEYCODE_F3 as usize] = F3;
    t[KEYCODE_F4 as usize] = F4;
    t[KEYCODE_F5 as usize] = F5;
    t[KEYCODE_F6 as usize] = F6;
    t[KEYCODE_F7 as usize] = F7;
    t[KEYCODE_F8 as usize] = F8;
    t[KEYCODE_F9 as usize] = F9;
    t[KEYCODE_F10 as usize] = F10;
    t[KEYCODE_F11 as usize] = F11;
    t[KEYCODE_F12 as usize] = F12;

    // ── Numpad (HID places 0 after 9) ────────────────────────────────────────
    t[KEYCODE_NUMPAD_0 as usize] = Numpad0;
    t[KEYCODE_NUMPAD_1 as usize] = Numpad1;
    t[KEYCODE_NUMPAD_2 as usize] = Numpad2;
    t[KEYCODE_NUMPAD_3 as usize] = Numpad3;
    t[KEYCODE_NUMPAD_4 as usize] = Numpad4;
    t[KEYCODE_NUMPAD_5 as usize] = Numpad5;
    t[KEYCODE_NUMPAD_6 as usize] = Numpad6;
    t[KEYCODE_NUMPAD_7 as usize] = Numpad7;
    t[KEYCODE_NUMPAD_8 as usize] = Numpad8;
    t[KEYCODE_NUMPAD_9 as usize] = Numpad9;
    t[KEYCODE_NUMPAD_ADD as usize] = NumpadAdd;
    t[KEYCODE_NUMPAD_SUBTRACT as usize] = NumpadSubtract;
    t[KEYCODE_NUMPAD_MULTIPLY as usize] = NumpadMultiply;
    t[KEYCODE_NUMPAD_DIVIDE as usize] = NumpadDivide;
    t[KEYCODE_NUMPAD_DOT as usize] = NumpadDecimal;
    t[KEYCODE_NUMPAD_COMMA as usize] = NumpadComma;
    t[KEYCODE_NUMPAD_ENTER as usize] = NumpadEnter;
    t[KEYCODE_NUMPAD_EQUALS as usize] = NumpadEqual;
    t[KEYCODE_NUMPAD_LEFT_PAREN as usize] = NumpadParenLeft;
    t[KEYCODE_NUMPAD_RIGHT_PAREN as usize] = NumpadParenRight;

    // ── Volume (keyboard page, not the media report) ─────────────────────────
    t[KEYCODE_VOLUME_UP as usize] = VolumeUp;
    t[KEYCODE_VOLUME_DOWN as usize] = VolumeDown;
    t[KEYCODE_VOLUME_MUTE as usize] = VolumeMute;

    t
};

/// Android keycode → HID modifier bit.
const MODIFIER_TABLE: [u8; 256] = {
    let mut t = [0u8; 256];
    t[KEYCODE_CTRL_LEFT as usize] = HidModifier::LEFT_CTRL;
    t[KEYCODE_CTRL_RIGHT as usize] = HidModifier::RIGHT_CTRL;
    t[KEYCODE_SHIFT_LEFT as usize] = HidModifier::LEFT_SHIFT;
    t[KEYCODE_SHIFT_RIGHT as usize] = HidModifier::RIGHT_SHIFT;
    t[KEYCODE_ALT_LEFT as usize] = HidModifier::LEFT_ALT;
    t[KEYCODE_ALT_RIGHT as usize] = HidModifier::RIGHT_ALT;
    t[KEYCODE_META_LEFT as usize] = HidModifier::LEFT_GUI;
    t[KEYCODE_META_RIGHT as usize] = HidModifier::RIGHT_GUI;
    t
};

/// Android keycode → HID hardware key bit.
const HARDWARE_TABLE: [u8; 256] = {
    let mut t = [0u8; 256];
    t[KEYCODE_MEDIA_EJECT as usize] = HardwareKey::EJECT;
    t
};

/// Android keycode → HID media key bit.
const MEDIA_TABLE: [u8; 256] = {
    let mut t = [0u8; 256];
    t[KEYCODE_MEDIA_PLAY_PAUSE as usize] = MediaKey::PLAY_PAUSE;
    t[KEYCODE_MEDIA_FAST_FORWARD as usize] = MediaKey::FAST_FORWARD;
    t[KEYCODE_MEDIA_REWIND as usize] = MediaKey::REWIND;
    t[KEYCODE_MEDIA_NEXT as usize] = MediaKey::SCAN_NEXT_TRACK;
    t[KEYCODE_MEDIA_PREVIOUS as usize] = MediaKey::SCAN_PREV_TRACK;
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_keys_map_to_expected_usage_ids() {
        let cases: &[(u16, u8)] = &[
            (KEYCODE_BREAK, 72),
            (KEYCODE_CAPS_LOCK, 57),
            (KEYCODE_CLEAR, 156),
            (KEYCODE_DEL, 42),
            (KEYCODE_DPAD_CENTER, 40),
            (KEYCODE_ENTER, 40),
            (KEYCODE_DPAD_DOWN, 81),
            (KEYCODE_DPAD_LEFT, 80),
            (KEYCODE_DPAD_RIGHT, 79),
            (KEYCODE_DPAD_UP, 82),
            (KEYCODE_ESCAPE, 41),
            (KEYCODE_FORWARD_DEL, 76),
            (KEYCODE_INSERT, 73),
            (KEYCODE_MOVE_END, 77),
            (KEYCODE_MOVE_HOME, 74),
            (KEYCODE_NUMPAD_ADD, 87),
            (KEYCODE_NUMPAD_COMMA, 133),
            (KEYCODE_NUMPAD_DIVIDE, 84),
            (KEYCODE_NUMPAD_DOT, 99),
            (KEYCODE_NUMPAD_ENTER, 88),
            (KEYCODE_NUMPAD_EQUALS, 103),
            (KEYCODE_NUMPAD_LEFT_PAREN, 182),
            (KEYCODE_NUMPAD_MULTIPLY, 85),
            (KEYCODE_NUMPAD_RIGHT_PAREN, 183),
            (KEYCODE_NUMPAD_SUBTRACT, 86),
            (KEYCODE_NUM_LOCK, 83),
            (KEYCODE_PAGE_DOWN, 78),
            (KEYCODE_PAGE_UP, 75),
            (KEYCODE_SCROLL_LOCK, 71),
            (KEYCODE_SPACE, 44),
            (KEYCODE_SYSRQ, 70),
            (KEYCODE_TAB, 43),
            (KEYCODE_VOLUME_DOWN, 129),
            (KEYCODE_VOLUME_MUTE, 127),
            (KEYCODE_VOLUME_UP, 128),
        ];

        for &(key, usage) in cases {
            // Arrange / Act
            let result = standard_key_of(key).map(HidKeyCode::as_u8);

            // Assert
            assert_eq!(result, Some(usage), "keycode {key} should map to usage {usage}");
        }
    }

    #[test]
    fn test_function_keys_are_contiguous() {
        for offset in 0..12u16 {
            let usage = standard_key_of(KEYCODE_F1 + offset).map(HidKeyCode::as_u8);
            assert_eq!(usage, Some(58 + offset as u8), "F{}", offset + 1);
        }
    }

    #[test]
    fn test_numpad_zero_maps_after_nine() {
        assert_eq!(standard_key_of(KEYCODE_NUMPAD_0).map(HidKeyCode::as_u8), Some(98));
        for digit in 1..=9u16 {
            let usage = standard_key_of(KEYCODE_NUMPAD_0 + digit).map(HidKeyCode::as_u8);
            assert_eq!(usage, Some(88 + digit as u8), "Numpad{digit}");
        }
    }

    #[test]
    fn test_modifier_keys_map_to_modifier_bits() {
        let cases = [
            (KEYCODE_CTRL_LEFT, HidModifier::LEFT_CTRL),
            (KEYCODE_CTRL_RIGHT, HidModifier::RIGHT_CTRL),
            (KEYCODE_SHIFT_LEFT, HidModifier::LEFT_SHIFT),
            (KEYCODE_SHIFT_RIGHT, HidModifier::RIGHT_SHIFT),
            (KEYCODE_ALT_LEFT, HidModifier::LEFT_ALT),
            (KEYCODE_ALT_RIGHT, HidModifier::RIGHT_ALT),
            (KEYCODE_META_LEFT, HidModifier::LEFT_GUI),
            (KEYCODE_META_RIGHT, HidModifier::RIGHT_GUI),
        ];
        for (key, bit) in cases {
            assert_eq!(modifier_of(key), Some(bit), "keycode {key}");
        }
    }

    #[test]
    fn test_hardware_and_media_keys() {
        assert_eq!(hardware_key_of(KEYCODE_MEDIA_EJECT), Some(HardwareKey::EJECT));
        assert_eq!(media_key_of(KEYCODE_MEDIA_PLAY_PAUSE), Some(MediaKey::PLAY_PAUSE));
        assert_eq!(media_key_of(KEYCODE_MEDIA_FAST_FORWARD), Some(MediaKey::FAST_FORWARD));
        assert_eq!(media_key_of(KEYCODE_MEDIA_REWIND), Some(MediaKey::REWIND));
        assert_eq!(media_key_of(KEYCODE_MEDIA_NEXT), Some(MediaKey::SCAN_NEXT_TRACK));
        assert_eq!(media_key_of(KEYCODE_MEDIA_PREVIOUS), Some(MediaKey::SCAN_PREV_TRACK));
    }

    #[test]
    fn test_unmapped_and_out_of_range_keycodes_return_none() {
        for key in [KEYCODE_UNKNOWN, KEYCODE_A, 255, 256, 1000, u16::MAX] {
            assert_eq!(standard_key_of(key), None, "standard {key}");
            assert_eq!(modifier_of(key), None, "modifier {key}");
            assert_eq!(hardware_key_of(key), None, "hardware {key}");
            assert_eq!(media_key_of(key), None, "media {key}");
        }
    }

    #[test]
    fn test_no_keycode_is_claimed_by_two_tables() {
        for key in 0..256u16 {
            let claims = [
                standard_key_of(key).is_some(),
                modifier_of(key).is_some(),
                hardware_key_of(key).is_some(),
                media_key_of(key).is_some(),
            ]
            .iter()
            .filter(|&&hit| hit)
            .count();
            assert!(claims <= 1, "keycode {key} is mapped by {claims} tables");
        }
    }

    #[test]
    fn test_standard_table_never_holds_modifier_usages() {
        for key in 0..256u16 {
            if let Some(code) = standard_key_of(key) {
                assert!(!code.is_modifier(), "keycode {key} maps to modifier usage {code:?}");
            }
        }
    }
}
