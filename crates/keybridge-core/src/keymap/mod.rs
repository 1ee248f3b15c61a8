//! Key code translation tables from platform keycodes to HID codes.
//!
//! The canonical output is USB HID: Usage IDs (page 0x07) for standard keys,
//! plus bitmask codes for modifiers, hardware keys and media keys.
//! Platform keycodes are Android `KeyEvent` keycodes (see [`android`]).

pub mod android;
pub mod hid;

pub use hid::{HardwareKey, HidKeyCode, HidModifier, MediaKey};

/// Unified access to the four keycode tables.
///
/// Every lookup is total over `u16`: unmapped keycodes return `None`.
pub struct KeyTables;

impl KeyTables {
    /// Returns the HID modifier bit for a modifier key (Ctrl, Shift, Alt, Meta).
    pub fn modifier_of(key_code: u16) -> Option<u8> {
        android::modifier_of(key_code)
    }

    /// Returns the HID Usage ID for a layout-independent standard key.
    pub fn standard_key_of(key_code: u16) -> Option<u8> {
        android::standard_key_of(key_code).map(HidKeyCode::as_u8)
    }

    /// Returns the HID hardware key bit (e.g. eject).
    pub fn hardware_key_of(key_code: u16) -> Option<u8> {
        android::hardware_key_of(key_code)
    }

    /// Returns the HID media key bit (e.g. play/pause).
    pub fn media_key_of(key_code: u16) -> Option<u8> {
        android::media_key_of(key_code)
    }
}
