//! USB HID codes emitted towards the Bluetooth HID keyboard transport.
//!
//! Three code spaces are involved:
//!
//! - [`HidKeyCode`]: Usage IDs on page 0x07 (Keyboard/Keypad). These fill the
//!   six key slots of a boot-protocol keyboard report.
//! - [`HidModifier`]: bits of the report's modifier byte.
//! - [`HardwareKey`] / [`MediaKey`]: bits of the two auxiliary reports the
//!   transport exposes next to the keyboard report.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # Why position codes? (for beginners)
//!
//! HID codes represent **physical key positions**, not characters. Letter A is
//! 0x04 regardless of layout; whether that key prints "a", "q" or "ф" is
//! decided by the layout configured on the receiving device. That is why text
//! typing goes through a character map (see [`crate::charmap`]), while
//! layout-independent keys such as arrows or F-keys can be mapped directly.

use serde::{Deserialize, Serialize};

/// A key position on the Keyboard/Keypad usage page.
///
/// Discriminants are the wire values; `Unknown` (0) means "no key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // Context menu and extra keypad keys
    ContextMenu = 0x65,
    NumpadEqual = 0x67,

    // Volume (HID 0x7F–0x81)
    VolumeMute = 0x7F,
    VolumeUp = 0x80,
    VolumeDown = 0x81,

    NumpadComma = 0x85,
    Clear = 0x9C,
    NumpadParenLeft = 0xB6,
    NumpadParenRight = 0xB7,

    // Modifiers (0xE0..=0xE7); reports carry these as HidModifier bits
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    Unknown = 0x00,
}

impl HidKeyCode {
    /// Returns the raw Usage ID as placed in a keyboard report slot.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is a modifier key.
    ///
    /// Modifier usages are never placed in key slots by this crate; they are
    /// expressed through [`HidModifier`] bits instead.
    pub fn is_modifier(self) -> bool {
        (0xE0..=0xE7).contains(&self.as_u8())
    }
}

/// Bits of the boot-protocol keyboard report modifier byte.
///
/// ```text
/// Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
/// Bit 2 = Left Alt,   Bit 3 = Left GUI,
/// Bit 4 = Right Ctrl, Bit 5 = Right Shift,
/// Bit 6 = Right Alt,  Bit 7 = Right GUI
/// ```
pub struct HidModifier;

impl HidModifier {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_GUI: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_GUI: u8 = 1 << 7;
}

/// Bits of the hardware key report.
pub struct HardwareKey;

impl HardwareKey {
    pub const EJECT: u8 = 1 << 0;
}

/// Bits of the media key report.
pub struct MediaKey;

impl MediaKey {
    pub const PLAY_PAUSE: u8 = 1 << 0;
    pub const FAST_FORWARD: u8 = 1 << 1;
    pub const REWIND: u8 = 1 << 2;
    pub const SCAN_NEXT_TRACK: u8 = 1 << 3;
    pub const SCAN_PREV_TRACK: u8 = 1 << 4;
}
