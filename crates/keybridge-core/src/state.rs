//! Pressed-key bookkeeping for a boot-protocol HID keyboard.
//!
//! [`KeyboardState`] is the transport-side state object: it receives the
//! same press/release commands as any [`HidKeyboardSink`] and maintains what
//! the next keyboard report must contain. The translators stay stateless;
//! whoever owns the transport owns this.

use tracing::{trace, warn};

use crate::sink::HidKeyboardSink;

/// Number of simultaneous key slots in a boot-protocol report.
pub const MAX_PRESSED_KEYS: usize = 6;

/// Snapshot of the keyboard report contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Pressed key codes, packed to the front, zero-filled.
    pub keys: [u8; MAX_PRESSED_KEYS],
}

impl KeyboardReport {
    /// Returns `true` if no modifier and no key is pressed.
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keys.iter().all(|&k| k == 0)
    }
}

/// Currently pressed modifiers, keys, hardware keys and media keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    modifier: u8,
    keys: Vec<u8>,
    hardware_keys: u8,
    media_keys: u8,
    connected: bool,
}

impl KeyboardState {
    /// Creates an all-released state for a connected device.
    pub fn new() -> Self {
        Self {
            modifier: 0,
            keys: Vec::with_capacity(MAX_PRESSED_KEYS),
            hardware_keys: 0,
            media_keys: 0,
            connected: true,
        }
    }

    pub fn modifier(&self) -> u8 {
        self.modifier
    }

    pub fn pressed_keys(&self) -> &[u8] {
        &self.keys
    }

    pub fn hardware_keys(&self) -> u8 {
        self.hardware_keys
    }

    pub fn media_keys(&self) -> u8 {
        self.media_keys
    }

    /// A disconnected device holds nothing: dropping the link releases every key.
    pub fn set_connected(&mut self, connected: bool) {
        if self.connected && !connected {
            self.release_all();
        }
        self.connected = connected;
    }

    /// Builds the keyboard report for the current state.
    pub fn report(&self) -> KeyboardReport {
        let mut keys = [0u8; MAX_PRESSED_KEYS];
        for (slot, &key) in keys.iter_mut().zip(self.keys.iter()) {
            *slot = key;
        }
        KeyboardReport {
            modifier: self.modifier,
            keys,
        }
    }

    /// Releases everything, e.g. after the connection dropped.
    pub fn release_all(&mut self) {
        self.modifier = 0;
        self.keys.clear();
        self.hardware_keys = 0;
        self.media_keys = 0;
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl HidKeyboardSink for KeyboardState {
    fn press_modifier_key(&mut self, modifier: u8) {
        self.modifier |= modifier;
        trace!(modifier = self.modifier, "modifier pressed");
    }

    fn release_modifier_key(&mut self, modifier: u8) {
        self.modifier &= !modifier;
        trace!(modifier = self.modifier, "modifier released");
    }

    fn press_key(&mut self, key_code: u8) {
        if key_code == 0 || self.keys.contains(&key_code) {
            return;
        }
        if self.keys.len() >= MAX_PRESSED_KEYS {
            warn!(key_code, "key report is full; press ignored");
            return;
        }
        self.keys.push(key_code);
    }

    fn release_key(&mut self, key_code: u8) {
        self.keys.retain(|&k| k != key_code);
    }

    fn press_hardware_key(&mut self, hardware_key: u8) {
        self.hardware_keys |= hardware_key;
    }

    fn release_hardware_key(&mut self, hardware_key: u8) {
        self.hardware_keys &= !hardware_key;
    }

    fn press_media_key(&mut self, media_key: u8) {
        self.media_keys |= media_key;
    }

    fn release_media_key(&mut self, media_key: u8) {
        self.media_keys &= !media_key;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
