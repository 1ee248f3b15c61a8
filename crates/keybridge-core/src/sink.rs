//! The HID keyboard transport seam.
//!
//! Translators never build reports themselves. They call a
//! [`HidKeyboardSink`] once per press or release; the sink owns the
//! "currently pressed" state and the framing of the actual HID reports
//! (see [`crate::state::KeyboardState`] for the bookkeeping part).

use serde::{Deserialize, Serialize};

/// Receiver of individual HID press/release commands.
///
/// Implementations must not block: a batch of text calls these methods in
/// tight succession from the caller's thread.
pub trait HidKeyboardSink {
    fn press_modifier_key(&mut self, modifier: u8);
    fn release_modifier_key(&mut self, modifier: u8);
    fn press_key(&mut self, key_code: u8);
    fn release_key(&mut self, key_code: u8);
    fn press_hardware_key(&mut self, hardware_key: u8);
    fn release_hardware_key(&mut self, hardware_key: u8);
    fn press_media_key(&mut self, media_key: u8);
    fn release_media_key(&mut self, media_key: u8);

    /// Returns `true` while the remote device is connected.
    fn is_connected(&self) -> bool {
        true
    }
}

impl<S: HidKeyboardSink + ?Sized> HidKeyboardSink for &mut S {
    fn press_modifier_key(&mut self, modifier: u8) {
        (**self).press_modifier_key(modifier)
    }
    fn release_modifier_key(&mut self, modifier: u8) {
        (**self).release_modifier_key(modifier)
    }
    fn press_key(&mut self, key_code: u8) {
        (**self).press_key(key_code)
    }
    fn release_key(&mut self, key_code: u8) {
        (**self).release_key(key_code)
    }
    fn press_hardware_key(&mut self, hardware_key: u8) {
        (**self).press_hardware_key(hardware_key)
    }
    fn release_hardware_key(&mut self, hardware_key: u8) {
        (**self).release_hardware_key(hardware_key)
    }
    fn press_media_key(&mut self, media_key: u8) {
        (**self).press_media_key(media_key)
    }
    fn release_media_key(&mut self, media_key: u8) {
        (**self).release_media_key(media_key)
    }
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

/// One HID press/release command, as emitted by the translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "code", rename_all = "snake_case")]
pub enum HidAction {
    PressModifier(u8),
    ReleaseModifier(u8),
    PressKey(u8),
    ReleaseKey(u8),
    PressHardwareKey(u8),
    ReleaseHardwareKey(u8),
    PressMediaKey(u8),
    ReleaseMediaKey(u8),
}

impl HidAction {
    /// Forwards this action to the matching sink method.
    pub fn apply<S: HidKeyboardSink + ?Sized>(self, sink: &mut S) {
        match self {
            HidAction::PressModifier(m) => sink.press_modifier_key(m),
            HidAction::ReleaseModifier(m) => sink.release_modifier_key(m),
            HidAction::PressKey(k) => sink.press_key(k),
            HidAction::ReleaseKey(k) => sink.release_key(k),
            HidAction::PressHardwareKey(k) => sink.press_hardware_key(k),
            HidAction::ReleaseHardwareKey(k) => sink.release_hardware_key(k),
            HidAction::PressMediaKey(k) => sink.press_media_key(k),
            HidAction::ReleaseMediaKey(k) => sink.release_media_key(k),
        }
    }

    /// Returns `true` for the two modifier variants.
    pub fn is_modifier(&self) -> bool {
        matches!(self, HidAction::PressModifier(_) | HidAction::ReleaseModifier(_))
    }
}

/// A sink that records every call as a [`HidAction`], in order.
///
/// Used to turn the translators into pure input → action-list functions for
/// assertions and planning.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    pub actions: Vec<HidAction>,
    /// Value reported by [`HidKeyboardSink::is_connected`].
    pub connected: bool,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            connected: true,
        }
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that reports itself as disconnected.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::default()
        }
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<HidAction> {
        std::mem::take(&mut self.actions)
    }
}

impl HidKeyboardSink for RecordingSink {
    fn press_modifier_key(&mut self, modifier: u8) {
        self.actions.push(HidAction::PressModifier(modifier));
    }
    fn release_modifier_key(&mut self, modifier: u8) {
        self.actions.push(HidAction::ReleaseModifier(modifier));
    }
    fn press_key(&mut self, key_code: u8) {
        self.actions.push(HidAction::PressKey(key_code));
    }
    fn release_key(&mut self, key_code: u8) {
        self.actions.push(HidAction::ReleaseKey(key_code));
    }
    fn press_hardware_key(&mut self, hardware_key: u8) {
        self.actions.push(HidAction::PressHardwareKey(hardware_key));
    }
    fn release_hardware_key(&mut self, hardware_key: u8) {
        self.actions.push(HidAction::ReleaseHardwareKey(hardware_key));
    }
    fn press_media_key(&mut self, media_key: u8) {
        self.actions.push(HidAction::PressMediaKey(media_key));
    }
    fn release_media_key(&mut self, media_key: u8) {
        self.actions.push(HidAction::ReleaseMediaKey(media_key));
    }
    fn is_connected(&self) -> bool {
        self.connected
    }
}
