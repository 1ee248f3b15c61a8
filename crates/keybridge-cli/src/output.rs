//! A transport sink that prints every HID action as JSON.
//!
//! It stands in for the Bluetooth HID transport: instead of framing reports
//! it writes one JSON object per action, and also feeds a [`KeyboardState`]
//! so the caller can inspect what would currently be held.
//!
//! Compact mode (the default) is line-oriented: exactly one value per line.
//! Pretty mode spreads each value over several lines, so consumers must read
//! it as a stream of JSON values (e.g. `serde_json::StreamDeserializer`), not
//! line by line.

use std::io::Write;

use keybridge_core::{HidAction, HidKeyboardSink, KeyboardState};
use serde::Serialize;
use tracing::error;

/// Writes each action to `out` and tracks the resulting key state.
pub struct JsonLineSink<W: Write> {
    out: W,
    pretty: bool,
    state: KeyboardState,
    error: Option<std::io::Error>,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self {
            out,
            pretty,
            state: KeyboardState::new(),
            error: None,
        }
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    /// Returns the first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes an arbitrary JSON line (used for non-action notices).
    pub fn emit<T: Serialize>(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        let result = encoded
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.out, "{line}"));
        if let Err(e) = result {
            error!("action output failed: {e}");
            self.error = Some(e);
        }
    }

    fn record(&mut self, action: HidAction) {
        action.apply(&mut self.state);
        self.emit(&action);
    }
}

impl<W: Write> HidKeyboardSink for JsonLineSink<W> {
    fn press_modifier_key(&mut self, modifier: u8) {
        self.record(HidAction::PressModifier(modifier));
    }
    fn release_modifier_key(&mut self, modifier: u8) {
        self.record(HidAction::ReleaseModifier(modifier));
    }
    fn press_key(&mut self, key_code: u8) {
        self.record(HidAction::PressKey(key_code));
    }
    fn release_key(&mut self, key_code: u8) {
        self.record(HidAction::ReleaseKey(key_code));
    }
    fn press_hardware_key(&mut self, hardware_key: u8) {
        self.record(HidAction::PressHardwareKey(hardware_key));
    }
    fn release_hardware_key(&mut self, hardware_key: u8) {
        self.record(HidAction::ReleaseHardwareKey(hardware_key));
    }
    fn press_media_key(&mut self, media_key: u8) {
        self.record(HidAction::PressMediaKey(media_key));
    }
    fn release_media_key(&mut self, media_key: u8) {
        self.record(HidAction::ReleaseMediaKey(media_key));
    }
    fn is_connected(&self) -> bool {
        self.error.is_none()
    }
}
