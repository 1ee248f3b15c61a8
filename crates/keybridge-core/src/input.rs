//! Keyboard input front end: routes platform events to the translators.
//!
//! [`KeyboardInput`] is what a platform input view talks to. It owns the
//! transport sink and the active character map, decides whether input should
//! be forwarded at all, and passes everything else back to the platform.
//!
//! # Active vs. inactive
//!
//! Input is only forwarded while a map is loaded, a sink is attached and the
//! sink reports a connection. Otherwise every event handler returns `false`
//! so the platform can apply its default handling.
//!
//! # Held keys
//!
//! Whatever a key-down resolved to is remembered until the matching key-up,
//! which releases exactly that. A key-up character that differs from the
//! key-down one, or a map switch while the key is held, cannot leave a
//! modifier or key stuck on the remote device.

use tracing::{debug, trace, warn};

use crate::charmap::{builtin, CharMapError, CharacterMap, StaticCharMap};
use crate::sink::HidKeyboardSink;
use crate::translate::{
    emit_resolution, resolve_key_event, translate_key_event, translate_multiple_event,
    translate_text, KeyEvent, KeyPhase, MultipleKeyEvent, Resolution, TextOutcome,
};

/// Forwards platform key events and committed text to a HID keyboard sink.
pub struct KeyboardInput<S: HidKeyboardSink> {
    sink: Option<S>,
    key_map_name: String,
    char_map: Option<StaticCharMap>,
    /// Keys pressed on the sink and not yet released, in press order.
    held: Vec<(u16, Resolution)>,
}

impl<S: HidKeyboardSink> Default for KeyboardInput<S> {
    fn default() -> Self {
        Self {
            sink: None,
            key_map_name: String::new(),
            char_map: None,
            held: Vec::new(),
        }
    }
}

impl<S: HidKeyboardSink> KeyboardInput<S> {
    /// Creates an input without sink or map; it stays inactive until both are set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input bound to `sink` using the built-in map `key_map`.
    ///
    /// # Errors
    ///
    /// Returns [`CharMapError::UnknownMap`] if `key_map` is not a known map.
    pub fn with_sink(sink: S, key_map: &str) -> Result<Self, CharMapError> {
        let mut input = Self::new();
        input.set_sink(Some(sink));
        input.set_key_map(key_map)?;
        Ok(input)
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Replaces the sink, returning the previous one.
    ///
    /// Keys still held are released on the previous sink first.
    pub fn set_sink(&mut self, sink: Option<S>) -> Option<S> {
        self.release_held();
        std::mem::replace(&mut self.sink, sink)
    }

    /// Returns `true` if a key-down for `key_code` has not been released yet.
    pub fn is_held(&self, key_code: u16) -> bool {
        self.held.iter().any(|(code, _)| *code == key_code)
    }

    /// Releases every held key, most recent first, and returns how many.
    ///
    /// Without a connected sink the keys are only forgotten.
    pub fn release_held(&mut self) -> usize {
        let held = std::mem::take(&mut self.held);
        let Some(sink) = self.sink.as_mut().filter(|s| s.is_connected()) else {
            return 0;
        };
        for &(key_code, resolution) in held.iter().rev() {
            trace!(key_code, "releasing held key");
            emit_resolution(resolution, KeyPhase::Up, sink);
        }
        held.len()
    }

    fn take_held(&mut self, key_code: u16) -> Option<Resolution> {
        let index = self.held.iter().position(|(code, _)| *code == key_code)?;
        Some(self.held.remove(index).1)
    }

    pub fn key_map(&self) -> &str {
        &self.key_map_name
    }

    /// Selects the character map by name; the map is rebuilt only if the name changed.
    ///
    /// # Errors
    ///
    /// Returns [`CharMapError::UnknownMap`] if no map has that name. The input
    /// is then left without a map and inactive.
    pub fn set_key_map(&mut self, name: &str) -> Result<(), CharMapError> {
        if name == self.key_map_name {
            return Ok(());
        }
        self.key_map_name = name.to_string();
        match builtin(name) {
            Ok(map) => {
                debug!(key_map = name, entries = map.len(), "character map loaded");
                self.char_map = Some(map);
                Ok(())
            }
            Err(e) => {
                warn!(key_map = name, "character map unavailable: {e}");
                self.char_map = None;
                Err(e)
            }
        }
    }

    /// Uses `map` directly instead of a built-in one.
    pub fn set_char_map(&mut self, name: &str, map: StaticCharMap) {
        self.key_map_name = name.to_string();
        self.char_map = Some(map);
    }

    /// Returns `true` if input is forwarded to the sink.
    pub fn is_active(&self) -> bool {
        self.char_map.is_some() && self.sink.as_ref().is_some_and(|s| s.is_connected())
    }

    /// Borrows the map and sink when active.
    fn parts(&mut self) -> Option<(&dyn CharacterMap, &mut S)> {
        if !self.is_active() {
            return None;
        }
        let map = self.char_map.as_ref()?;
        let sink = self.sink.as_mut()?;
        Some((map as &dyn CharacterMap, sink))
    }

    /// Handles a key-down. Returns `false` if the platform should handle it.
    ///
    /// A repeated key-down that resolves differently first releases what the
    /// earlier one pressed.
    pub fn on_key_down(&mut self, key_code: u16, unicode_char: u32) -> bool {
        let event = KeyEvent::down(key_code, unicode_char);
        let previous = self
            .held
            .iter()
            .find(|(code, _)| *code == key_code)
            .map(|&(_, resolution)| resolution);
        let Some((map, sink)) = self.parts() else {
            return false;
        };
        let Some(resolution) = resolve_key_event(&event, map) else {
            debug!(key_code, "key event not handled");
            return false;
        };

        match previous {
            Some(previous) if previous == resolution => return true,
            Some(previous) => emit_resolution(previous, KeyPhase::Up, sink),
            None => {}
        }
        emit_resolution(resolution, KeyPhase::Down, sink);

        self.take_held(key_code);
        self.held.push((key_code, resolution));
        true
    }

    /// Handles a key-up. Returns `false` if the platform should handle it.
    ///
    /// A held key releases what its key-down pressed, whatever `unicode_char`
    /// and the current map say; only a connected sink is required.
    pub fn on_key_up(&mut self, key_code: u16, unicode_char: u32) -> bool {
        if let Some(resolution) = self.take_held(key_code) {
            let Some(sink) = self.sink.as_mut().filter(|s| s.is_connected()) else {
                return false;
            };
            emit_resolution(resolution, KeyPhase::Up, sink);
            return true;
        }
        let Some((map, sink)) = self.parts() else {
            return false;
        };
        translate_key_event(&KeyEvent::up(key_code).with_char(unicode_char), map, sink)
    }

    /// Handles an Android `ACTION_MULTIPLE` event.
    pub fn on_key_multiple(
        &mut self,
        key_code: u16,
        repeat_count: u32,
        characters: Option<&str>,
    ) -> bool {
        let Some((map, sink)) = self.parts() else {
            return false;
        };
        let event = MultipleKeyEvent::from_platform(key_code, repeat_count, characters);
        translate_multiple_event(&event, map, sink)
    }

    /// Types text committed by an input method. Always reports success.
    pub fn commit_text(&mut self, text: &str) -> bool {
        self.on_key_multiple(crate::keymap::android::KEYCODE_UNKNOWN, 0, Some(text));
        true
    }

    /// Composing text (e.g. voice input) is committed immediately: the user
    /// never sees it in an editor and cannot correct it.
    pub fn set_composing_text(&mut self, text: &str) -> bool {
        self.commit_text(text)
    }

    /// Types `text` if active; returns `None` when inactive.
    pub fn paste_text(&mut self, text: &str) -> Option<TextOutcome> {
        let (map, sink) = self.parts()?;
        Some(translate_text(text, map, sink))
    }
}
