//! Translation of one physical key-down or key-up event.
//!
//! A key is resolved by trying an ordered list of resolvers and taking the
//! first hit:
//!
//! 1. hardware key table (eject)
//! 2. media key table (play/pause, next, …)
//! 3. direct tables (modifier bit and/or layout-independent standard key)
//! 4. character fallback: the character the platform resolved for the key,
//!    if the active map types it with exactly one report
//!
//! Down and Up are resolved independently; nothing is remembered between
//! calls. Press order is modifier then key, release order is key then
//! modifier.

use tracing::{debug, trace};

use crate::charmap::CharacterMap;
use crate::keymap::KeyTables;
use crate::sink::HidKeyboardSink;

/// Whether the key went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A single physical key event from the platform input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform keycode (Android `KeyEvent` keycode).
    pub key_code: u16,
    pub phase: KeyPhase,
    /// Unicode scalar the platform resolved for this key without meta state, 0 if none.
    pub unicode_char: u32,
}

impl KeyEvent {
    pub fn down(key_code: u16, unicode_char: u32) -> Self {
        Self {
            key_code,
            phase: KeyPhase::Down,
            unicode_char,
        }
    }

    pub fn up(key_code: u16) -> Self {
        Self {
            key_code,
            phase: KeyPhase::Up,
            unicode_char: 0,
        }
    }

    /// Returns the same event carrying `unicode_char`.
    pub fn with_char(self, unicode_char: u32) -> Self {
        Self {
            unicode_char,
            ..self
        }
    }

    /// The resolved character, if any and if it is a valid scalar value.
    pub fn character(&self) -> Option<char> {
        match self.unicode_char {
            0 => None,
            c => char::from_u32(c),
        }
    }
}

/// Outcome of resolving a key against the tables and the character map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Hardware(u8),
    Media(u8),
    /// A modifier bit and/or a standard key; zero means "none", never both zero.
    Key { modifier: u8, key_code: u8 },
}

type Resolver = fn(&KeyEvent, &dyn CharacterMap) -> Option<Resolution>;

/// Resolvers in priority order.
const RESOLVERS: [(&str, Resolver); 4] = [
    ("hardware", resolve_hardware),
    ("media", resolve_media),
    ("direct", resolve_direct),
    ("character", resolve_character),
];

fn resolve_hardware(event: &KeyEvent, _: &dyn CharacterMap) -> Option<Resolution> {
    KeyTables::hardware_key_of(event.key_code).map(Resolution::Hardware)
}

fn resolve_media(event: &KeyEvent, _: &dyn CharacterMap) -> Option<Resolution> {
    KeyTables::media_key_of(event.key_code).map(Resolution::Media)
}

fn resolve_direct(event: &KeyEvent, _: &dyn CharacterMap) -> Option<Resolution> {
    let modifier = KeyTables::modifier_of(event.key_code);
    let key_code = KeyTables::standard_key_of(event.key_code);
    if modifier.is_none() && key_code.is_none() {
        return None;
    }
    Some(Resolution::Key {
        modifier: modifier.unwrap_or(0),
        key_code: key_code.unwrap_or(0),
    })
}

/// Only single-report characters qualify: a physical key event cannot replay
/// a dead-key sequence. Those characters arrive as committed text instead.
fn resolve_character(event: &KeyEvent, map: &dyn CharacterMap) -> Option<Resolution> {
    let report = map.lookup(event.character()?)?.as_single()?;
    Some(Resolution::Key {
        modifier: report.modifier,
        key_code: report.key_code,
    })
}

/// Resolves `event` without touching any sink.
pub fn resolve_key_event(event: &KeyEvent, map: &dyn CharacterMap) -> Option<Resolution> {
    RESOLVERS.iter().find_map(|(name, resolver)| {
        let resolution = resolver(event, map)?;
        debug!(key_code = event.key_code, resolver = *name, "key resolved");
        Some(resolution)
    })
}

/// Translates one key event into press/release calls on `sink`.
///
/// Returns `true` if at least one action was emitted; `false` means the event
/// should go to the platform's default handling.
pub fn translate_key_event<S>(event: &KeyEvent, map: &dyn CharacterMap, sink: &mut S) -> bool
where
    S: HidKeyboardSink + ?Sized,
{
    trace!(
        key_code = event.key_code,
        phase = ?event.phase,
        unicode_char = event.unicode_char,
        "key event"
    );

    let Some(resolution) = resolve_key_event(event, map) else {
        debug!(key_code = event.key_code, "key event not handled");
        return false;
    };

    emit_resolution(resolution, event.phase, sink);
    true
}

/// Sends the press or release calls for an already resolved key.
///
/// Press order is modifier then key; release order is key then modifier.
pub fn emit_resolution<S>(resolution: Resolution, phase: KeyPhase, sink: &mut S)
where
    S: HidKeyboardSink + ?Sized,
{
    match (resolution, phase) {
        (Resolution::Hardware(key), KeyPhase::Down) => sink.press_hardware_key(key),
        (Resolution::Hardware(key), KeyPhase::Up) => sink.release_hardware_key(key),
        (Resolution::Media(key), KeyPhase::Down) => sink.press_media_key(key),
        (Resolution::Media(key), KeyPhase::Up) => sink.release_media_key(key),
        (Resolution::Key { modifier, key_code }, KeyPhase::Down) => {
            if modifier != 0 {
                sink.press_modifier_key(modifier);
            }
            if key_code != 0 {
                sink.press_key(key_code);
            }
        }
        (Resolution::Key { modifier, key_code }, KeyPhase::Up) => {
            if key_code != 0 {
                sink.release_key(key_code);
            }
            if modifier != 0 {
                sink.release_modifier_key(modifier);
            }
        }
    }
}
