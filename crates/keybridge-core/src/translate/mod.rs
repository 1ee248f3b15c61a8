//! Platform input → HID action translation.
//!
//! - [`single`]: one physical key-down or key-up event.
//! - [`batch`]: committed text, with modifier coalescing.
//!
//! Both are pure functions of their input and the character map; the only
//! side effects are the calls they make on the [`HidKeyboardSink`].

pub mod batch;
pub mod single;

use tracing::debug;

pub use batch::{plan_text, translate_text, TextOutcome};
pub use single::{
    emit_resolution, resolve_key_event, translate_key_event, KeyEvent, KeyPhase, Resolution,
};

use crate::charmap::CharacterMap;
use crate::keymap::android::KEYCODE_UNKNOWN;
use crate::sink::HidKeyboardSink;

/// A compound platform event standing for several key events at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipleKeyEvent {
    /// Raw committed text (keycode `KEYCODE_UNKNOWN`).
    Text(String),
    /// The same physical key auto-repeating.
    Repeat { key_code: u16, repeat_count: u32 },
}

impl MultipleKeyEvent {
    /// Classifies an Android `ACTION_MULTIPLE` event.
    pub fn from_platform(key_code: u16, repeat_count: u32, characters: Option<&str>) -> Self {
        if key_code == KEYCODE_UNKNOWN {
            MultipleKeyEvent::Text(characters.unwrap_or_default().to_string())
        } else {
            MultipleKeyEvent::Repeat {
                key_code,
                repeat_count,
            }
        }
    }
}

/// Handles a compound event. Always returns `true`.
///
/// Text goes to the batch translator. Repeats emit nothing: the key is
/// already reported as held, and HID state is level-triggered.
pub fn translate_multiple_event<S>(
    event: &MultipleKeyEvent,
    map: &dyn CharacterMap,
    sink: &mut S,
) -> bool
where
    S: HidKeyboardSink + ?Sized,
{
    match event {
        MultipleKeyEvent::Text(text) => {
            debug!(text = %text, "multiple key event carries text");
            translate_text(text, map, sink);
        }
        MultipleKeyEvent::Repeat {
            key_code,
            repeat_count,
        } => {
            debug!(key_code, repeat_count, "repeated key ignored");
        }
    }
    true
}
