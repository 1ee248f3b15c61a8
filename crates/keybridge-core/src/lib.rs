//! # keybridge-core
//!
//! Turns keystrokes and committed text from a mobile device into the press
//! and release commands of a Bluetooth HID keyboard.
//!
//! This crate has no dependencies on OS APIs, UI frameworks or Bluetooth
//! stacks. It only decides *which* HID actions to send and in *what order*;
//! sending them is the job of a [`HidKeyboardSink`] implementation.
//!
//! # Architecture overview (for beginners)
//!
//! A phone that pretends to be a Bluetooth keyboard receives input in two
//! shapes:
//!
//! - **Physical key events**: a key went down or came up (arrows, Enter, a
//!   hardware keyboard letter). These are handled one at a time by
//!   [`translate::single`].
//! - **Committed text**: the soft keyboard, voice input or paste hands over a
//!   whole string. [`translate::batch`] types it character by character,
//!   holding a modifier across characters that share it.
//!
//! The pieces:
//!
//! - **`keymap`** – Fixed tables from Android keycodes to HID codes.
//! - **`charmap`** – Which HID reports type a given character on the remote
//!   device's keyboard layout.
//! - **`sink`** – The transport seam and the [`HidAction`] vocabulary.
//! - **`state`** – Pressed-key bookkeeping a transport can use to build reports.
//! - **`input`** – The front end a platform input view talks to.

pub mod charmap;
pub mod input;
pub mod keymap;
pub mod sink;
pub mod state;
pub mod translate;

pub use charmap::{
    builtin, CharMapError, CharacterMap, EmptyCharMap, KeyReport, KeyReportSequence,
    StaticCharMap,
};
pub use input::KeyboardInput;
pub use keymap::{HidKeyCode, HidModifier, KeyTables};
pub use sink::{HidAction, HidKeyboardSink, RecordingSink};
pub use state::{KeyboardReport, KeyboardState};
pub use translate::{
    emit_resolution, plan_text, resolve_key_event, translate_key_event, translate_multiple_event,
    translate_text, KeyEvent, KeyPhase, MultipleKeyEvent, Resolution, TextOutcome,
};
