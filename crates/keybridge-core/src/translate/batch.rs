//! Translation of committed text into HID key taps.
//!
//! Every character is resolved through the character map and the resulting
//! reports are flattened into one list. The list is then typed report by
//! report, each key as an immediate press + release.
//!
//! # Modifier coalescing
//!
//! Releasing and re-pressing the same modifier between two characters costs
//! two reports and changes nothing on the remote side. So a modifier stays
//! held while the next report uses exactly the same modifier byte:
//!
//! ```text
//! "AB"  →  +Shift  +A -A  +B -B  -Shift
//! "Ab"  →  +Shift  +A -A  -Shift  +B -B
//! ```
//!
//! Only exact equality counts. Shift+Ctrl followed by Shift is a mismatch:
//! the combined modifier is released and Shift pressed on its own.

use tracing::{trace, warn};

use crate::charmap::{CharacterMap, KeyReport};
use crate::sink::{HidAction, HidKeyboardSink, RecordingSink};

/// What happened while typing a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOutcome {
    /// Characters the map could not produce, in input order.
    pub unresolved: Vec<char>,
    /// Number of key reports typed.
    pub reports_typed: usize,
}

impl TextOutcome {
    /// Returns `true` if every character was typed.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves every character of `text` and flattens the sequences.
///
/// Unknown characters are logged and collected; they do not abort the text.
fn resolve_reports(text: &str, map: &dyn CharacterMap) -> (Vec<KeyReport>, Vec<char>) {
    let mut reports = Vec::with_capacity(text.len());
    let mut unresolved = Vec::new();

    for ch in text.chars() {
        match map.lookup(ch) {
            Some(sequence) => reports.extend(sequence.iter().copied()),
            None => {
                warn!(character = ?ch, "unknown character map character");
                unresolved.push(ch);
            }
        }
    }

    (reports, unresolved)
}

/// Types `text` on `sink`, emitting each action as soon as it is decided.
pub fn translate_text<S>(text: &str, map: &dyn CharacterMap, sink: &mut S) -> TextOutcome
where
    S: HidKeyboardSink + ?Sized,
{
    trace!(text, "typing text");

    let (reports, unresolved) = resolve_reports(text, map);
    let mut pending = reports.iter().peekable();
    let mut held = 0u8;

    while let Some(report) = pending.next() {
        let modifier = report.modifier;

        if modifier != 0 && modifier != held {
            sink.press_modifier_key(modifier);
        }
        if report.key_code != 0 {
            sink.press_key(report.key_code);
            sink.release_key(report.key_code);
        }

        let carry = pending.peek().is_some_and(|next| next.modifier == modifier);
        if carry {
            held = modifier;
        } else {
            if modifier != 0 {
                sink.release_modifier_key(modifier);
            }
            held = 0;
        }
    }

    TextOutcome {
        unresolved,
        reports_typed: reports.len(),
    }
}

/// Runs [`translate_text`] against a recording sink and returns the actions.
pub fn plan_text(text: &str, map: &dyn CharacterMap) -> (Vec<HidAction>, TextOutcome) {
    let mut sink = RecordingSink::new();
    let outcome = translate_text(text, map, &mut sink);
    (sink.actions, outcome)
}
