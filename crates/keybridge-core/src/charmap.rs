//! Character to HID key report mapping.
//!
//! Typing a character on a remote HID keyboard needs one or more reports:
//! `a` on a US layout is a bare tap of key 0x04, `A` is Shift + 0x04, and `é`
//! on a German layout is the dead key ´ followed by `e`. A [`KeyReportSequence`]
//! holds exactly the reports for one character, in the order they must be
//! typed.
//!
//! Which layout the remote device uses is a user setting, so maps are looked
//! up by name through [`builtin`] and rebuilt by the caller when the name
//! changes.

use std::collections::HashMap;

use thiserror::Error;

use crate::keymap::hid::{HidKeyCode, HidModifier};

/// Name of the built-in US QWERTY map.
pub const EN_US: &str = "en_US";
/// Name of the built-in German QWERTZ map.
pub const DE_DE: &str = "de_DE";

/// Error type for character map resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharMapError {
    #[error("unknown character map: {0:?}")]
    UnknownMap(String),
}

/// One modifier + key combination.
///
/// `modifier` is a HID modifier bitmask (0 = none), `key_code` is a HID Usage
/// ID (0 = none). At least one of the two is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyReport {
    pub modifier: u8,
    pub key_code: u8,
}

impl KeyReport {
    pub fn new(modifier: u8, key_code: u8) -> Self {
        Self { modifier, key_code }
    }

    /// Returns `true` if neither a modifier nor a key is set.
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.key_code == 0
    }
}

/// The ordered, non-empty list of reports that produces one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReportSequence(Vec<KeyReport>);

impl KeyReportSequence {
    /// Builds a sequence, dropping meaningless all-zero reports.
    ///
    /// Returns `None` if no report remains.
    pub fn new(reports: Vec<KeyReport>) -> Option<Self> {
        let reports: Vec<KeyReport> = reports.into_iter().filter(|r| !r.is_empty()).collect();
        if reports.is_empty() {
            None
        } else {
            Some(Self(reports))
        }
    }

    /// Builds a sequence of a single report.
    pub fn single(modifier: u8, key_code: u8) -> Option<Self> {
        Self::new(vec![KeyReport::new(modifier, key_code)])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[KeyReport] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyReport> {
        self.0.iter()
    }

    /// Returns the report if this character is producible with one report.
    pub fn as_single(&self) -> Option<KeyReport> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a KeyReportSequence {
    type Item = &'a KeyReport;
    type IntoIter = std::slice::Iter<'a, KeyReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Read-only access to a character → report sequence mapping.
pub trait CharacterMap {
    /// Returns the reports that type `ch`, or `None` if the layout cannot produce it.
    fn lookup(&self, ch: char) -> Option<&KeyReportSequence>;
}

impl<M: CharacterMap + ?Sized> CharacterMap for &M {
    fn lookup(&self, ch: char) -> Option<&KeyReportSequence> {
        (**self).lookup(ch)
    }
}

/// A map in which every lookup fails.
///
/// Stands in for a missing or unloadable map.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyCharMap;

impl CharacterMap for EmptyCharMap {
    fn lookup(&self, _ch: char) -> Option<&KeyReportSequence> {
        None
    }
}

/// An in-memory character map.
#[derive(Debug, Default, Clone)]
pub struct StaticCharMap {
    entries: HashMap<char, KeyReportSequence>,
}

impl StaticCharMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the sequence for `ch`.
    pub fn insert(&mut self, ch: char, sequence: KeyReportSequence) {
        self.entries.insert(ch, sequence);
    }

    /// Builder form of [`insert`](Self::insert) from raw `(modifier, key_code)` pairs.
    ///
    /// Pairs that are all zero are dropped; if nothing remains the map is unchanged.
    pub fn with(mut self, ch: char, reports: &[(u8, u8)]) -> Self {
        let reports = reports
            .iter()
            .map(|&(modifier, key_code)| KeyReport::new(modifier, key_code))
            .collect();
        if let Some(sequence) = KeyReportSequence::new(reports) {
            self.insert(ch, sequence);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn tap(&mut self, ch: char, modifier: u8, key: HidKeyCode) {
        if let Some(sequence) = KeyReportSequence::single(modifier, key.as_u8()) {
            self.insert(ch, sequence);
        }
    }

    fn dead(&mut self, ch: char, dead: HidKeyCode, modifier: u8, key: HidKeyCode) {
        let reports = vec![
            KeyReport::new(0, dead.as_u8()),
            KeyReport::new(modifier, key.as_u8()),
        ];
        if let Some(sequence) = KeyReportSequence::new(reports) {
            self.insert(ch, sequence);
        }
    }
}

impl CharacterMap for StaticCharMap {
    fn lookup(&self, ch: char) -> Option<&KeyReportSequence> {
        self.entries.get(&ch)
    }
}

/// Builds the built-in map registered under `name`.
///
/// # Errors
///
/// Returns [`CharMapError::UnknownMap`] if no map has that name.
pub fn builtin(name: &str) -> Result<StaticCharMap, CharMapError> {
    match name {
        EN_US => Ok(en_us()),
        DE_DE => Ok(de_de()),
        other => Err(CharMapError::UnknownMap(other.to_string())),
    }
}

const SHIFT: u8 = HidModifier::LEFT_SHIFT;
const ALT_GR: u8 = HidModifier::RIGHT_ALT;

const LETTERS: [HidKeyCode; 26] = {
    use HidKeyCode::*;
    [
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN,
        KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ]
};

const DIGITS: [HidKeyCode; 10] = {
    use HidKeyCode::*;
    [Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9]
};

fn common_keys(map: &mut StaticCharMap) {
    for (digit, &key) in ('0'..='9').zip(DIGITS.iter()) {
        map.tap(digit, 0, key);
    }
    map.tap(' ', 0, HidKeyCode::Space);
    map.tap('\t', 0, HidKeyCode::Tab);
    map.tap('\n', 0, HidKeyCode::Enter);
}

fn en_us() -> StaticCharMap {
    use HidKeyCode::*;

    let mut map = StaticCharMap::new();
    for (lower, &key) in ('a'..='z').zip(LETTERS.iter()) {
        map.tap(lower, 0, key);
        map.tap(lower.to_ascii_uppercase(), SHIFT, key);
    }
    common_keys(&mut map);

    let shifted_digits = [
        (')', Digit0),
        ('!', Digit1),
        ('@', Digit2),
        ('#', Digit3),
        ('$', Digit4),
        ('%', Digit5),
        ('^', Digit6),
        ('&', Digit7),
        ('*', Digit8),
        ('(', Digit9),
    ];
    for (ch, key) in shifted_digits {
        map.tap(ch, SHIFT, key);
    }

    let punctuation = [
        ('-', '_', Minus),
        ('=', '+', Equal),
        ('[', '{', BracketLeft),
        (']', '}', BracketRight),
        ('\\', '|', Backslash),
        (';', ':', Semicolon),
        ('\'', '"', Quote),
        ('`', '~', Backquote),
        (',', '<', Comma),
        ('.', '>', Period),
        ('/', '?', Slash),
    ];
    for (plain, shifted, key) in punctuation {
        map.tap(plain, 0, key);
        map.tap(shifted, SHIFT, key);
    }

    map
}

fn de_de() -> StaticCharMap {
    use HidKeyCode::*;

    let mut map = StaticCharMap::new();
    for (lower, &key) in ('a'..='z').zip(LETTERS.iter()) {
        // QWERTZ swaps the Y and Z positions.
        let key = match key {
            KeyY => KeyZ,
            KeyZ => KeyY,
            other => other,
        };
        map.tap(lower, 0, key);
        map.tap(lower.to_ascii_uppercase(), SHIFT, key);
    }
    common_keys(&mut map);

    let shifted_digits = [
        ('=', Digit0),
        ('!', Digit1),
        ('"', Digit2),
        ('§', Digit3),
        ('$', Digit4),
        ('%', Digit5),
        ('&', Digit6),
        ('/', Digit7),
        ('(', Digit8),
        (')', Digit9),
    ];
    for (ch, key) in shifted_digits {
        map.tap(ch, SHIFT, key);
    }

    map.tap('ü', 0, BracketLeft);
    map.tap('Ü', SHIFT, BracketLeft);
    map.tap('ö', 0, Semicolon);
    map.tap('Ö', SHIFT, Semicolon);
    map.tap('ä', 0, Quote);
    map.tap('Ä', SHIFT, Quote);
    map.tap('ß', 0, Minus);
    map.tap('?', SHIFT, Minus);
    map.tap('+', 0, BracketRight);
    map.tap('*', SHIFT, BracketRight);
    map.tap('~', ALT_GR, BracketRight);
    map.tap(',', 0, Comma);
    map.tap(';', SHIFT, Comma);
    map.tap('.', 0, Period);
    map.tap(':', SHIFT, Period);
    map.tap('-', 0, Slash);
    map.tap('_', SHIFT, Slash);
    map.tap('@', ALT_GR, KeyQ);
    map.tap('€', ALT_GR, KeyE);
    map.tap('{', ALT_GR, Digit7);
    map.tap('[', ALT_GR, Digit8);
    map.tap(']', ALT_GR, Digit9);
    map.tap('}', ALT_GR, Digit0);
    map.tap('\\', ALT_GR, Minus);

    // Dead keys: circumflex on the Backquote position, acute on Equal.
    map.dead('^', Backquote, 0, Space);
    map.dead('´', Equal, 0, Space);
    for (ch, modifier, key) in [
        ('â', 0, KeyA),
        ('ê', 0, KeyE),
        ('î', 0, KeyI),
        ('ô', 0, KeyO),
        ('û', 0, KeyU),
        ('Â', SHIFT, KeyA),
        ('Ê', SHIFT, KeyE),
    ] {
        map.dead(ch, Backquote, modifier, key);
    }
    for (ch, modifier, key) in [
        ('á', 0, KeyA),
        ('é', 0, KeyE),
        ('í', 0, KeyI),
        ('ó', 0, KeyO),
        ('ú', 0, KeyU),
        ('É', SHIFT, KeyE),
    ] {
        map.dead(ch, Equal, modifier, key);
    }

    map
}
