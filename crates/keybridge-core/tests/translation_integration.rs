//! Integration tests for the translation pipeline.
//!
//! These tests drive the public API the way a platform input view does:
//! `KeyboardInput` + built-in character maps + a sink. They verify:
//!
//! - Exact action ordering against a strict mock sink (`mockall::Sequence`).
//! - That the reports a transport would build from the actions never show a
//!   key without its modifier, and end fully released.

use keybridge_core::keymap::android::*;
use keybridge_core::keymap::{HardwareKey, HidModifier};
use keybridge_core::{
    builtin, plan_text, translate_key_event, translate_text, HidAction, HidKeyboardSink, KeyEvent,
    KeyboardInput, KeyboardReport, KeyboardState, RecordingSink,
};
use mockall::predicate::eq;
use mockall::{mock, Sequence};

mock! {
    pub Sink {}

    impl HidKeyboardSink for Sink {
        fn press_modifier_key(&mut self, modifier: u8);
        fn release_modifier_key(&mut self, modifier: u8);
        fn press_key(&mut self, key_code: u8);
        fn release_key(&mut self, key_code: u8);
        fn press_hardware_key(&mut self, hardware_key: u8);
        fn release_hardware_key(&mut self, hardware_key: u8);
        fn press_media_key(&mut self, media_key: u8);
        fn release_media_key(&mut self, media_key: u8);
        fn is_connected(&self) -> bool;
    }
}

const SHIFT: u8 = HidModifier::LEFT_SHIFT;

/// Forwards every action into a `KeyboardState` and snapshots the report after each one.
#[derive(Default)]
struct ReportCapture {
    state: KeyboardState,
    reports: Vec<KeyboardReport>,
}

impl ReportCapture {
    fn record(&mut self, action: HidAction) {
        action.apply(&mut self.state);
        self.reports.push(self.state.report());
    }
}

impl HidKeyboardSink for ReportCapture {
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
}

// ── Strict ordering ───────────────────────────────────────────────────────────

#[test]
fn test_coalesced_text_calls_sink_in_exact_order() {
    // Arrange
    let map = builtin("en_US").expect("en_US");
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();

    sink.expect_press_modifier_key()
        .with(eq(SHIFT))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    for key in [0x04u8, 0x05] {
        sink.expect_press_key()
            .with(eq(key))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_release_key()
            .with(eq(key))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    sink.expect_release_modifier_key()
        .with(eq(SHIFT))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    // Act
    let outcome = translate_text("AB", &map, &mut sink);

    // Assert (expectations are verified when the mock drops)
    assert!(outcome.is_complete());
}

#[test]
fn test_hardware_key_never_touches_keyboard_report() {
    // Arrange
    let map = builtin("en_US").expect("en_US");
    let mut sink = MockSink::new();
    sink.expect_press_hardware_key()
        .with(eq(HardwareKey::EJECT))
        .times(1)
        .return_const(());
    sink.expect_press_modifier_key().never();
    sink.expect_press_key().never();

    // Act
    let handled = translate_key_event(&KeyEvent::down(KEYCODE_MEDIA_EJECT, 0), &map, &mut sink);

    // Assert
    assert!(handled);
}

// ── Report-level behaviour ────────────────────────────────────────────────────

#[test]
fn test_every_typed_key_is_accompanied_by_its_modifier() {
    // Arrange
    let map = builtin("en_US").expect("en_US");
    let mut capture = ReportCapture::default();

    // Act
    translate_text("Hi Tom!", &map, &mut capture);

    // Assert: H (0x0B), T (0x17) and ! (0x1E) must appear with Shift held.
    for report in &capture.reports {
        for shifted in [0x0B, 0x17, 0x1E] {
            if report.keys.contains(&shifted) {
                assert_eq!(report.modifier, SHIFT, "key 0x{shifted:02X} without Shift");
            }
        }
        for plain in [0x0C, 0x12, 0x10] {
            if report.keys.contains(&plain) {
                assert_eq!(report.modifier, 0, "key 0x{plain:02X} with a modifier");
            }
        }
    }
    assert!(capture.state.report().is_empty(), "text must end fully released");
}

#[test]
fn test_coalescing_saves_modifier_reports() {
    // Arrange
    let map = builtin("en_US").expect("en_US");

    // Act
    let (actions, _) = plan_text("HELLO", &map);

    // Assert: one Shift press/release pair around five taps.
    assert_eq!(actions.len(), 2 + 5 * 2);
    assert_eq!(actions.first(), Some(&HidAction::PressModifier(SHIFT)));
    assert_eq!(actions.last(), Some(&HidAction::ReleaseModifier(SHIFT)));
}

#[test]
fn test_physical_typing_through_keyboard_input_holds_and_releases() {
    // Arrange
    let mut input = KeyboardInput::with_sink(KeyboardState::new(), "en_US").expect("en_US");

    // Act: hold left Shift, press A (platform reports 'a'), release both.
    input.on_key_down(KEYCODE_SHIFT_LEFT, 0);
    input.on_key_down(KEYCODE_A, 'a' as u32);
    let held = input.sink().map(KeyboardState::report);
    input.on_key_up(KEYCODE_A, 0);
    input.on_key_up(KEYCODE_SHIFT_LEFT, 0);

    // Assert
    assert_eq!(
        held,
        Some(KeyboardReport {
            modifier: SHIFT,
            keys: [0x04, 0, 0, 0, 0, 0]
        })
    );
    assert!(input.sink().map(|s| s.report().is_empty()).unwrap_or(false));
}

#[test]
fn test_repeat_events_do_not_emit_actions() {
    // Arrange
    let mut input = KeyboardInput::with_sink(RecordingSink::new(), "en_US").expect("en_US");

    // Act
    input.on_key_down(KEYCODE_DPAD_DOWN, 0);
    let handled = input.on_key_multiple(KEYCODE_DPAD_DOWN, 4, None);
    input.on_key_up(KEYCODE_DPAD_DOWN, 0);

    // Assert
    assert!(handled);
    assert_eq!(
        input.sink().map(|s| s.actions.clone()),
        Some(vec![HidAction::PressKey(81), HidAction::ReleaseKey(81)])
    );
}

#[test]
fn test_committed_german_text_uses_dead_keys() {
    // Arrange
    let mut input = KeyboardInput::with_sink(RecordingSink::new(), "de_DE").expect("de_DE");

    // Act
    input.commit_text("é");

    // Assert
    assert_eq!(
        input.sink().map(|s| s.actions.clone()),
        Some(vec![
            HidAction::PressKey(0x2E),
            HidAction::ReleaseKey(0x2E),
            HidAction::PressKey(0x08),
            HidAction::ReleaseKey(0x08),
        ])
    );
}

#[test]
fn test_disconnect_makes_input_pass_through() {
    // Arrange
    let mut input = KeyboardInput::with_sink(KeyboardState::new(), "en_US").expect("en_US");

    // Act
    if let Some(state) = input.sink_mut() {
        state.set_connected(false);
    }

    // Assert
    assert!(!input.is_active());
    assert!(!input.on_key_down(KEYCODE_ENTER, 0));
}

#[test]
fn test_key_up_character_change_leaves_no_modifier_stuck() {
    // Arrange
    let mut input = KeyboardInput::with_sink(KeyboardState::new(), "en_US").expect("en_US");

    // Act: the platform reports 'A' going down and 'a' coming up.
    input.on_key_down(KEYCODE_A, 'A' as u32);
    input.on_key_up(KEYCODE_A, 'a' as u32);

    // Assert
    assert_eq!(input.sink().map(KeyboardState::report), Some(KeyboardReport::default()));
}

#[test]
fn test_layout_switch_while_key_held_leaves_no_key_stuck() {
    // Arrange
    let mut input = KeyboardInput::with_sink(KeyboardState::new(), "en_US").expect("en_US");

    // Act
    input.on_key_down(KEYCODE_A, 'y' as u32);
    input.set_key_map("de_DE").expect("de_DE");
    input.on_key_up(KEYCODE_A, 0);

    // Assert
    assert_eq!(input.sink().map(KeyboardState::report), Some(KeyboardReport::default()));
}

#[test]
fn test_default_keyboard_state_makes_input_active() {
    let mut input = KeyboardInput::with_sink(KeyboardState::default(), "en_US").expect("en_US");
    assert!(input.is_active());
    assert!(input.on_key_down(KEYCODE_ENTER, 0));
}
