use pretty_assertions::assert_eq;
use proportion_calculator::format::{DisplayFormatter, InputBox};
use proportion_calculator::session::{Clipboard, Session, SlotIndex};
use proportion_calculator::units::UnitTag;

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) {
        self.copied.push(text.to_string());
    }
}

#[test]
fn starts_empty_with_default_units() {
    let session = Session::default();
    let state = session.state();
    assert_eq!(
        state.units(),
        [UnitTag::Gram, UnitTag::KiloCalorie, UnitTag::Gram, UnitTag::KiloCalorie]
    );
    assert!(state.values().iter().all(String::is_empty));
    assert_eq!(session.on_derived_field_activated(), "0");
}

#[test]
fn derived_slot_fills_once_three_slots_are_numeric() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "100");
    assert_eq!(session.state().derived_text(), "");
    session.on_field_edited(SlotIndex::Second, "200");
    assert_eq!(session.state().derived_text(), "");
    let state = session.on_field_edited(SlotIndex::Third, "50");
    assert_eq!(state.derived_text(), "100");
    assert_eq!(session.full_precision_result(), 100.0);
}

#[test]
fn partial_typing_keeps_previous_result() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "100");
    session.on_field_edited(SlotIndex::Second, "200");
    session.on_field_edited(SlotIndex::Third, "50");

    // 입력 도중의 "-"는 숫자가 아니므로 재계산하지 않는다
    let state = session.on_field_edited(SlotIndex::Third, "-");
    assert_eq!(state.slot(SlotIndex::Third).value, "-");
    assert_eq!(state.derived_text(), "100");
}

#[test]
fn editing_derived_slot_is_overwritten() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "3");
    session.on_field_edited(SlotIndex::Second, "100");
    session.on_field_edited(SlotIndex::Third, "1");
    let state = session.on_field_edited(SlotIndex::Fourth, "999");
    assert_eq!(state.derived_text(), "33.33");

    // 숫자가 아닌 4번 칸은 다음 편집까지 그대로 남는다
    let state = session.on_field_edited(SlotIndex::Fourth, "oops");
    assert_eq!(state.derived_text(), "oops");
    let state = session.on_field_edited(SlotIndex::Fourth, "");
    assert_eq!(state.derived_text(), "33.33");
}

#[test]
fn unit_change_applies_before_recompute() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "2");
    session.on_field_edited(SlotIndex::Second, "300");
    session.on_field_edited(SlotIndex::Third, "1");
    assert_eq!(session.state().derived_text(), "150");

    session.on_unit_changed(SlotIndex::First, UnitTag::Ounce);
    assert_eq!(session.state().derived_text(), "150");
    let state = session.on_unit_changed(SlotIndex::Third, UnitTag::Pound);
    assert_eq!(state.derived_text(), "2400");
    assert_eq!(state.slot(SlotIndex::Third).unit, UnitTag::Pound);
}

#[test]
fn invalid_result_keeps_last_full_precision_value() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "3");
    session.on_field_edited(SlotIndex::Second, "100");
    session.on_field_edited(SlotIndex::Third, "1");
    let full = session.on_derived_field_activated();
    assert_eq!(full, (100.0_f64 / 3.0).to_string());

    session.on_field_edited(SlotIndex::First, "0");
    assert_eq!(session.state().derived_text(), "");
    assert_eq!(session.on_derived_field_activated(), full);
}

#[test]
fn copy_hands_full_precision_text_verbatim() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "7");
    session.on_field_edited(SlotIndex::Second, "1");
    session.on_field_edited(SlotIndex::Third, "1");
    let mut clip = RecordingClipboard::default();
    session.copy_full_precision(&mut clip);
    assert_eq!(clip.copied, vec![session.on_derived_field_activated()]);
    assert_eq!(session.state().derived_text(), "0.14");
}

#[test]
fn reference_mass_conversion_recomputes() {
    let mut session = Session::default();
    session.on_unit_changed(SlotIndex::Second, UnitTag::Ounce);
    session.on_field_edited(SlotIndex::First, "45359237");
    session.on_field_edited(SlotIndex::Third, "1");
    assert!(session.apply_reference_mass_conversion());
    let state = session.state();
    assert_eq!(state.slot(SlotIndex::Second).value, "1600000");
    assert_eq!(state.derived_text(), "0.04");
}

#[test]
fn conversion_is_refused_for_other_units() {
    let mut session = Session::default();
    session.on_field_edited(SlotIndex::First, "100");
    let before = session.state().clone();
    assert!(!session.apply_reference_mass_conversion());
    assert_eq!(session.state(), &before);
}

#[test]
fn font_size_follows_configured_input_box() {
    let mut session = Session::new(DisplayFormatter::new(InputBox {
        width: 100.0,
        height: 100.0,
    }));
    assert_eq!(session.field_font_size(SlotIndex::First), 100.0);
    session.on_field_edited(SlotIndex::First, "1234");
    assert_eq!(session.field_font_size(SlotIndex::First), 50.0);
}

#[test]
fn reset_restores_initial_state() {
    let mut session = Session::default();
    session.on_unit_changed(SlotIndex::Fourth, UnitTag::Milliliter);
    session.on_field_edited(SlotIndex::First, "1");
    session.on_field_edited(SlotIndex::Second, "2");
    session.on_field_edited(SlotIndex::Third, "3");
    session.reset();
    assert_eq!(session.state(), Session::default().state());
    assert_eq!(session.full_precision_result(), 0.0);
}
