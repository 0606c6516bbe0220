use crate::config::ProfileKind;
use crate::input::capability::{AxisCode, ButtonCode, Capability};
use crate::input::event::{ButtonTransition, MotionSample};
use crate::input::translator::{ButtonTranslator, MotionTranslator};

fn motion(x: i32, y: i32, z: i32, rx: i32, ry: i32, rz: i32) -> MotionSample {
    MotionSample { x, y, z, rx, ry, rz }
}

fn press(index: i32) -> ButtonTransition {
    ButtonTransition {
        index,
        pressed: true,
    }
}

fn release(index: i32) -> ButtonTransition {
    ButtonTransition {
        index,
        pressed: false,
    }
}

#[test]
fn test_joystick_axes_in_logical_order() {
    let mut translator = MotionTranslator::new(ProfileKind::Joystick.profile());
    let events = translator.translate(&motion(100, -50, 0, 0, 0, 0));

    let expected = [
        (AxisCode::X, -100),
        (AxisCode::Y, -50),
        (AxisCode::Z, 0),
        (AxisCode::RotationX, 0),
        (AxisCode::RotationY, 0),
        (AxisCode::RotationZ, 0),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (axis, value)) in events.iter().zip(expected) {
        assert_eq!(event.as_capability(), Capability::AbsoluteAxis(axis));
        assert_eq!(event.value(), value);
    }
}

#[test]
fn test_mouse_skips_unmapped_axes() {
    let mut translator = MotionTranslator::new(ProfileKind::Mouse.profile());
    let events = translator.translate(&motion(100, -100, 500, 40, 50, 700));

    // Translate-Z and rotate-Z are unmapped: four events, none for them.
    assert_eq!(events.len(), 4);
    let capabilities: Vec<_> = events.iter().map(|e| e.as_capability()).collect();
    assert_eq!(
        capabilities,
        vec![
            Capability::RelativeAxis(AxisCode::X),
            Capability::RelativeAxis(AxisCode::Y),
            Capability::RelativeAxis(AxisCode::HorizontalWheel),
            Capability::RelativeAxis(AxisCode::Wheel),
        ]
    );
    let values: Vec<_> = events.iter().map(|e| e.value()).collect();
    assert_eq!(values, vec![-10, -10, 4, 5]);
}

#[test]
fn test_non_accumulating_profiles_are_stateless() {
    for kind in [ProfileKind::Joystick, ProfileKind::Relative, ProfileKind::Mouse] {
        let mut translator = MotionTranslator::new(kind.profile());
        let sample = motion(250, -31, 77, -4096, 4096, 1);
        let first = translator.translate(&sample);
        let second = translator.translate(&sample);
        assert_eq!(first, second, "profile {kind} drifted between calls");
    }
}

#[test]
fn test_accumulation_clamps_at_zero_and_resumes() {
    let mut translator = MotionTranslator::new(ProfileKind::Tablet.profile());

    // Tablet X has divisor -1 over range [0, 4096], so the cursor starts
    // centered at 2048 and raw +3000 steps it by -3000.
    let events = translator.translate(&motion(3000, 0, 0, 0, 0, 0));
    assert_eq!(events[0].as_capability(), Capability::AbsoluteAxis(AxisCode::X));
    assert_eq!(events[0].value(), 0);

    // Still clamped; the overshoot is absorbed, not remembered.
    let events = translator.translate(&motion(100, 0, 0, 0, 0, 0));
    assert_eq!(events[0].value(), 0);

    // Positive motion resumes from zero.
    let events = translator.translate(&motion(-500, 0, 0, 0, 0, 0));
    assert_eq!(events[0].value(), 500);
}

#[test]
fn test_accumulation_tracks_both_coordinates() {
    let mut translator = MotionTranslator::new(ProfileKind::Tablet.profile());

    let events = translator.translate(&motion(-100, 300, 0, 0, 0, 0));
    assert_eq!(events[0].value(), 2148);
    assert_eq!(events[1].as_capability(), Capability::AbsoluteAxis(AxisCode::Y));
    assert_eq!(events[1].value(), 2348);

    let events = translator.translate(&motion(-100, 300, 0, 0, 0, 0));
    assert_eq!(events[0].value(), 2248);
    assert_eq!(events[1].value(), 2648);
}

#[test]
fn test_accumulating_profile_reports_other_axes_directly() {
    let mut translator = MotionTranslator::new(ProfileKind::Tablet.profile());

    let events = translator.translate(&motion(0, 0, 1000, 0, 0, 0));
    assert_eq!(
        events[2].as_capability(),
        Capability::AbsoluteAxis(AxisCode::Pressure)
    );
    assert_eq!(events[2].value(), 1000);

    // Pressure does not accumulate between samples.
    let events = translator.translate(&motion(0, 0, 1000, 0, 0, 0));
    assert_eq!(events[2].value(), 1000);
}

#[test]
fn test_ball_index_resolves_to_slot_zero_in_every_profile() {
    for kind in ProfileKind::ALL {
        let translator = ButtonTranslator::new(kind.profile());
        let event = translator.translate(&press(7)).unwrap();
        let expected = match kind {
            ProfileKind::Joystick | ProfileKind::Relative => ButtonCode::Btn0,
            ProfileKind::Tablet => ButtonCode::Touch,
            ProfileKind::Mouse => ButtonCode::Left,
        };
        assert_eq!(event.as_capability(), Capability::Button(expected));
        assert_eq!(event.value(), 1);
    }
}

#[test]
fn test_eighth_button_index_resolves_to_slot_eight() {
    let translator = ButtonTranslator::new(ProfileKind::Joystick.profile());
    let event = translator.translate(&press(14)).unwrap();
    assert_eq!(event.as_capability(), Capability::Button(ButtonCode::Btn8));
}

#[test]
fn test_contiguous_indices_shift_by_one() {
    let translator = ButtonTranslator::new(ProfileKind::Joystick.profile());
    for raw in 0..=6 {
        let event = translator.translate(&press(raw)).unwrap();
        let expected = match raw {
            0 => ButtonCode::Btn1,
            1 => ButtonCode::Btn2,
            2 => ButtonCode::Btn3,
            3 => ButtonCode::Btn4,
            4 => ButtonCode::Btn5,
            5 => ButtonCode::Btn6,
            6 => ButtonCode::Btn7,
            _ => unreachable!(),
        };
        assert_eq!(event.as_capability(), Capability::Button(expected));
    }
}

#[test]
fn test_unknown_indices_are_silently_dropped() {
    let translator = ButtonTranslator::new(ProfileKind::Joystick.profile());
    for raw in [-1, 8, 13, 15, 100] {
        assert_eq!(translator.translate(&press(raw)), None);
        assert_eq!(translator.translate(&release(raw)), None);
    }
}

#[test]
fn test_unmapped_button_slot_is_suppressed() {
    // Mouse leaves slot 1 unmapped, which raw index 0 resolves to.
    let translator = ButtonTranslator::new(ProfileKind::Mouse.profile());
    assert_eq!(translator.translate(&press(0)), None);
    assert_eq!(translator.translate(&release(0)), None);
}

#[test]
fn test_sticky_button_reports_release_as_press() {
    let translator = ButtonTranslator::new(ProfileKind::Tablet.profile());

    let pressed = translator.translate(&press(7)).unwrap();
    assert_eq!(pressed.value(), 1);
    let released = translator.translate(&release(7)).unwrap();
    assert_eq!(released.value(), 1);

    // A regular slot on the same profile releases normally.
    let released = translator.translate(&release(0)).unwrap();
    assert_eq!(released.as_capability(), Capability::Button(ButtonCode::ToolPen));
    assert_eq!(released.value(), 0);
}
