use evdev::{AbsoluteAxisCode, EventType, KeyCode, RelativeAxisCode};

use crate::input::capability::{AxisCode, ButtonCode, Capability};
use crate::input::event::evdev::{abs_code, key_code, rel_code, EvdevEvent};
use crate::input::event::native::NativeEvent;

#[test]
fn test_axis_code_resolution() {
    assert_eq!(rel_code(AxisCode::X), Some(RelativeAxisCode::REL_X));
    assert_eq!(rel_code(AxisCode::Wheel), Some(RelativeAxisCode::REL_WHEEL));
    assert_eq!(
        rel_code(AxisCode::HorizontalWheel),
        Some(RelativeAxisCode::REL_HWHEEL)
    );
    assert_eq!(rel_code(AxisCode::Pressure), None);

    assert_eq!(abs_code(AxisCode::RotationZ), Some(AbsoluteAxisCode::ABS_RZ));
    assert_eq!(abs_code(AxisCode::Pressure), Some(AbsoluteAxisCode::ABS_PRESSURE));
    assert_eq!(abs_code(AxisCode::TiltX), Some(AbsoluteAxisCode::ABS_TILT_X));
    assert_eq!(abs_code(AxisCode::HorizontalWheel), None);
}

#[test]
fn test_button_code_resolution() {
    assert_eq!(key_code(ButtonCode::Btn0), KeyCode::BTN_0);
    assert_eq!(key_code(ButtonCode::Left), KeyCode::BTN_LEFT);
    assert_eq!(key_code(ButtonCode::Touch), KeyCode::BTN_TOUCH);
    assert_eq!(key_code(ButtonCode::ToolMouse), KeyCode::BTN_TOOL_MOUSE);
}

#[test]
fn test_native_event_resolution() {
    let event = EvdevEvent::from_native(NativeEvent::new(
        Capability::AbsoluteAxis(AxisCode::Y),
        -1234,
    ))
    .unwrap()
    .as_input_event();
    assert_eq!(event.event_type(), EventType::ABSOLUTE);
    assert_eq!(event.code(), AbsoluteAxisCode::ABS_Y.0);
    assert_eq!(event.value(), -1234);

    let event = EvdevEvent::from_native(NativeEvent::new(
        Capability::RelativeAxis(AxisCode::Wheel),
        5,
    ))
    .unwrap()
    .as_input_event();
    assert_eq!(event.event_type(), EventType::RELATIVE);
    assert_eq!(event.code(), RelativeAxisCode::REL_WHEEL.0);

    let event = EvdevEvent::from_native(NativeEvent::new(
        Capability::Button(ButtonCode::Right),
        1,
    ))
    .unwrap()
    .as_input_event();
    assert_eq!(event.event_type(), EventType::KEY);
    assert_eq!(event.code(), KeyCode::BTN_RIGHT.0);
    assert_eq!(event.value(), 1);
}

#[test]
fn test_unrepresentable_capability_is_dropped() {
    // The catalog never maps these, but the resolution layer still has to
    // refuse them without panicking.
    assert!(EvdevEvent::from_native(NativeEvent::new(
        Capability::RelativeAxis(AxisCode::TiltY),
        1,
    ))
    .is_none());
}
