//! Resolution of neutral capability codes to Linux evdev constants. This is
//! the only place translated events touch platform event codes; everything
//! upstream of the target device stays portable.

use evdev::{AbsoluteAxisCode, EventType, InputEvent, KeyCode, RelativeAxisCode};

use crate::input::capability::{AxisCode, ButtonCode, Capability};

use super::native::NativeEvent;

/// An evdev event resolved from a [NativeEvent].
#[derive(Debug, Clone)]
pub struct EvdevEvent {
    event: InputEvent,
}

impl EvdevEvent {
    /// Resolves the given native event. Returns [None] when the capability
    /// has no evdev representation; the catalog never maps such a
    /// combination, so a miss here is a defensive drop rather than an error.
    pub fn from_native(event: NativeEvent) -> Option<EvdevEvent> {
        let input_event = match event.as_capability() {
            Capability::RelativeAxis(axis) => {
                let Some(code) = rel_code(axis) else {
                    log::warn!("dropping event for axis {axis:?} with no relative evdev code");
                    return None;
                };
                InputEvent::new(EventType::RELATIVE.0, code.0, event.value())
            }
            Capability::AbsoluteAxis(axis) => {
                let Some(code) = abs_code(axis) else {
                    log::warn!("dropping event for axis {axis:?} with no absolute evdev code");
                    return None;
                };
                InputEvent::new(EventType::ABSOLUTE.0, code.0, event.value())
            }
            Capability::Button(button) => {
                InputEvent::new(EventType::KEY.0, key_code(button).0, event.value())
            }
        };
        Some(EvdevEvent { event: input_event })
    }

    /// Returns the event as an evdev [InputEvent].
    pub fn as_input_event(&self) -> InputEvent {
        self.event
    }
}

/// Relative axis code for the given neutral axis, if one exists.
pub fn rel_code(axis: AxisCode) -> Option<RelativeAxisCode> {
    let code = match axis {
        AxisCode::X => RelativeAxisCode::REL_X,
        AxisCode::Y => RelativeAxisCode::REL_Y,
        AxisCode::Z => RelativeAxisCode::REL_Z,
        AxisCode::RotationX => RelativeAxisCode::REL_RX,
        AxisCode::RotationY => RelativeAxisCode::REL_RY,
        AxisCode::RotationZ => RelativeAxisCode::REL_RZ,
        AxisCode::Wheel => RelativeAxisCode::REL_WHEEL,
        AxisCode::HorizontalWheel => RelativeAxisCode::REL_HWHEEL,
        AxisCode::Pressure | AxisCode::TiltX | AxisCode::TiltY => return None,
    };
    Some(code)
}

/// Absolute axis code for the given neutral axis, if one exists.
pub fn abs_code(axis: AxisCode) -> Option<AbsoluteAxisCode> {
    let code = match axis {
        AxisCode::X => AbsoluteAxisCode::ABS_X,
        AxisCode::Y => AbsoluteAxisCode::ABS_Y,
        AxisCode::Z => AbsoluteAxisCode::ABS_Z,
        AxisCode::RotationX => AbsoluteAxisCode::ABS_RX,
        AxisCode::RotationY => AbsoluteAxisCode::ABS_RY,
        AxisCode::RotationZ => AbsoluteAxisCode::ABS_RZ,
        AxisCode::Wheel => AbsoluteAxisCode::ABS_WHEEL,
        AxisCode::Pressure => AbsoluteAxisCode::ABS_PRESSURE,
        AxisCode::TiltX => AbsoluteAxisCode::ABS_TILT_X,
        AxisCode::TiltY => AbsoluteAxisCode::ABS_TILT_Y,
        AxisCode::HorizontalWheel => return None,
    };
    Some(code)
}

/// Key code for the given neutral button. Total; every catalog button has
/// an evdev counterpart.
pub fn key_code(button: ButtonCode) -> KeyCode {
    match button {
        ButtonCode::Btn0 => KeyCode::BTN_0,
        ButtonCode::Btn1 => KeyCode::BTN_1,
        ButtonCode::Btn2 => KeyCode::BTN_2,
        ButtonCode::Btn3 => KeyCode::BTN_3,
        ButtonCode::Btn4 => KeyCode::BTN_4,
        ButtonCode::Btn5 => KeyCode::BTN_5,
        ButtonCode::Btn6 => KeyCode::BTN_6,
        ButtonCode::Btn7 => KeyCode::BTN_7,
        ButtonCode::Btn8 => KeyCode::BTN_8,
        ButtonCode::Btn9 => KeyCode::BTN_9,
        ButtonCode::Left => KeyCode::BTN_LEFT,
        ButtonCode::Middle => KeyCode::BTN_MIDDLE,
        ButtonCode::Right => KeyCode::BTN_RIGHT,
        ButtonCode::Touch => KeyCode::BTN_TOUCH,
        ButtonCode::ToolPen => KeyCode::BTN_TOOL_PEN,
        ButtonCode::ToolRubber => KeyCode::BTN_TOOL_RUBBER,
        ButtonCode::ToolBrush => KeyCode::BTN_TOOL_BRUSH,
        ButtonCode::ToolMouse => KeyCode::BTN_TOOL_MOUSE,
    }
}
