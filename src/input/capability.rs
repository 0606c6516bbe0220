/// A capability describes what kind of event the virtual device emits for a
/// translated input. Profile tables and the translators only ever speak in
/// these neutral codes; the target device layer resolves them to host evdev
/// constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Relative axis motion (mouse-style deltas).
    RelativeAxis(AxisCode),
    /// Absolute axis position.
    AbsoluteAxis(AxisCode),
    /// Button state change.
    Button(ButtonCode),
}

/// Neutral identifiers for target axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisCode {
    X,
    Y,
    Z,
    RotationX,
    RotationY,
    RotationZ,
    Wheel,
    HorizontalWheel,
    Pressure,
    TiltX,
    TiltY,
}

/// Neutral identifiers for target buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonCode {
    Btn0,
    Btn1,
    Btn2,
    Btn3,
    Btn4,
    Btn5,
    Btn6,
    Btn7,
    Btn8,
    Btn9,
    Left,
    Middle,
    Right,
    Touch,
    ToolPen,
    ToolRubber,
    ToolBrush,
    ToolMouse,
}
