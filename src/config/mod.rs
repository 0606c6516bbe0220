
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::input::capability::{AxisCode, ButtonCode};

/// Number of logical source axes on the controller.
pub const NUM_AXES: usize = 6;
/// Number of logical button positions on the controller.
pub const NUM_BUTTONS: usize = 9;

const BUS_USB: u16 = 0x03;

/// Error returned when a profile name does not match any catalog entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown device profile \"{0}\"")]
pub struct UnknownProfile(pub String);

/// Identity fields stamped on the emulated device so the host can match it
/// against its device databases. Purely descriptive; no behavioral effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub bus_type: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// How a mapped axis reports to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisMode {
    Relative,
    Absolute,
}

/// One entry in a profile's axis mapping table.
///
/// An unmapped slot is a hard exclusion: it carries no divisor or range and
/// never produces an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSlot {
    Unmapped,
    Mapped {
        target: AxisCode,
        mode: AxisMode,
        /// Strength divider applied to the raw source value. Never zero for
        /// a mapped slot; enforced when the catalog is constructed.
        divisor: i32,
        /// Declared range of the target axis. Meaningful in absolute mode.
        min: i32,
        max: i32,
    },
}

/// One entry in a profile's button mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSlot {
    Unmapped,
    Mapped {
        target: ButtonCode,
        /// Once pressed, the translated button reports as permanently held:
        /// release transitions still emit a press value.
        sticky: bool,
    },
}

/// A named mapping of the controller's logical axes and buttons onto a
/// target device, with scaling and quirk flags. Selected once at startup
/// and immutable for the life of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub identity: DeviceIdentity,
    /// Indexed by logical source axis order: translate-X, translate-Y,
    /// translate-Z, rotate-X, rotate-Y, rotate-Z.
    pub axes: [AxisSlot; NUM_AXES],
    /// Indexed by logical button position 0..=8.
    pub buttons: [ButtonSlot; NUM_BUTTONS],
    /// Treat the first two logical axes as a running absolute coordinate
    /// pair instead of direct positions (tablet-style pointing).
    pub accumulate: bool,
}

const fn axis(target: AxisCode, mode: AxisMode, divisor: i32, min: i32, max: i32) -> AxisSlot {
    assert!(divisor != 0, "mapped axis slot requires a non-zero divisor");
    AxisSlot::Mapped {
        target,
        mode,
        divisor,
        min,
        max,
    }
}

const fn button(target: ButtonCode) -> ButtonSlot {
    ButtonSlot::Mapped {
        target,
        sticky: false,
    }
}

const fn sticky_button(target: ButtonCode) -> ButtonSlot {
    ButtonSlot::Mapped {
        target,
        sticky: true,
    }
}

/// 6 axis joystick reporting absolute positions.
static JOYSTICK: DeviceProfile = DeviceProfile {
    identity: DeviceIdentity {
        bus_type: BUS_USB,
        vendor: 0x0123,
        product: 0x0000,
        version: 0x0004,
    },
    axes: [
        axis(AxisCode::X, AxisMode::Absolute, -1, -4096, 4096),
        axis(AxisCode::Y, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::Z, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::RotationX, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::RotationY, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::RotationZ, AxisMode::Absolute, 1, -4096, 4096),
    ],
    buttons: [
        button(ButtonCode::Btn0),
        button(ButtonCode::Btn1),
        button(ButtonCode::Btn2),
        button(ButtonCode::Btn3),
        button(ButtonCode::Btn4),
        button(ButtonCode::Btn5),
        button(ButtonCode::Btn6),
        button(ButtonCode::Btn7),
        button(ButtonCode::Btn8),
    ],
    accumulate: false,
};

/// 6 axis joystick reporting raw relative deltas.
static RELATIVE: DeviceProfile = DeviceProfile {
    identity: DeviceIdentity {
        bus_type: BUS_USB,
        vendor: 0x0123,
        product: 0x0001,
        version: 0x0004,
    },
    axes: [
        axis(AxisCode::X, AxisMode::Relative, -1, -4096, 4096),
        axis(AxisCode::Y, AxisMode::Relative, 1, -4096, 4096),
        axis(AxisCode::Z, AxisMode::Relative, 1, -4096, 4096),
        axis(AxisCode::RotationX, AxisMode::Relative, 1, -4096, 4096),
        axis(AxisCode::RotationY, AxisMode::Relative, 1, -4096, 4096),
        axis(AxisCode::RotationZ, AxisMode::Relative, 1, -4096, 4096),
    ],
    buttons: [
        button(ButtonCode::Btn0),
        button(ButtonCode::Btn1),
        button(ButtonCode::Btn2),
        button(ButtonCode::Btn3),
        button(ButtonCode::Btn4),
        button(ButtonCode::Btn5),
        button(ButtonCode::Btn6),
        button(ButtonCode::Btn7),
        button(ButtonCode::Btn8),
    ],
    accumulate: false,
};

/// Wacom-like drawing tablet. The identity matches an Intuos5 because
/// desktop environments only accept tablets they can find on a whitelist.
/// The X/Y pair accumulates into an absolute cursor position and the touch
/// button latches on first contact.
static TABLET: DeviceProfile = DeviceProfile {
    identity: DeviceIdentity {
        bus_type: BUS_USB,
        vendor: 0x056A,
        product: 0x0027,
        version: 0x0110,
    },
    axes: [
        axis(AxisCode::X, AxisMode::Absolute, -1, 0, 4096),
        axis(AxisCode::Y, AxisMode::Absolute, 1, 0, 4096),
        axis(AxisCode::Pressure, AxisMode::Absolute, 1, 0, 4096),
        axis(AxisCode::TiltY, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::TiltX, AxisMode::Absolute, 1, -4096, 4096),
        axis(AxisCode::RotationZ, AxisMode::Absolute, 1, -4096, 4096),
    ],
    buttons: [
        sticky_button(ButtonCode::Touch),
        button(ButtonCode::ToolPen),
        button(ButtonCode::ToolRubber),
        button(ButtonCode::ToolBrush),
        button(ButtonCode::Btn0),
        button(ButtonCode::Btn1),
        button(ButtonCode::Btn2),
        button(ButtonCode::Btn3),
        button(ButtonCode::ToolMouse),
    ],
    accumulate: true,
};

/// Standard 3 button mouse. Only the translation plane and the rotation
/// plane's wheel mappings are populated.
static MOUSE: DeviceProfile = DeviceProfile {
    identity: DeviceIdentity {
        bus_type: BUS_USB,
        vendor: 0x0123,
        product: 0x0003,
        version: 0x0004,
    },
    axes: [
        axis(AxisCode::X, AxisMode::Relative, -10, -4096, 4096),
        axis(AxisCode::Y, AxisMode::Relative, 10, -4096, 4096),
        AxisSlot::Unmapped,
        axis(AxisCode::HorizontalWheel, AxisMode::Relative, 10, -4096, 4096),
        axis(AxisCode::Wheel, AxisMode::Relative, 10, -4096, 4096),
        AxisSlot::Unmapped,
    ],
    buttons: [
        button(ButtonCode::Left),
        ButtonSlot::Unmapped,
        button(ButtonCode::Btn5),
        button(ButtonCode::Btn6),
        button(ButtonCode::Btn7),
        button(ButtonCode::Btn8),
        button(ButtonCode::Btn9),
        button(ButtonCode::Middle),
        button(ButtonCode::Right),
    ],
    accumulate: false,
};

/// Catalog key for the compiled-in device profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileKind {
    Joystick,
    Relative,
    Tablet,
    Mouse,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 4] = [
        ProfileKind::Joystick,
        ProfileKind::Relative,
        ProfileKind::Tablet,
        ProfileKind::Mouse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProfileKind::Joystick => "joystick",
            ProfileKind::Relative => "relative",
            ProfileKind::Tablet => "tablet",
            ProfileKind::Mouse => "mouse",
        }
    }

    /// Returns the catalog entry for this profile.
    pub fn profile(&self) -> &'static DeviceProfile {
        match self {
            ProfileKind::Joystick => &JOYSTICK,
            ProfileKind::Relative => &RELATIVE,
            ProfileKind::Tablet => &TABLET,
            ProfileKind::Mouse => &MOUSE,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = UnknownProfile;

    /// Case-sensitive exact match over the catalog names.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownProfile(name.to_string()))
    }
}
