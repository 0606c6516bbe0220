//! Profile-driven translation of controller samples into target events.
//! This is the heart of the bridge: axis scaling and accumulation live in
//! [MotionTranslator], button re-indexing and quirks in [ButtonTranslator].

use crate::config::{AxisMode, AxisSlot, ButtonSlot, DeviceProfile, NUM_AXES};
use crate::input::capability::Capability;
use crate::input::event::native::NativeEvent;
use crate::input::event::{ButtonTransition, MotionSample};

/// Raw button number the device reports for the ball/primary control.
const RAW_INDEX_BALL: i32 = 7;
/// Raw button number the device reports for the out-of-band eighth button.
const RAW_INDEX_EIGHTH: i32 = 14;

/// Running absolute cursor coordinates for accumulating profiles. Both
/// coordinates floor at zero and start at the midpoint of the axis's
/// declared range, which centers the cursor without needing a display
/// connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
    x: i32,
    y: i32,
}

impl Accumulator {
    fn for_profile(profile: &DeviceProfile) -> Accumulator {
        let midpoint = |slot: &AxisSlot| match *slot {
            AxisSlot::Mapped {
                mode: AxisMode::Absolute,
                min,
                max,
                ..
            } => (min + max) / 2,
            _ => 0,
        };
        Accumulator {
            x: midpoint(&profile.axes[0]),
            y: midpoint(&profile.axes[1]),
        }
    }

    /// Applies a scaled delta to the coordinate for the given logical axis
    /// and returns the new position. Clamps at zero: deltas that would go
    /// negative are absorbed, and later positive deltas resume from zero.
    fn advance(&mut self, axis: usize, delta: i32) -> i32 {
        let coord = match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => unreachable!("only the first two logical axes accumulate"),
        };
        *coord = (*coord + delta).max(0);
        *coord
    }
}

/// Converts motion samples into target axis events for one session.
///
/// Stateless for most profiles; accumulating profiles carry the running
/// cursor position for the life of the session.
#[derive(Debug)]
pub struct MotionTranslator {
    profile: &'static DeviceProfile,
    accumulator: Option<Accumulator>,
}

impl MotionTranslator {
    pub fn new(profile: &'static DeviceProfile) -> MotionTranslator {
        let accumulator = profile
            .accumulate
            .then(|| Accumulator::for_profile(profile));
        MotionTranslator {
            profile,
            accumulator,
        }
    }

    /// Translates one motion sample. Events come out in increasing logical
    /// axis order; unmapped slots are skipped entirely.
    pub fn translate(&mut self, sample: &MotionSample) -> Vec<NativeEvent> {
        let mut events = Vec::with_capacity(NUM_AXES);
        for (index, raw) in sample.axes().into_iter().enumerate() {
            let AxisSlot::Mapped {
                target,
                mode,
                divisor,
                ..
            } = self.profile.axes[index]
            else {
                continue;
            };

            let scaled = raw / divisor;
            let value = match (&mut self.accumulator, mode) {
                // Only the X/Y pair accumulates; the remaining axes report
                // their scaled value directly even on accumulating profiles.
                (Some(accumulator), AxisMode::Absolute) if index < 2 => {
                    accumulator.advance(index, scaled)
                }
                _ => scaled,
            };

            let capability = match mode {
                AxisMode::Relative => Capability::RelativeAxis(target),
                AxisMode::Absolute => Capability::AbsoluteAxis(target),
            };
            events.push(NativeEvent::new(capability, value));
        }
        events
    }
}

/// Converts raw button transitions into target button events.
#[derive(Debug)]
pub struct ButtonTranslator {
    profile: &'static DeviceProfile,
}

impl ButtonTranslator {
    pub fn new(profile: &'static DeviceProfile) -> ButtonTranslator {
        ButtonTranslator { profile }
    }

    /// Translates one button transition. Returns [None] both for raw
    /// indices outside the known set (a hardware artifact, logged at warn)
    /// and for slots the profile leaves unmapped (a deliberate exclusion,
    /// logged at debug).
    pub fn translate(&self, transition: &ButtonTransition) -> Option<NativeEvent> {
        let Some(slot) = logical_slot(transition.index) else {
            log::warn!("ignoring unknown raw button index {}", transition.index);
            return None;
        };

        let ButtonSlot::Mapped { target, sticky } = self.profile.buttons[slot] else {
            log::debug!("button slot {slot} is unmapped in the active profile");
            return None;
        };

        let mut value = i32::from(transition.pressed);
        if sticky && !transition.pressed {
            // Sticky buttons report permanently engaged once first touched.
            value = 1;
        }
        Some(NativeEvent::new(Capability::Button(target), value))
    }
}

/// Maps a raw device button number onto its logical slot. The contiguous
/// indices 0..=6 land on slots 1..=7; the ball control and the eighth
/// button report distinguished out-of-band numbers.
fn logical_slot(raw: i32) -> Option<usize> {
    match raw {
        0..=6 => Some(raw as usize + 1),
        RAW_INDEX_BALL => Some(0),
        RAW_INDEX_EIGHTH => Some(8),
        _ => None,
    }
}
