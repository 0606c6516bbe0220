//! Virtual HID device backed by the Linux uinput subsystem. This is the
//! sink collaborator of the translation session: the active profile is
//! turned into a capability declaration, the declaration into a device
//! node, and translated events are written to it in batches framed by
//! synchronization reports.

use std::io;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{
    AbsInfo, AttributeSet, BusType, InputEvent, InputId, KeyCode, RelativeAxisCode,
    SynchronizationCode, SynchronizationEvent, UinputAbsSetup,
};
use thiserror::Error;

use crate::config::{AxisMode, AxisSlot, ButtonSlot, DeviceIdentity, DeviceProfile};
use crate::input::capability::{AxisCode, ButtonCode};
use crate::input::event::evdev::{abs_code, key_code, rel_code, EvdevEvent};
use crate::input::event::native::NativeEvent;

/// Name stamped on the emulated device.
pub const DEVICE_NAME: &str = "Spaceball 2003";

/// Possible errors for the virtual device.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("failed to create the virtual device: {0}")]
    Create(io::Error),
    #[error("failed to write to the virtual device: {0}")]
    Emit(io::Error),
}

/// Declared range of one absolute target axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsoluteAxisRange {
    pub axis: AxisCode,
    pub min: i32,
    pub max: i32,
}

/// The event categories, codes, ranges, and identity a profile requires
/// the virtual device to support. Computed deterministically from the
/// profile; unmapped slots contribute nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityDeclaration {
    pub identity: DeviceIdentity,
    pub buttons: Vec<ButtonCode>,
    pub relative_axes: Vec<AxisCode>,
    pub absolute_axes: Vec<AbsoluteAxisRange>,
}

impl CapabilityDeclaration {
    pub fn from_profile(profile: &DeviceProfile) -> CapabilityDeclaration {
        let mut buttons = Vec::new();
        let mut relative_axes = Vec::new();
        let mut absolute_axes = Vec::new();

        for slot in &profile.axes {
            let AxisSlot::Mapped {
                target,
                mode,
                min,
                max,
                ..
            } = *slot
            else {
                continue;
            };
            match mode {
                AxisMode::Relative => relative_axes.push(target),
                AxisMode::Absolute => absolute_axes.push(AbsoluteAxisRange {
                    axis: target,
                    min,
                    max,
                }),
            }
        }

        for slot in &profile.buttons {
            if let ButtonSlot::Mapped { target, .. } = *slot {
                buttons.push(target);
            }
        }

        CapabilityDeclaration {
            identity: profile.identity,
            buttons,
            relative_axes,
            absolute_axes,
        }
    }
}

/// A live uinput device node created from a [CapabilityDeclaration].
pub struct UinputDevice {
    device: VirtualDevice,
}

impl UinputDevice {
    /// Creates the virtual device described by the declaration. Fails if
    /// the uinput subsystem is unavailable or rejects the configuration.
    pub fn create(declaration: &CapabilityDeclaration) -> Result<UinputDevice, TargetError> {
        log::debug!("creating virtual device \"{DEVICE_NAME}\"");

        let mut keys = AttributeSet::<KeyCode>::new();
        for target in &declaration.buttons {
            keys.insert(key_code(*target));
        }

        let identity = declaration.identity;
        let id = InputId::new(
            BusType(identity.bus_type),
            identity.vendor,
            identity.product,
            identity.version,
        );

        let mut builder = VirtualDeviceBuilder::new()
            .map_err(TargetError::Create)?
            .name(DEVICE_NAME)
            .input_id(id)
            .with_keys(&keys)
            .map_err(TargetError::Create)?;

        if !declaration.relative_axes.is_empty() {
            let mut axes = AttributeSet::<RelativeAxisCode>::new();
            for axis in &declaration.relative_axes {
                match rel_code(*axis) {
                    Some(code) => axes.insert(code),
                    None => log::warn!("axis {axis:?} has no relative evdev code, skipping"),
                }
            }
            builder = builder
                .with_relative_axes(&axes)
                .map_err(TargetError::Create)?;
        }

        for range in &declaration.absolute_axes {
            let Some(code) = abs_code(range.axis) else {
                log::warn!("axis {:?} has no absolute evdev code, skipping", range.axis);
                continue;
            };
            let setup = UinputAbsSetup::new(code, AbsInfo::new(0, range.min, range.max, 0, 0, 0));
            builder = builder
                .with_absolute_axis(&setup)
                .map_err(TargetError::Create)?;
        }

        let device = builder.build().map_err(TargetError::Create)?;
        Ok(UinputDevice { device })
    }

    /// Writes a batch of translated events to the device in order. The
    /// batch stays open until [sync](Self::sync) frames it.
    pub fn emit(&mut self, events: &[NativeEvent]) -> Result<(), TargetError> {
        if events.is_empty() {
            return Ok(());
        }
        let input_events: Vec<InputEvent> = events
            .iter()
            .filter_map(|event| EvdevEvent::from_native(*event))
            .map(|event| event.as_input_event())
            .collect();
        self.device.emit(&input_events).map_err(TargetError::Emit)
    }

    /// Flushes the open batch to the host as one atomic input frame.
    pub fn sync(&mut self) -> Result<(), TargetError> {
        self.device
            .emit(&[SynchronizationEvent::new(SynchronizationCode::SYN_REPORT, 0).into()])
            .map_err(TargetError::Emit)
    }

    /// Destroys the device node.
    pub fn destroy(self) {
        log::debug!("destroying virtual device \"{DEVICE_NAME}\"");
        drop(self.device);
    }
}
