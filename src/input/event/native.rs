use crate::input::capability::Capability;

/// A translated event ready for the virtual device. The capability is a
/// neutral code; the target device layer resolves it to a host constant
/// when the event is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeEvent {
    capability: Capability,
    value: i32,
}

impl NativeEvent {
    pub fn new(capability: Capability, value: i32) -> NativeEvent {
        NativeEvent { capability, value }
    }

    /// Returns the capability that this event implements.
    pub fn as_capability(&self) -> Capability {
        self.capability
    }

    /// Returns the value of this event.
    pub fn value(&self) -> i32 {
        self.value
    }
}
