//! Pin-change port register abstraction
//!
//! Everything register-shaped the encoder needs: configure pins as inputs,
//! enable a port group in the interrupt control register, mark pins as
//! interrupt sources, and read the input register.

use crate::port::PortGroup;

/// Pin-change capable port hardware.
///
/// Methods take `&self`: implementations are volatile register accesses,
/// the same way a PAC register block is shared. Every write is a
/// read-modify-write OR, so calling any of them twice is harmless.
pub trait PinChangePort {
    /// Configure the pins in `mask` of `group` as plain digital inputs.
    fn configure_inputs(&self, group: PortGroup, mask: u8);

    /// Set the group's bit in the pin-change interrupt control register.
    fn enable_group(&self, group: PortGroup);

    /// OR `mask` into the group's pin-change mask register.
    fn enable_pin_sources(&self, group: PortGroup, mask: u8);

    /// Read the group's input register.
    ///
    /// Must be a single, non-blocking register read with no side effects:
    /// it is called from interrupt context.
    fn read(&self, group: PortGroup) -> u8;
}

impl<T: PinChangePort + ?Sized> PinChangePort for &T {
    fn configure_inputs(&self, group: PortGroup, mask: u8) {
        (**self).configure_inputs(group, mask);
    }

    fn enable_group(&self, group: PortGroup) {
        (**self).enable_group(group);
    }

    fn enable_pin_sources(&self, group: PortGroup, mask: u8) {
        (**self).enable_pin_sources(group, mask);
    }

    fn read(&self, group: PortGroup) -> u8 {
        (**self).read(group)
    }
}

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl PinState {
    /// Level of the pin selected by `mask` in a port snapshot.
    pub fn from_snapshot(snapshot: u8, mask: u8) -> Self {
        Self::from(snapshot & mask != 0)
    }

    /// `true` for [`PinState::High`].
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// `true` for [`PinState::Low`].
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_level_follows_mask() {
        assert_eq!(PinState::from_snapshot(0b0001_0000, 0b0001_0000), PinState::High);
        assert_eq!(PinState::from_snapshot(0b1110_1111, 0b0001_0000), PinState::Low);
    }

    #[test]
    fn bool_round_trip() {
        assert!(bool::from(PinState::from(true)));
        assert!(PinState::from(false).is_low());
    }
}
