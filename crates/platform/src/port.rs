//! Port groups and per-pin bit masks.
//!
//! An 8-bit microcontroller exposes its pin-change interrupts per port
//! group: one enable bit in a shared control register, one mask register
//! and one input register per group. All encoder pins must therefore sit in
//! the same group. A configuration that violates this is *inert*: it is not
//! an error the firmware must handle, only an encoder that never reports.
//!
//! | Group     | Logical pins | Bit of pin *n* | Control register bit |
//! |-----------|--------------|----------------|----------------------|
//! | `PortD`   | 0..=7        | *n*            | 2                    |
//! | `PortB`   | 8..=13       | *n* − 8        | 0                    |

use crate::gpio::{PinChangePort, PinState};

// ── PortGroup ────────────────────────────────────────────────────────────────

/// A pin-change interrupt port group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortGroup {
    /// Logical pins 0–7.
    PortD,
    /// Logical pins 8–13 (bits 6 and 7 carry the crystal).
    PortB,
}

impl PortGroup {
    /// All groups, in lookup order.
    pub const ALL: [PortGroup; 2] = [PortGroup::PortD, PortGroup::PortB];

    /// First logical pin of the group.
    pub const fn first_pin(self) -> u8 {
        match self {
            Self::PortD => 0,
            Self::PortB => 8,
        }
    }

    /// Last logical pin of the group (inclusive).
    pub const fn last_pin(self) -> u8 {
        match self {
            Self::PortD => 7,
            Self::PortB => 13,
        }
    }

    /// Bit mask of this group in the pin-change interrupt control register.
    pub const fn control_mask(self) -> u8 {
        match self {
            Self::PortD => 0b100,
            Self::PortB => 0b001,
        }
    }

    /// `true` if `pin` belongs to this group.
    pub const fn contains(self, pin: u8) -> bool {
        pin >= self.first_pin() && pin <= self.last_pin()
    }

    /// Group owning `pin`, if any.
    pub fn of_pin(pin: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.contains(pin))
    }

    /// Bit mask of `pin` within this group's registers.
    ///
    /// Returns `None` if the pin is not in this group.
    pub fn pin_mask(self, pin: u8) -> Option<u8> {
        if !self.contains(pin) {
            return None;
        }
        let bit = pin.checked_sub(self.first_pin())?;
        1u8.checked_shl(u32::from(bit))
    }
}

// ── MappingError ─────────────────────────────────────────────────────────────

/// Why a pin configuration is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MappingError {
    /// The pin is not in any pin-change port group.
    PinOutOfRange {
        /// Offending logical pin.
        pin: u8,
    },
    /// The pins are valid but belong to different port groups.
    SplitAcrossGroups,
    /// Two encoder lines are wired to the same pin.
    DuplicatePin {
        /// Pin used twice.
        pin: u8,
    },
}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PinOutOfRange { pin } => {
                write!(f, "pin {pin} is not in a pin-change port group")
            }
            Self::SplitAcrossGroups => write!(f, "encoder pins span more than one port group"),
            Self::DuplicatePin { pin } => write!(f, "pin {pin} is assigned to two encoder lines"),
        }
    }
}

impl core::error::Error for MappingError {}

// ── PortMapping ──────────────────────────────────────────────────────────────

/// Encoder pins resolved to one port group and per-pin bit masks.
///
/// Only constructible through [`PortMapping::build`], so holding one proves
/// the pins share a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortMapping {
    group: PortGroup,
    clock_mask: u8,
    data_mask: u8,
    button_mask: Option<u8>,
}

impl PortMapping {
    /// Resolve the clock, data and optional button pins.
    ///
    /// # Errors
    ///
    /// - [`MappingError::PinOutOfRange`] if a pin is in no group
    /// - [`MappingError::SplitAcrossGroups`] if the pins are in different groups
    /// - [`MappingError::DuplicatePin`] if two lines share a pin
    pub fn build(clock: u8, data: u8, button: Option<u8>) -> Result<Self, MappingError> {
        let group = PortGroup::of_pin(clock).ok_or(MappingError::PinOutOfRange { pin: clock })?;

        let mut pins = [Some(data), button].into_iter().flatten();
        if let Some(pin) = pins.find(|&pin| !group.contains(pin)) {
            return Err(match PortGroup::of_pin(pin) {
                Some(_) => MappingError::SplitAcrossGroups,
                None => MappingError::PinOutOfRange { pin },
            });
        }

        if data == clock || button == Some(clock) {
            return Err(MappingError::DuplicatePin { pin: clock });
        }
        if button == Some(data) {
            return Err(MappingError::DuplicatePin { pin: data });
        }

        let mask = |pin: u8| group.pin_mask(pin).ok_or(MappingError::PinOutOfRange { pin });
        Ok(Self {
            group,
            clock_mask: mask(clock)?,
            data_mask: mask(data)?,
            button_mask: button.map(mask).transpose()?,
        })
    }

    /// Port group shared by all pins.
    pub fn group(&self) -> PortGroup {
        self.group
    }

    /// Clock (A) line bit mask.
    pub fn clock_mask(&self) -> u8 {
        self.clock_mask
    }

    /// Data (B) line bit mask.
    pub fn data_mask(&self) -> u8 {
        self.data_mask
    }

    /// Button bit mask, if a button pin is configured.
    pub fn button_mask(&self) -> Option<u8> {
        self.button_mask
    }

    /// Every pin that should raise a pin-change interrupt.
    pub fn interrupt_mask(&self) -> u8 {
        self.clock_mask | self.data_mask | self.button_mask.unwrap_or(0)
    }

    /// Clock line level in `snapshot`.
    pub fn clock(&self, snapshot: u8) -> PinState {
        PinState::from_snapshot(snapshot, self.clock_mask)
    }

    /// Data line level in `snapshot`.
    pub fn data(&self, snapshot: u8) -> PinState {
        PinState::from_snapshot(snapshot, self.data_mask)
    }

    /// Button line level in `snapshot`, if a button pin is configured.
    pub fn button(&self, snapshot: u8) -> Option<PinState> {
        self.button_mask
            .map(|mask| PinState::from_snapshot(snapshot, mask))
    }
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Arm pin-change interrupts for exactly the mapping's pins.
///
/// Idempotent: every register write is an OR.
pub fn arm_interrupts<P: PinChangePort>(port: &P, mapping: &PortMapping) {
    let mask = mapping.interrupt_mask();
    port.configure_inputs(mapping.group, mask);
    port.enable_group(mapping.group);
    port.enable_pin_sources(mapping.group, mask);
}

/// Read the mapping's port group input register once.
pub fn read_snapshot<P: PinChangePort>(port: &P, mapping: &PortMapping) -> u8 {
    port.read(mapping.group)
}
