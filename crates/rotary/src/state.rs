//! Quadrature decode state machine.
//!
//! The two encoder lines form a 2-bit reading, clock in bit 0 and data in
//! bit 1. A detent-to-detent turn walks four readings and comes back to 3:
//!
//! ```text
//!   CLK    __---------________---------___
//!   DT     _______---------________-------
//!   READ    0 | 1 | 3  | 2 | 0 | 1 | 3
//! ```
//!
//! | Direction          | Readings after the last 3 | Sum |
//! |--------------------|---------------------------|-----|
//! | `Clockwise`        | 2 → 0 → 1 → 3             | 6   |
//! | `CounterClockwise` | 1 → 0 → 2 → 3             | 6   |
//!
//! Every change of reading is added to a running sum. On reaching 3 the sum
//! must be exactly [`DETENT_SUM`]; anything else is bounce or a skipped
//! edge and is discarded. The reading seen just before 3 gives the
//! direction. The sum restarts at every 3.

use rotary_platform::{EncoderEvent, PinState};

/// Sum of the readings of one complete detent cycle.
pub const DETENT_SUM: u8 = 6;

/// Two-bit encoder reading: clock level in bit 0, data level in bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading(u8);

impl Reading {
    /// Both lines low.
    pub const BOTH_LOW: Self = Self(0);
    /// Clock high, data low.
    pub const CLOCK_ONLY: Self = Self(1);
    /// Data high, clock low.
    pub const DATA_ONLY: Self = Self(2);
    /// Both lines high: the reading every full cycle ends on.
    pub const BOTH_HIGH: Self = Self(3);

    /// Reading from a raw value, `None` above 3.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 3 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Reading from the two line levels.
    pub fn from_levels(clock: PinState, data: PinState) -> Self {
        Self(u8::from(clock.is_high()) | (u8::from(data.is_high()) << 1))
    }

    /// Raw value, 0..=3.
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Rotation direction of one completed detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise
    Clockwise,
    /// Counter-clockwise
    CounterClockwise,
}

impl From<Direction> for EncoderEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => Self::Clockwise,
            Direction::CounterClockwise => Self::CounterClockwise,
        }
    }
}

/// Decoder state owned by the interrupt context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeState {
    previous: Reading,
    sum: u8,
    button_held: bool,
    dropped: u16,
}

impl DecodeState {
    /// Neutral baseline: previous reading 0, empty sum.
    pub const fn new() -> Self {
        Self {
            previous: Reading::BOTH_LOW,
            sum: 0,
            button_held: false,
            dropped: 0,
        }
    }

    /// Feed one debounced reading.
    ///
    /// Returns the direction when `reading` completes a valid detent cycle.
    /// A reading equal to the previous one is ignored entirely.
    pub fn advance(&mut self, reading: Reading) -> Option<Direction> {
        if reading == self.previous {
            return None;
        }

        // Saturates on long noise bursts that never reach 3, so the sum
        // cannot wrap back onto DETENT_SUM.
        self.sum = self.sum.saturating_add(reading.get());

        let mut direction = None;
        if reading == Reading::BOTH_HIGH {
            if self.sum == DETENT_SUM {
                direction = Some(if self.previous == Reading::CLOCK_ONLY {
                    Direction::Clockwise
                } else {
                    Direction::CounterClockwise
                });
            }
            self.sum = 0;
        }
        self.previous = reading;
        direction
    }

    /// Record the button level of the current interrupt.
    pub fn set_button_held(&mut self, held: bool) {
        self.button_held = held;
    }

    /// Count one interrupt dropped because the slot was still full.
    pub fn record_drop(&mut self) {
        self.dropped = self.dropped.wrapping_add(1);
    }

    /// Last accepted reading.
    pub fn previous(&self) -> Reading {
        self.previous
    }

    /// Sum of readings since the last 3.
    pub fn sum(&self) -> u8 {
        self.sum
    }

    /// Button was low on the last processed interrupt.
    pub fn button_held(&self) -> bool {
        self.button_held
    }

    /// Interrupts dropped on overrun (wraps at `u16::MAX`).
    pub fn dropped(&self) -> u16 {
        self.dropped
    }
}
