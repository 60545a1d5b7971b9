//! Input device abstraction

/// Polled source of encoder events.
pub trait InputDevice {
    /// Take the pending event, if any (non-blocking).
    fn poll_event(&mut self) -> Option<EncoderEvent>;
}

/// Events produced by the rotary encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EncoderEvent {
    /// Nothing happened since the last read
    #[default]
    None = 0,
    /// Push-button pressed
    Button,
    /// One detent clockwise
    Clockwise,
    /// One detent counter-clockwise
    CounterClockwise,
}

impl EncoderEvent {
    /// `true` for [`EncoderEvent::None`].
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// `true` for either rotation direction.
    pub fn is_rotation(self) -> bool {
        matches!(self, Self::Clockwise | Self::CounterClockwise)
    }

    /// `None` for [`EncoderEvent::None`], `Some(self)` otherwise.
    pub fn into_option(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }

    /// Short label for console output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Button => "CLICK",
            Self::Clockwise => "CW",
            Self::CounterClockwise => "CCW",
        }
    }
}

impl core::fmt::Display for EncoderEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
