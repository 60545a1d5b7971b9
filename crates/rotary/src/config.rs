//! Encoder wiring and timing configuration.
//!
//! # Usage
//!
//! ```
//! use rotary_irq::config::EncoderConfig;
//!
//! // Clock on pin 3, data on pin 4, button on pin 6: all port D.
//! let config = EncoderConfig::new(3, 4).button(6).debounce_us(5);
//! assert!(!config.is_inert());
//!
//! // Data on port B: the encoder will never report.
//! assert!(EncoderConfig::new(3, 9).is_inert());
//! ```

use rotary_platform::{MappingError, PortMapping};

/// Debounce pause before sampling the port, in microseconds.
pub const DEFAULT_DEBOUNCE_US: u32 = 5;

/// Pins and debounce timing of one encoder.
///
/// Created once at startup. Validation is deferred to [`EncoderConfig::mapping`]
/// so an invalid wiring degrades to an inert decoder instead of a startup
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    clock_pin: u8,
    data_pin: u8,
    button_pin: Option<u8>,
    debounce_us: u32,
}

impl EncoderConfig {
    /// Start a configuration for an encoder without a push-button.
    ///
    /// Default debounce: [`DEFAULT_DEBOUNCE_US`].
    pub const fn new(clock_pin: u8, data_pin: u8) -> Self {
        Self {
            clock_pin,
            data_pin,
            button_pin: None,
            debounce_us: DEFAULT_DEBOUNCE_US,
        }
    }

    /// Add the push-button pin (active-low).
    #[must_use]
    pub const fn button(mut self, pin: u8) -> Self {
        self.button_pin = Some(pin);
        self
    }

    /// Set the debounce busy-wait in microseconds.
    ///
    /// The wait runs inside the interrupt handler and stalls the core for
    /// its whole duration; keep it well below the detent period.
    #[must_use]
    pub const fn debounce_us(mut self, us: u32) -> Self {
        self.debounce_us = us;
        self
    }

    /// Clock (A) pin.
    pub const fn clock_pin(&self) -> u8 {
        self.clock_pin
    }

    /// Data (B) pin.
    pub const fn data_pin(&self) -> u8 {
        self.data_pin
    }

    /// Button pin, if any.
    pub const fn button_pin(&self) -> Option<u8> {
        self.button_pin
    }

    /// Configured debounce time in microseconds.
    pub const fn debounce(&self) -> u32 {
        self.debounce_us
    }

    /// Resolve the pins to a port mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] when the pins cannot share one port
    /// group. The configuration is then inert.
    pub fn mapping(&self) -> Result<PortMapping, MappingError> {
        PortMapping::build(self.clock_pin, self.data_pin, self.button_pin)
    }

    /// `true` if these pins cannot be served by one port group.
    pub fn is_inert(&self) -> bool {
        self.mapping().is_err()
    }
}
