//! Interrupt-context quadrature decoder.
//!
//! [`RotaryDecoder::on_interrupt`] is the body of the pin-change interrupt
//! handler. Per call it:
//!
//! 1. returns at once if the configuration is inert;
//! 2. drops the interrupt if the [`EventSlot`] still holds an unread event
//!    (the consumer is behind: keep the old event, never block);
//! 3. busy-waits the debounce delay;
//! 4. reads one port snapshot and feeds the clock/data reading to
//!    [`DecodeState::advance`];
//! 5. lets a pressed (low) button override any rotation from the same
//!    snapshot;
//! 6. offers the resulting event to the slot.
//!
//! # Debounce stalls the core
//!
//! The debounce wait is a real busy-wait inside the handler. On a
//! single-core MCU nothing else runs for its duration, foreground included.
//! Keep [`EncoderConfig::debounce_us`] short.

use embedded_hal::delay::DelayNs;
use rotary_platform::{
    arm_interrupts, read_snapshot, EncoderEvent, PinChangePort, PinState, PortMapping,
};

use crate::config::EncoderConfig;
use crate::slot::EventSlot;
use crate::state::{DecodeState, Reading};

/// Decoder for one encoder, owned by the interrupt handler.
pub struct RotaryDecoder<'a, P, D> {
    port: P,
    delay: D,
    mapping: Option<PortMapping>,
    debounce_us: u32,
    state: DecodeState,
    slot: &'a EventSlot,
}

impl<'a, P, D> RotaryDecoder<'a, P, D>
where
    P: PinChangePort,
    D: DelayNs,
{
    /// Create a decoder that publishes into `slot`.
    ///
    /// If the pins do not share a port group the decoder is inert: it
    /// never arms, never reads the port and never publishes.
    pub fn new(config: &EncoderConfig, port: P, delay: D, slot: &'a EventSlot) -> Self {
        let mapping = config
            .mapping()
            .inspect_err(|_error| {
                #[cfg(feature = "defmt")]
                defmt::warn!("rotary encoder inert: {}", _error);
            })
            .ok();

        Self {
            port,
            delay,
            mapping,
            debounce_us: config.debounce(),
            state: DecodeState::new(),
            slot,
        }
    }

    /// `true` if the configuration could not be mapped to one port group.
    pub fn is_inert(&self) -> bool {
        self.mapping.is_none()
    }

    /// Resolved pin mapping, `None` when inert.
    pub fn mapping(&self) -> Option<&PortMapping> {
        self.mapping.as_ref()
    }

    /// Enable pin-change interrupts for the encoder pins. Idempotent.
    ///
    /// Call once from setup, after the decoder is reachable from the
    /// interrupt vector.
    pub fn arm(&mut self) {
        if let Some(mapping) = &self.mapping {
            arm_interrupts(&self.port, mapping);
            #[cfg(feature = "defmt")]
            defmt::trace!(
                "rotary encoder armed: {} mask={=u8:#b}",
                mapping.group(),
                mapping.interrupt_mask()
            );
        }
    }

    /// Pin-change interrupt handler body.
    pub fn on_interrupt(&mut self) {
        let Some(mapping) = self.mapping else {
            return;
        };

        if self.slot.is_pending() {
            self.state.record_drop();
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "rotary interrupt dropped, slot full ({=u16} total)",
                self.state.dropped()
            );
            return;
        }

        self.delay.delay_us(self.debounce_us);
        let snapshot = read_snapshot(&self.port, &mapping);

        let button_pressed = mapping.button(snapshot).is_some_and(PinState::is_low);
        let reading = Reading::from_levels(mapping.clock(snapshot), mapping.data(snapshot));

        let mut event = self
            .state
            .advance(reading)
            .map_or(EncoderEvent::None, EncoderEvent::from);
        if button_pressed {
            event = EncoderEvent::Button;
        }
        self.state.set_button_held(button_pressed);

        if self.slot.offer(event) {
            #[cfg(feature = "defmt")]
            defmt::trace!("rotary event: {}", event);
        }
    }

    /// Interrupts dropped because the slot was still full.
    pub fn dropped_interrupts(&self) -> u16 {
        self.state.dropped()
    }

    /// Button was held on the last processed interrupt.
    pub fn button_held(&self) -> bool {
        self.state.button_held()
    }

    /// Current decode state.
    pub fn state(&self) -> &DecodeState {
        &self.state
    }

    /// The slot this decoder publishes into.
    pub fn slot(&self) -> &'a EventSlot {
        self.slot
    }

    /// Give back the port and delay.
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}
