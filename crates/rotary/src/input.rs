//! Foreground side of the encoder: the polled event accessor.

use rotary_platform::{EncoderEvent, InputDevice};

use crate::slot::EventSlot;

/// Polled encoder input for the main loop.
///
/// Never blocks. Each event is returned exactly once; between events every
/// call returns [`EncoderEvent::None`].
pub struct EncoderInput<'a> {
    slot: &'a EventSlot,
    inert: bool,
}

impl<'a> EncoderInput<'a> {
    /// Consumer over `slot`.
    pub fn new(slot: &'a EventSlot) -> Self {
        Self { slot, inert: false }
    }

    /// Consumer for a decoder that can never publish.
    pub fn inert(slot: &'a EventSlot) -> Self {
        Self { slot, inert: true }
    }

    /// `true` if this input will only ever report `None`.
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Take the pending event and clear the slot.
    pub fn get_event(&self) -> EncoderEvent {
        if self.inert {
            return EncoderEvent::None;
        }
        self.slot.take()
    }
}

impl InputDevice for EncoderInput<'_> {
    fn poll_event(&mut self) -> Option<EncoderEvent> {
        self.get_event().into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_input_ignores_slot() {
        let slot = EventSlot::new();
        slot.offer(EncoderEvent::Button);
        let input = EncoderInput::inert(&slot);
        assert_eq!(input.get_event(), EncoderEvent::None);
        assert!(slot.is_pending());
    }

    #[test]
    fn poll_maps_none_to_empty() {
        let slot = EventSlot::new();
        let mut input = EncoderInput::new(&slot);
        assert_eq!(input.poll_event(), None);
        slot.offer(EncoderEvent::CounterClockwise);
        assert_eq!(input.poll_event(), Some(EncoderEvent::CounterClockwise));
        assert_eq!(input.poll_event(), None);
    }
}
