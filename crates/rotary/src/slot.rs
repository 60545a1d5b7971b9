//! Single-slot event buffer shared between interrupt and foreground.
//!
//! The slot is the only state both contexts touch. Every access runs inside
//! `critical_section::with`, so a foreground [`EventSlot::take`] can never
//! observe a half-written event even on targets where a higher-priority
//! interrupt may preempt the handler.
//!
//! Capacity is exactly one. A full slot is never overwritten: the oldest
//! unread event wins and newer ones are dropped by the producer.

use core::cell::Cell;

use critical_section::Mutex;
use rotary_platform::EncoderEvent;

/// One-event mailbox, `static`-constructible.
///
/// ```
/// use rotary_irq::EventSlot;
/// use rotary_platform::EncoderEvent;
///
/// static SLOT: EventSlot = EventSlot::new();
///
/// assert!(SLOT.offer(EncoderEvent::Clockwise));
/// assert!(!SLOT.offer(EncoderEvent::Button)); // full: oldest wins
/// assert_eq!(SLOT.take(), EncoderEvent::Clockwise);
/// assert_eq!(SLOT.take(), EncoderEvent::None);
/// ```
pub struct EventSlot {
    event: Mutex<Cell<EncoderEvent>>,
}

impl EventSlot {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            event: Mutex::new(Cell::new(EncoderEvent::None)),
        }
    }

    /// Store `event` if the slot is empty.
    ///
    /// Returns `false` when the slot already holds an unread event or when
    /// `event` is [`EncoderEvent::None`].
    pub fn offer(&self, event: EncoderEvent) -> bool {
        if event.is_none() {
            return false;
        }
        critical_section::with(|cs| {
            let slot = self.event.borrow(cs);
            if slot.get().is_none() {
                slot.set(event);
                true
            } else {
                false
            }
        })
    }

    /// Take the stored event and leave the slot empty, atomically.
    pub fn take(&self) -> EncoderEvent {
        critical_section::with(|cs| self.event.borrow(cs).replace(EncoderEvent::None))
    }

    /// `true` if an unread event is stored.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| !self.event.borrow(cs).get().is_none())
    }
}

impl Default for EventSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_takes_none() {
        let slot = EventSlot::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.take(), EncoderEvent::None);
    }

    #[test]
    fn none_is_never_stored() {
        let slot = EventSlot::new();
        assert!(!slot.offer(EncoderEvent::None));
        assert!(!slot.is_pending());
    }

    #[test]
    fn take_clears() {
        let slot = EventSlot::new();
        assert!(slot.offer(EncoderEvent::Button));
        assert!(slot.is_pending());
        assert_eq!(slot.take(), EncoderEvent::Button);
        assert!(!slot.is_pending());
        assert_eq!(slot.take(), EncoderEvent::None);
    }

    #[test]
    fn full_slot_keeps_oldest() {
        let slot = EventSlot::new();
        assert!(slot.offer(EncoderEvent::CounterClockwise));
        assert!(!slot.offer(EncoderEvent::Clockwise));
        assert_eq!(slot.take(), EncoderEvent::CounterClockwise);
        assert!(slot.offer(EncoderEvent::Clockwise));
        assert_eq!(slot.take(), EncoderEvent::Clockwise);
    }

    #[test]
    fn shared_across_threads() {
        // Host stand-in for ISR vs. main loop: every offered event is taken
        // exactly once.
        static SLOT: EventSlot = EventSlot::new();
        let producer = std::thread::spawn(|| {
            let mut stored = 0u32;
            for _ in 0..1_000 {
                if SLOT.offer(EncoderEvent::Clockwise) {
                    stored = stored.saturating_add(1);
                }
            }
            stored
        });
        let mut taken = 0u32;
        while !producer.is_finished() {
            if SLOT.take().is_rotation() {
                taken = taken.saturating_add(1);
            }
        }
        let stored = producer.join().unwrap_or(0);
        if SLOT.take().is_rotation() {
            taken = taken.saturating_add(1);
        }
        assert_eq!(stored, taken);
    }
}
