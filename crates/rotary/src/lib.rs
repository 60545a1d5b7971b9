//! Interrupt-driven rotary encoder decoder
//!
//! Decodes a mechanical quadrature encoder (clock + data lines, optional
//! active-low push-button) from pin-change interrupts into
//! [`EncoderEvent`]s, handed to the main loop through a one-event
//! [`EventSlot`].
//!
//! # Architecture
//!
//! ```text
//!   pin-change IRQ ──► RotaryDecoder::on_interrupt ──► EventSlot ──► EncoderInput::get_event ◄── main loop
//!                       (debounce, decode, classify)    (1 event)     (take + clear)
//! ```
//!
//! The decoder is owned by the interrupt context; the slot is the only state
//! shared with the foreground and is accessed inside a critical section.
//!
//! # Example
//!
//! ```
//! use rotary_irq::{split, EncoderConfig, EventSlot};
//! use rotary_platform::mocks::{MockDelay, MockPort};
//! use rotary_platform::{EncoderEvent, PinState};
//!
//! static SLOT: EventSlot = EventSlot::new();
//!
//! let port = MockPort::new();
//! let delay = MockDelay::new();
//! let config = EncoderConfig::new(3, 4).button(6);
//! let (mut decoder, input) = split(&config, &port, &delay, &SLOT);
//! decoder.arm();
//!
//! // One clockwise detent: readings 2, 0, 1, 3.
//! for (clock, data) in [(false, true), (false, false), (true, false), (true, true)] {
//!     port.set_pin(3, PinState::from(clock));
//!     port.set_pin(4, PinState::from(data));
//!     decoder.on_interrupt();
//! }
//!
//! assert_eq!(input.get_event(), EncoderEvent::Clockwise);
//! assert_eq!(input.get_event(), EncoderEvent::None);
//! ```
//!
//! On hardware the decoder lives in a `static` the interrupt vector can
//! reach:
//!
//! ```ignore
//! static SLOT: EventSlot = EventSlot::new();
//! static DECODER: Mutex<RefCell<Option<RotaryDecoder<'static, Port, Delay>>>> =
//!     Mutex::new(RefCell::new(None));
//!
//! #[interrupt]
//! fn PCINT2() {
//!     critical_section::with(|cs| {
//!         if let Some(decoder) = DECODER.borrow_ref_mut(cs).as_mut() {
//!             decoder.on_interrupt();
//!         }
//!     });
//! }
//! ```
//!
//! # Features
//!
//! - `defmt`: log inert configuration, dropped interrupts and events

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors; callers decide
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decoder;
pub mod input;
pub mod slot;
pub mod state;

pub use config::{EncoderConfig, DEFAULT_DEBOUNCE_US};
pub use decoder::RotaryDecoder;
pub use input::EncoderInput;
pub use rotary_platform::{EncoderEvent, InputDevice};
pub use slot::EventSlot;
pub use state::{DecodeState, Direction, Reading, DETENT_SUM};

use embedded_hal::delay::DelayNs;
use rotary_platform::PinChangePort;

/// Build the interrupt-side decoder and the foreground input over one slot.
///
/// If the configuration is inert, both halves are: the decoder ignores
/// interrupts and the input always reports [`EncoderEvent::None`].
pub fn split<'a, P, D>(
    config: &EncoderConfig,
    port: P,
    delay: D,
    slot: &'a EventSlot,
) -> (RotaryDecoder<'a, P, D>, EncoderInput<'a>)
where
    P: PinChangePort,
    D: DelayNs,
{
    let decoder = RotaryDecoder::new(config, port, delay, slot);
    let input = if decoder.is_inert() {
        EncoderInput::inert(slot)
    } else {
        EncoderInput::new(slot)
    };
    (decoder, input)
}
