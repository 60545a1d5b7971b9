//! Pin/port adapter for an interrupt-driven rotary encoder
//!
//! This crate maps logical pin numbers onto one physical pin-change port
//! group and hides every register access behind a single trait, so the
//! decoder in `rotary-irq` can be tested on the host with synthetic
//! snapshots.
//!
//! # Architecture Layers
//!
//! ```text
//! Application shell (setup/loop + interrupt vector)
//!         ↓
//! rotary-irq (decoder + single-slot event buffer)
//!         ↓
//! rotary-platform (this crate - port mapping + register seam)
//!         ↓
//! Hardware Layer (PAC / register block)
//! ```
//!
//! # Modules
//!
//! - [`port`] - port groups, pin masks, arming and snapshot reads
//! - [`gpio`] - the [`PinChangePort`] register trait and [`PinState`]
//! - [`input`] - [`EncoderEvent`] and the [`InputDevice`] consumer trait
//! - [`mocks`] - host implementations (`std` feature or tests)
//!
//! # Features
//!
//! - `std`: host mocks for testing
//! - `defmt`: enable defmt derives
//!
//! # Example
//!
//! ```
//! use rotary_platform::{PortGroup, PortMapping};
//!
//! let mapping = PortMapping::build(3, 4, Some(6)).unwrap();
//! assert_eq!(mapping.group(), PortGroup::PortD);
//! assert_eq!(mapping.interrupt_mask(), 0b0101_1000);
//!
//! // Clock on port D, data on port B: inert.
//! assert!(PortMapping::build(3, 9, None).is_err());
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
// Pedantic lints suppressed for this hardware adapter crate:
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // accessors; callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod gpio;
pub mod input;
pub mod mocks;
pub mod port;

pub use gpio::{PinChangePort, PinState};
pub use input::{EncoderEvent, InputDevice};
pub use port::{arm_interrupts, read_snapshot, MappingError, PortGroup, PortMapping};
