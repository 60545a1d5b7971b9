//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests. Both mocks use interior
//! mutability so a test can hand `&MockPort` / `&MockDelay` to the code
//! under test and still drive and inspect them.

#![cfg(any(test, feature = "std"))]

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;

use crate::gpio::{PinChangePort, PinState};
use crate::port::PortGroup;

/// Register file of one mocked port group.
#[derive(Default)]
struct MockGroup {
    input: Cell<u8>,
    change_mask: Cell<u8>,
    configured_inputs: Cell<u8>,
}

/// Mock pin-change port with two groups.
///
/// Inputs idle high (pull-ups, button released, encoder resting on a
/// both-high detent). Reads return queued snapshots first, then the
/// current input level.
pub struct MockPort {
    control: Cell<u8>,
    port_d: MockGroup,
    port_b: MockGroup,
    script: RefCell<heapless::Deque<u8, 32>>,
    reads: Cell<usize>,
}

impl MockPort {
    /// Create new mock port, all inputs high
    pub fn new() -> Self {
        let port = Self {
            control: Cell::new(0),
            port_d: MockGroup::default(),
            port_b: MockGroup::default(),
            script: RefCell::new(heapless::Deque::new()),
            reads: Cell::new(0),
        };
        port.port_d.input.set(0xFF);
        port.port_b.input.set(0xFF);
        port
    }

    fn group(&self, group: PortGroup) -> &MockGroup {
        match group {
            PortGroup::PortD => &self.port_d,
            PortGroup::PortB => &self.port_b,
        }
    }

    /// Overwrite the whole input register of `group`.
    pub fn set_input(&self, group: PortGroup, value: u8) {
        self.group(group).input.set(value);
    }

    /// Drive one logical pin. Pins outside every group are ignored.
    pub fn set_pin(&self, pin: u8, state: PinState) {
        let Some(group) = PortGroup::of_pin(pin) else {
            return;
        };
        let Some(mask) = group.pin_mask(pin) else {
            return;
        };
        let input = &self.group(group).input;
        match state {
            PinState::High => input.set(input.get() | mask),
            PinState::Low => input.set(input.get() & !mask),
        }
    }

    /// Queue a snapshot to be returned by a future read, ahead of the
    /// live input level.
    pub fn push_snapshot(&self, snapshot: u8) -> Result<(), u8> {
        self.script.borrow_mut().push_back(snapshot)
    }

    /// Pin-change interrupt control register.
    pub fn control(&self) -> u8 {
        self.control.get()
    }

    /// Pin-change mask register of `group`.
    pub fn change_mask(&self, group: PortGroup) -> u8 {
        self.group(group).change_mask.get()
    }

    /// Pins of `group` configured as inputs.
    pub fn configured_inputs(&self, group: PortGroup) -> u8 {
        self.group(group).configured_inputs.get()
    }

    /// Number of input register reads so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl Default for MockPort {
    fn default() -> Self {
        Self::new()
    }
}

impl PinChangePort for MockPort {
    fn configure_inputs(&self, group: PortGroup, mask: u8) {
        let reg = &self.group(group).configured_inputs;
        reg.set(reg.get() | mask);
    }

    fn enable_group(&self, group: PortGroup) {
        self.control.set(self.control.get() | group.control_mask());
    }

    fn enable_pin_sources(&self, group: PortGroup, mask: u8) {
        let reg = &self.group(group).change_mask;
        reg.set(reg.get() | mask);
    }

    fn read(&self, group: PortGroup) -> u8 {
        self.reads.set(self.reads.get().saturating_add(1));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.group(group).input.get())
    }
}

/// Mock busy-wait delay. Records instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    calls: Cell<u32>,
    total_ns: Cell<u64>,
}

impl MockDelay {
    /// Create new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delay calls
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    /// Total requested delay in microseconds
    pub fn total_us(&self) -> u64 {
        self.total_ns.get() / 1_000
    }

    fn record(&self, ns: u64) {
        self.calls.set(self.calls.get().saturating_add(1));
        self.total_ns.set(self.total_ns.get().saturating_add(ns));
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us).saturating_mul(1_000));
    }
}

impl DelayNs for &MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us).saturating_mul(1_000));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn scripted_snapshots_come_first() {
        let port = MockPort::new();
        port.push_snapshot(0x12).unwrap();
        assert_eq!(port.read(PortGroup::PortD), 0x12);
        assert_eq!(port.read(PortGroup::PortD), 0xFF);
        assert_eq!(port.read_count(), 2);
    }

    #[test]
    fn set_pin_uses_group_relative_bits() {
        let port = MockPort::new();
        port.set_pin(9, PinState::Low);
        assert_eq!(port.read(PortGroup::PortB), 0b1111_1101);
        assert_eq!(port.read(PortGroup::PortD), 0xFF);
    }

    #[test]
    fn delay_records_microseconds() {
        let delay = MockDelay::new();
        let mut handle = &delay;
        handle.delay_us(5);
        handle.delay_us(5);
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.total_us(), 10);
    }
}
