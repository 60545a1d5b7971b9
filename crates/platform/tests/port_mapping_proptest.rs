//! Property-based tests for pin-to-port mapping.
//! Verifies the inert/armed split holds for ALL pin triples, not just the wiring in the docs.

#![allow(clippy::arithmetic_side_effects, clippy::unwrap_used)]

use rotary_platform::{MappingError, PortGroup, PortMapping};

proptest::proptest! {
    /// PortMapping::build never panics, whatever the pins.
    #[test]
    fn build_never_panics(clock in 0u8..=255u8, data in 0u8..=255u8, button in proptest::option::of(0u8..=255u8)) {
        let _ = PortMapping::build(clock, data, button);
    }

    /// Distinct pins inside port D always map, with one bit per pin.
    #[test]
    fn distinct_port_d_pins_always_map(clock in 0u8..=7u8, data in 0u8..=7u8, button in 0u8..=7u8) {
        proptest::prop_assume!(clock != data && clock != button && data != button);
        let mapping = PortMapping::build(clock, data, Some(button)).unwrap();
        assert_eq!(mapping.group(), PortGroup::PortD);
        assert_eq!(mapping.clock_mask(), 1 << clock);
        assert_eq!(mapping.data_mask(), 1 << data);
        assert_eq!(mapping.interrupt_mask().count_ones(), 3);
    }

    /// Port B masks are relative to pin 8 and never touch bits 6-7.
    #[test]
    fn port_b_masks_stay_in_low_six_bits(clock in 8u8..=13u8, data in 8u8..=13u8) {
        proptest::prop_assume!(clock != data);
        let mapping = PortMapping::build(clock, data, None).unwrap();
        assert_eq!(mapping.group(), PortGroup::PortB);
        assert_eq!(mapping.interrupt_mask() & 0b1100_0000, 0);
        assert_eq!(mapping.clock_mask(), 1 << (clock - 8));
    }

    /// Clock in one group and data in the other is always inert.
    #[test]
    fn split_groups_are_always_inert(d_pin in 0u8..=7u8, b_pin in 8u8..=13u8, clock_on_d in proptest::bool::ANY) {
        let (clock, data) = if clock_on_d { (d_pin, b_pin) } else { (b_pin, d_pin) };
        assert_eq!(
            PortMapping::build(clock, data, None),
            Err(MappingError::SplitAcrossGroups)
        );
    }

    /// A button outside the encoder's group makes the whole mapping inert.
    #[test]
    fn stray_button_is_inert(button in 8u8..=13u8) {
        assert_eq!(
            PortMapping::build(3, 4, Some(button)),
            Err(MappingError::SplitAcrossGroups)
        );
    }

    /// Pins past the last group are reported as out of range.
    #[test]
    fn pins_past_port_b_are_out_of_range(pin in 14u8..=255u8) {
        assert_eq!(
            PortMapping::build(pin, 4, None),
            Err(MappingError::PinOutOfRange { pin })
        );
    }
}
