//! Tests for the EncoderEvent vocabulary shared by the decoder and the application loop.

#[test]
fn default_event_is_none() {
    use rotary_platform::EncoderEvent;
    assert_eq!(EncoderEvent::default(), EncoderEvent::None);
    assert!(EncoderEvent::default().is_none());
}

#[test]
fn rotation_classification() {
    use rotary_platform::EncoderEvent;
    assert!(EncoderEvent::Clockwise.is_rotation());
    assert!(EncoderEvent::CounterClockwise.is_rotation());
    assert!(!EncoderEvent::Button.is_rotation());
    assert!(!EncoderEvent::None.is_rotation());
}

#[test]
fn none_maps_to_empty_option() {
    use rotary_platform::EncoderEvent;
    assert_eq!(EncoderEvent::None.into_option(), None);
    assert_eq!(EncoderEvent::Button.into_option(), Some(EncoderEvent::Button));
}

#[test]
fn console_labels_match_the_demo_output() {
    use rotary_platform::EncoderEvent;
    assert_eq!(EncoderEvent::Clockwise.to_string(), "CW");
    assert_eq!(EncoderEvent::CounterClockwise.to_string(), "CCW");
    assert_eq!(EncoderEvent::Button.to_string(), "CLICK");
}

#[test]
fn event_fits_in_one_byte() {
    // The slot is shared with interrupt context; keep it a single byte.
    assert_eq!(core::mem::size_of::<rotary_platform::EncoderEvent>(), 1);
}

#[test]
fn mapping_error_display() {
    use rotary_platform::MappingError;
    assert_eq!(
        MappingError::PinOutOfRange { pin: 20 }.to_string(),
        "pin 20 is not in a pin-change port group"
    );
    assert_eq!(
        MappingError::SplitAcrossGroups.to_string(),
        "encoder pins span more than one port group"
    );
}
