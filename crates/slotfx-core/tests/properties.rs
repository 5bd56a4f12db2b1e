//! Property-based tests for slotfx-core validation and conversion.
//!
//! Checks that the shared range validator agrees with the descriptor bounds
//! for arbitrary inputs, and that the unit converters stay monotonic and
//! total over their whole input space.

use proptest::prelude::*;
use slotfx_core::{
    Direction, FieldDescriptor, FieldId, FieldUnit, FieldValue, ParamError, direction_from_legacy,
    millibel_to_gain, validate_direction_code, validate_float, validate_int,
};

const CUTOFF: FieldDescriptor = FieldDescriptor::float(
    FieldId(0x0002),
    "Low Cutoff",
    "low_cutoff",
    FieldUnit::Hertz,
    50.0,
    800.0,
    200.0,
);

const FINE: FieldDescriptor = FieldDescriptor::int(
    FieldId(0x0002),
    "Fine Tune",
    "fine_tune",
    FieldUnit::Cents,
    -50,
    50,
    0,
);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A float passes validation exactly when it lies in the closed interval.
    #[test]
    fn float_validation_matches_interval(value in -2000.0f32..2000.0f32) {
        let inside = (50.0..=800.0).contains(&value);
        let result = validate_float("equalizer", &CUTOFF, value);
        prop_assert_eq!(result.is_ok(), inside, "value {}", value);
        if let Err(err) = result {
            let is_out_of_range = matches!(
                err,
                ParamError::OutOfRange { min: FieldValue::Float(_), max: FieldValue::Float(_), .. }
            );
            prop_assert!(is_out_of_range);
        }
    }

    /// Integer validation matches the interval for the whole i32 space.
    #[test]
    fn int_validation_matches_interval(value in any::<i32>()) {
        let inside = (-50..=50).contains(&value);
        prop_assert_eq!(validate_int("pitch shifter", &FINE, value).is_ok(), inside);
    }

    /// Native direction decoding accepts exactly three codes.
    #[test]
    fn native_direction_strict(code in any::<i32>()) {
        let desc = FieldDescriptor::direction(FieldId(2), "Left Direction", "left_direction", Direction::Down);
        let result = validate_direction_code("frequency shifter", &desc, code);
        prop_assert_eq!(result.is_ok(), (0..=2).contains(&code));
    }

    /// Legacy direction decoding is total; only codes 0 and 1 leave Off.
    #[test]
    fn legacy_direction_lenient(code in any::<u32>()) {
        let dir = direction_from_legacy(code);
        match code {
            0 => prop_assert_eq!(dir, Direction::Down),
            1 => prop_assert_eq!(dir, Direction::Up),
            _ => prop_assert_eq!(dir, Direction::Off),
        }
    }

    /// Millibel conversion is positive and monotonic over the legacy range.
    #[test]
    fn millibel_gain_monotonic(a in -1800i32..=1800, b in -1800i32..=1800) {
        let ga = millibel_to_gain(a as f32);
        let gb = millibel_to_gain(b as f32);
        prop_assert!(ga > 0.0 && gb > 0.0);
        if a < b {
            prop_assert!(ga <= gb, "{} -> {}, {} -> {}", a, ga, b, gb);
        }
        if a < 0 {
            prop_assert!(ga < 1.0);
        }
    }
}
