//! Frequency shifter parameters.

use slotfx_core::{
    Direction, FieldAccess, FieldDescriptor, FieldId, FieldUnit, LEGACY_DIRECTION_DOWN,
    LEGACY_DIRECTION_OFF, LegacyAccess, LegacyField, LegacyRecord, NativeField, NativeParams,
    direction_from_legacy,
};

/// Largest shift in Hz.
pub const FREQUENCY_MAX: f32 = 24000.0;

/// Frequency shifter working record.
///
/// ## Native Field Ids
///
/// | Id | Name | Range | Default |
/// |----|------|-------|---------|
/// | 0x0001 | Frequency | 0.0–24000.0 Hz | 0.0 |
/// | 0x0002 | Left Direction | down / up / off | down |
/// | 0x0003 | Right Direction | down / up / off | down |
///
/// Directions travel through the integer entry points as native codes
/// (down 0, up 1, off 2). Any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrequencyShifterProps {
    /// Shift amount in Hz.
    pub frequency: f32,
    /// Shift direction of the left channel.
    pub left_direction: Direction,
    /// Shift direction of the right channel.
    pub right_direction: Direction,
}

impl FrequencyShifterProps {
    /// Native id of the shift frequency.
    pub const FREQUENCY: FieldId = FieldId(0x0001);
    /// Native id of the left direction.
    pub const LEFT_DIRECTION: FieldId = FieldId(0x0002);
    /// Native id of the right direction.
    pub const RIGHT_DIRECTION: FieldId = FieldId(0x0003);
}

static FREQUENCY_SHIFTER_FIELDS: [NativeField<FrequencyShifterProps>; 3] = [
    NativeField {
        descriptor: FieldDescriptor::float(
            FieldId(0x0001),
            "Frequency",
            "frequency",
            FieldUnit::Hertz,
            0.0,
            FREQUENCY_MAX,
            0.0,
        ),
        access: FieldAccess::Float {
            get: |p| p.frequency,
            set: |p, v| p.frequency = v,
        },
    },
    NativeField {
        descriptor: FieldDescriptor::direction(
            FieldId(0x0002),
            "Left Direction",
            "left_direction",
            Direction::Down,
        ),
        access: FieldAccess::Direction {
            get: |p| p.left_direction,
            set: |p, v| p.left_direction = v,
        },
    },
    NativeField {
        descriptor: FieldDescriptor::direction(
            FieldId(0x0003),
            "Right Direction",
            "right_direction",
            Direction::Down,
        ),
        access: FieldAccess::Direction {
            get: |p| p.right_direction,
            set: |p, v| p.right_direction = v,
        },
    },
];

impl NativeParams for FrequencyShifterProps {
    const EFFECT_NAME: &'static str = "frequency shifter";

    fn native_fields() -> &'static [NativeField<Self>] {
        &FREQUENCY_SHIFTER_FIELDS
    }
}

/// Frequency shifter record in the legacy property format.
///
/// ## Property Ids
///
/// | Id | Name | Type | Range | Default |
/// |----|------|------|-------|---------|
/// | 2 | Frequency | float | 0.0–24000.0 Hz | 0.0 |
/// | 3 | Left Direction | ulong | 0–2 | 0 (down) |
/// | 4 | Right Direction | ulong | 0–2 | 0 (down) |
///
/// Conversion decodes direction codes leniently: only the down and up codes
/// are recognized and everything else becomes [`Direction::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LegacyFrequencyShifter {
    /// Shift amount in Hz.
    pub frequency: f32,
    /// Raw left direction code.
    pub left_direction: u32,
    /// Raw right direction code.
    pub right_direction: u32,
}

impl LegacyFrequencyShifter {
    /// Property id of the shift frequency.
    pub const FREQUENCY: FieldId = FieldId(2);
    /// Property id of the left direction.
    pub const LEFT_DIRECTION: FieldId = FieldId(3);
    /// Property id of the right direction.
    pub const RIGHT_DIRECTION: FieldId = FieldId(4);
}

const fn direction_code(id: u32, name: &'static str, string_id: &'static str) -> FieldDescriptor {
    FieldDescriptor::unsigned(
        FieldId(id),
        name,
        string_id,
        FieldUnit::Direction,
        LEGACY_DIRECTION_DOWN,
        LEGACY_DIRECTION_OFF,
        LEGACY_DIRECTION_DOWN,
    )
}

static LEGACY_FREQUENCY_SHIFTER_FIELDS: [LegacyField<LegacyFrequencyShifter>; 3] = [
    LegacyField {
        descriptor: FieldDescriptor::float(
            FieldId(2),
            "Frequency",
            "frequency",
            FieldUnit::Hertz,
            0.0,
            FREQUENCY_MAX,
            0.0,
        ),
        access: LegacyAccess::Float {
            get: |r| r.frequency,
            set: |r, v| r.frequency = v,
        },
    },
    LegacyField {
        descriptor: direction_code(3, "Left Direction", "left_direction"),
        access: LegacyAccess::ULong {
            get: |r| r.left_direction,
            set: |r, v| r.left_direction = v,
        },
    },
    LegacyField {
        descriptor: direction_code(4, "Right Direction", "right_direction"),
        access: LegacyAccess::ULong {
            get: |r| r.right_direction,
            set: |r, v| r.right_direction = v,
        },
    },
];

impl LegacyRecord for LegacyFrequencyShifter {
    type Props = FrequencyShifterProps;
    const EFFECT_NAME: &'static str = "frequency shifter";

    fn defaults() -> Self {
        Self::default()
    }

    fn legacy_fields() -> &'static [LegacyField<Self>] {
        &LEGACY_FREQUENCY_SHIFTER_FIELDS
    }

    fn to_props(&self) -> FrequencyShifterProps {
        FrequencyShifterProps {
            frequency: self.frequency,
            left_direction: direction_from_legacy(self.left_direction),
            right_direction: direction_from_legacy(self.right_direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotfx_core::{FieldValue, LEGACY_DIRECTION_UP, ParamError};

    #[test]
    fn defaults_shift_down_by_nothing() {
        let p = FrequencyShifterProps::default();
        assert_eq!(p.frequency, 0.0);
        assert_eq!(p.left_direction, Direction::Down);
        assert_eq!(p.right_direction, Direction::Down);
        assert_eq!(LegacyFrequencyShifter::default().to_props(), p);
    }

    #[test]
    fn native_direction_codes() {
        let mut p = FrequencyShifterProps::default();
        p.set_int(FrequencyShifterProps::LEFT_DIRECTION, 1).unwrap();
        p.set_int(FrequencyShifterProps::RIGHT_DIRECTION, 2).unwrap();
        assert_eq!(p.left_direction, Direction::Up);
        assert_eq!(p.right_direction, Direction::Off);
        assert_eq!(p.get_int(FrequencyShifterProps::RIGHT_DIRECTION), Ok(2));
    }

    #[test]
    fn native_rejects_unknown_direction_code() {
        let mut p = FrequencyShifterProps::default();
        let err = p.set_int(FrequencyShifterProps::LEFT_DIRECTION, 999).unwrap_err();
        assert!(matches!(
            err,
            ParamError::UnsupportedDirection { code: 999, id: FrequencyShifterProps::LEFT_DIRECTION, .. }
        ));
        assert_eq!(p.left_direction, Direction::Down);
    }

    #[test]
    fn legacy_directions_convert() {
        let r = LegacyFrequencyShifter {
            frequency: 440.0,
            left_direction: LEGACY_DIRECTION_UP,
            right_direction: 999,
        };
        let p = r.to_props();
        assert_eq!(p.frequency, 440.0);
        assert_eq!(p.left_direction, Direction::Up);
        assert_eq!(p.right_direction, Direction::Off);
    }

    #[test]
    fn legacy_direction_property_is_range_checked() {
        let r = LegacyFrequencyShifter::default();
        assert!(
            r.with_field(LegacyFrequencyShifter::LEFT_DIRECTION, FieldValue::Unsigned(2))
                .is_ok()
        );
        assert!(
            r.with_field(LegacyFrequencyShifter::LEFT_DIRECTION, FieldValue::Unsigned(3))
                .is_err()
        );
    }

    #[test]
    fn frequency_bounds() {
        let mut p = FrequencyShifterProps::default();
        assert!(p.set_float(FrequencyShifterProps::FREQUENCY, FREQUENCY_MAX).is_ok());
        assert!(p.set_float(FrequencyShifterProps::FREQUENCY, -1.0).is_err());
        assert_eq!(p.frequency, FREQUENCY_MAX);
    }
}
