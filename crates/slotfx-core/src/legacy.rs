//! Legacy compatibility records.
//!
//! The legacy protocol speaks in whole records of legacy-typed fields
//! (`long` millibels, `unsigned long` direction codes, floats) addressed by
//! property id. A [`LegacyRecord`] declares a static table of
//! [`LegacyField`]s the same way native records do, validates through the
//! shared [`validate`](crate::validate) functions, and converts itself into
//! the engine's working record.
//!
//! Property ids 0 and 1 are reserved by every legacy effect for "no
//! property" and "all parameters"; field ids start at 2.

use crate::error::ParamError;
use crate::field::{FieldDescriptor, FieldId, FieldKind, FieldValue};
use crate::validate::validate;

/// Property id meaning "no property"; sets and gets are no-ops.
pub const PROPERTY_NONE: FieldId = FieldId(0);
/// Property id addressing the whole record.
pub const PROPERTY_ALL_PARAMETERS: FieldId = FieldId(1);

/// Storage accessors for one field of a legacy record `R`.
pub enum LegacyAccess<R> {
    /// Signed `long` storage.
    Long {
        /// Read the field.
        get: fn(&R) -> i32,
        /// Overwrite the field.
        set: fn(&mut R, i32),
    },
    /// Unsigned `long` storage.
    ULong {
        /// Read the field.
        get: fn(&R) -> u32,
        /// Overwrite the field.
        set: fn(&mut R, u32),
    },
    /// Float storage.
    Float {
        /// Read the field.
        get: fn(&R) -> f32,
        /// Overwrite the field.
        set: fn(&mut R, f32),
    },
}

/// One row of a legacy record's field table.
pub struct LegacyField<R: 'static> {
    /// Property id, names, bounds, default.
    pub descriptor: FieldDescriptor,
    /// Where the value is stored.
    pub access: LegacyAccess<R>,
}

impl<R> LegacyField<R> {
    /// Current value of this field in `record`.
    pub fn read(&self, record: &R) -> FieldValue {
        match self.access {
            LegacyAccess::Long { get, .. } => FieldValue::Int(get(record)),
            LegacyAccess::ULong { get, .. } => FieldValue::Unsigned(get(record)),
            LegacyAccess::Float { get, .. } => FieldValue::Float(get(record)),
        }
    }

    /// Store `value` without validating it.
    ///
    /// Returns `false` if the value's type does not match the field.
    fn write(&self, record: &mut R, value: FieldValue) -> bool {
        match (&self.access, value) {
            (LegacyAccess::Long { set, .. }, FieldValue::Int(v)) => set(record, v),
            (LegacyAccess::ULong { set, .. }, FieldValue::Unsigned(v)) => set(record, v),
            (LegacyAccess::Float { set, .. }, FieldValue::Float(v)) => set(record, v),
            _ => return false,
        }
        true
    }
}

/// A legacy-format parameter record for one effect type.
pub trait LegacyRecord: Copy + PartialEq + Sized + 'static {
    /// Engine working record this converts into.
    type Props;

    /// Effect type name used in error messages.
    const EFFECT_NAME: &'static str;

    /// Canonical initial record.
    fn defaults() -> Self;

    /// The record's field table, in declaration order.
    fn legacy_fields() -> &'static [LegacyField<Self>];

    /// Convert every field to engine units.
    ///
    /// Only called on records that passed [`validate`](Self::validate).
    fn to_props(&self) -> Self::Props;

    /// Look up a field by property id.
    fn legacy_field(id: FieldId) -> Option<&'static LegacyField<Self>> {
        Self::legacy_fields().iter().find(|f| f.descriptor.id == id)
    }

    /// Look up a field by its stable string id.
    fn legacy_field_by_name(string_id: &str) -> Option<&'static LegacyField<Self>> {
        Self::legacy_fields()
            .iter()
            .find(|f| f.descriptor.string_id.eq_ignore_ascii_case(string_id))
    }

    /// Check every field; the first illegal one fails the whole record.
    fn validate(&self) -> Result<(), ParamError> {
        for field in Self::legacy_fields() {
            validate(Self::EFFECT_NAME, &field.descriptor, field.read(self))?;
        }
        Ok(())
    }

    /// Read one field by property id.
    fn field_value(&self, id: FieldId) -> Option<FieldValue> {
        Self::legacy_field(id).map(|f| f.read(self))
    }

    /// Copy of `self` with one field replaced, after validating the value.
    ///
    /// `self` is never modified; on error nothing changes.
    fn with_field(&self, id: FieldId, value: FieldValue) -> Result<Self, ParamError> {
        let field = Self::legacy_field(id)
            .ok_or(ParamError::unknown_field(Self::EFFECT_NAME, value.kind(), id))?;
        let value = validate(Self::EFFECT_NAME, &field.descriptor, value)?;
        let mut next = *self;
        if field.write(&mut next, value) {
            Ok(next)
        } else {
            Err(ParamError::unknown_field(Self::EFFECT_NAME, value.kind(), id))
        }
    }
}

/// Entry-point family a legacy field's values travel as.
pub fn legacy_kind<R>(field: &LegacyField<R>) -> FieldKind {
    match field.access {
        LegacyAccess::Float { .. } => FieldKind::Float,
        LegacyAccess::Long { .. } | LegacyAccess::ULong { .. } => FieldKind::Int,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldUnit;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct LegacyFixture {
        level_mb: i32,
        code: u32,
        width: f32,
    }

    static LEGACY_FIXTURE_FIELDS: [LegacyField<LegacyFixture>; 3] = [
        LegacyField {
            descriptor: FieldDescriptor::int(
                FieldId(2),
                "Level",
                "level",
                FieldUnit::Millibels,
                -1000,
                1000,
                0,
            ),
            access: LegacyAccess::Long {
                get: |r| r.level_mb,
                set: |r, v| r.level_mb = v,
            },
        },
        LegacyField {
            descriptor: FieldDescriptor::unsigned(
                FieldId(3),
                "Code",
                "code",
                FieldUnit::Direction,
                0,
                2,
                0,
            ),
            access: LegacyAccess::ULong {
                get: |r| r.code,
                set: |r, v| r.code = v,
            },
        },
        LegacyField {
            descriptor: FieldDescriptor::float(
                FieldId(4),
                "Width",
                "width",
                FieldUnit::Octaves,
                0.1,
                1.0,
                1.0,
            ),
            access: LegacyAccess::Float {
                get: |r| r.width,
                set: |r, v| r.width = v,
            },
        },
    ];

    impl LegacyRecord for LegacyFixture {
        type Props = f32;
        const EFFECT_NAME: &'static str = "fixture";

        fn defaults() -> Self {
            Self {
                level_mb: 0,
                code: 0,
                width: 1.0,
            }
        }

        fn legacy_fields() -> &'static [LegacyField<Self>] {
            &LEGACY_FIXTURE_FIELDS
        }

        fn to_props(&self) -> f32 {
            self.width
        }
    }

    #[test]
    fn defaults_validate() {
        assert_eq!(LegacyFixture::defaults().validate(), Ok(()));
    }

    #[test]
    fn one_bad_field_fails_whole_record() {
        let mut r = LegacyFixture::defaults();
        r.code = 7;
        assert!(matches!(
            r.validate(),
            Err(ParamError::OutOfRange { id: FieldId(3), .. })
        ));
    }

    #[test]
    fn with_field_copies_and_validates() {
        let r = LegacyFixture::defaults();
        let next = r.with_field(FieldId(2), FieldValue::Int(-600)).unwrap();
        assert_eq!(next.level_mb, -600);
        assert_eq!(r.level_mb, 0);

        assert!(r.with_field(FieldId(2), FieldValue::Int(1001)).is_err());
        assert!(r.with_field(FieldId(4), FieldValue::Int(1)).is_err());
        assert!(matches!(
            r.with_field(FieldId(40), FieldValue::Float(0.5)),
            Err(ParamError::UnknownField { id: FieldId(40), .. })
        ));
    }

    #[test]
    fn field_values_and_kinds() {
        let r = LegacyFixture::defaults();
        assert_eq!(r.field_value(FieldId(3)), Some(FieldValue::Unsigned(0)));
        assert_eq!(r.field_value(PROPERTY_ALL_PARAMETERS), None);
        let width = LegacyFixture::legacy_field_by_name("width").unwrap();
        assert_eq!(legacy_kind(width), FieldKind::Float);
    }
}
