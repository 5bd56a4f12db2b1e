//! Legacy property calls.
//!
//! A legacy call names an effect type and a property id. Property 0 addresses
//! nothing, property 1 the whole record, and higher ids one field each.
//! Values travel in the legacy types: signed `long`, unsigned `long`,
//! `float`, or a whole record.

use std::fmt;
use std::mem;

use slotfx_core::{FieldId, FieldValue, PROPERTY_ALL_PARAMETERS, PROPERTY_NONE};
use slotfx_effects::{EffectType, LegacyBlock};

/// A value in one of the legacy types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegacyValue {
    /// Signed 32-bit `long`.
    Long(i32),
    /// Unsigned 32-bit `long`.
    ULong(u32),
    /// 32-bit float.
    Float(f32),
    /// A whole record, for the all-parameters property.
    Record(LegacyBlock),
}

impl LegacyValue {
    /// Legacy type name, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            LegacyValue::Long(_) => "long",
            LegacyValue::ULong(_) => "ulong",
            LegacyValue::Float(_) => "float",
            LegacyValue::Record(_) => "record",
        }
    }

    /// The scalar as a field value; `None` for records.
    pub const fn to_field_value(self) -> Option<FieldValue> {
        match self {
            LegacyValue::Long(v) => Some(FieldValue::Int(v)),
            LegacyValue::ULong(v) => Some(FieldValue::Unsigned(v)),
            LegacyValue::Float(v) => Some(FieldValue::Float(v)),
            LegacyValue::Record(_) => None,
        }
    }

    /// Wrap a stored legacy field value.
    pub const fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(v) => Some(LegacyValue::Long(v)),
            FieldValue::Unsigned(v) => Some(LegacyValue::ULong(v)),
            FieldValue::Float(v) => Some(LegacyValue::Float(v)),
            FieldValue::Direction(_) => None,
        }
    }

    /// Whether `self` has the same legacy type as a stored `value`.
    pub fn matches_type_of(&self, value: FieldValue) -> bool {
        self.to_field_value()
            .is_some_and(|own| mem::discriminant(&own) == mem::discriminant(&value))
    }
}

impl fmt::Display for LegacyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyValue::Long(v) => write!(f, "{v}"),
            LegacyValue::ULong(v) => write!(f, "{v}"),
            LegacyValue::Float(v) => write!(f, "{v}"),
            LegacyValue::Record(r) => write!(f, "{r}"),
        }
    }
}

/// Which part of the record a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTarget {
    /// Nothing; sets and gets are no-ops.
    None,
    /// The whole record.
    All,
    /// One field.
    Field(FieldId),
}

/// Addressing part of a legacy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyCall {
    /// Effect type the caller believes the slot holds.
    pub effect: EffectType,
    /// Raw property id.
    pub property: FieldId,
}

impl LegacyCall {
    /// Call addressing `property` of `effect`.
    pub const fn new(effect: EffectType, property: FieldId) -> Self {
        Self { effect, property }
    }

    /// Call addressing the whole record.
    pub const fn all(effect: EffectType) -> Self {
        Self::new(effect, PROPERTY_ALL_PARAMETERS)
    }

    /// Decode the property id.
    pub fn target(&self) -> PropertyTarget {
        match self.property {
            PROPERTY_NONE => PropertyTarget::None,
            PROPERTY_ALL_PARAMETERS => PropertyTarget::All,
            id => PropertyTarget::Field(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_decode() {
        let eq = EffectType::Equalizer;
        assert_eq!(LegacyCall::new(eq, FieldId(0)).target(), PropertyTarget::None);
        assert_eq!(LegacyCall::all(eq).target(), PropertyTarget::All);
        assert_eq!(
            LegacyCall::new(eq, FieldId(7)).target(),
            PropertyTarget::Field(FieldId(7))
        );
    }

    #[test]
    fn type_matching() {
        assert!(LegacyValue::Long(3).matches_type_of(FieldValue::Int(0)));
        assert!(!LegacyValue::Long(3).matches_type_of(FieldValue::Unsigned(0)));
        assert!(LegacyValue::Float(1.0).matches_type_of(FieldValue::Float(0.0)));
        let record = LegacyValue::Record(LegacyBlock::defaults(EffectType::PitchShifter));
        assert!(!record.matches_type_of(FieldValue::Int(0)));
        assert_eq!(record.type_name(), "record");
    }

    #[test]
    fn field_value_roundtrip() {
        for v in [LegacyValue::Long(-9), LegacyValue::ULong(2), LegacyValue::Float(0.5)] {
            let fv = v.to_field_value().unwrap();
            assert_eq!(LegacyValue::from_field_value(fv), Some(v));
        }
    }
}
