//! Parameter validation errors.

use thiserror::Error;

use crate::field::{FieldDescriptor, FieldId, FieldKind, FieldValue};

/// Rejection of a single parameter request.
///
/// Every variant is local and recoverable: the request had no effect on any
/// stored or published state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamError {
    /// The id is not a field of this effect for the requested entry point.
    #[error("invalid {effect} {kind} property {id}")]
    UnknownField {
        /// Effect type name.
        effect: &'static str,
        /// Entry-point family the caller used.
        kind: FieldKind,
        /// Offending id.
        id: FieldId,
    },

    /// The value is outside the field's declared inclusive range.
    #[error("{effect} {field} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Effect type name.
        effect: &'static str,
        /// Field display name.
        field: &'static str,
        /// Field id.
        id: FieldId,
        /// Rejected value.
        value: FieldValue,
        /// Inclusive lower bound.
        min: FieldValue,
        /// Inclusive upper bound.
        max: FieldValue,
    },

    /// A native direction code other than the three known ones.
    #[error("unsupported {effect} {field} direction code {code}")]
    UnsupportedDirection {
        /// Effect type name.
        effect: &'static str,
        /// Field display name.
        field: &'static str,
        /// Field id.
        id: FieldId,
        /// Rejected raw code.
        code: i32,
    },

    /// A vector entry point was handed no elements.
    #[error("empty value vector for {effect} property {id}")]
    EmptyVector {
        /// Effect type name.
        effect: &'static str,
        /// Field id.
        id: FieldId,
    },
}

impl ParamError {
    /// Create an unknown-field error.
    pub const fn unknown_field(effect: &'static str, kind: FieldKind, id: FieldId) -> Self {
        ParamError::UnknownField { effect, kind, id }
    }

    /// Create an out-of-range error from the field's descriptor.
    ///
    /// Direction fields have no interval; for them the bounds collapse to the
    /// value itself, which never happens in practice because every
    /// [`Direction`](crate::Direction) is legal.
    pub fn out_of_range(effect: &'static str, desc: &FieldDescriptor, value: FieldValue) -> Self {
        let (min, max) = desc.bounds.limits().unwrap_or((value, value));
        ParamError::OutOfRange {
            effect,
            field: desc.name,
            id: desc.id,
            value,
            min,
            max,
        }
    }

    /// Id of the field the request addressed.
    pub const fn field_id(&self) -> FieldId {
        match *self {
            ParamError::UnknownField { id, .. }
            | ParamError::OutOfRange { id, .. }
            | ParamError::UnsupportedDirection { id, .. }
            | ParamError::EmptyVector { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldUnit;

    #[cfg(not(feature = "std"))]
    extern crate alloc;
    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn unknown_field_names_id() {
        let err = ParamError::unknown_field("equalizer", FieldKind::Float, FieldId(0x20));
        assert_eq!(err.to_string(), "invalid equalizer float property 0x0020");
        assert_eq!(err.field_id(), FieldId(0x20));
    }

    #[test]
    fn out_of_range_names_field_and_bounds() {
        let desc = FieldDescriptor::float(
            FieldId(1),
            "Low Gain",
            "low_gain",
            FieldUnit::Gain,
            0.126,
            7.943,
            1.0,
        );
        let err = ParamError::out_of_range("equalizer", &desc, FieldValue::Float(8.0));
        let msg = err.to_string();
        assert!(msg.contains("Low Gain"), "got: {msg}");
        assert!(msg.contains("[0.126, 7.943]"), "got: {msg}");
        assert!(matches!(
            err,
            ParamError::OutOfRange { min: FieldValue::Float(_), max: FieldValue::Float(_), .. }
        ));
    }

    #[test]
    fn unsupported_direction_display() {
        let err = ParamError::UnsupportedDirection {
            effect: "frequency shifter",
            field: "Left Direction",
            id: FieldId(2),
            code: 999,
        };
        assert_eq!(
            err.to_string(),
            "unsupported frequency shifter Left Direction direction code 999"
        );
    }
}
