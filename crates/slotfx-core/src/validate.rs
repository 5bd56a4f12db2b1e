//! Range validation shared by both parameter protocols.
//!
//! The native dispatcher and the legacy record validators call into the same
//! functions here, so the two protocols can never disagree on whether a value
//! is legal for a field.

use crate::direction::Direction;
use crate::error::ParamError;
use crate::field::{FieldBounds, FieldDescriptor, FieldValue};

/// Inclusive interval test.
///
/// Written as two comparisons so that NaN (which compares false against
/// everything) is rejected.
///
/// ```rust
/// use slotfx_core::within;
///
/// assert!(within(5, 0, 5));
/// assert!(!within(f32::NAN, 0.0, 1.0));
/// ```
#[inline]
pub fn within<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Check `value` against `desc`, returning it unchanged on success.
///
/// A value of the wrong type for the field is reported as
/// [`ParamError::UnknownField`] for that value's entry-point family.
pub fn validate(
    effect: &'static str,
    desc: &FieldDescriptor,
    value: FieldValue,
) -> Result<FieldValue, ParamError> {
    let type_matches = matches!(
        (desc.bounds, value),
        (FieldBounds::Float { .. }, FieldValue::Float(_))
            | (FieldBounds::Int { .. }, FieldValue::Int(_))
            | (FieldBounds::Unsigned { .. }, FieldValue::Unsigned(_))
            | (FieldBounds::Direction, FieldValue::Direction(_))
    );
    if !type_matches {
        return Err(ParamError::unknown_field(effect, value.kind(), desc.id));
    }
    if desc.contains(value) {
        Ok(value)
    } else {
        Err(ParamError::out_of_range(effect, desc, value))
    }
}

/// Check a float against `desc`.
#[inline]
pub fn validate_float(
    effect: &'static str,
    desc: &FieldDescriptor,
    value: f32,
) -> Result<f32, ParamError> {
    validate(effect, desc, FieldValue::Float(value)).map(|_| value)
}

/// Check a signed integer against `desc`.
#[inline]
pub fn validate_int(
    effect: &'static str,
    desc: &FieldDescriptor,
    value: i32,
) -> Result<i32, ParamError> {
    validate(effect, desc, FieldValue::Int(value)).map(|_| value)
}

/// Check an unsigned integer against `desc`.
#[inline]
pub fn validate_unsigned(
    effect: &'static str,
    desc: &FieldDescriptor,
    value: u32,
) -> Result<u32, ParamError> {
    validate(effect, desc, FieldValue::Unsigned(value)).map(|_| value)
}

/// Strictly decode a native direction code for a direction field.
///
/// Anything but the three known codes is [`ParamError::UnsupportedDirection`].
pub fn validate_direction_code(
    effect: &'static str,
    desc: &FieldDescriptor,
    code: i32,
) -> Result<Direction, ParamError> {
    Direction::from_native_code(code).ok_or(ParamError::UnsupportedDirection {
        effect,
        field: desc.name,
        id: desc.id,
        code,
    })
}
