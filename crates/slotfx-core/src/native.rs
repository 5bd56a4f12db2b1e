//! Native protocol dispatch.
//!
//! Each effect's parameter record declares one static table of
//! [`NativeField`]s mapping a field id to its descriptor and storage
//! accessors. [`NativeParams`] turns that table into the full set of
//! scalar/vector float/integer set and get entry points, so no effect writes
//! a per-field match by hand.
//!
//! # Contract
//!
//! - Unknown id (or an id of the other kind) → [`ParamError::UnknownField`].
//! - Known id, value outside bounds → [`ParamError::OutOfRange`], or
//!   [`ParamError::UnsupportedDirection`] for direction codes.
//! - On error the record is untouched. On success exactly one field changes.
//! - Vector calls use the first element; no field here is wider than one.
//!
//! # Example
//!
//! ```rust
//! use slotfx_core::{FieldAccess, FieldDescriptor, FieldId, FieldUnit, NativeField, NativeParams};
//!
//! #[derive(Clone, Copy, Default)]
//! struct Tremolo {
//!     rate: f32,
//! }
//!
//! static TREMOLO_FIELDS: [NativeField<Tremolo>; 1] = [NativeField {
//!     descriptor: FieldDescriptor::float(FieldId(1), "Rate", "rate", FieldUnit::Hertz, 0.1, 20.0, 4.0),
//!     access: FieldAccess::Float { get: |p| p.rate, set: |p, v| p.rate = v },
//! }];
//!
//! impl NativeParams for Tremolo {
//!     const EFFECT_NAME: &'static str = "tremolo";
//!     fn native_fields() -> &'static [NativeField<Self>] {
//!         &TREMOLO_FIELDS
//!     }
//! }
//!
//! let mut t = Tremolo::default();
//! t.set_float(FieldId(1), 6.5).unwrap();
//! assert_eq!(t.get_float(FieldId(1)), Ok(6.5));
//! assert!(t.set_float(FieldId(1), 25.0).is_err());
//! assert_eq!(t.rate, 6.5);
//! ```

use crate::direction::Direction;
use crate::error::ParamError;
use crate::field::{FieldDescriptor, FieldId, FieldKind, FieldValue};
use crate::validate::{validate_direction_code, validate_float, validate_int};

/// Storage accessors for one field of `P`.
///
/// Plain function pointers so tables can live in `static`s.
pub enum FieldAccess<P> {
    /// Float storage.
    Float {
        /// Read the field.
        get: fn(&P) -> f32,
        /// Overwrite the field.
        set: fn(&mut P, f32),
    },
    /// Signed integer storage.
    Int {
        /// Read the field.
        get: fn(&P) -> i32,
        /// Overwrite the field.
        set: fn(&mut P, i32),
    },
    /// Direction storage, transported as native integer codes.
    Direction {
        /// Read the field.
        get: fn(&P) -> Direction,
        /// Overwrite the field.
        set: fn(&mut P, Direction),
    },
}

/// One row of an effect's native field table.
pub struct NativeField<P: 'static> {
    /// Id, names, bounds, default.
    pub descriptor: FieldDescriptor,
    /// Where the value is stored.
    pub access: FieldAccess<P>,
}

impl<P> NativeField<P> {
    /// Current value of this field in `props`.
    pub fn read(&self, props: &P) -> FieldValue {
        match self.access {
            FieldAccess::Float { get, .. } => FieldValue::Float(get(props)),
            FieldAccess::Int { get, .. } => FieldValue::Int(get(props)),
            FieldAccess::Direction { get, .. } => FieldValue::Direction(get(props)),
        }
    }
}

/// Native parameter-setting interface, derived from a static field table.
pub trait NativeParams: Sized + 'static {
    /// Effect type name used in error messages.
    const EFFECT_NAME: &'static str;

    /// The effect's field table.
    fn native_fields() -> &'static [NativeField<Self>];

    /// Look up a field by id regardless of kind.
    fn native_field(id: FieldId) -> Option<&'static NativeField<Self>> {
        Self::native_fields().iter().find(|f| f.descriptor.id == id)
    }

    /// Look up a field by its stable string id.
    fn native_field_by_name(string_id: &str) -> Option<&'static NativeField<Self>> {
        Self::native_fields()
            .iter()
            .find(|f| f.descriptor.string_id.eq_ignore_ascii_case(string_id))
    }

    /// Set a float field.
    fn set_float(&mut self, id: FieldId, value: f32) -> Result<(), ParamError> {
        let field = lookup::<Self>(id, FieldKind::Float)?;
        match field.access {
            FieldAccess::Float { set, .. } => {
                set(self, validate_float(Self::EFFECT_NAME, &field.descriptor, value)?);
                trace_set::<Self>(field, FieldValue::Float(value));
                Ok(())
            }
            _ => Err(ParamError::unknown_field(Self::EFFECT_NAME, FieldKind::Float, id)),
        }
    }

    /// Set a float field from the first element of `values`.
    fn set_float_vector(&mut self, id: FieldId, values: &[f32]) -> Result<(), ParamError> {
        let first = values.first().copied().ok_or(ParamError::EmptyVector {
            effect: Self::EFFECT_NAME,
            id,
        })?;
        self.set_float(id, first)
    }

    /// Set an integer or direction field.
    fn set_int(&mut self, id: FieldId, value: i32) -> Result<(), ParamError> {
        let field = lookup::<Self>(id, FieldKind::Int)?;
        match field.access {
            FieldAccess::Int { set, .. } => {
                set(self, validate_int(Self::EFFECT_NAME, &field.descriptor, value)?);
                trace_set::<Self>(field, FieldValue::Int(value));
                Ok(())
            }
            FieldAccess::Direction { set, .. } => {
                let dir = validate_direction_code(Self::EFFECT_NAME, &field.descriptor, value)?;
                set(self, dir);
                trace_set::<Self>(field, FieldValue::Direction(dir));
                Ok(())
            }
            FieldAccess::Float { .. } => {
                Err(ParamError::unknown_field(Self::EFFECT_NAME, FieldKind::Int, id))
            }
        }
    }

    /// Set an integer or direction field from the first element of `values`.
    fn set_int_vector(&mut self, id: FieldId, values: &[i32]) -> Result<(), ParamError> {
        let first = values.first().copied().ok_or(ParamError::EmptyVector {
            effect: Self::EFFECT_NAME,
            id,
        })?;
        self.set_int(id, first)
    }

    /// Set a field from a typed value, picking the matching entry point.
    fn set_value(&mut self, id: FieldId, value: FieldValue) -> Result<(), ParamError> {
        match value {
            FieldValue::Float(v) => self.set_float(id, v),
            FieldValue::Int(v) => self.set_int(id, v),
            FieldValue::Direction(d) => self.set_int(id, d.native_code()),
            FieldValue::Unsigned(v) => match i32::try_from(v) {
                Ok(v) => self.set_int(id, v),
                Err(_) => {
                    let field = lookup::<Self>(id, FieldKind::Int)?;
                    Err(match field.access {
                        FieldAccess::Direction { .. } => ParamError::UnsupportedDirection {
                            effect: Self::EFFECT_NAME,
                            field: field.descriptor.name,
                            id,
                            code: i32::MAX,
                        },
                        FieldAccess::Int { .. } => {
                            ParamError::out_of_range(Self::EFFECT_NAME, &field.descriptor, value)
                        }
                        FieldAccess::Float { .. } => {
                            ParamError::unknown_field(Self::EFFECT_NAME, FieldKind::Int, id)
                        }
                    })
                }
            },
        }
    }

    /// Read a float field.
    fn get_float(&self, id: FieldId) -> Result<f32, ParamError> {
        match lookup::<Self>(id, FieldKind::Float)?.access {
            FieldAccess::Float { get, .. } => Ok(get(self)),
            _ => Err(ParamError::unknown_field(Self::EFFECT_NAME, FieldKind::Float, id)),
        }
    }

    /// Read a float field into the first element of `out`.
    fn get_float_vector(&self, id: FieldId, out: &mut [f32]) -> Result<(), ParamError> {
        let value = self.get_float(id)?;
        let slot = out.first_mut().ok_or(ParamError::EmptyVector {
            effect: Self::EFFECT_NAME,
            id,
        })?;
        *slot = value;
        Ok(())
    }

    /// Read an integer field; direction fields report their native code.
    fn get_int(&self, id: FieldId) -> Result<i32, ParamError> {
        match lookup::<Self>(id, FieldKind::Int)?.access {
            FieldAccess::Int { get, .. } => Ok(get(self)),
            FieldAccess::Direction { get, .. } => Ok(get(self).native_code()),
            FieldAccess::Float { .. } => {
                Err(ParamError::unknown_field(Self::EFFECT_NAME, FieldKind::Int, id))
            }
        }
    }

    /// Read an integer field into the first element of `out`.
    fn get_int_vector(&self, id: FieldId, out: &mut [i32]) -> Result<(), ParamError> {
        let value = self.get_int(id)?;
        let slot = out.first_mut().ok_or(ParamError::EmptyVector {
            effect: Self::EFFECT_NAME,
            id,
        })?;
        *slot = value;
        Ok(())
    }

    /// Read any field as a typed value.
    fn get_value(&self, id: FieldId) -> Option<FieldValue> {
        Self::native_field(id).map(|f| f.read(self))
    }
}

fn lookup<P: NativeParams>(
    id: FieldId,
    kind: FieldKind,
) -> Result<&'static NativeField<P>, ParamError> {
    P::native_field(id)
        .filter(|f| f.descriptor.kind() == kind)
        .ok_or(ParamError::unknown_field(P::EFFECT_NAME, kind, id))
}

#[inline]
#[allow(unused_variables)]
fn trace_set<P: NativeParams>(field: &NativeField<P>, value: FieldValue) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        effect = P::EFFECT_NAME,
        field = field.descriptor.string_id,
        %value,
        "native set"
    );
}
