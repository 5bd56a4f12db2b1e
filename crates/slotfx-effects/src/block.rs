//! The tagged parameter block handed to the render path.
//!
//! [`ParameterBlock`] holds exactly one effect's working record; every native
//! entry point matches on the variant, so a call can never read or write the
//! wrong effect's fields. [`LegacyBlock`] is the same union over the legacy
//! record formats.

use core::fmt;

use slotfx_core::{
    FieldDescriptor, FieldId, FieldValue, LegacyField, LegacyRecord, NativeField, NativeParams,
    ParamError,
};

use crate::equalizer::{EqualizerProps, LegacyEqualizer};
use crate::frequency_shifter::{FrequencyShifterProps, LegacyFrequencyShifter};
use crate::pitch_shifter::{LegacyPitchShifter, PitchShifterProps};

/// Effect types with parameter blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectType {
    /// Four-band equalizer.
    Equalizer,
    /// Frequency shifter.
    FrequencyShifter,
    /// Pitch shifter.
    PitchShifter,
}

impl EffectType {
    /// Every effect type.
    pub const ALL: [EffectType; 3] = [
        EffectType::Equalizer,
        EffectType::FrequencyShifter,
        EffectType::PitchShifter,
    ];

    /// Stable identifier used in presets and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            EffectType::Equalizer => "equalizer",
            EffectType::FrequencyShifter => "frequency_shifter",
            EffectType::PitchShifter => "pitch_shifter",
        }
    }

    /// Parse an identifier. Accepts the stable name and a few short aliases.
    ///
    /// ```rust
    /// use slotfx_effects::EffectType;
    ///
    /// assert_eq!(EffectType::from_name("eq"), Some(EffectType::Equalizer));
    /// assert_eq!(EffectType::from_name("frequency-shifter"), Some(EffectType::FrequencyShifter));
    /// assert_eq!(EffectType::from_name("reverb"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| same_ident(t.name(), name))
            .or_else(|| {
                [
                    ("eq", EffectType::Equalizer),
                    ("fshifter", EffectType::FrequencyShifter),
                    ("pshifter", EffectType::PitchShifter),
                ]
                .into_iter()
                .find(|(alias, _)| same_ident(alias, name))
                .map(|(_, t)| t)
            })
    }

    /// Native field descriptors in id order.
    pub fn native_fields(self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let (eq, fs, ps): Tables<
            NativeField<EqualizerProps>,
            NativeField<FrequencyShifterProps>,
            NativeField<PitchShifterProps>,
        > = match self {
            EffectType::Equalizer => (EqualizerProps::native_fields(), &[], &[]),
            EffectType::FrequencyShifter => (&[], FrequencyShifterProps::native_fields(), &[]),
            EffectType::PitchShifter => (&[], &[], PitchShifterProps::native_fields()),
        };
        eq.iter()
            .map(|f| &f.descriptor)
            .chain(fs.iter().map(|f| &f.descriptor))
            .chain(ps.iter().map(|f| &f.descriptor))
    }

    /// Legacy property descriptors in id order.
    pub fn legacy_fields(self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let (eq, fs, ps): Tables<
            LegacyField<LegacyEqualizer>,
            LegacyField<LegacyFrequencyShifter>,
            LegacyField<LegacyPitchShifter>,
        > = match self {
            EffectType::Equalizer => (LegacyEqualizer::legacy_fields(), &[], &[]),
            EffectType::FrequencyShifter => (&[], LegacyFrequencyShifter::legacy_fields(), &[]),
            EffectType::PitchShifter => (&[], &[], LegacyPitchShifter::legacy_fields()),
        };
        eq.iter()
            .map(|f| &f.descriptor)
            .chain(fs.iter().map(|f| &f.descriptor))
            .chain(ps.iter().map(|f| &f.descriptor))
    }

    /// Native descriptor by id.
    pub fn native_field(self, id: FieldId) -> Option<&'static FieldDescriptor> {
        self.native_fields().find(|d| d.id == id)
    }

    /// Native descriptor by stable string id.
    pub fn native_field_by_name(self, string_id: &str) -> Option<&'static FieldDescriptor> {
        self.native_fields()
            .find(|d| d.string_id.eq_ignore_ascii_case(string_id))
    }

    /// Legacy descriptor by property id.
    pub fn legacy_field(self, id: FieldId) -> Option<&'static FieldDescriptor> {
        self.legacy_fields().find(|d| d.id == id)
    }

    /// Legacy descriptor by stable string id.
    pub fn legacy_field_by_name(self, string_id: &str) -> Option<&'static FieldDescriptor> {
        self.legacy_fields()
            .find(|d| d.string_id.eq_ignore_ascii_case(string_id))
    }
}

/// One table per effect type; only the selected type's table is non-empty.
type Tables<E, F, P> = (&'static [E], &'static [F], &'static [P]);

/// ASCII case-insensitive comparison that treats `-` and `_` alike.
fn same_ident(a: &str, b: &str) -> bool {
    let norm = |c: u8| if c == b'-' { b'_' } else { c.to_ascii_lowercase() };
    a.len() == b.len() && a.bytes().zip(b.bytes()).all(|(x, y)| norm(x) == norm(y))
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical initial block for `effect`.
///
/// Built from compiled-in constants; nothing is validated.
pub fn make_defaults(effect: EffectType) -> ParameterBlock {
    match effect {
        EffectType::Equalizer => ParameterBlock::Equalizer(EqualizerProps::default()),
        EffectType::FrequencyShifter => {
            ParameterBlock::FrequencyShifter(FrequencyShifterProps::default())
        }
        EffectType::PitchShifter => ParameterBlock::PitchShifter(PitchShifterProps::default()),
    }
}

macro_rules! per_effect {
    ($value:expr, $props:ident => $body:expr) => {
        match $value {
            ParameterBlock::Equalizer($props) => $body,
            ParameterBlock::FrequencyShifter($props) => $body,
            ParameterBlock::PitchShifter($props) => $body,
        }
    };
}

/// One effect's validated working parameters.
///
/// ## Example
///
/// ```rust
/// use slotfx_core::FieldId;
/// use slotfx_effects::{EffectType, ParameterBlock, make_defaults};
///
/// let mut block = make_defaults(EffectType::PitchShifter);
/// block.set_int(FieldId(0x0002), -25).unwrap();
/// assert_eq!(block.get_int(FieldId(0x0002)), Ok(-25));
///
/// // Float entry point on an integer field: unknown for that entry point
/// assert!(block.set_float(FieldId(0x0002), 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterBlock {
    /// Equalizer parameters.
    Equalizer(EqualizerProps),
    /// Frequency shifter parameters.
    FrequencyShifter(FrequencyShifterProps),
    /// Pitch shifter parameters.
    PitchShifter(PitchShifterProps),
}

impl ParameterBlock {
    /// Canonical initial block for `effect`. Same as [`make_defaults`].
    pub fn defaults(effect: EffectType) -> Self {
        make_defaults(effect)
    }

    /// Which effect this block belongs to.
    pub const fn effect_type(&self) -> EffectType {
        match self {
            ParameterBlock::Equalizer(_) => EffectType::Equalizer,
            ParameterBlock::FrequencyShifter(_) => EffectType::FrequencyShifter,
            ParameterBlock::PitchShifter(_) => EffectType::PitchShifter,
        }
    }

    /// Set a float field.
    pub fn set_float(&mut self, id: FieldId, value: f32) -> Result<(), ParamError> {
        per_effect!(self, p => p.set_float(id, value))
    }

    /// Set a float field from the first element of `values`.
    pub fn set_float_vector(&mut self, id: FieldId, values: &[f32]) -> Result<(), ParamError> {
        per_effect!(self, p => p.set_float_vector(id, values))
    }

    /// Set an integer or direction field.
    pub fn set_int(&mut self, id: FieldId, value: i32) -> Result<(), ParamError> {
        per_effect!(self, p => p.set_int(id, value))
    }

    /// Set an integer or direction field from the first element of `values`.
    pub fn set_int_vector(&mut self, id: FieldId, values: &[i32]) -> Result<(), ParamError> {
        per_effect!(self, p => p.set_int_vector(id, values))
    }

    /// Set a field from a typed value.
    pub fn set_value(&mut self, id: FieldId, value: FieldValue) -> Result<(), ParamError> {
        per_effect!(self, p => p.set_value(id, value))
    }

    /// Read a float field.
    pub fn get_float(&self, id: FieldId) -> Result<f32, ParamError> {
        per_effect!(self, p => p.get_float(id))
    }

    /// Read a float field into the first element of `out`.
    pub fn get_float_vector(&self, id: FieldId, out: &mut [f32]) -> Result<(), ParamError> {
        per_effect!(self, p => p.get_float_vector(id, out))
    }

    /// Read an integer or direction field.
    pub fn get_int(&self, id: FieldId) -> Result<i32, ParamError> {
        per_effect!(self, p => p.get_int(id))
    }

    /// Read an integer or direction field into the first element of `out`.
    pub fn get_int_vector(&self, id: FieldId, out: &mut [i32]) -> Result<(), ParamError> {
        per_effect!(self, p => p.get_int_vector(id, out))
    }

    /// Read any field as a typed value.
    pub fn get_value(&self, id: FieldId) -> Option<FieldValue> {
        per_effect!(self, p => p.get_value(id))
    }
}

impl fmt::Display for ParameterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.effect_type())?;
        for desc in self.effect_type().native_fields() {
            if let Some(value) = self.get_value(desc.id) {
                write!(f, "\n  {:<16} {}{}", desc.string_id, value, desc.unit.suffix())?;
            }
        }
        Ok(())
    }
}

macro_rules! per_legacy {
    ($value:expr, $record:ident => $body:expr) => {
        match $value {
            LegacyBlock::Equalizer($record) => $body,
            LegacyBlock::FrequencyShifter($record) => $body,
            LegacyBlock::PitchShifter($record) => $body,
        }
    };
}

/// One effect's record in the legacy property format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegacyBlock {
    /// Equalizer record.
    Equalizer(LegacyEqualizer),
    /// Frequency shifter record.
    FrequencyShifter(LegacyFrequencyShifter),
    /// Pitch shifter record.
    PitchShifter(LegacyPitchShifter),
}

impl LegacyBlock {
    /// Canonical initial legacy record for `effect`.
    pub fn defaults(effect: EffectType) -> Self {
        match effect {
            EffectType::Equalizer => LegacyBlock::Equalizer(LegacyEqualizer::defaults()),
            EffectType::FrequencyShifter => {
                LegacyBlock::FrequencyShifter(LegacyFrequencyShifter::defaults())
            }
            EffectType::PitchShifter => LegacyBlock::PitchShifter(LegacyPitchShifter::defaults()),
        }
    }

    /// Which effect this record belongs to.
    pub const fn effect_type(&self) -> EffectType {
        match self {
            LegacyBlock::Equalizer(_) => EffectType::Equalizer,
            LegacyBlock::FrequencyShifter(_) => EffectType::FrequencyShifter,
            LegacyBlock::PitchShifter(_) => EffectType::PitchShifter,
        }
    }

    /// Check every field; the first illegal one fails the whole record.
    pub fn validate(&self) -> Result<(), ParamError> {
        per_legacy!(self, r => r.validate())
    }

    /// Read one property.
    pub fn field_value(&self, id: FieldId) -> Option<FieldValue> {
        per_legacy!(self, r => r.field_value(id))
    }

    /// Copy with one property replaced after validation.
    pub fn with_field(&self, id: FieldId, value: FieldValue) -> Result<Self, ParamError> {
        Ok(match self {
            LegacyBlock::Equalizer(r) => LegacyBlock::Equalizer(r.with_field(id, value)?),
            LegacyBlock::FrequencyShifter(r) => {
                LegacyBlock::FrequencyShifter(r.with_field(id, value)?)
            }
            LegacyBlock::PitchShifter(r) => LegacyBlock::PitchShifter(r.with_field(id, value)?),
        })
    }

    /// Convert to the working block. Call only on validated records.
    pub fn to_block(&self) -> ParameterBlock {
        match self {
            LegacyBlock::Equalizer(r) => ParameterBlock::Equalizer(r.to_props()),
            LegacyBlock::FrequencyShifter(r) => ParameterBlock::FrequencyShifter(r.to_props()),
            LegacyBlock::PitchShifter(r) => ParameterBlock::PitchShifter(r.to_props()),
        }
    }
}

impl fmt::Display for LegacyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (legacy)", self.effect_type())?;
        for desc in self.effect_type().legacy_fields() {
            if let Some(value) = self.field_value(desc.id) {
                write!(f, "\n  {:>2} {:<16} {}{}", desc.id.raw(), desc.string_id, value, desc.unit.suffix())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotfx_core::{Direction, FieldKind};

    #[test]
    fn defaults_per_type() {
        for effect in EffectType::ALL {
            let block = make_defaults(effect);
            assert_eq!(block.effect_type(), effect);
            for desc in effect.native_fields() {
                assert_eq!(block.get_value(desc.id), Some(desc.default), "{effect} {}", desc.name);
            }
            assert_eq!(LegacyBlock::defaults(effect).to_block(), block);
        }
    }

    #[test]
    fn names_roundtrip() {
        for effect in EffectType::ALL {
            assert_eq!(EffectType::from_name(effect.name()), Some(effect));
        }
        assert_eq!(EffectType::from_name("PSHIFTER"), Some(EffectType::PitchShifter));
    }

    #[test]
    fn field_counts() {
        assert_eq!(EffectType::Equalizer.native_fields().count(), 10);
        assert_eq!(EffectType::FrequencyShifter.native_fields().count(), 3);
        assert_eq!(EffectType::PitchShifter.native_fields().count(), 2);
        assert_eq!(EffectType::Equalizer.legacy_fields().count(), 10);
        assert_eq!(EffectType::FrequencyShifter.legacy_fields().count(), 3);
        assert_eq!(EffectType::PitchShifter.legacy_fields().count(), 2);
    }

    #[test]
    fn ids_are_scoped_per_effect() {
        let mut fs = make_defaults(EffectType::FrequencyShifter);
        // 0x0002 is a float on the equalizer but a direction here.
        assert!(fs.set_float(FieldId(0x0002), 100.0).is_err());
        fs.set_int(FieldId(0x0002), 1).unwrap();
        assert_eq!(
            fs,
            ParameterBlock::FrequencyShifter(FrequencyShifterProps {
                left_direction: Direction::Up,
                ..Default::default()
            })
        );
    }

    #[test]
    fn unknown_id_names_id() {
        let mut eq = make_defaults(EffectType::Equalizer);
        let before = eq;
        assert_eq!(
            eq.set_float(FieldId(0x000B), 1.0),
            Err(ParamError::unknown_field("equalizer", FieldKind::Float, FieldId(0x000B)))
        );
        assert_eq!(eq, before);
    }

    #[test]
    fn legacy_with_field_stays_in_variant() {
        let r = LegacyBlock::defaults(EffectType::PitchShifter);
        let next = r.with_field(FieldId(2), FieldValue::Int(-3)).unwrap();
        assert_eq!(next.field_value(FieldId(2)), Some(FieldValue::Int(-3)));
        assert_eq!(next.effect_type(), EffectType::PitchShifter);
        assert!(r.with_field(FieldId(4), FieldValue::Int(0)).is_err());
    }
}
