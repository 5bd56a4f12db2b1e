//! Preset file format and operations.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use slotfx_core::{FieldId, FieldValue};
use slotfx_effects::{EffectType, ParameterBlock, make_defaults};
use slotfx_host::EffectSlot;

use crate::error::ConfigError;
use crate::value::parse_field_value;

/// A named set of native parameter values for one effect type.
///
/// Keys in `params` are the fields' stable string ids. Fields a preset does
/// not list keep whatever value the target already holds.
///
/// # TOML Format
///
/// ```toml
/// name = "Bass Lift"
/// description = "Warm low shelf"
/// effect = "equalizer"
///
/// [params]
/// low_gain = "6dB"
/// low_cutoff = "150"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Effect type name (see [`EffectType::from_name`]).
    pub effect: String,

    /// Parameter values keyed by field string id.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Preset {
    /// Create an empty preset for `effect`.
    pub fn new(name: impl Into<String>, effect: EffectType) -> Self {
        Self {
            name: name.into(),
            description: None,
            effect: effect.name().to_string(),
            params: BTreeMap::new(),
        }
    }

    /// Capture every native field of `block`.
    pub fn from_block(name: impl Into<String>, block: &ParameterBlock) -> Self {
        let effect = block.effect_type();
        let params = effect
            .native_fields()
            .filter_map(|desc| {
                let value = block.get_value(desc.id)?;
                Some((desc.string_id.to_string(), value.to_string()))
            })
            .collect();
        Self {
            params,
            ..Self::new(name, effect)
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a parameter value string.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Effect type the preset targets.
    pub fn effect_type(&self) -> Result<EffectType, ConfigError> {
        EffectType::from_name(&self.effect)
            .ok_or_else(|| ConfigError::UnknownEffect(self.effect.clone()))
    }

    /// Parse every parameter into a native `(id, value)` pair.
    ///
    /// Checks keys and syntax only; ranges are checked when the values are
    /// set on a block.
    pub fn resolve(&self) -> Result<Vec<(FieldId, FieldValue)>, ConfigError> {
        let effect = self.effect_type()?;
        self.params
            .iter()
            .map(|(key, raw)| -> Result<_, ConfigError> {
                let desc = effect
                    .native_field_by_name(key)
                    .ok_or_else(|| ConfigError::unknown_parameter(effect.name(), key.as_str()))?;
                Ok((desc.id, parse_field_value(desc, raw)?))
            })
            .collect()
    }

    /// The block this preset produces when applied to defaults.
    pub fn to_block(&self) -> Result<ParameterBlock, ConfigError> {
        let mut block = make_defaults(self.effect_type()?);
        for (id, value) in self.resolve()? {
            block.set_value(id, value)?;
        }
        Ok(block)
    }

    /// Check every parameter against the native descriptors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_block().map(|_| ())
    }

    /// Apply the preset to `slot` through the native protocol.
    ///
    /// Publishes once. On any error the slot is left unchanged.
    pub fn apply(&self, slot: &mut EffectSlot) -> Result<(), ConfigError> {
        let effect = self.effect_type()?;
        if effect != slot.effect_type() {
            return Err(ConfigError::EffectMismatch {
                preset: effect,
                slot: slot.effect_type(),
            });
        }
        let values = self.resolve()?;
        slot.set_values(&values)?;
        tracing::info!(preset = %self.name, %effect, fields = values.len(), "preset applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotfx_core::Direction;
    use slotfx_effects::{EqualizerProps, FrequencyShifterProps, PitchShifterProps};

    const BASS_LIFT: &str = r#"
name = "Bass Lift"
description = "Warm low shelf"
effect = "equalizer"

[params]
low_gain = "2.0"
low_cutoff = "150"
"#;

    #[test]
    fn parses_documented_format() {
        let preset = Preset::from_toml(BASS_LIFT).unwrap();
        assert_eq!(preset.name, "Bass Lift");
        assert_eq!(preset.description.as_deref(), Some("Warm low shelf"));
        assert_eq!(preset.effect_type().unwrap(), EffectType::Equalizer);
        assert_eq!(preset.params.len(), 2);
    }

    #[test]
    fn to_block_overrides_listed_fields_only() {
        let block = Preset::from_toml(BASS_LIFT).unwrap().to_block().unwrap();
        let ParameterBlock::Equalizer(p) = block else {
            panic!("wrong variant: {block:?}");
        };
        assert_eq!(p.low_gain, 2.0);
        assert_eq!(p.low_cutoff, 150.0);
        assert_eq!(p.mid1_center, EqualizerProps::default().mid1_center);
    }

    #[test]
    fn directions_by_name_or_code() {
        let preset = Preset::new("Ring", EffectType::FrequencyShifter)
            .with_param("frequency", "1kHz")
            .with_param("left_direction", "up")
            .with_param("right_direction", "2");
        let ParameterBlock::FrequencyShifter(p) = preset.to_block().unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(p.frequency, 1000.0);
        assert_eq!(p.left_direction, Direction::Up);
        assert_eq!(p.right_direction, Direction::Off);
    }

    #[test]
    fn unknown_effect_rejected() {
        let mut preset = Preset::new("x", EffectType::Equalizer);
        preset.effect = "flanger".to_string();
        assert!(matches!(preset.validate(), Err(ConfigError::UnknownEffect(ref e)) if e == "flanger"));
    }

    #[test]
    fn unknown_parameter_rejected() {
        let preset = Preset::new("x", EffectType::PitchShifter).with_param("drive", "1");
        let err = preset.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParameter { ref param, .. } if param == "drive"));
    }

    #[test]
    fn out_of_range_rejected() {
        let preset = Preset::new("x", EffectType::PitchShifter).with_param("coarse_tune", "13");
        assert!(matches!(preset.validate(), Err(ConfigError::Param(_))));

        let preset =
            Preset::new("x", EffectType::FrequencyShifter).with_param("left_direction", "7");
        assert!(matches!(preset.validate(), Err(ConfigError::Param(_))));
    }

    #[test]
    fn apply_publishes_once() {
        let mut slot = EffectSlot::new(EffectType::PitchShifter);
        let preset = Preset::new("Fifth", EffectType::PitchShifter)
            .with_param("coarse_tune", "-5")
            .with_param("fine_tune", "10");
        preset.apply(&mut slot).unwrap();
        assert_eq!(slot.version(), 1);
        assert_eq!(slot.get_int(PitchShifterProps::COARSE_TUNE), Ok(-5));
        assert_eq!(slot.get_int(PitchShifterProps::FINE_TUNE), Ok(10));
    }

    #[test]
    fn failed_apply_leaves_slot_alone() {
        let mut slot = EffectSlot::new(EffectType::PitchShifter);
        let preset = Preset::new("Bad", EffectType::PitchShifter)
            .with_param("coarse_tune", "-5")
            .with_param("fine_tune", "51");
        assert!(preset.apply(&mut slot).is_err());
        assert_eq!(slot.version(), 0);
        assert_eq!(*slot.block(), make_defaults(EffectType::PitchShifter));
    }

    #[test]
    fn apply_to_other_effect_rejected() {
        let mut slot = EffectSlot::new(EffectType::Equalizer);
        let preset = Preset::new("x", EffectType::FrequencyShifter);
        let err = preset.apply(&mut slot).unwrap_err();
        assert!(matches!(err, ConfigError::EffectMismatch { .. }));
        assert_eq!(slot.version(), 0);
    }

    #[test]
    fn captured_block_reproduces_itself() {
        let mut block = make_defaults(EffectType::FrequencyShifter);
        block
            .set_float(FrequencyShifterProps::FREQUENCY, 440.0)
            .unwrap();
        block
            .set_int(FrequencyShifterProps::RIGHT_DIRECTION, 1)
            .unwrap();
        let preset = Preset::from_block("Captured", &block);
        assert_eq!(preset.params.len(), 3);
        assert_eq!(preset.params["right_direction"], "up");
        assert_eq!(preset.to_block().unwrap(), block);
    }

    #[test]
    fn toml_text_reparses() {
        let preset = Preset::from_toml(BASS_LIFT).unwrap();
        let text = preset.to_toml().unwrap();
        assert!(text.contains("[params]"), "{text}");
        assert_eq!(Preset::from_toml(&text).unwrap(), preset);
    }
}
