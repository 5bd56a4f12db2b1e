//! Factory presets bundled with slotfx.
//!
//! Always available without external files. Each one targets a single effect
//! type and lists only the fields it changes from the defaults.

use slotfx_effects::EffectType;

use crate::Preset;

/// Factory preset ids, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "flat",
    "bass_lift",
    "telephone",
    "air",
    "octave_up",
    "fifth_down",
    "detune",
    "barber_pole",
    "stereo_spread",
];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("flat", FLAT_PRESET),
    ("bass_lift", BASS_LIFT_PRESET),
    ("telephone", TELEPHONE_PRESET),
    ("air", AIR_PRESET),
    ("octave_up", OCTAVE_UP_PRESET),
    ("fifth_down", FIFTH_DOWN_PRESET),
    ("detune", DETUNE_PRESET),
    ("barber_pole", BARBER_POLE_PRESET),
    ("stereo_spread", STEREO_SPREAD_PRESET),
];

const FLAT_PRESET: &str = r#"
name = "Flat"
description = "Unity gain on every band"
effect = "equalizer"

[params]
low_gain = "0dB"
mid1_gain = "0dB"
mid2_gain = "0dB"
high_gain = "0dB"
"#;

const BASS_LIFT_PRESET: &str = r#"
name = "Bass Lift"
description = "Warm low shelf"
effect = "equalizer"

[params]
low_gain = "6dB"
low_cutoff = "150"
mid1_gain = "-2dB"
"#;

const TELEPHONE_PRESET: &str = r#"
name = "Telephone"
description = "Narrow midrange, no lows or highs"
effect = "equalizer"

[params]
low_gain = "-15dB"
low_cutoff = "400"
mid1_gain = "6dB"
mid1_center = "1.2kHz"
mid1_width = "0.3"
mid2_gain = "-6dB"
high_gain = "-15dB"
high_cutoff = "4kHz"
"#;

const AIR_PRESET: &str = r#"
name = "Air"
description = "Gentle presence and high shelf boost"
effect = "equalizer"

[params]
mid2_gain = "2dB"
mid2_center = "5kHz"
mid2_width = "0.5"
high_gain = "4dB"
high_cutoff = "10kHz"
"#;

const OCTAVE_UP_PRESET: &str = r#"
name = "Octave Up"
description = "One octave above the input"
effect = "pitch_shifter"

[params]
coarse_tune = "12"
fine_tune = "0"
"#;

const FIFTH_DOWN_PRESET: &str = r#"
name = "Fifth Down"
description = "A perfect fifth below the input"
effect = "pitch_shifter"

[params]
coarse_tune = "-7"
fine_tune = "0"
"#;

const DETUNE_PRESET: &str = r#"
name = "Detune"
description = "Slightly flat doubling"
effect = "pitch_shifter"

[params]
coarse_tune = "0"
fine_tune = "-15"
"#;

const BARBER_POLE_PRESET: &str = r#"
name = "Barber Pole"
description = "Slow endless rise on both channels"
effect = "frequency_shifter"

[params]
frequency = "2Hz"
left_direction = "up"
right_direction = "up"
"#;

const STEREO_SPREAD_PRESET: &str = r#"
name = "Stereo Spread"
description = "Opposite shifts per channel"
effect = "frequency_shifter"

[params]
frequency = "7"
left_direction = "up"
right_direction = "down"
"#;

/// All factory presets, in listing order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Factory presets targeting `effect`.
pub fn factory_presets_for(effect: EffectType) -> Vec<Preset> {
    factory_presets()
        .into_iter()
        .filter(|p| p.effect_type().ok() == Some(effect))
        .collect()
}

/// Look up a factory preset by id or display name, ignoring case.
///
/// ```rust
/// use slotfx_config::get_factory_preset;
///
/// assert!(get_factory_preset("bass_lift").is_some());
/// assert!(get_factory_preset("Bass Lift").is_some());
/// assert!(get_factory_preset("nonexistent").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Factory preset ids.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Whether `name` is a factory preset id or display name.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table() {
        assert_eq!(FACTORY_PRESET_NAMES.len(), FACTORY_PRESETS_TOML.len());
        for (name, (id, _)) in FACTORY_PRESET_NAMES.iter().zip(FACTORY_PRESETS_TOML) {
            assert_eq!(name, id);
        }
    }

    #[test]
    fn every_factory_preset_parses_and_validates() {
        for (id, toml) in FACTORY_PRESETS_TOML {
            let preset = Preset::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory preset '{id}' does not parse: {e}"));
            preset
                .validate()
                .unwrap_or_else(|e| panic!("factory preset '{id}' is invalid: {e}"));
        }
        assert_eq!(factory_presets().len(), FACTORY_PRESETS_TOML.len());
    }

    #[test]
    fn every_effect_has_presets() {
        for effect in EffectType::ALL {
            assert!(!factory_presets_for(effect).is_empty(), "{effect}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_factory_preset("OCTAVE_UP").unwrap().name, "Octave Up");
        assert_eq!(get_factory_preset("barber pole").unwrap().name, "Barber Pole");
        assert!(is_factory_preset("Detune"));
        assert!(!is_factory_preset("chorus"));
    }

    #[test]
    fn flat_is_defaults() {
        use slotfx_effects::make_defaults;
        let block = get_factory_preset("flat").unwrap().to_block().unwrap();
        assert_eq!(block, make_defaults(EffectType::Equalizer));
    }
}
