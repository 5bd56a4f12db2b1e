//! Integration tests for slotfx-config.
//!
//! Presets on disk, applied to live slots, observed through render handles.

use slotfx_config::{ConfigError, Preset, factory_presets, find_preset, get_factory_preset};
use slotfx_effects::{EffectType, EqualizerProps, ParameterBlock, make_defaults};
use slotfx_host::EffectSlot;
use tempfile::TempDir;

/// Save to disk, load back, and get the same preset.
#[test]
fn save_then_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("bright.toml");

    let preset = Preset::new("Bright", EffectType::Equalizer)
        .with_description("Top end lift")
        .with_param("high_gain", "3dB")
        .with_param("high_cutoff", "8kHz");
    preset.save(&path).expect("save should create parent dirs");

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, preset);
    assert_eq!(loaded.to_block().unwrap(), preset.to_block().unwrap());
}

#[test]
fn missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");
    let err = Preset::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "name = \"Broken\"\neffect = [").unwrap();
    assert!(matches!(Preset::load(&path), Err(ConfigError::TomlParse(_))));
}

/// A file found by name applies to a slot and reaches the render handle.
#[test]
fn found_preset_applies_to_slot() {
    let temp = TempDir::new().unwrap();
    get_factory_preset("bass_lift")
        .unwrap()
        .save(temp.path().join("lift.toml"))
        .unwrap();

    let path = slotfx_config::paths::find_preset_in("lift", temp.path()).unwrap();
    let preset = Preset::load(path).unwrap();

    let mut slot = EffectSlot::new(EffectType::Equalizer);
    let render = slot.render_handle();
    preset.apply(&mut slot).unwrap();

    assert!(render.changed_since(0));
    let ParameterBlock::Equalizer(p) = **render.load() else {
        panic!("wrong variant");
    };
    assert_eq!(p.low_cutoff, 150.0);
    assert!(p.low_gain > 1.99 && p.low_gain < 2.0);
    assert_eq!(p.high_cutoff, EqualizerProps::default().high_cutoff);
}

/// Every factory preset applies cleanly to a fresh slot of its effect.
#[test]
fn factory_presets_apply() {
    for preset in factory_presets() {
        let effect = preset.effect_type().unwrap();
        let mut slot = EffectSlot::new(effect);
        preset
            .apply(&mut slot)
            .unwrap_or_else(|e| panic!("{}: {e}", preset.name));
        assert_eq!(slot.version(), 1, "{}", preset.name);
        assert_eq!(*slot.block(), preset.to_block().unwrap());
    }
}

/// Capturing a slot and applying the capture elsewhere reproduces it.
#[test]
fn capture_and_restore() {
    let mut source = EffectSlot::new(EffectType::FrequencyShifter);
    get_factory_preset("stereo_spread")
        .unwrap()
        .apply(&mut source)
        .unwrap();

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.toml");
    Preset::from_block("Capture", source.block()).save(&path).unwrap();

    let mut target = EffectSlot::new(EffectType::FrequencyShifter);
    Preset::load(&path).unwrap().apply(&mut target).unwrap();
    assert_eq!(target.block(), source.block());
    assert_ne!(*target.block(), make_defaults(EffectType::FrequencyShifter));
}

#[test]
fn unknown_name_not_found() {
    assert!(find_preset("definitely_not_a_real_preset_name_xyz").is_none());
}
