//! Presets for slotfx effect slots.
//!
//! A preset is a TOML file naming one effect type and a set of native
//! parameter values keyed by field string id. Presets are validated against
//! the same descriptors the native protocol uses and applied to a slot as one
//! all-or-nothing batch that publishes a single block.
//!
//! # Features
//!
//! - **Preset files**: load and save TOML presets
//! - **Value strings**: plain numbers, `dB` gains, `Hz`/`kHz` frequencies, direction names
//! - **Paths**: platform-specific user preset directory
//! - **Factory presets**: built-in starting points for every effect
//!
//! # Example
//!
//! ```rust
//! use slotfx_config::{Preset, get_factory_preset};
//! use slotfx_effects::{EffectType, PitchShifterProps};
//! use slotfx_host::EffectSlot;
//!
//! let mut slot = EffectSlot::new(EffectType::PitchShifter);
//! let preset = get_factory_preset("fifth_down").unwrap();
//! preset.validate().unwrap();
//! preset.apply(&mut slot).unwrap();
//! assert_eq!(slot.get_int(PitchShifterProps::COARSE_TUNE), Ok(-7));
//!
//! let custom = Preset::new("Tight", EffectType::PitchShifter).with_param("fine_tune", "-3");
//! assert!(custom.to_toml().unwrap().contains("fine_tune"));
//! ```

mod error;
mod preset;
mod value;

/// Platform-specific preset paths.
pub mod paths;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, factory_presets_for,
    get_factory_preset, is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_presets_dir,
};
pub use preset::Preset;
pub use value::{parse_field_value, parse_param_value};
