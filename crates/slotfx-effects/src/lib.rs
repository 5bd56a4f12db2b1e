//! slotfx Effects - parameter blocks for the slot effects
//!
//! This crate declares, for each effect type, the working record the render
//! path consumes, its native field table, and its legacy record:
//!
//! - [`EqualizerProps`] / [`LegacyEqualizer`] - Four-band equalizer
//! - [`FrequencyShifterProps`] / [`LegacyFrequencyShifter`] - Frequency shifter
//! - [`PitchShifterProps`] / [`LegacyPitchShifter`] - Pitch shifter
//!
//! [`ParameterBlock`] and [`LegacyBlock`] are the tagged unions over those
//! records, and [`make_defaults`] builds the canonical initial block.
//!
//! ## Example
//!
//! ```rust
//! use slotfx_core::Committer;
//! use slotfx_effects::{LegacyEqualizer, EqualizerProps};
//!
//! let mut committer = Committer::<LegacyEqualizer>::new();
//! let record = LegacyEqualizer { low_gain_mb: -600, ..LegacyEqualizer::default() };
//!
//! let props = committer.commit(record).unwrap().into_changed().unwrap();
//! assert!(props.low_gain < 1.0);
//! assert_eq!(props.low_cutoff, EqualizerProps::default().low_cutoff);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod block;
pub mod equalizer;
pub mod frequency_shifter;
pub mod pitch_shifter;

pub use block::{EffectType, LegacyBlock, ParameterBlock, make_defaults};
pub use equalizer::{EqualizerProps, LegacyEqualizer, band_gain};
pub use frequency_shifter::{FrequencyShifterProps, LegacyFrequencyShifter};
pub use pitch_shifter::{LegacyPitchShifter, PitchShifterProps};
