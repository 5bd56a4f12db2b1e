//! Error types for preset operations.

use std::path::PathBuf;

use slotfx_core::ParamError;
use slotfx_effects::EffectType;
use thiserror::Error;

/// Errors that can occur while loading, saving, validating or applying presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Unknown effect type
    #[error("unknown effect type: {0}")]
    UnknownEffect(String),

    /// The preset names a field the effect does not have.
    #[error("unknown parameter '{param}' for effect '{effect}'")]
    UnknownParameter {
        /// Effect the preset targets.
        effect: String,
        /// Offending parameter key.
        param: String,
    },

    /// A parameter string could not be parsed for its field kind.
    #[error("invalid value '{value}' for parameter '{param}': {reason}")]
    InvalidValue {
        /// Parameter key.
        param: String,
        /// Raw string from the preset.
        value: String,
        /// What the field expected.
        reason: &'static str,
    },

    /// The preset was applied to a slot holding a different effect.
    #[error("preset targets {preset} but the slot holds {slot}")]
    EffectMismatch {
        /// Effect named by the preset.
        preset: EffectType,
        /// Effect loaded in the slot.
        slot: EffectType,
    },

    /// A parsed value was rejected by the effect's validator.
    #[error(transparent)]
    Param(#[from] ParamError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown parameter error.
    pub fn unknown_parameter(effect: impl Into<String>, param: impl Into<String>) -> Self {
        ConfigError::UnknownParameter {
            effect: effect.into(),
            param: param.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(
        param: impl Into<String>,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        ConfigError::InvalidValue {
            param: param.into(),
            value: value.into(),
            reason,
        }
    }
}
