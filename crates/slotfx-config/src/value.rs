//! Parameter value strings.
//!
//! Preset values are stored as strings so a file can say `"-6dB"` or
//! `"1.2kHz"` instead of the raw number. They are parsed according to the
//! kind of field they target.

use slotfx_core::{Direction, FieldBounds, FieldDescriptor, FieldValue};

use crate::error::ConfigError;

/// Parse a float parameter string.
///
/// Supports:
/// - Plain numbers: "0.5", "1200", "-3"
/// - Decibels: "-6dB", "+3dB" (converted to linear gain)
/// - Frequency in Hz: "440Hz"
/// - Frequency in kHz: "1.2kHz" (converted to Hz)
///
/// ```rust
/// use slotfx_config::parse_param_value;
///
/// assert_eq!(parse_param_value("150"), Some(150.0));
/// assert_eq!(parse_param_value("2kHz"), Some(2000.0));
/// assert!((parse_param_value("20dB").unwrap() - 10.0).abs() < 1e-4);
/// assert_eq!(parse_param_value("loud"), None);
/// ```
pub fn parse_param_value(value: &str) -> Option<f32> {
    let value = value.trim();

    if let Some(db) = value
        .strip_suffix("dB")
        .or_else(|| value.strip_suffix("db"))
    {
        // 10^(dB/20)
        return db
            .trim()
            .parse::<f32>()
            .ok()
            .map(|v| libm::powf(10.0, v / 20.0));
    }

    if let Some(khz) = value
        .strip_suffix("kHz")
        .or_else(|| value.strip_suffix("khz"))
    {
        return khz.trim().parse::<f32>().ok().map(|v| v * 1000.0);
    }

    if let Some(hz) = value
        .strip_suffix("Hz")
        .or_else(|| value.strip_suffix("hz"))
    {
        return hz.trim().parse::<f32>().ok();
    }

    value.parse::<f32>().ok()
}

/// Parse `raw` for the field `desc` describes.
///
/// Only the syntax is checked here. Direction codes and numbers come back
/// unvalidated; range checks happen when the value reaches a block.
pub fn parse_field_value(desc: &FieldDescriptor, raw: &str) -> Result<FieldValue, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason| ConfigError::invalid_value(desc.string_id, raw, reason);

    match desc.bounds {
        FieldBounds::Float { .. } => parse_param_value(trimmed)
            .map(FieldValue::Float)
            .ok_or_else(|| invalid("expected a number")),
        FieldBounds::Int { .. } => trimmed
            .parse::<i32>()
            .map(FieldValue::Int)
            .map_err(|_| invalid("expected an integer")),
        FieldBounds::Unsigned { .. } => trimmed
            .parse::<u32>()
            .map(FieldValue::Unsigned)
            .map_err(|_| invalid("expected an unsigned integer")),
        FieldBounds::Direction => match Direction::from_name(trimmed) {
            Some(direction) => Ok(FieldValue::Direction(direction)),
            None => trimmed
                .parse::<i32>()
                .map(FieldValue::Int)
                .map_err(|_| invalid("expected down, up, off or a direction code")),
        },
    }
}
