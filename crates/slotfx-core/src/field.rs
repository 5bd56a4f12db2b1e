//! Static field descriptors for effect parameters.
//!
//! Every parameter an effect exposes, on either protocol, is described by a
//! [`FieldDescriptor`]: its numeric id, display names, unit, and the closed
//! interval (or allowed set) a value must fall in. Descriptors are compiled
//! in and never change at runtime.
//!
//! # Example
//!
//! ```rust
//! use slotfx_core::{FieldDescriptor, FieldId, FieldUnit, FieldValue};
//!
//! let cutoff = FieldDescriptor::float(
//!     FieldId(0x0002), "Low Cutoff", "low_cutoff", FieldUnit::Hertz, 50.0, 800.0, 200.0,
//! );
//!
//! assert!(cutoff.contains(FieldValue::Float(50.0)));
//! assert!(cutoff.contains(FieldValue::Float(800.0)));
//! assert!(!cutoff.contains(FieldValue::Float(800.5)));
//! ```

use core::fmt;

use crate::direction::Direction;
use crate::validate::within;

/// Numeric field identifier, scoped to one effect type and one protocol.
///
/// Native ids and legacy property ids live in separate spaces; the same
/// number can name different fields on the two protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl FieldId {
    /// Raw numeric value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// Which family of entry points reaches a field.
///
/// Float fields answer only the float set/get calls; integer and direction
/// fields answer only the integer calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Reached through the float entry points.
    Float,
    /// Reached through the integer entry points.
    Int,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Float => "float",
            FieldKind::Int => "integer",
        })
    }
}

/// Unit a field value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldUnit {
    /// Linear amplitude gain.
    Gain,
    /// Hundredths of a decibel.
    Millibels,
    /// Hertz.
    Hertz,
    /// Bandwidth in octaves.
    Octaves,
    /// Musical semitones.
    Semitones,
    /// Hundredths of a semitone.
    Cents,
    /// A direction code or enumeration.
    Direction,
}

impl FieldUnit {
    /// Suffix appended when formatting a value for display.
    ///
    /// ```rust
    /// use slotfx_core::FieldUnit;
    ///
    /// assert_eq!(FieldUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(FieldUnit::Gain.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            FieldUnit::Gain | FieldUnit::Direction => "",
            FieldUnit::Millibels => " mB",
            FieldUnit::Hertz => " Hz",
            FieldUnit::Octaves => " oct",
            FieldUnit::Semitones => " st",
            FieldUnit::Cents => " ct",
        }
    }
}

/// A single typed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Floating point value.
    Float(f32),
    /// Signed integer value.
    Int(i32),
    /// Unsigned integer value (legacy direction codes).
    Unsigned(u32),
    /// Enumerated direction.
    Direction(Direction),
}

impl FieldValue {
    /// Entry-point family that carries this value on the native protocol.
    pub const fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Int(_) | FieldValue::Unsigned(_) | FieldValue::Direction(_) => {
                FieldKind::Int
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Unsigned(v) => write!(f, "{v}"),
            FieldValue::Direction(d) => write!(f, "{d}"),
        }
    }
}

/// Legal values for a field: a closed interval or the direction set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldBounds {
    /// Inclusive float interval.
    Float {
        /// Smallest legal value.
        min: f32,
        /// Largest legal value.
        max: f32,
    },
    /// Inclusive signed interval.
    Int {
        /// Smallest legal value.
        min: i32,
        /// Largest legal value.
        max: i32,
    },
    /// Inclusive unsigned interval.
    Unsigned {
        /// Smallest legal value.
        min: u32,
        /// Largest legal value.
        max: u32,
    },
    /// Exactly the three [`Direction`] members.
    Direction,
}

impl FieldBounds {
    /// Lower and upper bound as values, or `None` for the direction set.
    pub const fn limits(&self) -> Option<(FieldValue, FieldValue)> {
        match *self {
            FieldBounds::Float { min, max } => Some((FieldValue::Float(min), FieldValue::Float(max))),
            FieldBounds::Int { min, max } => Some((FieldValue::Int(min), FieldValue::Int(max))),
            FieldBounds::Unsigned { min, max } => {
                Some((FieldValue::Unsigned(min), FieldValue::Unsigned(max)))
            }
            FieldBounds::Direction => None,
        }
    }
}

impl fmt::Display for FieldBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldBounds::Float { min, max } => write!(f, "[{min}, {max}]"),
            FieldBounds::Int { min, max } => write!(f, "[{min}, {max}]"),
            FieldBounds::Unsigned { min, max } => write!(f, "[{min}, {max}]"),
            FieldBounds::Direction => f.write_str("{down, off, up}"),
        }
    }
}

/// Describes one field of an effect's parameter record.
///
/// The `string_id` is stable and used as the preset key; `name` is for
/// display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Protocol-scoped numeric id.
    pub id: FieldId,
    /// Display name (e.g. "Low Gain").
    pub name: &'static str,
    /// Stable snake_case id (e.g. "low_gain").
    pub string_id: &'static str,
    /// Unit of the stored value.
    pub unit: FieldUnit,
    /// Legal values.
    pub bounds: FieldBounds,
    /// Canonical initial value.
    pub default: FieldValue,
}

impl FieldDescriptor {
    /// Float field with an inclusive range.
    pub const fn float(
        id: FieldId,
        name: &'static str,
        string_id: &'static str,
        unit: FieldUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            id,
            name,
            string_id,
            unit,
            bounds: FieldBounds::Float { min, max },
            default: FieldValue::Float(default),
        }
    }

    /// Signed integer field with an inclusive range.
    pub const fn int(
        id: FieldId,
        name: &'static str,
        string_id: &'static str,
        unit: FieldUnit,
        min: i32,
        max: i32,
        default: i32,
    ) -> Self {
        Self {
            id,
            name,
            string_id,
            unit,
            bounds: FieldBounds::Int { min, max },
            default: FieldValue::Int(default),
        }
    }

    /// Unsigned integer field with an inclusive range.
    pub const fn unsigned(
        id: FieldId,
        name: &'static str,
        string_id: &'static str,
        unit: FieldUnit,
        min: u32,
        max: u32,
        default: u32,
    ) -> Self {
        Self {
            id,
            name,
            string_id,
            unit,
            bounds: FieldBounds::Unsigned { min, max },
            default: FieldValue::Unsigned(default),
        }
    }

    /// Direction field accepting exactly the three known members.
    pub const fn direction(
        id: FieldId,
        name: &'static str,
        string_id: &'static str,
        default: Direction,
    ) -> Self {
        Self {
            id,
            name,
            string_id,
            unit: FieldUnit::Direction,
            bounds: FieldBounds::Direction,
            default: FieldValue::Direction(default),
        }
    }

    /// Native entry-point family for this field.
    pub const fn kind(&self) -> FieldKind {
        match self.bounds {
            FieldBounds::Float { .. } => FieldKind::Float,
            FieldBounds::Int { .. } | FieldBounds::Unsigned { .. } | FieldBounds::Direction => {
                FieldKind::Int
            }
        }
    }

    /// Whether `value` is of this field's type and inside its bounds.
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: FieldValue) -> bool {
        match (self.bounds, value) {
            (FieldBounds::Float { min, max }, FieldValue::Float(v)) => within(v, min, max),
            (FieldBounds::Int { min, max }, FieldValue::Int(v)) => within(v, min, max),
            (FieldBounds::Unsigned { min, max }, FieldValue::Unsigned(v)) => within(v, min, max),
            (FieldBounds::Direction, FieldValue::Direction(_)) => true,
            _ => false,
        }
    }
}
