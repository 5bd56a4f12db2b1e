//! Four-band equalizer parameters.
//!
//! A low shelf, two peaking mid bands, and a high shelf. Gains are linear on
//! the native protocol and millibels on the legacy protocol.

use slotfx_core::{
    FieldAccess, FieldDescriptor, FieldId, FieldUnit, LegacyAccess, LegacyField, LegacyRecord,
    NativeField, NativeParams, millibel_to_gain,
};

/// Smallest linear band gain (about -18 dB).
pub const GAIN_MIN: f32 = 0.126;
/// Largest linear band gain (about +18 dB).
pub const GAIN_MAX: f32 = 7.943;
/// Smallest legacy band gain in millibels.
pub const GAIN_MIN_MB: i32 = -1800;
/// Largest legacy band gain in millibels.
pub const GAIN_MAX_MB: i32 = 1800;

/// Equalizer working record.
///
/// ## Native Field Ids
///
/// | Id | Name | Range | Default |
/// |----|------|-------|---------|
/// | 0x0001 | Low Gain | 0.126–7.943 | 1.0 |
/// | 0x0002 | Low Cutoff | 50.0–800.0 Hz | 200.0 |
/// | 0x0003 | Mid1 Gain | 0.126–7.943 | 1.0 |
/// | 0x0004 | Mid1 Center | 200.0–3000.0 Hz | 500.0 |
/// | 0x0005 | Mid1 Width | 0.01–1.0 oct | 1.0 |
/// | 0x0006 | Mid2 Gain | 0.126–7.943 | 1.0 |
/// | 0x0007 | Mid2 Center | 1000.0–8000.0 Hz | 3000.0 |
/// | 0x0008 | Mid2 Width | 0.01–1.0 oct | 1.0 |
/// | 0x0009 | High Gain | 0.126–7.943 | 1.0 |
/// | 0x000A | High Cutoff | 4000.0–16000.0 Hz | 6000.0 |
///
/// # Example
///
/// ```rust
/// use slotfx_core::NativeParams;
/// use slotfx_effects::EqualizerProps;
///
/// let mut eq = EqualizerProps::default();
/// eq.set_float(EqualizerProps::LOW_CUTOFF, 120.0).unwrap();
/// assert_eq!(eq.low_cutoff, 120.0);
///
/// // Out of range: rejected, nothing changes
/// assert!(eq.set_float(EqualizerProps::LOW_CUTOFF, 40.0).is_err());
/// assert_eq!(eq.low_cutoff, 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualizerProps {
    /// Low shelf gain (linear).
    pub low_gain: f32,
    /// Low shelf cutoff in Hz.
    pub low_cutoff: f32,
    /// First mid band gain (linear).
    pub mid1_gain: f32,
    /// First mid band center in Hz.
    pub mid1_center: f32,
    /// First mid band width in octaves.
    pub mid1_width: f32,
    /// Second mid band gain (linear).
    pub mid2_gain: f32,
    /// Second mid band center in Hz.
    pub mid2_center: f32,
    /// Second mid band width in octaves.
    pub mid2_width: f32,
    /// High shelf gain (linear).
    pub high_gain: f32,
    /// High shelf cutoff in Hz.
    pub high_cutoff: f32,
}

impl Default for EqualizerProps {
    fn default() -> Self {
        Self {
            low_gain: 1.0,
            low_cutoff: 200.0,
            mid1_gain: 1.0,
            mid1_center: 500.0,
            mid1_width: 1.0,
            mid2_gain: 1.0,
            mid2_center: 3000.0,
            mid2_width: 1.0,
            high_gain: 1.0,
            high_cutoff: 6000.0,
        }
    }
}

impl EqualizerProps {
    /// Native id of the low shelf gain.
    pub const LOW_GAIN: FieldId = FieldId(0x0001);
    /// Native id of the low shelf cutoff.
    pub const LOW_CUTOFF: FieldId = FieldId(0x0002);
    /// Native id of the first mid band gain.
    pub const MID1_GAIN: FieldId = FieldId(0x0003);
    /// Native id of the first mid band center.
    pub const MID1_CENTER: FieldId = FieldId(0x0004);
    /// Native id of the first mid band width.
    pub const MID1_WIDTH: FieldId = FieldId(0x0005);
    /// Native id of the second mid band gain.
    pub const MID2_GAIN: FieldId = FieldId(0x0006);
    /// Native id of the second mid band center.
    pub const MID2_CENTER: FieldId = FieldId(0x0007);
    /// Native id of the second mid band width.
    pub const MID2_WIDTH: FieldId = FieldId(0x0008);
    /// Native id of the high shelf gain.
    pub const HIGH_GAIN: FieldId = FieldId(0x0009);
    /// Native id of the high shelf cutoff.
    pub const HIGH_CUTOFF: FieldId = FieldId(0x000A);
}

const fn gain(id: u32, name: &'static str, string_id: &'static str) -> FieldDescriptor {
    FieldDescriptor::float(FieldId(id), name, string_id, FieldUnit::Gain, GAIN_MIN, GAIN_MAX, 1.0)
}

const fn hertz(
    id: u32,
    name: &'static str,
    string_id: &'static str,
    min: f32,
    max: f32,
    default: f32,
) -> FieldDescriptor {
    FieldDescriptor::float(FieldId(id), name, string_id, FieldUnit::Hertz, min, max, default)
}

const fn width(id: u32, name: &'static str, string_id: &'static str) -> FieldDescriptor {
    FieldDescriptor::float(FieldId(id), name, string_id, FieldUnit::Octaves, 0.01, 1.0, 1.0)
}

static EQUALIZER_FIELDS: [NativeField<EqualizerProps>; 10] = [
    NativeField {
        descriptor: gain(0x0001, "Low Gain", "low_gain"),
        access: FieldAccess::Float {
            get: |p| p.low_gain,
            set: |p, v| p.low_gain = v,
        },
    },
    NativeField {
        descriptor: hertz(0x0002, "Low Cutoff", "low_cutoff", 50.0, 800.0, 200.0),
        access: FieldAccess::Float {
            get: |p| p.low_cutoff,
            set: |p, v| p.low_cutoff = v,
        },
    },
    NativeField {
        descriptor: gain(0x0003, "Mid1 Gain", "mid1_gain"),
        access: FieldAccess::Float {
            get: |p| p.mid1_gain,
            set: |p, v| p.mid1_gain = v,
        },
    },
    NativeField {
        descriptor: hertz(0x0004, "Mid1 Center", "mid1_center", 200.0, 3000.0, 500.0),
        access: FieldAccess::Float {
            get: |p| p.mid1_center,
            set: |p, v| p.mid1_center = v,
        },
    },
    NativeField {
        descriptor: width(0x0005, "Mid1 Width", "mid1_width"),
        access: FieldAccess::Float {
            get: |p| p.mid1_width,
            set: |p, v| p.mid1_width = v,
        },
    },
    NativeField {
        descriptor: gain(0x0006, "Mid2 Gain", "mid2_gain"),
        access: FieldAccess::Float {
            get: |p| p.mid2_gain,
            set: |p, v| p.mid2_gain = v,
        },
    },
    NativeField {
        descriptor: hertz(0x0007, "Mid2 Center", "mid2_center", 1000.0, 8000.0, 3000.0),
        access: FieldAccess::Float {
            get: |p| p.mid2_center,
            set: |p, v| p.mid2_center = v,
        },
    },
    NativeField {
        descriptor: width(0x0008, "Mid2 Width", "mid2_width"),
        access: FieldAccess::Float {
            get: |p| p.mid2_width,
            set: |p, v| p.mid2_width = v,
        },
    },
    NativeField {
        descriptor: gain(0x0009, "High Gain", "high_gain"),
        access: FieldAccess::Float {
            get: |p| p.high_gain,
            set: |p, v| p.high_gain = v,
        },
    },
    NativeField {
        descriptor: hertz(0x000A, "High Cutoff", "high_cutoff", 4000.0, 16000.0, 6000.0),
        access: FieldAccess::Float {
            get: |p| p.high_cutoff,
            set: |p, v| p.high_cutoff = v,
        },
    },
];

impl NativeParams for EqualizerProps {
    const EFFECT_NAME: &'static str = "equalizer";

    fn native_fields() -> &'static [NativeField<Self>] {
        &EQUALIZER_FIELDS
    }
}

/// Equalizer record in the legacy property format.
///
/// Band gains are integer millibels; every other field matches the native
/// record's units and ranges.
///
/// ## Property Ids
///
/// | Id | Name | Type | Range | Default |
/// |----|------|------|-------|---------|
/// | 2 | Low Gain | long | -1800–1800 mB | 0 |
/// | 3 | Low Cutoff | float | 50.0–800.0 Hz | 200.0 |
/// | 4 | Mid1 Gain | long | -1800–1800 mB | 0 |
/// | 5 | Mid1 Center | float | 200.0–3000.0 Hz | 500.0 |
/// | 6 | Mid1 Width | float | 0.01–1.0 oct | 1.0 |
/// | 7 | Mid2 Gain | long | -1800–1800 mB | 0 |
/// | 8 | Mid2 Center | float | 1000.0–8000.0 Hz | 3000.0 |
/// | 9 | Mid2 Width | float | 0.01–1.0 oct | 1.0 |
/// | 10 | High Gain | long | -1800–1800 mB | 0 |
/// | 11 | High Cutoff | float | 4000.0–16000.0 Hz | 6000.0 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyEqualizer {
    /// Low shelf gain in millibels.
    pub low_gain_mb: i32,
    /// Low shelf cutoff in Hz.
    pub low_cutoff: f32,
    /// First mid band gain in millibels.
    pub mid1_gain_mb: i32,
    /// First mid band center in Hz.
    pub mid1_center: f32,
    /// First mid band width in octaves.
    pub mid1_width: f32,
    /// Second mid band gain in millibels.
    pub mid2_gain_mb: i32,
    /// Second mid band center in Hz.
    pub mid2_center: f32,
    /// Second mid band width in octaves.
    pub mid2_width: f32,
    /// High shelf gain in millibels.
    pub high_gain_mb: i32,
    /// High shelf cutoff in Hz.
    pub high_cutoff: f32,
}

impl Default for LegacyEqualizer {
    fn default() -> Self {
        Self {
            low_gain_mb: 0,
            low_cutoff: 200.0,
            mid1_gain_mb: 0,
            mid1_center: 500.0,
            mid1_width: 1.0,
            mid2_gain_mb: 0,
            mid2_center: 3000.0,
            mid2_width: 1.0,
            high_gain_mb: 0,
            high_cutoff: 6000.0,
        }
    }
}

impl LegacyEqualizer {
    /// Property id of the low shelf gain.
    pub const LOW_GAIN: FieldId = FieldId(2);
    /// Property id of the low shelf cutoff.
    pub const LOW_CUTOFF: FieldId = FieldId(3);
    /// Property id of the first mid band gain.
    pub const MID1_GAIN: FieldId = FieldId(4);
    /// Property id of the first mid band center.
    pub const MID1_CENTER: FieldId = FieldId(5);
    /// Property id of the first mid band width.
    pub const MID1_WIDTH: FieldId = FieldId(6);
    /// Property id of the second mid band gain.
    pub const MID2_GAIN: FieldId = FieldId(7);
    /// Property id of the second mid band center.
    pub const MID2_CENTER: FieldId = FieldId(8);
    /// Property id of the second mid band width.
    pub const MID2_WIDTH: FieldId = FieldId(9);
    /// Property id of the high shelf gain.
    pub const HIGH_GAIN: FieldId = FieldId(10);
    /// Property id of the high shelf cutoff.
    pub const HIGH_CUTOFF: FieldId = FieldId(11);
}

const fn millibels(id: u32, name: &'static str, string_id: &'static str) -> FieldDescriptor {
    FieldDescriptor::int(
        FieldId(id),
        name,
        string_id,
        FieldUnit::Millibels,
        GAIN_MIN_MB,
        GAIN_MAX_MB,
        0,
    )
}

static LEGACY_EQUALIZER_FIELDS: [LegacyField<LegacyEqualizer>; 10] = [
    LegacyField {
        descriptor: millibels(2, "Low Gain", "low_gain"),
        access: LegacyAccess::Long {
            get: |r| r.low_gain_mb,
            set: |r, v| r.low_gain_mb = v,
        },
    },
    LegacyField {
        descriptor: hertz(3, "Low Cutoff", "low_cutoff", 50.0, 800.0, 200.0),
        access: LegacyAccess::Float {
            get: |r| r.low_cutoff,
            set: |r, v| r.low_cutoff = v,
        },
    },
    LegacyField {
        descriptor: millibels(4, "Mid1 Gain", "mid1_gain"),
        access: LegacyAccess::Long {
            get: |r| r.mid1_gain_mb,
            set: |r, v| r.mid1_gain_mb = v,
        },
    },
    LegacyField {
        descriptor: hertz(5, "Mid1 Center", "mid1_center", 200.0, 3000.0, 500.0),
        access: LegacyAccess::Float {
            get: |r| r.mid1_center,
            set: |r, v| r.mid1_center = v,
        },
    },
    LegacyField {
        descriptor: width(6, "Mid1 Width", "mid1_width"),
        access: LegacyAccess::Float {
            get: |r| r.mid1_width,
            set: |r, v| r.mid1_width = v,
        },
    },
    LegacyField {
        descriptor: millibels(7, "Mid2 Gain", "mid2_gain"),
        access: LegacyAccess::Long {
            get: |r| r.mid2_gain_mb,
            set: |r, v| r.mid2_gain_mb = v,
        },
    },
    LegacyField {
        descriptor: hertz(8, "Mid2 Center", "mid2_center", 1000.0, 8000.0, 3000.0),
        access: LegacyAccess::Float {
            get: |r| r.mid2_center,
            set: |r, v| r.mid2_center = v,
        },
    },
    LegacyField {
        descriptor: width(9, "Mid2 Width", "mid2_width"),
        access: LegacyAccess::Float {
            get: |r| r.mid2_width,
            set: |r, v| r.mid2_width = v,
        },
    },
    LegacyField {
        descriptor: millibels(10, "High Gain", "high_gain"),
        access: LegacyAccess::Long {
            get: |r| r.high_gain_mb,
            set: |r, v| r.high_gain_mb = v,
        },
    },
    LegacyField {
        descriptor: hertz(11, "High Cutoff", "high_cutoff", 4000.0, 16000.0, 6000.0),
        access: LegacyAccess::Float {
            get: |r| r.high_cutoff,
            set: |r, v| r.high_cutoff = v,
        },
    },
];

/// Millibels to a linear gain inside the native gain interval.
///
/// The legacy extremes land a hair outside `[GAIN_MIN, GAIN_MAX]`
/// (`10^-0.9` is 0.12589), so the result is pinned to the native bounds.
#[inline]
pub fn band_gain(millibels: i32) -> f32 {
    millibel_to_gain(millibels as f32).clamp(GAIN_MIN, GAIN_MAX)
}

impl LegacyRecord for LegacyEqualizer {
    type Props = EqualizerProps;
    const EFFECT_NAME: &'static str = "equalizer";

    fn defaults() -> Self {
        Self::default()
    }

    fn legacy_fields() -> &'static [LegacyField<Self>] {
        &LEGACY_EQUALIZER_FIELDS
    }

    fn to_props(&self) -> EqualizerProps {
        EqualizerProps {
            low_gain: band_gain(self.low_gain_mb),
            low_cutoff: self.low_cutoff,
            mid1_gain: band_gain(self.mid1_gain_mb),
            mid1_center: self.mid1_center,
            mid1_width: self.mid1_width,
            mid2_gain: band_gain(self.mid2_gain_mb),
            mid2_center: self.mid2_center,
            mid2_width: self.mid2_width,
            high_gain: band_gain(self.high_gain_mb),
            high_cutoff: self.high_cutoff,
        }
    }
}
