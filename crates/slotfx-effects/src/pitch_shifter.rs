//! Pitch shifter parameters.

use slotfx_core::{
    FieldAccess, FieldDescriptor, FieldId, FieldUnit, LegacyAccess, LegacyField, LegacyRecord,
    NativeField, NativeParams,
};

/// Coarse tune bound in semitones (either direction).
pub const COARSE_TUNE_LIMIT: i32 = 12;
/// Fine tune bound in cents (either direction).
pub const FINE_TUNE_LIMIT: i32 = 50;

/// Pitch shifter working record.
///
/// ## Native Field Ids
///
/// | Id | Name | Range | Default |
/// |----|------|-------|---------|
/// | 0x0001 | Coarse Tune | -12–12 st | 12 |
/// | 0x0002 | Fine Tune | -50–50 ct | 0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchShifterProps {
    /// Shift in semitones.
    pub coarse_tune: i32,
    /// Additional shift in cents.
    pub fine_tune: i32,
}

impl Default for PitchShifterProps {
    fn default() -> Self {
        Self {
            coarse_tune: 12,
            fine_tune: 0,
        }
    }
}

impl PitchShifterProps {
    /// Native id of the coarse tune.
    pub const COARSE_TUNE: FieldId = FieldId(0x0001);
    /// Native id of the fine tune.
    pub const FINE_TUNE: FieldId = FieldId(0x0002);
}

const fn coarse(id: u32) -> FieldDescriptor {
    FieldDescriptor::int(
        FieldId(id),
        "Coarse Tune",
        "coarse_tune",
        FieldUnit::Semitones,
        -COARSE_TUNE_LIMIT,
        COARSE_TUNE_LIMIT,
        12,
    )
}

const fn fine(id: u32) -> FieldDescriptor {
    FieldDescriptor::int(
        FieldId(id),
        "Fine Tune",
        "fine_tune",
        FieldUnit::Cents,
        -FINE_TUNE_LIMIT,
        FINE_TUNE_LIMIT,
        0,
    )
}

static PITCH_SHIFTER_FIELDS: [NativeField<PitchShifterProps>; 2] = [
    NativeField {
        descriptor: coarse(0x0001),
        access: FieldAccess::Int {
            get: |p| p.coarse_tune,
            set: |p, v| p.coarse_tune = v,
        },
    },
    NativeField {
        descriptor: fine(0x0002),
        access: FieldAccess::Int {
            get: |p| p.fine_tune,
            set: |p, v| p.fine_tune = v,
        },
    },
];

impl NativeParams for PitchShifterProps {
    const EFFECT_NAME: &'static str = "pitch shifter";

    fn native_fields() -> &'static [NativeField<Self>] {
        &PITCH_SHIFTER_FIELDS
    }
}

/// Pitch shifter record in the legacy property format.
///
/// Property 2 is the coarse tune and 3 the fine tune, both `long`, with the
/// native ranges. Conversion copies them through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyPitchShifter {
    /// Shift in semitones.
    pub coarse_tune: i32,
    /// Additional shift in cents.
    pub fine_tune: i32,
}

impl Default for LegacyPitchShifter {
    fn default() -> Self {
        Self {
            coarse_tune: 12,
            fine_tune: 0,
        }
    }
}

impl LegacyPitchShifter {
    /// Property id of the coarse tune.
    pub const COARSE_TUNE: FieldId = FieldId(2);
    /// Property id of the fine tune.
    pub const FINE_TUNE: FieldId = FieldId(3);
}

static LEGACY_PITCH_SHIFTER_FIELDS: [LegacyField<LegacyPitchShifter>; 2] = [
    LegacyField {
        descriptor: coarse(2),
        access: LegacyAccess::Long {
            get: |r| r.coarse_tune,
            set: |r, v| r.coarse_tune = v,
        },
    },
    LegacyField {
        descriptor: fine(3),
        access: LegacyAccess::Long {
            get: |r| r.fine_tune,
            set: |r, v| r.fine_tune = v,
        },
    },
];

impl LegacyRecord for LegacyPitchShifter {
    type Props = PitchShifterProps;
    const EFFECT_NAME: &'static str = "pitch shifter";

    fn defaults() -> Self {
        Self::default()
    }

    fn legacy_fields() -> &'static [LegacyField<Self>] {
        &LEGACY_PITCH_SHIFTER_FIELDS
    }

    fn to_props(&self) -> PitchShifterProps {
        PitchShifterProps {
            coarse_tune: self.coarse_tune,
            fine_tune: self.fine_tune,
        }
    }
}
