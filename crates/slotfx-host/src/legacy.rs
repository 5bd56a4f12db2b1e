//! Per-slot legacy commit state.

use slotfx_core::{CommitOutcome, Committer};
use slotfx_effects::{
    EffectType, LegacyBlock, LegacyEqualizer, LegacyFrequencyShifter, LegacyPitchShifter,
    ParameterBlock,
};

use crate::error::CallError;

/// A [`Committer`] for whichever effect type the slot holds.
#[derive(Debug, Clone)]
pub enum LegacyCommitter {
    /// Equalizer snapshot.
    Equalizer(Committer<LegacyEqualizer>),
    /// Frequency shifter snapshot.
    FrequencyShifter(Committer<LegacyFrequencyShifter>),
    /// Pitch shifter snapshot.
    PitchShifter(Committer<LegacyPitchShifter>),
}

impl LegacyCommitter {
    /// Committer seeded with `effect`'s legacy defaults.
    pub fn new(effect: EffectType) -> Self {
        match effect {
            EffectType::Equalizer => LegacyCommitter::Equalizer(Committer::new()),
            EffectType::FrequencyShifter => LegacyCommitter::FrequencyShifter(Committer::new()),
            EffectType::PitchShifter => LegacyCommitter::PitchShifter(Committer::new()),
        }
    }

    /// Effect type of the snapshot.
    pub const fn effect_type(&self) -> EffectType {
        match self {
            LegacyCommitter::Equalizer(_) => EffectType::Equalizer,
            LegacyCommitter::FrequencyShifter(_) => EffectType::FrequencyShifter,
            LegacyCommitter::PitchShifter(_) => EffectType::PitchShifter,
        }
    }

    /// Last accepted record.
    pub fn snapshot(&self) -> LegacyBlock {
        match self {
            LegacyCommitter::Equalizer(c) => LegacyBlock::Equalizer(*c.snapshot()),
            LegacyCommitter::FrequencyShifter(c) => LegacyBlock::FrequencyShifter(*c.snapshot()),
            LegacyCommitter::PitchShifter(c) => LegacyBlock::PitchShifter(*c.snapshot()),
        }
    }

    /// Validate, diff, and on change convert `record` into a fresh block.
    pub fn commit(
        &mut self,
        record: &LegacyBlock,
    ) -> Result<CommitOutcome<ParameterBlock>, CallError> {
        let outcome = match (self, record) {
            (LegacyCommitter::Equalizer(c), LegacyBlock::Equalizer(r)) => {
                map_outcome(c.commit(*r)?, ParameterBlock::Equalizer)
            }
            (LegacyCommitter::FrequencyShifter(c), LegacyBlock::FrequencyShifter(r)) => {
                map_outcome(c.commit(*r)?, ParameterBlock::FrequencyShifter)
            }
            (LegacyCommitter::PitchShifter(c), LegacyBlock::PitchShifter(r)) => {
                map_outcome(c.commit(*r)?, ParameterBlock::PitchShifter)
            }
            (this, _) => {
                return Err(CallError::wrong_effect(
                    this.effect_type(),
                    record.effect_type(),
                ));
            }
        };
        Ok(outcome)
    }

    /// Back to the default snapshot.
    pub fn reset(&mut self) {
        match self {
            LegacyCommitter::Equalizer(c) => c.reset(),
            LegacyCommitter::FrequencyShifter(c) => c.reset(),
            LegacyCommitter::PitchShifter(c) => c.reset(),
        }
    }
}

fn map_outcome<P>(
    outcome: CommitOutcome<P>,
    wrap: fn(P) -> ParameterBlock,
) -> CommitOutcome<ParameterBlock> {
    match outcome {
        CommitOutcome::Unchanged => CommitOutcome::Unchanged,
        CommitOutcome::Changed(props) => CommitOutcome::Changed(wrap(props)),
    }
}
