//! Effect slot: the control-side owner of one parameter block.
//!
//! The slot keeps a private working copy of the block. Native sets validate
//! into that copy and publish a clone; legacy calls stage into a pending
//! legacy record that only reaches the render path through a commit.
//!
//! ```text
//! native set ──► working copy ──► publish ──► RenderHandle
//!                                    ▲
//! legacy set ──► pending record ──► commit (validate, diff, convert)
//! ```

use slotfx_core::{CommitOutcome, FieldId, FieldValue, ParamError};
use slotfx_effects::{EffectType, LegacyBlock, ParameterBlock, make_defaults};

use crate::call::{LegacyCall, LegacyValue, PropertyTarget};
use crate::error::CallError;
use crate::legacy::LegacyCommitter;
use crate::shared::{RenderHandle, SlotShared};

/// One effect instance's parameter state.
///
/// Not `Sync`: all calls come from a single control thread. Hand
/// [`render_handle`](Self::render_handle) to the render thread.
pub struct EffectSlot {
    working: ParameterBlock,
    pending: LegacyBlock,
    committer: LegacyCommitter,
    shared: SlotShared,
}

impl EffectSlot {
    /// Slot holding `effect`'s defaults, published as version 0.
    pub fn new(effect: EffectType) -> Self {
        let working = make_defaults(effect);
        Self {
            working,
            pending: LegacyBlock::defaults(effect),
            committer: LegacyCommitter::new(effect),
            shared: SlotShared::new(working),
        }
    }

    /// Effect type held by the slot.
    pub fn effect_type(&self) -> EffectType {
        self.working.effect_type()
    }

    /// Control-side copy of the block; equal to the latest published one.
    pub fn block(&self) -> &ParameterBlock {
        &self.working
    }

    /// Read-only handle for the render path.
    pub fn render_handle(&self) -> RenderHandle {
        self.shared.render_handle()
    }

    /// Version of the latest publish.
    pub fn version(&self) -> u64 {
        self.shared.version()
    }

    // ── Native protocol ─────────────────────────────────────────────────────

    /// Set a float field and publish.
    pub fn set_float(&mut self, id: FieldId, value: f32) -> Result<(), ParamError> {
        self.native(|b| b.set_float(id, value))
    }

    /// Set a float field from the first element of `values` and publish.
    pub fn set_float_vector(&mut self, id: FieldId, values: &[f32]) -> Result<(), ParamError> {
        self.native(|b| b.set_float_vector(id, values))
    }

    /// Set an integer or direction field and publish.
    pub fn set_int(&mut self, id: FieldId, value: i32) -> Result<(), ParamError> {
        self.native(|b| b.set_int(id, value))
    }

    /// Set an integer or direction field from the first element of `values`
    /// and publish.
    pub fn set_int_vector(&mut self, id: FieldId, values: &[i32]) -> Result<(), ParamError> {
        self.native(|b| b.set_int_vector(id, values))
    }

    /// Apply several native sets and publish once.
    ///
    /// All-or-nothing: if any set fails, nothing is published and the
    /// working copy is unchanged.
    pub fn set_values(&mut self, values: &[(FieldId, FieldValue)]) -> Result<(), ParamError> {
        self.native(|b| {
            values
                .iter()
                .try_for_each(|&(id, value)| b.set_value(id, value))
        })
    }

    /// Read a float field.
    pub fn get_float(&self, id: FieldId) -> Result<f32, ParamError> {
        self.working.get_float(id)
    }

    /// Read a float field into the first element of `out`.
    pub fn get_float_vector(&self, id: FieldId, out: &mut [f32]) -> Result<(), ParamError> {
        self.working.get_float_vector(id, out)
    }

    /// Read an integer or direction field.
    pub fn get_int(&self, id: FieldId) -> Result<i32, ParamError> {
        self.working.get_int(id)
    }

    /// Read an integer or direction field into the first element of `out`.
    pub fn get_int_vector(&self, id: FieldId, out: &mut [i32]) -> Result<(), ParamError> {
        self.working.get_int_vector(id, out)
    }

    fn native(
        &mut self,
        apply: impl FnOnce(&mut ParameterBlock) -> Result<(), ParamError>,
    ) -> Result<(), ParamError> {
        let mut next = self.working;
        if let Err(err) = apply(&mut next) {
            tracing::warn!(effect = %self.effect_type(), %err, "native set rejected");
            return Err(err);
        }
        self.working = next;
        self.shared.publish(next);
        Ok(())
    }

    // ── Legacy protocol ─────────────────────────────────────────────────────

    /// Stage a legacy property set into the pending record.
    ///
    /// Nothing is published until [`commit`](Self::commit). On error the
    /// pending record is untouched.
    pub fn legacy_set(&mut self, call: LegacyCall, value: LegacyValue) -> Result<(), CallError> {
        match self.stage(call, value) {
            Ok(Some(next)) => {
                self.pending = next;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                tracing::warn!(effect = %self.effect_type(), property = %call.property, %err, "legacy set rejected");
                Err(err)
            }
        }
    }

    /// Read a legacy property from the pending record.
    ///
    /// The none property yields `Ok(None)`.
    pub fn legacy_get(&self, call: LegacyCall) -> Result<Option<LegacyValue>, CallError> {
        self.check_effect(call)?;
        match call.target() {
            PropertyTarget::None => Ok(None),
            PropertyTarget::All => Ok(Some(LegacyValue::Record(self.pending))),
            PropertyTarget::Field(id) => self
                .pending
                .field_value(id)
                .and_then(LegacyValue::from_field_value)
                .map(Some)
                .ok_or(CallError::unknown_property(call.effect, id)),
        }
    }

    /// Commit the pending record.
    ///
    /// Returns `true` when the record differed from the last commit and a
    /// fresh block was published; `false` when nothing changed.
    pub fn commit(&mut self) -> Result<bool, CallError> {
        match self.committer.commit(&self.pending) {
            Ok(CommitOutcome::Changed(block)) => {
                self.working = block;
                self.shared.publish(block);
                Ok(true)
            }
            Ok(CommitOutcome::Unchanged) => {
                tracing::trace!(effect = %self.effect_type(), "legacy commit unchanged, not republished");
                Ok(false)
            }
            Err(err) => {
                tracing::warn!(effect = %self.effect_type(), %err, "legacy commit rejected");
                Err(err)
            }
        }
    }

    /// Stage a legacy set and commit it immediately.
    pub fn legacy_set_and_commit(
        &mut self,
        call: LegacyCall,
        value: LegacyValue,
    ) -> Result<bool, CallError> {
        self.legacy_set(call, value)?;
        self.commit()
    }

    /// Last committed legacy record.
    pub fn legacy_snapshot(&self) -> LegacyBlock {
        self.committer.snapshot()
    }

    /// Record that the next commit will apply.
    pub fn pending(&self) -> &LegacyBlock {
        &self.pending
    }

    /// Restore defaults on both protocols and publish.
    pub fn reset(&mut self) {
        let effect = self.effect_type();
        self.working = make_defaults(effect);
        self.pending = LegacyBlock::defaults(effect);
        self.committer.reset();
        self.shared.publish(self.working);
    }

    fn check_effect(&self, call: LegacyCall) -> Result<(), CallError> {
        let slot = self.effect_type();
        if call.effect == slot {
            Ok(())
        } else {
            Err(CallError::wrong_effect(slot, call.effect))
        }
    }

    /// Validate a set against the pending record. `Ok(None)` means no-op.
    fn stage(&self, call: LegacyCall, value: LegacyValue) -> Result<Option<LegacyBlock>, CallError> {
        self.check_effect(call)?;
        match call.target() {
            PropertyTarget::None => Ok(None),
            PropertyTarget::All => match value {
                LegacyValue::Record(record) => {
                    if record.effect_type() != call.effect {
                        return Err(CallError::wrong_effect(call.effect, record.effect_type()));
                    }
                    record.validate()?;
                    Ok(Some(record))
                }
                other => Err(CallError::TypeMismatch {
                    effect: call.effect,
                    property: call.property,
                    expected: "record",
                    found: other.type_name(),
                }),
            },
            PropertyTarget::Field(id) => {
                let stored = self
                    .pending
                    .field_value(id)
                    .ok_or(CallError::unknown_property(call.effect, id))?;
                let Some(field_value) = value.to_field_value().filter(|_| value.matches_type_of(stored)) else {
                    return Err(CallError::TypeMismatch {
                        effect: call.effect,
                        property: id,
                        expected: legacy_type_name(stored),
                        found: value.type_name(),
                    });
                };
                Ok(Some(self.pending.with_field(id, field_value)?))
            }
        }
    }
}

fn legacy_type_name(value: FieldValue) -> &'static str {
    match value {
        FieldValue::Int(_) => "long",
        FieldValue::Unsigned(_) => "ulong",
        FieldValue::Float(_) | FieldValue::Direction(_) => "float",
    }
}
