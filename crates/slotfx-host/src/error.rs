//! Error types for legacy property calls.

use slotfx_core::{FieldId, ParamError};
use slotfx_effects::EffectType;
use thiserror::Error;

/// Rejection of a legacy property call.
///
/// Like [`ParamError`], every variant leaves the slot's pending record,
/// committed snapshot and published block exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CallError {
    /// The property id is not defined for this effect.
    #[error("invalid {effect} property {property}")]
    UnknownProperty {
        /// Effect the call addressed.
        effect: EffectType,
        /// Offending property id.
        property: FieldId,
    },

    /// The value's legacy type does not match the property's.
    #[error("{effect} property {property} expects {expected}, got {found}")]
    TypeMismatch {
        /// Effect the call addressed.
        effect: EffectType,
        /// Property id.
        property: FieldId,
        /// Legacy type the property stores.
        expected: &'static str,
        /// Legacy type the caller supplied.
        found: &'static str,
    },

    /// The value failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The call targets an effect type other than the slot's.
    #[error("{requested} call sent to a {slot} slot")]
    WrongEffect {
        /// Effect type loaded in the slot.
        slot: EffectType,
        /// Effect type the call was built for.
        requested: EffectType,
    },
}

impl CallError {
    /// Create an unknown-property error.
    pub fn unknown_property(effect: EffectType, property: FieldId) -> Self {
        CallError::UnknownProperty { effect, property }
    }

    /// Create a wrong-effect error.
    pub fn wrong_effect(slot: EffectType, requested: EffectType) -> Self {
        CallError::WrongEffect { slot, requested }
    }
}
