//! slotfx Core - parameter validation primitives for effect slots
//!
//! This crate provides the building blocks that turn untyped
//! `(field id, value)` pairs into strongly-typed effect parameter records,
//! designed so that nothing on the control path allocates and nothing
//! partially applied ever escapes.
//!
//! # Core Abstractions
//!
//! ## Field Descriptors
//!
//! - [`FieldDescriptor`] - Id, names, unit, bounds and default of one field
//! - [`FieldBounds`] - Closed interval or the direction set
//! - [`FieldValue`] - A single typed value
//!
//! ## Validation & Conversion
//!
//! - [`validate`] / [`within`] - The range checks both protocols share
//! - [`millibel_to_gain`] - Logarithmic level to linear gain
//! - [`direction_from_legacy`] - Lenient legacy direction decoding
//! - [`Direction::from_native_code`] - Strict native direction decoding
//!
//! ## Protocols
//!
//! - [`NativeParams`] - Scalar/vector float/int set and get, derived from a
//!   static [`NativeField`] table
//! - [`LegacyRecord`] - Whole-record legacy format with a [`LegacyField`] table
//! - [`Committer`] - All-or-nothing, change-detecting legacy commit
//!
//! # no_std Support
//!
//! Disable the default `std` feature to use the crate without the standard
//! library:
//!
//! ```toml
//! [dependencies]
//! slotfx-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature to emit `trace!`/`debug!` events from the
//! dispatcher and committer.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod committer;
pub mod convert;
pub mod direction;
pub mod error;
pub mod field;
pub mod legacy;
pub mod native;
pub mod validate;

pub use committer::{CommitOutcome, Committer};
pub use convert::{
    LEGACY_DIRECTION_DOWN, LEGACY_DIRECTION_OFF, LEGACY_DIRECTION_UP, direction_from_legacy,
    direction_to_legacy, millibel_to_gain,
};
pub use direction::{Direction, NATIVE_DIRECTION_DOWN, NATIVE_DIRECTION_OFF, NATIVE_DIRECTION_UP};
pub use error::ParamError;
pub use field::{FieldBounds, FieldDescriptor, FieldId, FieldKind, FieldUnit, FieldValue};
pub use legacy::{
    LegacyAccess, LegacyField, LegacyRecord, PROPERTY_ALL_PARAMETERS, PROPERTY_NONE, legacy_kind,
};
pub use native::{FieldAccess, NativeField, NativeParams};
pub use validate::{
    validate, validate_direction_code, validate_float, validate_int, validate_unsigned, within,
};
