//! Effect slots for slotfx.
//!
//! This crate is the host side of the parameter layer. An [`EffectSlot`]
//! owns one effect's parameter state, answers both control protocols, and
//! hands complete parameter blocks to the render path through a
//! [`RenderHandle`].
//!
//! # Architecture
//!
//! ```text
//! Control thread                         Render thread
//! ──────────────                         ─────────────
//! native set ─┐
//!             ├─► EffectSlot ─► publish ─► RenderHandle::load()
//! legacy call ┘   (validate,    (ArcSwap    RenderHandle::changed_since()
//!                  diff,         + version)
//!                  convert)
//! ```
//!
//! | Protocol | Entry point | Publishes |
//! |----------|-------------|-----------|
//! | Native | [`EffectSlot::set_float`], [`EffectSlot::set_int`], vector forms | On every accepted set |
//! | Legacy | [`EffectSlot::legacy_set`] then [`EffectSlot::commit`] | Only when the committed record changed |
//!
//! Rejected requests never publish and never bump the version.

pub mod call;
pub mod error;
pub mod legacy;
pub mod shared;
pub mod slot;

pub use call::{LegacyCall, LegacyValue, PropertyTarget};
pub use error::CallError;
pub use legacy::LegacyCommitter;
pub use shared::{RenderHandle, SlotShared};
pub use slot::EffectSlot;
