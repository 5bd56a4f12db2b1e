//! Thread-safe parameter block handoff between control and render threads.
//!
//! `SlotShared` lives as long as the effect slot and is reachable from the
//! control thread (which publishes) and the render thread (which reads).
//! Blocks are never modified once visible: every publish swaps in a complete
//! replacement, so a reader always sees the fields of exactly one publish.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::{ArcSwap, Guard};
use slotfx_effects::ParameterBlock;

/// Inner storage behind `Arc` so handles can be cheaply cloned.
struct SlotSharedData {
    /// Latest published block.
    block: ArcSwap<ParameterBlock>,
    /// Number of publishes so far; the initial block is version 0.
    version: AtomicU64,
}

/// Publication point for one slot's parameter block.
///
/// # Thread Safety
///
/// - **Block**: `ArcSwap::load()` - wait-free reads, whole-block swaps.
/// - **Version**: `AtomicU64` - bumped with `Release` after each swap.
///
/// Only the owning [`EffectSlot`](crate::EffectSlot) publishes; everyone else
/// holds a [`RenderHandle`].
#[derive(Clone)]
pub struct SlotShared {
    inner: Arc<SlotSharedData>,
}

impl SlotShared {
    /// Shared state holding `initial` as version 0.
    pub fn new(initial: ParameterBlock) -> Self {
        Self {
            inner: Arc::new(SlotSharedData {
                block: ArcSwap::from_pointee(initial),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Swap in `block` and return its version.
    pub fn publish(&self, block: ParameterBlock) -> u64 {
        self.inner.block.store(Arc::new(block));
        let version = self.inner.version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(effect = %block.effect_type(), version, "published parameter block");
        version
    }

    /// Latest published block.
    pub fn load(&self) -> Guard<Arc<ParameterBlock>> {
        self.inner.block.load()
    }

    /// Version of the latest completed publish.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Read-only handle for the render path.
    pub fn render_handle(&self) -> RenderHandle {
        RenderHandle {
            shared: self.clone(),
        }
    }
}

/// Render-side view of a slot's published block.
///
/// Cloneable and `Send + Sync`. Reading never blocks or allocates.
///
/// ```rust
/// use slotfx_effects::{EffectType, ParameterBlock};
/// use slotfx_host::EffectSlot;
///
/// let mut slot = EffectSlot::new(EffectType::PitchShifter);
/// let render = slot.render_handle();
/// let seen = render.version();
///
/// slot.set_int(slotfx_core::FieldId(0x0001), -5).unwrap();
/// assert!(render.changed_since(seen));
/// assert!(matches!(**render.load(), ParameterBlock::PitchShifter(p) if p.coarse_tune == -5));
/// ```
#[derive(Clone)]
pub struct RenderHandle {
    shared: SlotShared,
}

impl RenderHandle {
    /// Latest published block.
    #[inline]
    pub fn load(&self) -> Guard<Arc<ParameterBlock>> {
        self.shared.load()
    }

    /// Version of the latest completed publish.
    #[inline]
    pub fn version(&self) -> u64 {
        self.shared.version()
    }

    /// Whether anything was published after `version`.
    #[inline]
    pub fn changed_since(&self, version: u64) -> bool {
        self.shared.version() > version
    }

    /// Load the block only if something was published after `*last_seen`.
    ///
    /// Updates `*last_seen` to the version read. The version is read before the
    /// block, so the returned block is at least that new.
    pub fn load_if_changed(&self, last_seen: &mut u64) -> Option<Guard<Arc<ParameterBlock>>> {
        let version = self.shared.version();
        if version <= *last_seen {
            return None;
        }
        *last_seen = version;
        Some(self.shared.load())
    }
}
