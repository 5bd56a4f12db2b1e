//! Change-detecting commit of legacy records.
//!
//! A [`Committer`] remembers the last legacy record it accepted. Committing a
//! new record validates every field (all-or-nothing), compares the result to
//! the remembered snapshot by value, and only converts when something
//! actually changed. Callers use the outcome to skip republishing and any
//! downstream signalling for redundant updates.
//!
//! ```rust
//! # use slotfx_core::{Committer, CommitOutcome, FieldDescriptor, FieldId, FieldUnit, LegacyAccess, LegacyField, LegacyRecord};
//! # #[derive(Debug, Clone, Copy, PartialEq)]
//! # struct Level { mb: i32 }
//! # static FIELDS: [LegacyField<Level>; 1] = [LegacyField {
//! #     descriptor: FieldDescriptor::int(FieldId(2), "Level", "level", FieldUnit::Millibels, -100, 100, 0),
//! #     access: LegacyAccess::Long { get: |r| r.mb, set: |r, v| r.mb = v },
//! # }];
//! # impl LegacyRecord for Level {
//! #     type Props = f32;
//! #     const EFFECT_NAME: &'static str = "level";
//! #     fn defaults() -> Self { Level { mb: 0 } }
//! #     fn legacy_fields() -> &'static [LegacyField<Self>] { &FIELDS }
//! #     fn to_props(&self) -> f32 { slotfx_core::millibel_to_gain(self.mb as f32) }
//! # }
//! let mut committer = Committer::<Level>::new();
//!
//! assert!(committer.commit(Level { mb: -60 }).unwrap().is_changed());
//! assert!(!committer.commit(Level { mb: -60 }).unwrap().is_changed());
//! assert!(committer.commit(Level { mb: 500 }).is_err());
//! assert_eq!(committer.snapshot(), &Level { mb: -60 });
//! ```

use crate::error::ParamError;
use crate::legacy::LegacyRecord;

/// Result of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome<P> {
    /// The record matched the snapshot; nothing was converted.
    Unchanged,
    /// The snapshot was replaced; carries the freshly converted record.
    Changed(P),
}

impl<P> CommitOutcome<P> {
    /// Whether the commit replaced the snapshot.
    pub const fn is_changed(&self) -> bool {
        matches!(self, CommitOutcome::Changed(_))
    }

    /// The converted record, if any.
    pub fn into_changed(self) -> Option<P> {
        match self {
            CommitOutcome::Changed(props) => Some(props),
            CommitOutcome::Unchanged => None,
        }
    }
}

/// Holds the last accepted legacy record for one effect slot.
///
/// Seeded with [`LegacyRecord::defaults`] on construction, so the first real
/// commit always compares against a well-defined baseline.
#[derive(Debug, Clone)]
pub struct Committer<R: LegacyRecord> {
    snapshot: R,
}

impl<R: LegacyRecord> Default for Committer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LegacyRecord> Committer<R> {
    /// Committer seeded with the canonical defaults.
    pub fn new() -> Self {
        Self {
            snapshot: R::defaults(),
        }
    }

    /// Last accepted record.
    pub fn snapshot(&self) -> &R {
        &self.snapshot
    }

    /// Validate, diff, and (on change) convert `record`.
    ///
    /// On error the snapshot is untouched.
    pub fn commit(&mut self, record: R) -> Result<CommitOutcome<R::Props>, ParamError> {
        record.validate()?;
        if record == self.snapshot {
            #[cfg(feature = "tracing")]
            tracing::trace!(effect = R::EFFECT_NAME, "legacy commit unchanged");
            return Ok(CommitOutcome::Unchanged);
        }
        self.snapshot = record;
        #[cfg(feature = "tracing")]
        tracing::debug!(effect = R::EFFECT_NAME, "legacy commit changed");
        Ok(CommitOutcome::Changed(record.to_props()))
    }

    /// Return to the default snapshot.
    pub fn reset(&mut self) {
        self.snapshot = R::defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDescriptor, FieldId, FieldUnit};
    use crate::legacy::{LegacyAccess, LegacyField};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair {
        a: i32,
        b: f32,
    }

    static PAIR_FIELDS: [LegacyField<Pair>; 2] = [
        LegacyField {
            descriptor: FieldDescriptor::int(FieldId(2), "A", "a", FieldUnit::Semitones, -5, 5, 1),
            access: LegacyAccess::Long {
                get: |r| r.a,
                set: |r, v| r.a = v,
            },
        },
        LegacyField {
            descriptor: FieldDescriptor::float(FieldId(3), "B", "b", FieldUnit::Hertz, 0.0, 10.0, 2.0),
            access: LegacyAccess::Float {
                get: |r| r.b,
                set: |r, v| r.b = v,
            },
        },
    ];

    impl LegacyRecord for Pair {
        type Props = (i32, f32);
        const EFFECT_NAME: &'static str = "pair";

        fn defaults() -> Self {
            Pair { a: 1, b: 2.0 }
        }

        fn legacy_fields() -> &'static [LegacyField<Self>] {
            &PAIR_FIELDS
        }

        fn to_props(&self) -> (i32, f32) {
            (self.a * 10, self.b)
        }
    }

    #[test]
    fn seeded_with_defaults() {
        let c = Committer::<Pair>::new();
        assert_eq!(c.snapshot(), &Pair::defaults());
    }

    #[test]
    fn committing_defaults_is_unchanged() {
        let mut c = Committer::<Pair>::new();
        assert_eq!(c.commit(Pair::defaults()), Ok(CommitOutcome::Unchanged));
    }

    #[test]
    fn changed_then_unchanged() {
        let mut c = Committer::<Pair>::new();
        let r = Pair { a: 3, b: 4.0 };
        assert_eq!(c.commit(r), Ok(CommitOutcome::Changed((30, 4.0))));
        assert_eq!(c.commit(r), Ok(CommitOutcome::Unchanged));
        assert_eq!(c.snapshot(), &r);
    }

    #[test]
    fn invalid_record_leaves_snapshot() {
        let mut c = Committer::<Pair>::new();
        c.commit(Pair { a: 2, b: 2.0 }).unwrap();
        assert!(c.commit(Pair { a: 2, b: 11.0 }).is_err());
        assert!(c.commit(Pair { a: 9, b: 1.0 }).is_err());
        assert_eq!(c.snapshot(), &Pair { a: 2, b: 2.0 });
    }

    #[test]
    fn reset_restores_defaults() {
        let mut c = Committer::<Pair>::new();
        c.commit(Pair { a: -5, b: 0.0 }).unwrap();
        c.reset();
        assert_eq!(c.snapshot(), &Pair::defaults());
    }

    #[test]
    fn outcome_helpers() {
        let changed: CommitOutcome<u8> = CommitOutcome::Changed(7);
        assert!(changed.is_changed());
        assert_eq!(changed.into_changed(), Some(7));
        assert_eq!(CommitOutcome::<u8>::Unchanged.into_changed(), None);
    }
}
