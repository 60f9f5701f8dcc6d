//! Trigger bookkeeping for the four record operations.
//!
//! The host framework stamps a "time of last user action" per toolbar button.
//! A [`TriggerSet`] carries those four optional stamps; absent slots
//! normalize to [`NEVER`] so sets can be compared and ranked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel for an operation that has never been triggered.
pub const NEVER: i64 = -1;

/// The four record operations, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Modify,
    Add,
    Duplicate,
    Delete,
}

impl OperationKind {
    /// All operations, highest tie-break priority first.
    pub const ALL: [OperationKind; 4] = [Self::Modify, Self::Add, Self::Duplicate, Self::Delete];

    /// Slot position inside a trigger set.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Modify => 0,
            Self::Add => 1,
            Self::Duplicate => 2,
            Self::Delete => 3,
        }
    }

    /// Canonical operation name, as the external sync layer spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modify => "modify",
            Self::Add => "add",
            Self::Duplicate => "duplicate",
            Self::Delete => "delete",
        }
    }

    /// Verb used in user-facing notices.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Modify => "modify",
            Self::Add => "add",
            Self::Duplicate => "copy",
            Self::Delete => "delete",
        }
    }
}

/// Last-trigger timestamps for one managed list, epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSet {
    pub modify: Option<i64>,
    pub add: Option<i64>,
    pub duplicate: Option<i64>,
    pub delete: Option<i64>,
}

impl TriggerSet {
    /// Record a trigger for `kind` at the given instant.
    pub fn stamp(&mut self, kind: OperationKind, at: DateTime<Utc>) {
        self.stamp_millis(kind, at.timestamp_millis());
    }

    /// Record a trigger for `kind` from a raw epoch-millisecond stamp.
    pub fn stamp_millis(&mut self, kind: OperationKind, millis: i64) {
        let slot = match kind {
            OperationKind::Modify => &mut self.modify,
            OperationKind::Add => &mut self.add,
            OperationKind::Duplicate => &mut self.duplicate,
            OperationKind::Delete => &mut self.delete,
        };
        *slot = Some(millis);
    }

    /// Slots in priority order with absent entries mapped to [`NEVER`].
    #[must_use]
    pub fn normalized(self) -> [i64; 4] {
        [
            self.modify.unwrap_or(NEVER),
            self.add.unwrap_or(NEVER),
            self.duplicate.unwrap_or(NEVER),
            self.delete.unwrap_or(NEVER),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::{OperationKind, TriggerSet, NEVER};
    use chrono::{TimeZone, Utc};

    #[test]
    fn positions_follow_priority_order() {
        let positions: Vec<usize> = OperationKind::ALL.iter().map(|k| k.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn operation_names_snapshot() {
        let names: Vec<&str> = OperationKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.join("|"), "modify|add|duplicate|delete");
    }

    #[test]
    fn duplicate_notice_verb_is_copy() {
        assert_eq!(OperationKind::Duplicate.verb(), "copy");
        assert_eq!(OperationKind::Delete.verb(), "delete");
    }

    #[test]
    fn empty_set_normalizes_to_sentinels() {
        assert_eq!(TriggerSet::default().normalized(), [NEVER; 4]);
    }

    #[test]
    fn stamp_fills_the_matching_slot() {
        let mut set = TriggerSet::default();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).single();
        set.stamp(OperationKind::Duplicate, at.expect("instant"));

        let normalized = set.normalized();
        assert_eq!(normalized[0], NEVER);
        assert_eq!(normalized[1], NEVER);
        assert!(normalized[2] > 0);
        assert_eq!(normalized[3], NEVER);
    }
}
