//! The operation selector.
//!
//! Given the per-operation trigger stamps for one managed list, decides which
//! single operation the user most recently requested and computes the
//! resulting mutation as an [`OperationResult`]. The selector never touches
//! the list itself; callers feed the result to the external sync layer and to
//! the local [`Document`](crate::document::Document) cache.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::record::ListRecord;
use crate::trigger::{OperationKind, TriggerSet, NEVER};

// ---------------------------------------------------------------------------
// SelectorState
// ---------------------------------------------------------------------------

/// Caller-owned selector history, one per managed list.
///
/// Holds the last trigger set that produced a result and a one-shot flag for
/// the first all-absent invocation. Keeping this explicit (rather than
/// module-global) keeps the selector pure enough to drive from tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    previous: [i64; 4],
    primed: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self {
            previous: [NEVER; 4],
            primed: false,
        }
    }
}

impl SelectorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last trigger set this state committed, normalized.
    #[must_use]
    pub fn previous(&self) -> [i64; 4] {
        self.previous
    }
}

// ---------------------------------------------------------------------------
// OperationResult
// ---------------------------------------------------------------------------

/// The mutation one selector invocation settled on.
///
/// Serializes to the `{operation, index, data}` shape the external sync
/// layer consumes. Delete carries the winning trigger stamp as its payload,
/// a marker value rather than record data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum OperationResult<T> {
    Modify {
        index: usize,
        #[serde(rename = "data")]
        record: T,
    },
    Add {
        index: usize,
        #[serde(rename = "data")]
        record: T,
    },
    Duplicate {
        index: usize,
        #[serde(rename = "data")]
        record: T,
    },
    Delete {
        index: usize,
        #[serde(rename = "data")]
        stamp: i64,
    },
}

impl<T> OperationResult<T> {
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Modify { .. } => OperationKind::Modify,
            Self::Add { .. } => OperationKind::Add,
            Self::Duplicate { .. } => OperationKind::Duplicate,
            Self::Delete { .. } => OperationKind::Delete,
        }
    }

    /// Target index inside the list the result applies to.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Modify { index, .. }
            | Self::Add { index, .. }
            | Self::Duplicate { index, .. }
            | Self::Delete { index, .. } => *index,
        }
    }
}

/// What one selector invocation decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorOutcome<T> {
    /// Apply `result` and move the list selection to `selected`.
    Apply {
        result: OperationResult<T>,
        selected: usize,
    },
    /// Nothing new was triggered; leave every piece of state alone.
    NoUpdate,
}

// ---------------------------------------------------------------------------
// select_operation
// ---------------------------------------------------------------------------

/// Resolve the current trigger set for one list into at most one operation.
///
/// Resolution order:
/// 1. An all-absent set on the first invocation signals no update, once.
/// 2. A set identical to the previously committed one resolves as modify
///    (the host framework re-fires handlers without a new click).
/// 3. Otherwise the slot holding the maximum stamp wins; ties resolve to the
///    earliest slot, which encodes the modify > add > duplicate > delete
///    priority order.
///
/// `edited` is the caller's current form contents, consumed only by the
/// modify case. A blocked call (empty list, stale index) commits nothing:
/// trigger history and selection are exactly as before.
pub fn select_operation<T: ListRecord>(
    state: &mut SelectorState,
    triggers: TriggerSet,
    list: &[T],
    selected: usize,
    edited: T,
) -> Result<SelectorOutcome<T>, CoreError> {
    let normalized = triggers.normalized();
    let max_value = normalized.into_iter().max().unwrap_or(NEVER);

    if max_value == NEVER && !state.primed {
        state.primed = true;
        return Ok(SelectorOutcome::NoUpdate);
    }

    let repeated = normalized == state.previous;
    let kind = if repeated {
        OperationKind::Modify
    } else {
        winning_kind(normalized, max_value)
    };

    // Guards run before the trigger history commits, so a refused call
    // leaves the selector ready to resolve the next real click.
    let len = list.len();
    if kind != OperationKind::Add {
        if len == 0 {
            return Err(CoreError::EmptyListOperation {
                action: kind,
                list: T::kind_label(),
            });
        }
        if selected >= len {
            return Err(CoreError::IndexOutOfRange {
                index: selected,
                len,
            });
        }
    }
    if !repeated {
        state.previous = normalized;
    }

    let outcome = match kind {
        OperationKind::Modify => SelectorOutcome::Apply {
            result: OperationResult::Modify {
                index: selected,
                record: edited,
            },
            selected,
        },
        OperationKind::Add => SelectorOutcome::Apply {
            result: OperationResult::Add {
                index: len,
                record: T::default_new(len),
            },
            selected: len,
        },
        OperationKind::Duplicate => SelectorOutcome::Apply {
            result: OperationResult::Duplicate {
                index: len,
                record: list[selected].clone(),
            },
            selected: len,
        },
        OperationKind::Delete => SelectorOutcome::Apply {
            result: OperationResult::Delete {
                index: selected,
                stamp: max_value,
            },
            selected: selected.saturating_sub(1),
        },
    };
    Ok(outcome)
}

fn winning_kind(normalized: [i64; 4], max_value: i64) -> OperationKind {
    for kind in OperationKind::ALL {
        if normalized[kind.position()] == max_value {
            return kind;
        }
    }
    OperationKind::Modify
}
