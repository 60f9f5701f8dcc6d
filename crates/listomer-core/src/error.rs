//! Crate error type for list operations and session persistence.

use thiserror::Error;

use crate::trigger::OperationKind;

/// Failures surfaced to the caller. All are immediate and user-facing;
/// nothing here is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A record operation was requested against a zero-length list.
    /// Surfaced as a blocking notice; the update is suppressed and no
    /// state is mutated.
    #[error("cannot {} {list} from an empty list; add a {list} first", .action.verb())]
    EmptyListOperation {
        action: OperationKind,
        list: &'static str,
    },

    /// A selected index no longer fits the list it points into.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// JSON encoding failure on the way to the sync layer.
    #[error("encode: {0}")]
    Encode(String),

    /// Session snapshot encoding or filesystem failure.
    #[error("session snapshot: {0}")]
    Snapshot(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;
    use crate::trigger::OperationKind;

    #[test]
    fn empty_list_notice_uses_the_copy_verb() {
        let err = CoreError::EmptyListOperation {
            action: OperationKind::Duplicate,
            list: "isotopomer",
        };
        assert_eq!(
            err.to_string(),
            "cannot copy isotopomer from an empty list; add a isotopomer first"
        );
    }

    #[test]
    fn out_of_range_notice_names_both_sides() {
        let err = CoreError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for list of length 2");
    }
}
