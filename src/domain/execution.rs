//! Execution records: the append-only ledger of chore completions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChoreId, ExecutionId};

/// An immutable record of one completion event.
///
/// Executions outlive their chore: deleting a chore leaves its execution
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Execution {
    /// Storage-assigned identifier.
    pub id: ExecutionId,
    /// When the completion was recorded.
    pub done_time: DateTime<Utc>,
    /// Label supplied at completion time.
    pub name: String,
    /// Display name of the completer.
    pub user_name: String,
    /// The completed chore.
    pub chore_id: ChoreId,
    /// Points awarded, snapshotted from the chore at completion time.
    pub points: i64,
    /// Identifier of the completer.
    pub user_id: i64,
}

/// Caller-supplied part of an execution, passed to `complete`.
///
/// `chore_id` and `points` are filled in by storage; older clients send the
/// completer id as `done_by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExecutionDraft {
    /// Label for the execution.
    #[serde(default)]
    pub name: String,
    /// Display name of the completer.
    #[serde(default)]
    pub user_name: String,
    /// Identifier of the completer.
    #[serde(default, alias = "done_by")]
    pub user_id: i64,
}

impl ExecutionDraft {
    /// Creates a draft for the given completer.
    #[must_use]
    pub fn new(name: impl Into<String>, user_name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_name: user_name.into(),
            user_id,
        }
    }
}
