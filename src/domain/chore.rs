//! Chore definitions and the caller-supplied draft used to create or edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChoreId, ExecutionId};

/// Points awarded when a chore is created without an explicit value.
pub const DEFAULT_POINTS: i64 = 1;

/// A task definition together with its current completion state.
///
/// `id`, `created`, `done` and `execution` are owned by storage; callers
/// only ever supply a [`ChoreDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Chore {
    /// Storage-assigned identifier.
    pub id: ChoreId,
    /// Insertion timestamp, immutable.
    pub created: DateTime<Utc>,
    /// User-supplied label.
    pub name: String,
    /// User-supplied free text.
    pub description: String,
    /// Reward for completing this chore.
    pub points: i64,
    /// `true` once an execution has been recorded.
    pub done: bool,
    /// The execution that completed this chore. Serialized as `0` when unset.
    #[serde(with = "execution_reference")]
    #[schema(value_type = i64)]
    pub execution: Option<ExecutionId>,
}

impl Chore {
    /// Returns `true` while the chore has not been completed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.done
    }
}

/// Caller-supplied fields of a chore, used by both create and update.
///
/// Unknown JSON keys such as `id`, `created` or `done` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChoreDraft {
    /// Label.
    #[serde(default)]
    pub name: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Reward; [`DEFAULT_POINTS`] when omitted.
    #[serde(default)]
    pub points: Option<i64>,
}

impl ChoreDraft {
    /// Creates a draft with explicit points.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points: Some(points),
        }
    }

    /// Points to persist, falling back to [`DEFAULT_POINTS`].
    #[must_use]
    pub fn resolved_points(&self) -> i64 {
        self.points.unwrap_or(DEFAULT_POINTS)
    }
}

/// Serde adapter keeping the `0 = none` wire form of `Chore::execution`.
mod execution_reference {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::ExecutionId;

    pub(super) fn serialize<S: Serializer>(
        id: &Option<ExecutionId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ExecutionId::to_reference(*id))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ExecutionId>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(ExecutionId::from_reference(raw))
    }
}
