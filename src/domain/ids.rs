//! Type-safe row identifiers.
//!
//! [`ChoreId`] and [`ExecutionId`] wrap the `INTEGER PRIMARY KEY` values
//! assigned by storage so the two kinds of id cannot be swapped by mistake.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a [`super::Chore`].
///
/// Assigned by storage on creation, monotonically increasing and never
/// reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ChoreId(i64);

/// Identifier of an [`super::Execution`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ExecutionId(i64);

impl ChoreId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl ExecutionId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Decodes the persisted `execution` column, where `0` means "none".
    #[must_use]
    pub const fn from_reference(raw: i64) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// Encodes an optional reference back into the `0 = none` form.
    #[must_use]
    pub const fn to_reference(id: Option<Self>) -> i64 {
        match id {
            Some(id) => id.0,
            None => 0,
        }
    }
}

impl fmt::Display for ChoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
