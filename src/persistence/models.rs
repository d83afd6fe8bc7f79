//! Database rows for the `chores` and `executions` tables.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{Chore, ChoreId, Execution, ExecutionId};

/// A row of the `chores` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChoreRow {
    /// `INTEGER PRIMARY KEY AUTOINCREMENT`.
    pub id: i64,
    /// Insertion timestamp.
    pub created: DateTime<Utc>,
    /// Label.
    pub name: String,
    /// Free text.
    pub description: String,
    /// Reward value.
    pub points: i64,
    /// Completion flag.
    pub done: bool,
    /// Completing execution id, `0` when none.
    pub execution: i64,
}

/// A row of the `executions` table.
#[derive(Debug, Clone, FromRow)]
pub struct ExecutionRow {
    /// `INTEGER PRIMARY KEY AUTOINCREMENT`.
    pub id: i64,
    /// Completion timestamp.
    pub done_time: DateTime<Utc>,
    /// Label.
    pub name: String,
    /// Completer display name.
    pub user_name: String,
    /// Completed chore.
    pub chore_id: i64,
    /// Points snapshot.
    pub points: i64,
    /// Completer id.
    pub user_id: i64,
}

impl From<ChoreRow> for Chore {
    fn from(row: ChoreRow) -> Self {
        Self {
            id: ChoreId::new(row.id),
            created: row.created,
            name: row.name,
            description: row.description,
            points: row.points,
            done: row.done,
            execution: ExecutionId::from_reference(row.execution),
        }
    }
}

impl From<ExecutionRow> for Execution {
    fn from(row: ExecutionRow) -> Self {
        Self {
            id: ExecutionId::new(row.id),
            done_time: row.done_time,
            name: row.name,
            user_name: row.user_name,
            chore_id: ChoreId::new(row.chore_id),
            points: row.points,
            user_id: row.user_id,
        }
    }
}
