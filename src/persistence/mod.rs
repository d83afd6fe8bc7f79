//! Persistence layer: the [`ChoreStorage`] capability and its backends.
//!
//! [`ChoreStorage`] is the only owner of the completion state transition.
//! Two implementations exist:
//!
//! - [`SqliteChoreStorage`] keeps chores and executions in SQLite through
//!   `sqlx::SqlitePool` and is what the server runs on.
//! - [`InMemoryChoreStorage`] holds everything behind a `tokio` lock and is
//!   used wherever a real database would only get in the way.

pub mod memory;
pub mod models;
pub mod sqlite;

#[cfg(test)]
mod conformance;

use async_trait::async_trait;

use crate::domain::{Chore, ChoreDraft, ChoreId, Execution, ExecutionDraft, ExecutionId};

pub use memory::InMemoryChoreStorage;
pub use sqlite::SqliteChoreStorage;

/// Failures surfaced by a [`ChoreStorage`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No chore row with the given id.
    #[error("chore not found: {0}")]
    ChoreNotFound(ChoreId),

    /// No execution row with the given id.
    #[error("execution not found: {0}")]
    ExecutionNotFound(ExecutionId),

    /// The underlying store failed: connection loss, bad query, failed
    /// write or migration.
    #[error("storage failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Result of a [`ChoreStorage::complete`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// A new execution was recorded and the chore is now done.
    Recorded(ExecutionId),
    /// The chore was already done; nothing changed.
    AlreadyDone,
}

/// Durable storage for chores and their executions.
///
/// Every call round-trips to the backing store; implementations never
/// cache and never retry.
#[async_trait]
pub trait ChoreStorage: Send + Sync + std::fmt::Debug {
    /// Returns every chore, done or pending, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the store cannot be queried.
    async fn list(&self) -> Result<Vec<Chore>, StorageError>;

    /// Returns the chores that are not done yet, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the store cannot be queried.
    async fn list_todo(&self) -> Result<Vec<Chore>, StorageError>;

    /// Fetches a single chore.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ChoreNotFound`] if no chore has this id, or
    /// [`StorageError::Backend`] on store failure.
    async fn get(&self, id: ChoreId) -> Result<Chore, StorageError>;

    /// Inserts a new pending chore and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the write fails.
    async fn create(&self, draft: &ChoreDraft) -> Result<ChoreId, StorageError>;

    /// Overwrites name, description and points of an existing chore.
    ///
    /// `done`, `execution` and `created` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ChoreNotFound`] if no chore has this id, or
    /// [`StorageError::Backend`] on store failure.
    async fn update(&self, id: ChoreId, draft: &ChoreDraft) -> Result<(), StorageError>;

    /// Marks a chore done and records an execution for it.
    ///
    /// Completing a chore that is already done is a no-op returning
    /// [`CompletionOutcome::AlreadyDone`]. Recording the execution and
    /// flagging the chore happen atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ChoreNotFound`] if no chore has this id, or
    /// [`StorageError::Backend`] on store failure (nothing is written).
    async fn complete(
        &self,
        id: ChoreId,
        draft: &ExecutionDraft,
    ) -> Result<CompletionOutcome, StorageError>;

    /// Removes a chore. Its executions are kept. Deleting a missing id is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the write fails.
    async fn delete(&self, id: ChoreId) -> Result<(), StorageError>;

    /// Fetches a single execution record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ExecutionNotFound`] if no execution has this
    /// id, or [`StorageError::Backend`] on store failure.
    async fn get_execution(&self, id: ExecutionId) -> Result<Execution, StorageError>;

    /// Returns the full execution ledger ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the store cannot be queried.
    async fn list_executions(&self) -> Result<Vec<Execution>, StorageError>;
}
