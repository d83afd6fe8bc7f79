//! In-memory implementation of [`ChoreStorage`].
//!
//! Mirrors the SQLite backend's semantics (monotonic ids, point snapshots,
//! idempotent completion) without a database, for tests and local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ChoreStorage, CompletionOutcome, StorageError};
use crate::domain::{Chore, ChoreDraft, ChoreId, Execution, ExecutionDraft, ExecutionId};

/// Chore storage held entirely in process memory.
///
/// A single [`RwLock`] guards both tables, so `complete` observes and
/// mutates a chore and the ledger in one critical section.
#[derive(Debug, Default)]
pub struct InMemoryChoreStorage {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    chores: BTreeMap<ChoreId, Chore>,
    executions: BTreeMap<ExecutionId, Execution>,
    last_chore_id: i64,
    last_execution_id: i64,
}

impl InMemoryChoreStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChoreStorage for InMemoryChoreStorage {
    async fn list(&self) -> Result<Vec<Chore>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.chores.values().cloned().collect())
    }

    async fn list_todo(&self) -> Result<Vec<Chore>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .chores
            .values()
            .filter(|chore| chore.is_pending())
            .cloned()
            .collect())
    }

    async fn get(&self, id: ChoreId) -> Result<Chore, StorageError> {
        let tables = self.tables.read().await;
        tables
            .chores
            .get(&id)
            .cloned()
            .ok_or(StorageError::ChoreNotFound(id))
    }

    async fn create(&self, draft: &ChoreDraft) -> Result<ChoreId, StorageError> {
        let mut tables = self.tables.write().await;
        tables.last_chore_id = tables.last_chore_id.saturating_add(1);
        let id = ChoreId::new(tables.last_chore_id);

        tables.chores.insert(
            id,
            Chore {
                id,
                created: Utc::now(),
                name: draft.name.clone(),
                description: draft.description.clone(),
                points: draft.resolved_points(),
                done: false,
                execution: None,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: ChoreId, draft: &ChoreDraft) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let chore = tables
            .chores
            .get_mut(&id)
            .ok_or(StorageError::ChoreNotFound(id))?;
        chore.name.clone_from(&draft.name);
        chore.description.clone_from(&draft.description);
        chore.points = draft.resolved_points();
        Ok(())
    }

    async fn complete(
        &self,
        id: ChoreId,
        draft: &ExecutionDraft,
    ) -> Result<CompletionOutcome, StorageError> {
        let mut tables = self.tables.write().await;
        let points = match tables.chores.get(&id) {
            None => return Err(StorageError::ChoreNotFound(id)),
            Some(chore) if chore.done => return Ok(CompletionOutcome::AlreadyDone),
            Some(chore) => chore.points,
        };

        tables.last_execution_id = tables.last_execution_id.saturating_add(1);
        let execution_id = ExecutionId::new(tables.last_execution_id);
        tables.executions.insert(
            execution_id,
            Execution {
                id: execution_id,
                done_time: Utc::now(),
                name: draft.name.clone(),
                user_name: draft.user_name.clone(),
                chore_id: id,
                points,
                user_id: draft.user_id,
            },
        );

        if let Some(chore) = tables.chores.get_mut(&id) {
            chore.done = true;
            chore.execution = Some(execution_id);
        }
        Ok(CompletionOutcome::Recorded(execution_id))
    }

    async fn delete(&self, id: ChoreId) -> Result<(), StorageError> {
        self.tables.write().await.chores.remove(&id);
        Ok(())
    }

    async fn get_execution(&self, id: ExecutionId) -> Result<Execution, StorageError> {
        let tables = self.tables.read().await;
        tables
            .executions
            .get(&id)
            .cloned()
            .ok_or(StorageError::ExecutionNotFound(id))
    }

    async fn list_executions(&self) -> Result<Vec<Execution>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.executions.values().cloned().collect())
    }
}
