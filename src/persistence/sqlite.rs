//! SQLite implementation of [`ChoreStorage`].

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use super::models::{ChoreRow, ExecutionRow};
use super::{ChoreStorage, CompletionOutcome, StorageError};
use crate::domain::{Chore, ChoreDraft, ChoreId, Execution, ExecutionDraft, ExecutionId};

/// SQLite-backed chore storage using `sqlx::SqlitePool`.
///
/// The pool is opened once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct SqliteChoreStorage {
    pool: SqlitePool,
}

impl SqliteChoreStorage {
    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`, creating the database file (and its
    /// parent directory) when missing.
    ///
    /// In-memory URLs are pinned to a single connection that is never
    /// recycled, since the database lives only as long as that connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the URL is invalid, the parent
    /// directory cannot be created, or no connection can be established.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            if let Some(parent) = options.get_filename().parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    StorageError::Backend(format!(
                        "cannot create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .acquire_timeout(connect_timeout)
            .connect_with(options)
            .await?;

        tracing::info!(database_url, in_memory, "database pool opened");
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations. Safe to run on every startup.
    ///
    /// A `chores` table written by the first release (only `id`, `created`
    /// and `name` columns) is moved aside first, and its rows are copied into
    /// the migrated table afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        self.set_aside_legacy_chores().await?;
        sqlx::migrate!().run(&self.pool).await?;
        self.import_legacy_chores().await?;
        tracing::debug!("database schema up to date");
        Ok(())
    }

    async fn table_exists(&self, table: &str) -> Result<bool, StorageError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn set_aside_legacy_chores(&self) -> Result<(), StorageError> {
        if !self.table_exists("chores").await? {
            return Ok(());
        }
        let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info('chores')")
            .fetch_all(&self.pool)
            .await?;
        let current = ["description", "points", "done", "execution"]
            .iter()
            .all(|wanted| columns.iter().any(|c| c == wanted));
        if current {
            return Ok(());
        }

        tracing::warn!(?columns, "legacy chores table found, upgrading");
        sqlx::query("ALTER TABLE chores RENAME TO chores_legacy")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn import_legacy_chores(&self) -> Result<(), StorageError> {
        if !self.table_exists("chores_legacy").await? {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        let imported = sqlx::query(
            "INSERT OR IGNORE INTO chores (id, created, name) \
             SELECT id, created, COALESCE(name, '') FROM chores_legacy",
        )
        .execute(&mut *tx)
        .await?
        .rows_affected();
        sqlx::query("DROP TABLE chores_legacy")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(imported, "legacy chores imported");
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ChoreStorage for SqliteChoreStorage {
    async fn list(&self) -> Result<Vec<Chore>, StorageError> {
        let rows = sqlx::query_as::<_, ChoreRow>(
            "SELECT id, created, name, description, points, done, execution \
             FROM chores ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Chore::from).collect())
    }

    async fn list_todo(&self) -> Result<Vec<Chore>, StorageError> {
        let rows = sqlx::query_as::<_, ChoreRow>(
            "SELECT id, created, name, description, points, done, execution \
             FROM chores WHERE done = 0 ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Chore::from).collect())
    }

    async fn get(&self, id: ChoreId) -> Result<Chore, StorageError> {
        sqlx::query_as::<_, ChoreRow>(
            "SELECT id, created, name, description, points, done, execution \
             FROM chores WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .map(Chore::from)
        .ok_or(StorageError::ChoreNotFound(id))
    }

    async fn create(&self, draft: &ChoreDraft) -> Result<ChoreId, StorageError> {
        let raw = sqlx::query_scalar::<_, i64>(
            "INSERT INTO chores (created, name, description, points) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(Utc::now())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.resolved_points())
        .fetch_one(&self.pool)
        .await?;

        let chore_id = ChoreId::new(raw);
        tracing::info!(%chore_id, name = %draft.name, "chore created");
        Ok(chore_id)
    }

    async fn update(&self, id: ChoreId, draft: &ChoreDraft) -> Result<(), StorageError> {
        let result = sqlx::query(
            "UPDATE chores SET name = ?, description = ?, points = ? WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.resolved_points())
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::ChoreNotFound(id));
        }

        tracing::info!(chore_id = %id, "chore updated");
        Ok(())
    }

    async fn complete(
        &self,
        id: ChoreId,
        draft: &ExecutionDraft,
    ) -> Result<CompletionOutcome, StorageError> {
        // Claiming the row must be the first statement: the write lock is
        // taken before any read, so a losing caller sees `done = 1`.
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query_scalar::<_, i64>(
            "UPDATE chores SET done = 1 WHERE id = ? AND done = 0 RETURNING points",
        )
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(points) = claimed else {
            let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chores WHERE id = ?")
                .bind(id.get())
                .fetch_one(&mut *tx)
                .await?;
            tx.rollback().await?;

            if exists == 0 {
                return Err(StorageError::ChoreNotFound(id));
            }
            tracing::debug!(chore_id = %id, "chore already done, completion ignored");
            return Ok(CompletionOutcome::AlreadyDone);
        };

        let raw = sqlx::query_scalar::<_, i64>(
            "INSERT INTO executions (done_time, name, user_name, chore_id, points, user_id) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(Utc::now())
        .bind(&draft.name)
        .bind(&draft.user_name)
        .bind(id.get())
        .bind(points)
        .bind(draft.user_id)
        .fetch_one(&mut *tx)
        .await?;
        let execution_id = ExecutionId::new(raw);

        sqlx::query("UPDATE chores SET execution = ? WHERE id = ?")
            .bind(execution_id.get())
            .bind(id.get())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            chore_id = %id,
            %execution_id,
            points,
            user_id = draft.user_id,
            "chore completed"
        );
        Ok(CompletionOutcome::Recorded(execution_id))
    }

    async fn delete(&self, id: ChoreId) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM chores WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        tracing::info!(chore_id = %id, removed = result.rows_affected(), "chore deleted");
        Ok(())
    }

    async fn get_execution(&self, id: ExecutionId) -> Result<Execution, StorageError> {
        sqlx::query_as::<_, ExecutionRow>(
            "SELECT id, done_time, name, user_name, chore_id, points, user_id \
             FROM executions WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .map(Execution::from)
        .ok_or(StorageError::ExecutionNotFound(id))
    }

    async fn list_executions(&self) -> Result<Vec<Execution>, StorageError> {
        let rows = sqlx::query_as::<_, ExecutionRow>(
            "SELECT id, done_time, name, user_name, chore_id, points, user_id \
             FROM executions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Execution::from).collect())
    }
}
