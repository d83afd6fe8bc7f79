//! Domain layer: chores, executions and their identifiers.
//!
//! These are plain data types. All state transitions (creation, completion)
//! are owned by the storage layer in [`crate::persistence`].

pub mod chore;
pub mod execution;
pub mod ids;

pub use chore::{Chore, ChoreDraft, DEFAULT_POINTS};
pub use execution::{Execution, ExecutionDraft};
pub use ids::{ChoreId, ExecutionId};
