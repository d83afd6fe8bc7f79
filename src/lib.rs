//! # chore-tracker
//!
//! REST service for household chores. Chores can be listed, created,
//! edited, deleted and completed; each completion is kept as an immutable
//! execution record carrying the points it earned.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ChoreStorage trait (persistence/)
//!     │     ├── SqliteChoreStorage
//!     │     └── InMemoryChoreStorage
//!     │
//!     └── SQLite
//! ```
//!
//! Handlers hold no business rules; completion idempotence and point
//! snapshots live in the storage layer.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
