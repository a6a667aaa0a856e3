//! Storage primitives for relational persistence
//!
//! This module provides the SQLite connection pool and the error and metric
//! types shared by every repository.

pub mod error;
pub mod metrics;
pub mod sqlite;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use metrics::StorageMetrics;
pub use sqlite::{
    apply_connection_pragmas, PoolStats, SqliteConnection, SqlitePool, SqlitePoolConfig,
};
