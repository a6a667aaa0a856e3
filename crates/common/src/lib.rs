//! Shared infrastructure utilities for Folio crates.
//!
//! Currently hosts the SQLite storage primitives (connection pool, pool
//! configuration, per-connection pragmas, storage errors and pool metrics)
//! used by `folio-infra`.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod storage;

pub use storage::{StorageError, StorageResult};
