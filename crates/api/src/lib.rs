//! # Folio API
//!
//! Application boundary of the portfolio-sharing backend.
//!
//! This crate contains:
//! - Boundary commands for portfolios and user comments
//! - Application context (dependency injection)
//! - Logging bootstrap and health reporting
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Converts domain errors into status-coded [`ApiError`]s

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
pub use utils::logging::init_tracing;
