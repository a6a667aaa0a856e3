//! Boundary commands
//!
//! Framework-neutral entry points: each takes the [`AppContext`] and plain
//! inputs and returns an [`ApiResult`]. Paging is 1-based here and 0-based
//! below.
//!
//! [`AppContext`]: crate::context::AppContext

mod comment;
mod health;
mod image;
mod portfolio;
pub mod response;

pub use comment::*;
pub use health::*;
pub use image::*;
pub use portfolio::*;
pub use response::{ApiError, ApiResult, PageParams, PageResponse};
