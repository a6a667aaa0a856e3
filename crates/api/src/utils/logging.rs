use std::time::Duration;

use folio_domain::FolioError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `level` when set. An unparsable `level` falls back
/// to `info`. Returns `false` when a subscriber was already installed, so
/// calling this more than once is harmless.
pub fn init_tracing(level: &str, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed =
        if json { builder.json().try_init().is_ok() } else { builder.try_init().is_ok() };

    if installed {
        info!(level, json, "tracing initialised");
    }
    installed
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"portfolio::create_portfolio"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable error label when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error) => warn!(command, duration_ms, error, "command_execution_failure"),
    }
}

/// Convert a `FolioError` into a stable label suitable for logging.
#[inline]
pub const fn error_label(error: &FolioError) -> &'static str {
    match error {
        FolioError::Database(_) => "database",
        FolioError::Storage(_) => "storage",
        FolioError::Config(_) => "config",
        FolioError::Internal(_) => "internal",
        FolioError::InvalidArgument(_) => "invalid_argument",
        FolioError::UserNotFound(_) => "user_not_found",
        FolioError::PortfolioNotFound(_) => "portfolio_not_found",
        FolioError::CommentNotFound(_) => "comment_not_found",
        FolioError::NoPermission(_) => "no_permission",
        FolioError::InvalidUserStatus => "invalid_user_status",
        FolioError::SearchConditionMismatch(_) => "search_condition_mismatch",
        FolioError::PortfolioNotSearched => "portfolio_not_searched",
    }
}
