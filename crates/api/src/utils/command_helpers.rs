//! Command execution helpers
//!
//! Every boundary command runs through [`execute_command`] so timing and
//! outcome logging stay uniform.

use std::future::Future;
use std::time::Instant;

use folio_domain::Result as DomainResult;
use tracing::error;

use crate::commands::response::{ApiError, ApiResult};
use crate::utils::logging::{error_label, log_command_execution};

/// Run a command, log its outcome and convert the error for the caller.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_portfolio(ctx: &AppContext, id: PortfolioId) -> ApiResult<Portfolio> {
///     execute_command("portfolio::get_portfolio", async { ctx.portfolios.find(id).await }).await
/// }
/// ```
pub async fn execute_command<Fut, T>(command_name: &str, command: Fut) -> ApiResult<T>
where
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command.await;
    let elapsed = start.elapsed();

    match result {
        Ok(value) => {
            log_command_execution(command_name, elapsed, None);
            Ok(value)
        }
        Err(err) => {
            let label = error_label(&err);
            if err.is_infrastructure() {
                error!(command = command_name, error = %err, "command failed on infrastructure");
            }
            log_command_execution(command_name, elapsed, Some(label));
            Err(ApiError::from(err))
        }
    }
}
