//! Subcommand execution.
//!
//! Each API subcommand makes one call through the library client and
//! renders the decoded result as pretty-printed JSON.

use serde::Serialize;
use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use swervpay::config::{Command, ValidatedConfig};
use swervpay::resources::ResolveAccountBody;
use swervpay::transport::HttpClient;
use swervpay::{PageQuery, RequestContext, SwervpayClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] swervpay::Error),

    /// The response could not be rendered.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// The subcommand is handled before any client exists.
    #[error("'{0}' does not call the API")]
    Offline(&'static str),
}

/// Runs `command` against the API and prints the result to stdout.
///
/// Ctrl+C cancels the call in flight.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the call fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: &Command) -> Result<(), RunError> {
    let client = SwervpayClient::new(config.client)?;

    let shutdown = CancellationToken::new();
    let ctx = RequestContext::new().with_cancellation(shutdown.clone());
    let interrupt = tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling request");
            shutdown.cancel();
        }
    });

    let result = run_command(&client, &ctx, command).await;
    interrupt.abort();

    println!("{}", result?);
    Ok(())
}

/// Runs `command` and returns the rendered response.
///
/// # Errors
///
/// Returns [`RunError::Offline`] for `init`, otherwise whatever the call returns.
pub async fn run_command<H: HttpClient>(
    client: &SwervpayClient<H>,
    ctx: &RequestContext,
    command: &Command,
) -> Result<String, RunError> {
    match command {
        Command::Init { .. } => Err(RunError::Offline("init")),
        Command::Business => render(&client.business().get(ctx).await?),
        Command::Banks => render(&client.banks().list(ctx).await?),
        Command::Transactions { page, limit } => {
            let query = PageQuery::new(*page, *limit);
            render(&client.transactions().list(ctx, &query).await?)
        }
        Command::Resolve {
            account_number,
            bank_code,
        } => {
            let body = ResolveAccountBody {
                account_number: account_number.clone(),
                bank_code: bank_code.clone(),
            };
            render(&client.banks().resolve_account(ctx, &body).await?)
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, RunError> {
    Ok(serde_json::to_string_pretty(value)?)
}
