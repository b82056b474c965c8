//! Discount code commands.

use std::sync::Arc;

use crate::cli::DiscountCommand;
use crate::commands::Context;
use crate::config::OutputFormat;
use crate::output;

/// Runs a discount command.
pub async fn run_discount(
    command: DiscountCommand,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    ctx.hydrate().await?;

    match command {
        DiscountCommand::Check { code } => {
            let api = Arc::clone(&ctx.api);
            let discount = ctx
                .store
                .with_auth(move |token| {
                    let api = Arc::clone(&api);
                    let code = code.clone();
                    async move { api.validate_discount(&token, &code).await }
                })
                .await?;

            if discount.is_expired(chrono::Utc::now()) {
                output::warning(&format!("Code {} has expired.", discount.code));
            } else {
                output::success(&format!(
                    "Code {} is valid: {}% off.",
                    discount.code, discount.percent_off
                ));
            }
            output::output_single(&discount, format)
        }
    }
}
