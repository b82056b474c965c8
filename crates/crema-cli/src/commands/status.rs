//! Status command.

use crema_cache::keys;
use crema_model::CatalogQuery;

use crate::commands::Context;
use crate::output;

/// Reports server reachability and session state.
pub async fn run_status(ctx: &Context) -> crate::CliResult<()> {
    output::info(&format!("Server: {}", ctx.api.base_url()));
    if let Some(currency) = ctx.cache.get(keys::CURRENCY).await? {
        output::info(&format!("Preferred currency: {currency}"));
    }

    match ctx.api.products(&CatalogQuery::new()).await {
        Ok(products) => {
            output::success(&format!("Server reachable ({} products).", products.len()));
        }
        Err(err) => output::warning(&format!("Server not reachable: {err}")),
    }

    ctx.hydrate().await?;
    let session = ctx.store.snapshot().await;
    match &session.user {
        Some(user) => {
            output::success(&format!("Signed in as {}", user.email));
            if session.admin_mode {
                output::info("Admin area available.");
            }
        }
        None => {
            if session.token_invalid {
                output::warning("Session expired; sign in again.");
            } else {
                output::info("Not signed in.");
            }
        }
    }
    Ok(())
}
