//! Favorites commands.

use std::sync::Arc;

use crate::cli::FavoriteCommand;
use crate::commands::catalog::ProductRow;
use crate::commands::Context;
use crate::config::OutputFormat;
use crate::output;

/// Runs a favorites command. All of these require a signed-in session.
pub async fn run_favorite(
    command: FavoriteCommand,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    ctx.hydrate().await?;

    match command {
        FavoriteCommand::List => {
            let api = Arc::clone(&ctx.api);
            let favorites = ctx
                .store
                .with_auth(move |token| {
                    let api = Arc::clone(&api);
                    async move { api.favorites(&token).await }
                })
                .await?;
            let rows: Vec<ProductRow> = favorites.iter().map(ProductRow::from).collect();
            output::output(&rows, format)
        }
        FavoriteCommand::Add { id } => {
            let api = Arc::clone(&ctx.api);
            ctx.store
                .with_auth(move |token| {
                    let api = Arc::clone(&api);
                    async move { api.add_favorite(&token, id).await }
                })
                .await?;
            output::success("Added to favorites.");
            Ok(())
        }
        FavoriteCommand::Remove { id } => {
            let api = Arc::clone(&ctx.api);
            ctx.store
                .with_auth(move |token| {
                    let api = Arc::clone(&api);
                    async move { api.remove_favorite(&token, id).await }
                })
                .await?;
            output::success("Removed from favorites.");
            Ok(())
        }
    }
}
