//! # crema
//!
//! Command-line storefront client for the crema shop.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use crema_cli::{
    cli::{Cli, Command},
    commands::{
        run_accessory, run_config, run_discount, run_favorite, run_google_login, run_login,
        run_logout, run_order, run_product, run_profile, run_register, run_reset_password,
        run_status, Context,
    },
    config::CliConfig,
    error::CliError,
    output,
};
use crema_session::SessionError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "crema=debug" } else { "crema=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("CREMA_LOG").unwrap_or_else(|_| default_filter.to_string()),
        )
        .try_init();

    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let result = run(cli, &mut config).await;

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &mut CliConfig) -> crema_cli::CliResult<()> {
    let format = cli.output;

    match cli.command {
        // Config commands never touch the network
        Command::Config(cmd) => run_config(cmd, config, format).await,
        command => {
            let ctx = Context::new(config, cli.server.as_deref())?;
            match command {
                Command::Login { email, password } => run_login(&ctx, &email, &password).await,
                Command::GoogleLogin { id_token } => run_google_login(&ctx, &id_token).await,
                Command::Logout => run_logout(&ctx).await,
                Command::Register(args) => run_register(&ctx, args).await,
                Command::ResetPassword { email } => run_reset_password(&ctx, &email).await,
                Command::Profile => run_profile(&ctx, format).await,
                Command::Status => run_status(&ctx).await,
                Command::Product(cmd) => run_product(cmd, &ctx, format).await,
                Command::Accessory(cmd) => run_accessory(cmd, &ctx, format).await,
                Command::Favorite(cmd) => run_favorite(cmd, &ctx, format).await,
                Command::Order(cmd) => run_order(cmd, &ctx, format).await,
                Command::Discount(cmd) => run_discount(cmd, &ctx, format).await,
                Command::Config(_) => unreachable!("handled above"),
            }
        }
    }
}

/// Prints an error, expanding field-level validation failures.
fn report(err: &CliError) {
    if let CliError::Session(SessionError::Validation(errors)) = err {
        for field_error in errors {
            output::error(&field_error.to_string());
        }
        return;
    }
    output::error(&err.to_string());
}
