//! Account commands: login, logout, register, profile.

use crema_model::RegisterRequest;

use crate::cli::RegisterArgs;
use crate::commands::Context;
use crate::config::OutputFormat;
use crate::output;

/// Signs in with email and password.
pub async fn run_login(ctx: &Context, email: &str, password: &str) -> crate::CliResult<()> {
    ctx.store.login(email, password).await?;

    output::success(&format!("Signed in as {email}"));
    if ctx.store.snapshot().await.admin_mode {
        output::info("Admin area available.");
    }
    Ok(())
}

/// Signs in with a Google identity token.
pub async fn run_google_login(ctx: &Context, id_token: &str) -> crate::CliResult<()> {
    ctx.store.login_with_google(id_token).await?;

    let session = ctx.store.snapshot().await;
    let email = session
        .user
        .as_ref()
        .map_or("unknown", |user| user.email.as_str());
    output::success(&format!("Signed in as {email}"));
    Ok(())
}

/// Signs out and removes cached tokens.
pub async fn run_logout(ctx: &Context) -> crate::CliResult<()> {
    ctx.store.logout().await?;
    output::success("Signed out.");
    Ok(())
}

/// Creates a new account. Does not sign in.
pub async fn run_register(ctx: &Context, args: RegisterArgs) -> crate::CliResult<()> {
    let mut request = RegisterRequest::new(args.email, args.password);
    if let Some(first_name) = args.first_name {
        request = request.with_first_name(first_name);
    }
    if let Some(last_name) = args.last_name {
        request = request.with_last_name(last_name);
    }
    if let Some(phone) = args.phone {
        request = request.with_phone(phone);
    }
    if let Some(zip) = args.zip {
        request = request.with_zip(zip);
    }

    ctx.store.register(&request).await?;
    output::success("Account created. You can now sign in with `crema login`.");
    Ok(())
}

/// Requests a password reset email.
///
/// The acknowledgement is the same whether or not the account exists.
pub async fn run_reset_password(ctx: &Context, email: &str) -> crate::CliResult<()> {
    ctx.store.request_password_reset(email).await?;
    output::success("If the account exists, a reset email is on its way.");
    Ok(())
}

/// Shows the signed-in user's profile.
pub async fn run_profile(ctx: &Context, format: OutputFormat) -> crate::CliResult<()> {
    ctx.hydrate().await?;

    let session = ctx.store.snapshot().await;
    match session.user {
        Some(user) => output::output_single(&user, format),
        None => {
            output::warning("Not signed in.");
            Ok(())
        }
    }
}
