//! Auth command handlers: login, logout, whoami, register,
//! change-password.

use owo_colors::OwoColorize;

use adslot_api::types::RegisterRequest;
use adslot_core::{CoreError, Portal};

use crate::cli::{GlobalOpts, LoginArgs, RegisterArgs};
use crate::context;
use crate::error::CliError;
use crate::output;

/// Explicit sign-in: prompts for anything not given via flags, caches
/// the token pair on success.
pub async fn login(args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut portal = context::build_portal(global)?;
    let (username, password) = context::prompt_credentials(args.username)?;

    let user = portal
        .session_mut()
        .login(&username, &password)
        .await
        .map_err(CliError::from)?;

    if !global.quiet {
        if output::should_color(&global.color) {
            eprintln!("Signed in as {}", user.display_name().green().bold());
        } else {
            eprintln!("Signed in as {}", user.display_name());
        }
    }
    Ok(())
}

/// Sign out. Local state clears even when the backend call fails.
pub async fn logout(global: &GlobalOpts) -> Result<(), CliError> {
    let mut portal = context::build_portal(global)?;

    // Pick up the cached session so the refresh token can be
    // invalidated server-side; if nothing is cached there is nothing
    // to do beyond clearing.
    portal.session_mut().restore().await;
    portal.session_mut().logout().await;

    if !global.quiet {
        eprintln!("Signed out");
    }
    Ok(())
}

/// Register a new account and sign in with it.
pub async fn register(args: RegisterArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut portal = context::build_portal(global)?;

    let password: String = dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    let request = RegisterRequest {
        username: args.username,
        email: args.email,
        password,
        first_name: args.first_name,
        last_name: args.last_name,
    };

    let user = portal
        .session_mut()
        .register(&request)
        .await
        .map_err(CliError::from)?;

    if !global.quiet {
        eprintln!("Account created; signed in as {}", user.display_name());
    }
    Ok(())
}

/// Show the signed-in user.
pub fn whoami(portal: &Portal, global: &GlobalOpts) -> Result<(), CliError> {
    let user = portal
        .session()
        .user()
        .ok_or(CliError::AuthRequired)?;

    let out = output::render_single(
        &global.output,
        user,
        |u| {
            let mut lines = vec![
                format!("Username:  {}", u.username),
                format!("Name:      {}", u.display_name()),
            ];
            if let Some(ref email) = u.email {
                lines.push(format!("Email:     {email}"));
            }
            lines.join("\n")
        },
        |u| u.username.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Change the account password (prompts for both values).
pub async fn change_password(portal: &Portal) -> Result<(), CliError> {
    let old: String = dialoguer::Password::new()
        .with_prompt("Current password")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    let new: String = dialoguer::Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    portal
        .session()
        .change_password(&old.into(), &new.into())
        .await
        .map_err(|e: CoreError| CliError::from(e))?;

    eprintln!("Password updated");
    Ok(())
}
