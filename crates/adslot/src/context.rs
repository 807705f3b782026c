//! Profile resolution and session bootstrap.
//!
//! Builds the API client from the active profile + global flag
//! overrides, restores a cached session if one is still valid, and
//! falls back to the profile's credential chain for a fresh login.
//! Commands receive a ready [`Portal`]; none of them deal with tokens.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use adslot_api::{ApiClient, TlsMode, TransportConfig};
use adslot_config::{Config, FileTokenStore, Profile, resolve_credentials};
use adslot_core::{Portal, session::Session};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Token cache path, one file per profile.
fn token_cache_path(profile_name: &str) -> PathBuf {
    adslot_config::data_dir().join(format!("tokens-{profile_name}.json"))
}

/// Build an unauthenticated [`Portal`] from config + flags.
pub fn build_portal(global: &GlobalOpts) -> Result<Portal, CliError> {
    let config = adslot_config::load_config_or_default();
    let profile_name = active_profile_name(global, &config);
    let profile = config.profiles.get(&profile_name);

    // Server URL: flag/env beats profile.
    let url_str = global
        .server
        .clone()
        .or_else(|| profile.map(|p| p.server.clone()))
        .ok_or_else(|| CliError::NoConfig {
            path: adslot_config::config_path().display().to_string(),
        })?;
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let tls = if global.insecure || profile.and_then(|p| p.insecure).unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca_path) = profile.and_then(|p| p.ca_cert.clone()) {
        TlsMode::CustomCa(ca_path)
    } else {
        TlsMode::System
    };

    let timeout = profile
        .and_then(|p| p.timeout)
        .unwrap_or(global.timeout);
    let transport = TransportConfig {
        tls,
        timeout: Duration::from_secs(timeout),
    };

    let api = Arc::new(ApiClient::new(url, &transport)?);
    let store = FileTokenStore::at_path(token_cache_path(&profile_name));
    Ok(Portal::new(Session::new(api, Box::new(store))))
}

/// Build a portal and ensure it is signed in.
///
/// Order: cached tokens (valid within the 7-day window) first, then a
/// fresh login with the profile's credential chain. Commands run only
/// once one of the two succeeded.
pub async fn connect(global: &GlobalOpts) -> Result<Portal, CliError> {
    let mut portal = build_portal(global)?;

    if portal.session_mut().restore().await.is_some() {
        return Ok(portal);
    }

    // No valid cached session; try profile credentials.
    let config = adslot_config::load_config_or_default();
    let profile_name = active_profile_name(global, &config);
    let Some(profile) = config.profiles.get(&profile_name) else {
        return Err(CliError::AuthRequired);
    };

    match resolve_credentials(profile, &profile_name) {
        Ok((username, password)) => {
            portal
                .session_mut()
                .login(&username, &password)
                .await
                .map_err(CliError::from)?;
            Ok(portal)
        }
        Err(_) => Err(CliError::NoCredentials {
            profile: profile_name,
        }),
    }
}

/// Credentials for an explicit `adslot login`, prompting for whatever
/// the flags didn't provide.
pub fn prompt_credentials(username_flag: Option<String>) -> Result<(String, SecretString), CliError> {
    let username = match username_flag {
        Some(username) => username,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };

    let password: String = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    Ok((username, SecretString::from(password)))
}

/// Expose the profile definition for config commands.
pub fn profile_for<'c>(config: &'c Config, name: &str) -> Result<&'c Profile, CliError> {
    config.profiles.get(name).ok_or_else(|| {
        let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
        available.sort_unstable();
        CliError::ProfileNotFound {
            name: name.to_owned(),
            available: available.join(", "),
        }
    })
}
