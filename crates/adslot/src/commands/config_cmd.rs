//! Config command handlers: init, show, profiles, use, set-password.

use adslot_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::context;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Profiles => profiles(global),
        ConfigCommand::Use { name } => use_profile(&name, global),
        ConfigCommand::SetPassword { profile } => set_password(profile, global),
    }
}

/// Guided setup: prompt for server + username, write the profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut config = adslot_config::load_config_or_default();
    let profile_name = context::active_profile_name(global, &config);

    let server: String = dialoguer::Input::new()
        .with_prompt("Backend URL (e.g. https://ads.example.com)")
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    let _: url::Url = server.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {server}"),
    })?;

    let username: String = dialoguer::Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    config.profiles.insert(
        profile_name.clone(),
        Profile {
            server,
            username: (!username.is_empty()).then_some(username),
            password: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        },
    );
    if config.default_profile.is_none() {
        config.default_profile = Some(profile_name.clone());
    }

    adslot_config::save_config(&config).map_err(config_error)?;

    if !global.quiet {
        eprintln!(
            "Profile '{profile_name}' written to {}",
            adslot_config::config_path().display()
        );
        eprintln!("Store the password with: adslot config set-password");
    }
    Ok(())
}

/// Display the resolved configuration (passwords elided).
fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let config = adslot_config::load_config_or_default();
    let redacted = redact(&config);
    output::print_output(&output::render_yaml(&redacted), global.quiet);
    Ok(())
}

fn profiles(global: &GlobalOpts) -> Result<(), CliError> {
    let config = adslot_config::load_config_or_default();
    let default = config.default_profile.as_deref().unwrap_or("default");

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort_unstable();

    let mut lines = Vec::new();
    for name in names {
        let marker = if name == default { "*" } else { " " };
        let server = config
            .profiles
            .get(name)
            .map(|p| p.server.clone())
            .unwrap_or_default();
        lines.push(format!("{marker} {name}  {server}"));
    }
    if lines.is_empty() {
        lines.push("(no profiles configured; run: adslot config init)".to_owned());
    }
    output::print_output(&lines.join("\n"), global.quiet);
    Ok(())
}

fn use_profile(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut config = adslot_config::load_config_or_default();
    context::profile_for(&config, name)?;
    config.default_profile = Some(name.to_owned());
    adslot_config::save_config(&config).map_err(config_error)?;
    if !global.quiet {
        eprintln!("Default profile set to '{name}'");
    }
    Ok(())
}

fn set_password(profile: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let config = adslot_config::load_config_or_default();
    let profile_name =
        profile.unwrap_or_else(|| context::active_profile_name(global, &config));
    context::profile_for(&config, &profile_name)?;

    let password: String = dialoguer::Password::new()
        .with_prompt(format!("Password for profile '{profile_name}'"))
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    adslot_config::store_password(&profile_name, &password).map_err(config_error)?;
    if !global.quiet {
        eprintln!("Password stored in the system keyring");
    }
    Ok(())
}

/// Serialize config for display without plaintext passwords.
fn redact(config: &Config) -> serde_json::Value {
    let mut value = serde_json::to_value(config).unwrap_or_default();
    if let Some(profiles) = value.get_mut("profiles").and_then(|p| p.as_object_mut()) {
        for profile in profiles.values_mut() {
            if let Some(obj) = profile.as_object_mut() {
                if obj.get("password").is_some_and(|p| !p.is_null()) {
                    obj.insert("password".into(), serde_json::Value::String("***".into()));
                }
            }
        }
    }
    value
}

fn config_error(err: adslot_config::ConfigError) -> CliError {
    CliError::Validation {
        field: "config".into(),
        reason: err.to_string(),
    }
}
