//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text. Server-side field validation maps are flattened into the
//! same per-field rendering as client-side ones.

use miette::Diagnostic;
use thiserror::Error;

use adslot_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Adslot backend")]
    #[diagnostic(
        code(adslot::connection_failed),
        help(
            "Check that the server URL is correct and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(adslot::auth_failed),
        help("Verify your username and password, then run: adslot login")
    )]
    AuthFailed { message: String },

    #[error("Not signed in")]
    #[diagnostic(
        code(adslot::auth_required),
        help(
            "Sign in first: adslot login\n\
             Or configure credentials: adslot config init"
        )
    )]
    AuthRequired,

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(adslot::no_credentials),
        help(
            "Configure credentials with: adslot config init\n\
             Or set the ADSLOT_USERNAME / ADSLOT_PASSWORD environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(adslot::not_found),
        help("Run: adslot {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    /// Field-level validation failures (client- or server-side).
    #[error("Validation failed")]
    #[diagnostic(code(adslot::validation), help("{rendered}"))]
    FieldValidation { rendered: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(adslot::validation))]
    Validation { field: String, reason: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("The server rejected the request: {message}")]
    #[diagnostic(code(adslot::api_error))]
    ApiError { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(adslot::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: adslot config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(adslot::no_config),
        help(
            "Create one with: adslot config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(adslot::config))]
    Config(Box<figment::Error>),

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(adslot::timeout),
        help("Increase timeout with --timeout or check backend responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(adslot::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::AuthRequired | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::FieldValidation { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::ApiError { .. } => exit_code::CONFLICT,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<adslot_api::Error> for CliError {
    fn from(err: adslot_api::Error) -> Self {
        Self::from(CoreError::from(err))
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        // Field-carrying errors render one "field: message" line each.
        if let Some(entries) = err.field_errors() {
            let rendered = entries
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("\n");
            return CliError::FieldValidation { rendered };
        }

        match err {
            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::NotAuthenticated => CliError::AuthRequired,

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                list_command: format!("{entity_type}s list"),
                resource_type: entity_type,
                identifier,
            },

            CoreError::Rejected { message } | CoreError::OperationFailed { message } => {
                CliError::ApiError { message }
            }

            CoreError::ValidationFailed { errors } => CliError::FieldValidation {
                rendered: errors.to_string(),
            },

            CoreError::Api { message, .. } => CliError::ApiError { message },

            CoreError::Config { message } => CliError::NoConfig { path: message },

            CoreError::Internal(message) => CliError::ApiError { message },
        }
    }
}
