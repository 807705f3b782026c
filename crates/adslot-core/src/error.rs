// ── Core error types ──
//
// User-facing errors from adslot-core. These are NOT transport-specific
// -- consumers never see raw HTTP plumbing. The `From<adslot_api::Error>`
// impl translates transport-layer errors into domain-appropriate
// variants, preserving per-field validation maps where the backend
// supplied them.

use thiserror::Error;

use crate::form::FieldErrors;

/// Error type shared by every core operation.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach backend: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected: {message}")]
    Rejected { message: String },

    /// Client-side validation failure; never reaches the network.
    #[error("Validation failed: {errors}")]
    ValidationFailed { errors: FieldErrors },

    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    /// Server-side rejection. `fields` carries the backend's per-field
    /// validation messages when its body was shaped that way.
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
        fields: Option<adslot_api::FieldErrorMap>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Field → messages map, from either a client-side validation
    /// failure or a server-side validation body.
    pub fn field_errors(&self) -> Option<Vec<(String, String)>> {
        match self {
            Self::ValidationFailed { errors } => Some(errors.entries().to_vec()),
            Self::Api {
                fields: Some(map), ..
            } => Some(
                map.iter()
                    .flat_map(|(field, msgs)| {
                        msgs.iter().map(move |m| (field.clone(), m.clone()))
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<adslot_api::Error> for CoreError {
    fn from(err: adslot_api::Error) -> Self {
        match err {
            adslot_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            adslot_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else if e.status().map(|s| s.as_u16()) == Some(404) {
                    CoreError::NotFound {
                        entity_type: "resource".into(),
                        identifier: e.url().map(|u| u.path().to_owned()).unwrap_or_default(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                        fields: None,
                    }
                }
            }
            adslot_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            adslot_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            adslot_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {msg}"),
            },
            adslot_api::Error::Api {
                status: 404,
                message,
                ..
            } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: message,
            },
            adslot_api::Error::Api {
                status,
                message,
                fields,
            } => CoreError::Api {
                message,
                status: Some(status),
                fields,
            },
            adslot_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
