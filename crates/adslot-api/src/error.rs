use std::collections::BTreeMap;

use thiserror::Error;

/// Field name → list of messages, as returned by the backend for
/// validation failures (e.g. `{"title": ["This field is required."]}`).
pub type FieldErrorMap = BTreeMap<String, Vec<String>>;

/// Top-level error type for the `adslot-api` crate.
///
/// Covers every failure mode of the REST surface: authentication,
/// transport, structured API errors, and response decoding.
/// `adslot-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected or bearer token invalid/expired (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Structured error from the backend (non-2xx with a JSON body).
    ///
    /// `fields` is populated when the body is a field → messages map,
    /// so callers can surface per-field validation errors.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        fields: Option<FieldErrorMap>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates the session is no longer
    /// valid and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// The per-field validation messages, if the backend returned any.
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            Self::Api { fields, .. } => fields.as_ref(),
            _ => None,
        }
    }
}
