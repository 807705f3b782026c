// Adslot API HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, bearer-token
// attachment, and error-body parsing. All endpoint modules (ads,
// bookings, etc.) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, FieldErrorMap};
use crate::transport::TransportConfig;

/// Raw HTTP client for the Adslot REST backend.
///
/// Stateless request/response mapping: no retry, no caching. The only
/// interior state is the current access token, which is attached as a
/// `Bearer` credential to every request while present. Callers own
/// interpretation of errors.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// Current access token. Set after login/register, cleared on
    /// logout. Every request picks up whatever is here at send time.
    access_token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the backend root (e.g. `https://ads.example.com`);
    /// the `/api/` prefix is applied per request.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            access_token: RwLock::new(None),
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Token management ─────────────────────────────────────────────

    /// Store the access token used for subsequent requests.
    pub fn set_access_token(&self, token: SecretString) {
        trace!("storing access token");
        *self.access_token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drop the stored access token (requests become anonymous).
    pub fn clear_access_token(&self) {
        trace!("clearing access token");
        *self.access_token.write().expect("token lock poisoned") = None;
    }

    /// Whether an access token is currently set.
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .read()
            .expect("token lock poisoned")
            .is_some()
    }

    /// Apply the stored token to a request builder.
    fn apply_bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.access_token.read().expect("token lock poisoned");
        match guard.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    ///
    /// Paths keep their trailing slash — the backend routes require it.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{path}");
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self
            .apply_bearer(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Send a GET request with query parameters.
    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {} (query: {:?})", url, query);
        let resp = self
            .apply_bearer(self.http.get(url).query(query))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self
            .apply_bearer(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Send a POST request, discarding any response body.
    pub(crate) async fn post_unit(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        debug!("POST {}", url);
        let resp = self
            .apply_bearer(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Send a PATCH request with a JSON body and decode the response.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("PATCH {}", url);
        let resp = self
            .apply_bearer(self.http.patch(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Send a DELETE request, expecting an empty (204) response.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self
            .apply_bearer(self.http.delete(url))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Send a multipart POST (file upload) and decode the response.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: Url,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        debug!("POST {} (multipart)", url);
        let resp = self
            .apply_bearer(self.http.post(url).multipart(form))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Reject non-2xx responses with a structured error; return the
    /// body text otherwise.
    async fn check_status(resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if status.is_success() {
            return Ok(body);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: extract_message(&body)
                    .unwrap_or_else(|| "token expired or invalid credentials".into()),
            });
        }

        let fields = extract_field_errors(&body);
        let message = extract_message(&body).unwrap_or_else(|| {
            format!("HTTP {status}: {}", &body[..body.len().min(200)])
        });
        Err(Error::Api {
            status: status.as_u16(),
            message,
            fields,
        })
    }

    /// Check status, then decode the body as JSON.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = Self::check_status(resp).await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend uses `{"error": "..."}` for auth failures, `{"detail":
/// "..."}` for framework-level errors, and `{"message": "..."}` for a
/// few custom actions.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;
    for key in ["error", "detail", "message"] {
        if let Some(msg) = obj.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_owned());
        }
    }
    None
}

/// Parse a validation-error body shaped as `{field: [messages]}`.
fn extract_field_errors(body: &str) -> Option<FieldErrorMap> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    let mut map = FieldErrorMap::new();
    for (key, val) in obj {
        if let Some(list) = val.as_array() {
            let messages: Vec<String> = list
                .iter()
                .filter_map(|m| m.as_str().map(String::from))
                .collect();
            if !messages.is_empty() {
                map.insert(key.clone(), messages);
            }
        }
    }

    if map.is_empty() { None } else { Some(map) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_message_variants() {
        assert_eq!(
            extract_message(r#"{"error": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            extract_message(r#"{"detail": "Not found."}"#).as_deref(),
            Some("Not found.")
        );
        assert_eq!(extract_message("not json"), None);
    }

    #[test]
    fn extracts_field_error_map() {
        let body = r#"{"title": ["This field is required."], "website_url": ["Enter a valid URL.", "Too long."]}"#;
        let map = extract_field_errors(body).expect("field map");
        assert_eq!(map["title"], vec!["This field is required."]);
        assert_eq!(map["website_url"].len(), 2);
    }

    #[test]
    fn field_errors_ignore_non_list_values() {
        assert!(extract_field_errors(r#"{"error": "nope"}"#).is_none());
    }
}
