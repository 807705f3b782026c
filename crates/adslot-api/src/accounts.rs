// Account and authentication endpoints
//
// Token issuance lives entirely server-side: login/register return a
// fresh access+refresh pair, logout blacklists the refresh token.
// Nothing here mutates the client's token slot — that is the session
// layer's job.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AuthResponse, RegisterRequest, UserDto};

impl ApiClient {
    /// Authenticate with username/password.
    ///
    /// Returns the user record and a fresh token pair. Invalid
    /// credentials surface as [`Error::Authentication`] with the
    /// backend's message.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<AuthResponse, Error> {
        let url = self.api_url("accounts/auth/login/");
        debug!("logging in as {}", username);

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        self.post(url, &body).await
    }

    /// Register a new account.
    ///
    /// Validation failures return [`Error::Api`] with a populated
    /// field → messages map so callers can render per-field errors.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("accounts/auth/register/");
        debug!("registering {}", request.username);
        self.post(url, request).await
    }

    /// Invalidate the given refresh token server-side.
    pub async fn logout(&self, refresh_token: &SecretString) -> Result<(), Error> {
        let url = self.api_url("accounts/auth/logout/");
        let body = json!({ "refresh": refresh_token.expose_secret() });
        self.post_unit(url, &body).await
    }

    /// Fetch the profile of the authenticated user.
    ///
    /// The canonical "is my token still good" probe: a 401 here means
    /// the session must be torn down.
    pub async fn me(&self) -> Result<UserDto, Error> {
        let url = self.api_url("accounts/auth/me/");
        self.get(url).await
    }

    /// Change the authenticated user's password.
    pub async fn change_password(
        &self,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), Error> {
        let url = self.api_url("accounts/auth/change-password/");
        let body = json!({
            "old_password": old_password.expose_secret(),
            "new_password": new_password.expose_secret(),
        });
        self.post_unit(url, &body).await
    }
}
