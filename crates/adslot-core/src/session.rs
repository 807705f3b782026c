// ── Session store ──
//
// Holds the authenticated user and the access/refresh token pair, and
// owns every transition between signed-in and signed-out. The session
// is an explicit object handed to consumers -- there is no ambient
// global. Tokens persist across processes through a `TokenStore`
// implementation (file-backed in `adslot-config`, in-memory here for
// tests and embedding).
//
// Invariant: `user` is `Some` exactly when a token pair was confirmed,
// either by a successful login/register or by the `me` probe during
// `restore`.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use tracing::{debug, warn};

use adslot_api::ApiClient;
use adslot_api::types::RegisterRequest;

use crate::error::CoreError;
use crate::model::User;

/// Persisted client state outlives a token pair by at most this long,
/// matching the retention of the original browser cookies.
pub const TOKEN_RETENTION_DAYS: i64 = 7;

/// Access + refresh token pair with its issue timestamp.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: SecretString,
    pub refresh: SecretString,
    pub issued_at: DateTime<Utc>,
}

impl TokenPair {
    /// Whether the retention window has lapsed.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at > Duration::days(TOKEN_RETENTION_DAYS)
    }
}

/// Durable storage for the token pair.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<TokenPair>, CoreError>;
    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

impl<T: TokenStore> TokenStore for Arc<T> {
    fn load(&self) -> Result<Option<TokenPair>, CoreError> {
        (**self).load()
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        (**self).save(tokens)
    }

    fn clear(&self) -> Result<(), CoreError> {
        (**self).clear()
    }
}

/// In-memory token store. Nothing survives the process; useful for
/// tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with a deliberately stale pair in tests.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CoreError> {
        Ok(self.tokens.lock().expect("token store lock poisoned").clone())
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        *self.tokens.lock().expect("token store lock poisoned") = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.tokens.lock().expect("token store lock poisoned") = None;
        Ok(())
    }
}

/// The authenticated session around an [`ApiClient`].
pub struct Session {
    api: Arc<ApiClient>,
    store: Box<dyn TokenStore>,
    user: Option<User>,
    tokens: Option<TokenPair>,
}

impl Session {
    pub fn new(api: Arc<ApiClient>, store: Box<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            user: None,
            tokens: None,
        }
    }

    /// The shared API client (carries the bearer token).
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    // ── Auth operations ──────────────────────────────────────────────

    /// Sign in with username/password.
    ///
    /// On success the token pair is stored (memory + token store) and
    /// `user` is set. On failure nothing is mutated and the backend's
    /// message is carried in the error.
    pub async fn login(
        &mut self,
        username: &str,
        password: &SecretString,
    ) -> Result<User, CoreError> {
        let auth = self.api.login(username, password).await?;
        debug!(username, "login successful");
        Ok(self.adopt_auth(auth))
    }

    /// Register a new account and sign in with the returned tokens.
    ///
    /// Validation failures surface the backend's per-field message map
    /// through [`CoreError::Api`].
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<User, CoreError> {
        let auth = self.api.register(request).await?;
        debug!(username = %request.username, "registration successful");
        Ok(self.adopt_auth(auth))
    }

    /// Sign out.
    ///
    /// Best-effort invalidates the refresh token server-side; a failed
    /// call is logged and swallowed. Local state is cleared
    /// unconditionally.
    pub async fn logout(&mut self) {
        if let Some(ref tokens) = self.tokens {
            if let Err(e) = self.api.logout(&tokens.refresh).await {
                warn!(error = %e, "server-side logout failed (non-fatal)");
            }
        }
        self.clear_local_state();
        debug!("signed out");
    }

    /// Restore a persisted session at process start.
    ///
    /// Loads cached tokens; when present and within the retention
    /// window, confirms them with a `me` probe. Any failure -- stale
    /// cache, 401, network -- performs the same local cleanup as
    /// [`logout`](Self::logout) and yields `None` rather than an error,
    /// so callers can simply gate on the result.
    pub async fn restore(&mut self) -> Option<User> {
        let tokens = match self.store.load() {
            Ok(Some(tokens)) => tokens,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "token cache unreadable");
                return None;
            }
        };

        if tokens.is_stale(Utc::now()) {
            debug!("cached tokens past retention window, discarding");
            self.clear_local_state();
            return None;
        }

        self.api.set_access_token(tokens.access.clone());

        match self.api.me().await {
            Ok(user_dto) => {
                let user = User::from(user_dto);
                self.tokens = Some(tokens);
                self.user = Some(user.clone());
                debug!(username = %user.username, "session restored");
                Some(user)
            }
            Err(e) => {
                debug!(error = %e, "session restore failed, clearing local state");
                self.clear_local_state();
                None
            }
        }
    }

    /// Change the password of the signed-in user.
    pub async fn change_password(
        &self,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), CoreError> {
        if !self.is_authenticated() {
            return Err(CoreError::NotAuthenticated);
        }
        self.api.change_password(old_password, new_password).await?;
        Ok(())
    }

    /// Re-fetch the profile of the signed-in user.
    pub async fn whoami(&mut self) -> Result<User, CoreError> {
        let user = User::from(self.api.me().await?);
        self.user = Some(user.clone());
        Ok(user)
    }

    // ── Internals ────────────────────────────────────────────────────

    fn adopt_auth(&mut self, auth: adslot_api::types::AuthResponse) -> User {
        let tokens = TokenPair {
            access: SecretString::from(auth.tokens.access),
            refresh: SecretString::from(auth.tokens.refresh),
            issued_at: Utc::now(),
        };

        self.api.set_access_token(tokens.access.clone());
        if let Err(e) = self.store.save(&tokens) {
            warn!(error = %e, "failed to persist tokens (session stays in-memory)");
        }
        self.tokens = Some(tokens);

        let user = User::from(auth.user);
        self.user = Some(user.clone());
        user
    }

    fn clear_local_state(&mut self) {
        self.api.clear_access_token();
        self.tokens = None;
        self.user = None;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear token cache");
        }
    }
}
