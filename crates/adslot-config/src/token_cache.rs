// File-backed token cache
//
// Persists the session's access/refresh pair as JSON under the
// platform data dir, replacing the 7-day cookies of the original web
// client. Retention is enforced at load: a cache whose issue timestamp
// is past the window is deleted and reported as absent, so a stale
// pair never reaches the network.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use adslot_core::CoreError;
use adslot_core::session::{TokenPair, TokenStore};

/// On-disk shape of the cached pair.
#[derive(Debug, Serialize, Deserialize)]
struct CachedTokens {
    access: String,
    refresh: String,
    issued_at: DateTime<Utc>,
}

/// Token store writing to a JSON file, one session per path.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store under the default platform data dir.
    pub fn new() -> Self {
        Self {
            path: crate::data_dir().join("tokens.json"),
        }
    }

    /// Store at an explicit path (tests, custom setups).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn io_error(e: std::io::Error) -> CoreError {
        CoreError::Config {
            message: format!("token cache: {e}"),
        }
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error(e)),
        };

        let cached: CachedTokens = match serde_json::from_str(&contents) {
            Ok(cached) => cached,
            Err(_) => {
                // Unreadable cache is as good as no cache.
                let _ = std::fs::remove_file(&self.path);
                return Ok(None);
            }
        };

        let pair = TokenPair {
            access: SecretString::from(cached.access),
            refresh: SecretString::from(cached.refresh),
            issued_at: cached.issued_at,
        };

        if pair.is_stale(Utc::now()) {
            let _ = std::fs::remove_file(&self.path);
            return Ok(None);
        }

        Ok(Some(pair))
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(Self::io_error)?;
        }

        let cached = CachedTokens {
            access: tokens.access.expose_secret().to_owned(),
            refresh: tokens.refresh.expose_secret().to_owned(),
            issued_at: tokens.issued_at,
        };
        let json = serde_json::to_string_pretty(&cached).map_err(|e| CoreError::Config {
            message: format!("token cache: {e}"),
        })?;

        std::fs::write(&self.path, json).map_err(Self::io_error)?;

        // Tokens are bearer credentials; keep the file owner-only where
        // the platform supports it.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600));
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn pair(issued_at: DateTime<Utc>) -> TokenPair {
        TokenPair {
            access: SecretString::from("acc-token".to_owned()),
            refresh: SecretString::from("ref-token".to_owned()),
            issued_at,
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::at_path(dir.path().join("tokens.json"))
    }

    #[test]
    fn round_trips_a_fresh_pair() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&pair(Utc::now())).unwrap();
        let loaded = store.load().unwrap().expect("pair should load");
        assert_eq!(loaded.access.expose_secret(), "acc-token");
        assert_eq!(loaded.refresh.expose_secret(), "ref-token");
    }

    #[test]
    fn missing_file_is_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn stale_pair_is_discarded_and_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&pair(Utc::now() - Duration::days(8))).unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists(), "stale cache file must be deleted");
    }

    #[test]
    fn pair_just_inside_window_survives() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&pair(Utc::now() - Duration::days(6)))
            .unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn corrupt_cache_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();
        store.save(&pair(Utc::now())).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
