//! Caching of issued access tokens

use std::{error, fmt, sync::Arc};

use fatsecret_platform::{Clock, StorageAdapter, System, UnixMillis};
use serde::{Deserialize, Serialize};

use crate::AccessToken;

/// Milliseconds shaved off a token's lifetime so a token close to
/// expiry is never handed out, tolerating clock skew and in-flight
/// request latency
pub const SAFETY_WINDOW_MS: u64 = 5_000;

/// A persisted access token together with its expiry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedToken {
    /// The issued access token
    pub token: AccessToken,

    /// The instant after which the token must not be used
    #[serde(rename = "expiresAt")]
    pub expires_at: UnixMillis,
}

/// A single-entry token cache over a storage adapter
///
/// Reads treat every failure as a miss: a missing record, an unreadable
/// store, and an unparseable record all come back as `None`. An expired
/// record is evicted when read.
pub struct TokenCache<C = System> {
    storage: Arc<dyn StorageAdapter>,
    key: String,
    clock: C,
}

impl TokenCache<System> {
    /// Constructs a cache persisting its record under `key`
    pub fn new(storage: Arc<dyn StorageAdapter>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            clock: System,
        }
    }
}

impl<C> TokenCache<C> {
    /// Sets a custom clock to be used
    ///
    /// Useful for testing purposes
    pub fn with_clock<D>(self, clock: D) -> TokenCache<D> {
        TokenCache {
            storage: self.storage,
            key: self.key,
            clock,
        }
    }

    /// The storage key under which the record is persisted
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<C: Clock> TokenCache<C> {
    /// Gets the cached token if one is present and still usable
    pub async fn get(&self) -> Option<CachedToken> {
        let raw = match self.storage.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    key = %self.key,
                    error = (&*error as &dyn error::Error),
                    "unable to read token cache, treating as miss"
                );
                return None;
            }
        };

        let cached: CachedToken = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(error) => {
                tracing::warn!(
                    key = %self.key,
                    error = (&error as &dyn error::Error),
                    "token cache record is malformed, treating as miss"
                );
                return None;
            }
        };

        if cached.expires_at <= self.clock.now() {
            tracing::debug!(
                key = %self.key,
                expires_at = cached.expires_at.0,
                "cached token has expired, evicting"
            );
            if let Err(error) = self.storage.remove_item(&self.key).await {
                tracing::warn!(
                    key = %self.key,
                    error = (&*error as &dyn error::Error),
                    "unable to evict expired token"
                );
            }
            return None;
        }

        Some(cached)
    }

    /// Stores a freshly issued token
    ///
    /// The recorded expiry is pulled forward by [`SAFETY_WINDOW_MS`]
    /// from the authority-reported lifetime.
    pub async fn set(
        &self,
        token: AccessToken,
        expires_in_secs: u64,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        let expires_at = self.clock.now() + expires_in_secs * 1000 - SAFETY_WINDOW_MS;
        let record = CachedToken { token, expires_at };
        let raw = serde_json::to_string(&record)?;
        self.storage.set_item(&self.key, &raw).await?;

        tracing::debug!(
            key = %self.key,
            expires_at = expires_at.0,
            "stored access token in cache"
        );

        Ok(())
    }

    /// Removes any cached token
    pub async fn clear(&self) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        self.storage.remove_item(&self.key).await
    }
}

impl<C> fmt::Debug for TokenCache<C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TokenCache")
            .field("key", &self.key)
            .field("clock", &self.clock)
            .finish()
    }
}
