//! Strategy dispatch for per-request authentication

use std::{collections::BTreeMap, sync::Arc};

use fatsecret_platform::{Clock, CryptoAdapter, HttpClient, HttpMethod, StorageAdapter, System};

use crate::{
    client_credentials::ClientCredentialsAuthenticator,
    config::{AuthProvider, AuthStrategy},
    error::Error,
    oauth1::{self, OAuth1Signer},
    token_cache::TokenCache,
};

const TOKEN_CACHE_KEY_PREFIX: &str = "fatsecret:access_token";

/// The decorations that authenticate one outgoing request
///
/// The caller merges `headers` into the request headers and `query`
/// into the request query before sending. Both live for a single
/// request only.
#[derive(Clone, Debug, Default)]
pub struct AuthResult {
    /// Headers to add to the request
    pub headers: Option<Vec<(String, String)>>,

    /// Query parameters to merge into the request, replacing any
    /// caller parameter with the same name
    pub query: Option<BTreeMap<String, String>>,
}

#[derive(Debug)]
enum Strategy<C> {
    ClientCredentials(ClientCredentialsAuthenticator<C>),
    OAuth1(OAuth1Signer<C>),
}

/// Dispatches per-request authentication to the configured strategy
///
/// Exactly one strategy exists per manager, fixed at construction; a
/// half-configured manager is unrepresentable.
#[derive(Debug)]
pub struct AuthManager<C = System> {
    strategy: Strategy<C>,
}

impl AuthManager<System> {
    /// Constructs a manager for the given credential configuration
    ///
    /// For the client credentials strategy, `default_token_url`
    /// supplies the token endpoint when the configuration does not name
    /// one; the resolved URL is fixed here and the caller's
    /// configuration is never modified. Bearer tokens are cached in
    /// `storage` under a key namespaced by the client ID.
    pub fn new(
        provider: AuthProvider,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn StorageAdapter>,
        crypto: Arc<dyn CryptoAdapter>,
        default_token_url: Option<String>,
    ) -> Self {
        let strategy = match provider {
            AuthProvider::ClientCredentials(config) => {
                let cache_key =
                    format!("{}:{}", TOKEN_CACHE_KEY_PREFIX, config.client_id);
                let cache = TokenCache::new(storage, cache_key);
                Strategy::ClientCredentials(ClientCredentialsAuthenticator::new(
                    config,
                    default_token_url,
                    http,
                    cache,
                ))
            }
            AuthProvider::OAuth1(config) => Strategy::OAuth1(OAuth1Signer::new(config, crypto)),
        };

        Self { strategy }
    }
}

impl<C> AuthManager<C> {
    /// Sets a custom clock to be used
    ///
    /// Useful for testing purposes
    pub fn with_clock<D>(self, clock: D) -> AuthManager<D> {
        let strategy = match self.strategy {
            Strategy::ClientCredentials(auth) => {
                Strategy::ClientCredentials(auth.with_clock(clock))
            }
            Strategy::OAuth1(signer) => Strategy::OAuth1(signer.with_clock(clock)),
        };

        AuthManager { strategy }
    }

    /// The strategy this manager authenticates with
    pub fn strategy(&self) -> AuthStrategy {
        match &self.strategy {
            Strategy::ClientCredentials(_) => AuthStrategy::ClientCredentials,
            Strategy::OAuth1(_) => AuthStrategy::OAuth1,
        }
    }
}

impl<C: Clock> AuthManager<C> {
    /// Produces the decorations that authenticate a request
    ///
    /// The client credentials strategy yields a bearer `Authorization`
    /// header. The OAuth1 strategy signs the request's method, URL, and
    /// query, yielding both the signed query parameters and their
    /// `Authorization` header rendering.
    pub async fn get_auth(
        &self,
        method: HttpMethod,
        url: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<AuthResult, Error> {
        match &self.strategy {
            Strategy::ClientCredentials(auth) => {
                let token = auth.get_access_token().await?;
                Ok(AuthResult {
                    headers: Some(vec![(
                        "Authorization".to_owned(),
                        format!("Bearer {}", token.as_str()),
                    )]),
                    query: None,
                })
            }
            Strategy::OAuth1(signer) => {
                let signed = signer.generate_params(method, url, query)?;
                let header = oauth1::build_authorization_header(&signed);
                Ok(AuthResult {
                    headers: Some(vec![("Authorization".to_owned(), header)]),
                    query: Some(signed),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ClientCredentialsConfig, OAuth1Config},
        ClientId, ClientSecret, ConsumerKey, ConsumerSecret,
    };
    use fatsecret_platform::{
        CryptoError, HttpError, HttpRequest, HttpResponse, MemoryStorage, RingCrypto, TestClock,
        UnixMillis,
    };
    use std::{
        error,
        sync::atomic::{AtomicUsize, Ordering},
    };

    struct StaticTokenHttpClient {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl HttpClient for StaticTokenHttpClient {
        async fn send(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: 200,
                body: br#"{"access_token":"issued-token","expires_in":3600}"#.to_vec(),
            })
        }
    }

    struct CountingStorage {
        inner: MemoryStorage,
        reads: AtomicUsize,
        writes: AtomicUsize,
    }

    impl CountingStorage {
        fn new() -> Self {
            Self {
                inner: MemoryStorage::new(),
                reads: AtomicUsize::new(0),
                writes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl StorageAdapter for CountingStorage {
        async fn get_item(
            &self,
            key: &str,
        ) -> Result<Option<String>, Box<dyn error::Error + Send + Sync + 'static>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_item(key).await
        }

        async fn set_item(
            &self,
            key: &str,
            value: &str,
        ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set_item(key, value).await
        }

        async fn remove_item(
            &self,
            key: &str,
        ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove_item(key).await
        }
    }

    struct FixedNonceCrypto;

    impl CryptoAdapter for FixedNonceCrypto {
        fn random_bytes(&self, len: usize) -> Result<Vec<u8>, CryptoError> {
            Ok(vec![0x01; len])
        }

        fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
            RingCrypto::new().hmac_sha1(key, message)
        }
    }

    fn client_credentials_provider() -> AuthProvider {
        AuthProvider::ClientCredentials(ClientCredentialsConfig {
            client_id: ClientId::from_static("my-id"),
            client_secret: ClientSecret::from_static("my-secret"),
            token_url: None,
            scopes: None,
        })
    }

    fn oauth1_provider() -> AuthProvider {
        AuthProvider::OAuth1(OAuth1Config {
            consumer_key: ConsumerKey::from_static("key"),
            consumer_secret: ConsumerSecret::from_static("secret"),
            access_token: None,
            access_token_secret: None,
        })
    }

    #[tokio::test]
    async fn client_credentials_yields_a_bearer_header() {
        let http = Arc::new(StaticTokenHttpClient {
            calls: AtomicUsize::new(0),
        });
        let manager = AuthManager::new(
            client_credentials_provider(),
            http.clone(),
            Arc::new(MemoryStorage::new()),
            Arc::new(RingCrypto::new()),
            Some("https://oauth.example.com/token".to_owned()),
        );

        let auth = manager
            .get_auth(HttpMethod::Get, "https://api.example.com/x", &BTreeMap::new())
            .await
            .unwrap();

        assert_eq!(
            auth.headers,
            Some(vec![(
                "Authorization".to_owned(),
                "Bearer issued-token".to_owned()
            )])
        );
        assert!(auth.query.is_none());

        // a second request is served from the cache
        manager
            .get_auth(HttpMethod::Get, "https://api.example.com/x", &BTreeMap::new())
            .await
            .unwrap();
        assert_eq!(http.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn bearer_tokens_are_cached_per_client_id() {
        let storage = Arc::new(CountingStorage::new());
        let manager = AuthManager::new(
            client_credentials_provider(),
            Arc::new(StaticTokenHttpClient {
                calls: AtomicUsize::new(0),
            }),
            storage.clone(),
            Arc::new(RingCrypto::new()),
            Some("https://oauth.example.com/token".to_owned()),
        );

        manager
            .get_auth(HttpMethod::Get, "https://api.example.com/x", &BTreeMap::new())
            .await
            .unwrap();

        let record = storage
            .inner
            .get_item("fatsecret:access_token:my-id")
            .await
            .unwrap();
        assert!(record.is_some());
    }

    #[tokio::test]
    async fn oauth1_yields_signed_query_and_header() {
        let manager = AuthManager::new(
            oauth1_provider(),
            Arc::new(StaticTokenHttpClient {
                calls: AtomicUsize::new(0),
            }),
            Arc::new(MemoryStorage::new()),
            Arc::new(FixedNonceCrypto),
            None,
        )
        .with_clock(TestClock::new(UnixMillis(1_700_000_000_000)));

        let mut query = BTreeMap::new();
        query.insert("method".to_owned(), "foods.search".to_owned());
        query.insert("format".to_owned(), "json".to_owned());

        let auth = manager
            .get_auth(
                HttpMethod::Get,
                "https://platform.fatsecret.com/rest/server.api",
                &query,
            )
            .await
            .unwrap();

        let signed = auth.query.unwrap();
        assert_eq!(signed["oauth_signature"], "T3gHpfzZxb1VCzZgYMq25ocSW+A=");
        assert_eq!(signed["method"], "foods.search");

        let headers = auth.headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert!(headers[0].1.starts_with("OAuth "));
        assert!(headers[0]
            .1
            .contains("oauth_signature=\"T3gHpfzZxb1VCzZgYMq25ocSW%2BA%3D\""));
    }

    #[tokio::test]
    async fn oauth1_never_touches_storage() {
        let storage = Arc::new(CountingStorage::new());
        let manager = AuthManager::new(
            oauth1_provider(),
            Arc::new(StaticTokenHttpClient {
                calls: AtomicUsize::new(0),
            }),
            storage.clone(),
            Arc::new(FixedNonceCrypto),
            None,
        );

        manager
            .get_auth(
                HttpMethod::Get,
                "https://platform.fatsecret.com/rest/server.api",
                &BTreeMap::new(),
            )
            .await
            .unwrap();

        assert_eq!(storage.reads.load(Ordering::SeqCst), 0);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn strategy_reports_the_configured_variant() {
        let manager = AuthManager::new(
            oauth1_provider(),
            Arc::new(StaticTokenHttpClient {
                calls: AtomicUsize::new(0),
            }),
            Arc::new(MemoryStorage::new()),
            Arc::new(RingCrypto::new()),
            None,
        );
        assert_eq!(manager.strategy(), AuthStrategy::OAuth1);
    }
}
