//! The OAuth2 client credentials flow
//!
//! Bearer tokens are fetched from the token endpoint with the client
//! credentials grant and reused from the cache until they enter the
//! safety window before expiry.

use std::{error, fmt, sync::Arc};

use base64::Engine;
use fatsecret_platform::{Clock, HttpBody, HttpClient, HttpMethod, HttpRequest, System};
use serde::Deserialize;

use crate::{
    config::{ClientCredentialsConfig, Scopes},
    error::Error,
    token_cache::TokenCache,
    AccessToken, ClientIdRef, ClientSecretRef,
};

const GRANT_TYPE: &str = "client_credentials";

/// A successful response from the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// The issued access token
    pub access_token: AccessToken,

    /// Seconds until the token expires
    pub expires_in: u64,

    /// The token type reported by the authority
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Fetches and caches bearer tokens via the client credentials flow
pub struct ClientCredentialsAuthenticator<C = System> {
    config: ClientCredentialsConfig,
    token_url: Option<String>,
    http: Arc<dyn HttpClient>,
    cache: TokenCache<C>,
}

impl ClientCredentialsAuthenticator<System> {
    /// Constructs an authenticator for the given credentials
    ///
    /// The token endpoint is taken from the configuration, falling back
    /// to `default_token_url` when the configuration does not name one.
    /// The resolved URL is fixed for the life of the authenticator.
    pub fn new(
        config: ClientCredentialsConfig,
        default_token_url: Option<String>,
        http: Arc<dyn HttpClient>,
        cache: TokenCache,
    ) -> Self {
        let token_url = config.token_url.clone().or(default_token_url);
        Self {
            config,
            token_url,
            http,
            cache,
        }
    }
}

impl<C> ClientCredentialsAuthenticator<C> {
    /// Sets a custom clock to be used
    ///
    /// Useful for testing purposes
    pub fn with_clock<D>(self, clock: D) -> ClientCredentialsAuthenticator<D> {
        ClientCredentialsAuthenticator {
            config: self.config,
            token_url: self.token_url,
            http: self.http,
            cache: self.cache.with_clock(clock),
        }
    }

    /// The resolved token endpoint URL, if any
    pub fn token_url(&self) -> Option<&str> {
        self.token_url.as_deref()
    }
}

impl<C: Clock> ClientCredentialsAuthenticator<C> {
    /// Gets a valid access token, fetching a new one if necessary
    ///
    /// A cached token is reused until it enters the safety window before
    /// expiry. Concurrent callers that all miss the cache will each fetch
    /// their own token; every fetched token is valid and the last cache
    /// write wins.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        if let Some(cached) = self.cache.get().await {
            tracing::trace!("reusing cached access token");
            return Ok(cached.token);
        }

        let fresh = self.fetch_token().await?;

        if let Err(error) = self
            .cache
            .set(fresh.access_token.clone(), fresh.expires_in)
            .await
        {
            tracing::warn!(
                error = (&*error as &dyn error::Error),
                "unable to persist access token, continuing uncached"
            );
        }

        Ok(fresh.access_token)
    }

    /// Requests a new token from the token endpoint
    #[tracing::instrument(
        err,
        skip(self),
        fields(
            token_url = self.token_url.as_deref().unwrap_or("<unset>"),
            credentials.grant_type = GRANT_TYPE,
            credentials.client_id = %self.config.client_id,
        ),
    )]
    pub async fn fetch_token(&self) -> Result<TokenResponse, Error> {
        let token_url = self.token_url.as_deref().ok_or(Error::MissingTokenUrl)?;

        if self.config.client_id.as_str().is_empty() || self.config.client_secret.as_str().is_empty()
        {
            return Err(Error::MissingCredentials);
        }

        let scope = Scopes::normalize(self.config.scopes.as_ref());

        tracing::trace!(scope = %scope, "requesting token from authority");

        let mut req = HttpRequest::new(HttpMethod::Post, token_url);
        req.headers.push((
            "Authorization".to_owned(),
            basic_authorization(&self.config.client_id, &self.config.client_secret),
        ));
        req.headers.push((
            "Content-Type".to_owned(),
            "application/x-www-form-urlencoded".to_owned(),
        ));
        req.body = HttpBody::Form(vec![
            ("grant_type".to_owned(), GRANT_TYPE.to_owned()),
            ("scope".to_owned(), scope),
        ]);

        let resp = self.http.send(req).await?;

        tracing::debug!(
            response.status = resp.status,
            "received token response from issuing authority"
        );

        if resp.status != 200 {
            return Err(Error::TokenEndpointStatus {
                status: resp.status,
            });
        }

        let token: TokenResponse = resp.json().map_err(Error::MalformedTokenResponse)?;

        tracing::info!(expires_in = token.expires_in, "received new access token");

        Ok(token)
    }
}

impl<C> fmt::Debug for ClientCredentialsAuthenticator<C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ClientCredentialsAuthenticator")
            .field("config", &self.config)
            .field("token_url", &self.token_url)
            .field("cache", &self.cache)
            .finish()
    }
}

fn basic_authorization(client_id: &ClientIdRef, client_secret: &ClientSecretRef) -> String {
    let credentials = format!("{}:{}", client_id.as_str(), client_secret.as_str());
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientId, ClientSecret};
    use fatsecret_platform::{HttpError, HttpResponse, MemoryStorage, TestClock, UnixMillis};
    use std::sync::Mutex;

    struct RecordingHttpClient {
        responses: Mutex<Vec<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn returning(responses: Vec<HttpResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn request(&self, idx: usize) -> HttpRequest {
            self.requests.lock().unwrap()[idx].clone()
        }
    }

    #[async_trait::async_trait]
    impl HttpClient for RecordingHttpClient {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(req);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                panic!("no response queued");
            }
            Ok(responses.remove(0))
        }
    }

    fn token_response(token: &str, expires_in: u64) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: format!(
                r#"{{"access_token":"{}","expires_in":{},"token_type":"Bearer"}}"#,
                token, expires_in
            )
            .into_bytes(),
        }
    }

    fn config() -> ClientCredentialsConfig {
        ClientCredentialsConfig {
            client_id: ClientId::from_static("my-id"),
            client_secret: ClientSecret::from_static("my-secret"),
            token_url: Some("https://oauth.example.com/connect/token".to_owned()),
            scopes: None,
        }
    }

    fn authenticator(
        config: ClientCredentialsConfig,
        http: Arc<RecordingHttpClient>,
        now: u64,
    ) -> ClientCredentialsAuthenticator<TestClock> {
        let cache = TokenCache::new(Arc::new(MemoryStorage::new()), "fatsecret:access_token:my-id");
        ClientCredentialsAuthenticator::new(config, None, http, cache)
            .with_clock(TestClock::new(UnixMillis(now)))
    }

    #[tokio::test]
    async fn fetch_sends_basic_auth_and_form_body() {
        let http = RecordingHttpClient::returning(vec![token_response("tok", 3600)]);
        let auth = authenticator(config(), http.clone(), 1_000_000);

        let token = auth.get_access_token().await.unwrap();
        assert_eq!(token.as_str(), "tok");

        let req = http.request(0);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://oauth.example.com/connect/token");
        assert!(req.headers.contains(&(
            "Authorization".to_owned(),
            // base64("my-id:my-secret")
            "Basic bXktaWQ6bXktc2VjcmV0".to_owned()
        )));
        assert!(req.headers.contains(&(
            "Content-Type".to_owned(),
            "application/x-www-form-urlencoded".to_owned()
        )));
        assert!(matches!(
            &req.body,
            HttpBody::Form(fields)
                if fields.contains(&("grant_type".to_owned(), "client_credentials".to_owned()))
                    && fields.contains(&("scope".to_owned(), "basic".to_owned()))
        ));
    }

    #[tokio::test]
    async fn second_call_reuses_the_cached_token() {
        let http = RecordingHttpClient::returning(vec![token_response("tok", 3600)]);
        let auth = authenticator(config(), http.clone(), 1_000_000);

        let first = auth.get_access_token().await.unwrap();
        let second = auth.get_access_token().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(http.calls(), 1);
    }

    #[tokio::test]
    async fn expired_token_triggers_a_refetch() {
        let http = RecordingHttpClient::returning(vec![
            token_response("tok-1", 1),
            token_response("tok-2", 3600),
        ]);

        let storage = Arc::new(MemoryStorage::new());
        let cache = TokenCache::new(storage.clone(), "k");
        let auth = ClientCredentialsAuthenticator::new(config(), None, http.clone(), cache)
            .with_clock(TestClock::new(UnixMillis(1_000_000)));

        let first = auth.get_access_token().await.unwrap();
        assert_eq!(first.as_str(), "tok-1");

        // two seconds later the one-second token is long gone
        let cache = TokenCache::new(storage, "k");
        let later = ClientCredentialsAuthenticator::new(config(), None, http.clone(), cache)
            .with_clock(TestClock::new(UnixMillis(1_002_000)));

        let second = later.get_access_token().await.unwrap();
        assert_eq!(second.as_str(), "tok-2");
        assert_eq!(http.calls(), 2);
    }

    #[tokio::test]
    async fn token_within_safety_window_is_not_reused() {
        let http = RecordingHttpClient::returning(vec![
            token_response("tok-1", 10),
            token_response("tok-2", 3600),
        ]);

        let storage = Arc::new(MemoryStorage::new());
        let cache = TokenCache::new(storage.clone(), "k");
        let auth = ClientCredentialsAuthenticator::new(config(), None, http.clone(), cache)
            .with_clock(TestClock::new(UnixMillis(1_000_000)));
        auth.get_access_token().await.unwrap();

        // five seconds before reported expiry the token is already ineligible
        let cache = TokenCache::new(storage, "k");
        let later = ClientCredentialsAuthenticator::new(config(), None, http.clone(), cache)
            .with_clock(TestClock::new(UnixMillis(1_005_000)));

        let second = later.get_access_token().await.unwrap();
        assert_eq!(second.as_str(), "tok-2");
        assert_eq!(http.calls(), 2);
    }

    #[tokio::test]
    async fn missing_token_url_fails_before_any_request() {
        let http = RecordingHttpClient::returning(Vec::new());
        let mut cfg = config();
        cfg.token_url = None;
        let auth = authenticator(cfg, http.clone(), 1_000_000);

        let err = auth.get_access_token().await.unwrap_err();
        assert!(matches!(err, Error::MissingTokenUrl));
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn default_token_url_fills_the_gap() {
        let http = RecordingHttpClient::returning(vec![token_response("tok", 3600)]);
        let mut cfg = config();
        cfg.token_url = None;

        let cache = TokenCache::new(Arc::new(MemoryStorage::new()), "k");
        let auth = ClientCredentialsAuthenticator::new(
            cfg,
            Some("https://fallback.example.com/token".to_owned()),
            http.clone(),
            cache,
        )
        .with_clock(TestClock::new(UnixMillis(1_000_000)));

        auth.get_access_token().await.unwrap();
        assert_eq!(http.request(0).url, "https://fallback.example.com/token");
    }

    #[tokio::test]
    async fn configured_token_url_wins_over_the_default() {
        let http = RecordingHttpClient::returning(vec![token_response("tok", 3600)]);

        let cache = TokenCache::new(Arc::new(MemoryStorage::new()), "k");
        let auth = ClientCredentialsAuthenticator::new(
            config(),
            Some("https://fallback.example.com/token".to_owned()),
            http.clone(),
            cache,
        )
        .with_clock(TestClock::new(UnixMillis(1_000_000)));

        auth.get_access_token().await.unwrap();
        assert_eq!(
            http.request(0).url,
            "https://oauth.example.com/connect/token"
        );
    }

    #[tokio::test]
    async fn empty_credentials_fail_fast() {
        let http = RecordingHttpClient::returning(Vec::new());
        let mut cfg = config();
        cfg.client_secret = ClientSecret::from_static("");
        let auth = authenticator(cfg, http.clone(), 1_000_000);

        let err = auth.get_access_token().await.unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
        assert_eq!(http.calls(), 0);
    }

    #[tokio::test]
    async fn error_status_is_reported_with_the_code() {
        let http = RecordingHttpClient::returning(vec![HttpResponse {
            status: 503,
            body: b"busy".to_vec(),
        }]);
        let auth = authenticator(config(), http, 1_000_000);

        let err = auth.get_access_token().await.unwrap_err();
        assert!(matches!(err, Error::TokenEndpointStatus { status: 503 }));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let http = RecordingHttpClient::returning(vec![HttpResponse {
            status: 200,
            body: br#"{"access_token":"tok"}"#.to_vec(),
        }]);
        let auth = authenticator(config(), http, 1_000_000);

        let err = auth.get_access_token().await.unwrap_err();
        assert!(matches!(err, Error::MalformedTokenResponse(_)));
    }

    #[tokio::test]
    async fn configured_scopes_are_normalized_into_the_form() {
        let http = RecordingHttpClient::returning(vec![token_response("tok", 3600)]);
        let mut cfg = config();
        cfg.scopes = Some(Scopes::Array(vec![
            "barcode".to_owned(),
            "premier".to_owned(),
        ]));
        let auth = authenticator(cfg, http.clone(), 1_000_000);

        auth.get_access_token().await.unwrap();
        assert!(matches!(
            &http.request(0).body,
            HttpBody::Form(fields)
                if fields.contains(&("scope".to_owned(), "barcode premier".to_owned()))
        ));
    }
}
