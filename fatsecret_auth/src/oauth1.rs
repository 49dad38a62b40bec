//! OAuth 1.0 request signing
//!
//! FatSecret's legacy authentication signs every request with the
//! HMAC-SHA1 signature method from RFC 5849. The signer produces the
//! full `oauth_*` parameter set for one request; nothing is persisted
//! between calls.

use std::{collections::BTreeMap, fmt, sync::Arc};

use base64::Engine;
use fatsecret_platform::{Clock, CryptoAdapter, HttpMethod, System};
use url::Url;

use crate::{config::OAuth1Config, error::Error};

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_BYTES: usize = 16;

/// Signs requests with the OAuth 1.0 HMAC-SHA1 signature method
pub struct OAuth1Signer<C = System> {
    config: OAuth1Config,
    crypto: Arc<dyn CryptoAdapter>,
    clock: C,
}

impl OAuth1Signer<System> {
    /// Constructs a signer for the given consumer credentials
    pub fn new(config: OAuth1Config, crypto: Arc<dyn CryptoAdapter>) -> Self {
        Self {
            config,
            crypto,
            clock: System,
        }
    }
}

impl<C> OAuth1Signer<C> {
    /// Sets a custom clock to be used
    ///
    /// Useful for testing purposes
    pub fn with_clock<D>(self, clock: D) -> OAuth1Signer<D> {
        OAuth1Signer {
            config: self.config,
            crypto: self.crypto,
            clock,
        }
    }
}

impl<C: Clock> OAuth1Signer<C> {
    /// Generates the signed OAuth parameter set for one request
    ///
    /// The returned map holds the generated `oauth_*` parameters, the
    /// computed `oauth_signature`, and the caller's parameters. A
    /// caller parameter sharing a name with a generated one replaces
    /// it, both in the signed set and in the returned map.
    pub fn generate_params(
        &self,
        method: HttpMethod,
        url: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, Error> {
        let mut oauth_params = BTreeMap::new();
        oauth_params.insert(
            "oauth_consumer_key".to_owned(),
            self.config.consumer_key.as_str().to_owned(),
        );
        oauth_params.insert(
            "oauth_signature_method".to_owned(),
            SIGNATURE_METHOD.to_owned(),
        );
        oauth_params.insert(
            "oauth_timestamp".to_owned(),
            self.clock.now().as_secs().to_string(),
        );
        oauth_params.insert("oauth_nonce".to_owned(), self.generate_nonce()?);
        oauth_params.insert("oauth_version".to_owned(), OAUTH_VERSION.to_owned());

        if let Some(token) = &self.config.access_token {
            oauth_params.insert("oauth_token".to_owned(), token.as_str().to_owned());
        }

        let mut signed = oauth_params.clone();
        for (key, value) in params {
            signed.insert(key.clone(), value.clone());
        }

        let signature = self.sign(&signature_base_string(method, url, &signed)?);

        let mut out = oauth_params;
        out.insert("oauth_signature".to_owned(), signature);
        for (key, value) in params {
            out.insert(key.clone(), value.clone());
        }

        Ok(out)
    }

    fn generate_nonce(&self) -> Result<String, Error> {
        let bytes = self.crypto.random_bytes(NONCE_BYTES)?;
        Ok(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    fn sign(&self, base_string: &str) -> String {
        let token_secret = self
            .config
            .access_token_secret
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("");
        let key = format!(
            "{}&{}",
            percent_encode(self.config.consumer_secret.as_str()),
            percent_encode(token_secret)
        );

        let digest = self.crypto.hmac_sha1(key.as_bytes(), base_string.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(digest)
    }
}

impl<C> fmt::Debug for OAuth1Signer<C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OAuth1Signer")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .finish()
    }
}

/// Renders the `oauth_*` parameters of a signed set as an OAuth
/// `Authorization` header value
pub fn build_authorization_header(params: &BTreeMap<String, String>) -> String {
    let fields = params
        .iter()
        .filter(|(key, _)| key.starts_with("oauth_"))
        .map(|(key, value)| format!("{}=\"{}\"", key, percent_encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", fields)
}

/// Percent-encodes a string as RFC 5849 requires
///
/// Everything outside the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _
/// ~`) is escaped with upper-case hex digits, including `!'()*`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn signature_base_string(
    method: HttpMethod,
    url: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, Error> {
    Ok(format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(&normalize_url(url)?),
        percent_encode(&normalize_params(params))
    ))
}

/// Reduces a URL to `scheme://host[:port]/path` with default ports
/// stripped and any query or fragment dropped
fn normalize_url(url: &str) -> Result<String, Error> {
    let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl {
        url: url.to_owned(),
    })?;
    let host = parsed.host_str().ok_or_else(|| Error::InvalidUrl {
        url: url.to_owned(),
    })?;

    // Url::port() is None when the port is the scheme default
    let normalized = match parsed.port() {
        Some(port) => format!("{}://{}:{}{}", parsed.scheme(), host, port, parsed.path()),
        None => format!("{}://{}{}", parsed.scheme(), host, parsed.path()),
    };

    Ok(normalized)
}

fn normalize_params(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
