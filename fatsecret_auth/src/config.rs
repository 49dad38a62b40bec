//! Credential configuration for the two supported strategies

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AccessToken, ClientId, ClientSecret, ConsumerKey, ConsumerSecret, TokenSecret};

/// The scope requested from the token endpoint when none is configured
pub const DEFAULT_SCOPE: &str = "basic";

/// The authentication strategy selected for a client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStrategy {
    /// OAuth2 bearer tokens obtained through the client credentials flow
    ClientCredentials,
    /// OAuth1 HMAC-SHA1 request signing
    OAuth1,
}

impl AuthStrategy {
    /// The wire name of the strategy
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            AuthStrategy::ClientCredentials => "client-credentials",
            AuthStrategy::OAuth1 => "oauth1",
        }
    }
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested token scopes
///
/// Callers configure either a single space-delimited string or a list
/// of scope tokens; both serialize interchangeably.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scopes {
    /// A single, possibly space-delimited, scope string
    String(String),
    /// A list of scope tokens
    Array(Vec<String>),
}

impl Scopes {
    /// Normalizes an optional scope configuration into the `scope`
    /// value sent to the token endpoint
    ///
    /// An unconfigured scope, an empty list, and a blank string all
    /// collapse to [`DEFAULT_SCOPE`]. A string is trimmed; a list is
    /// space-joined as-is.
    pub fn normalize(scopes: Option<&Scopes>) -> String {
        match scopes {
            None => DEFAULT_SCOPE.to_owned(),
            Some(Scopes::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    DEFAULT_SCOPE.to_owned()
                } else {
                    trimmed.to_owned()
                }
            }
            Some(Scopes::Array(items)) => {
                if items.is_empty() {
                    DEFAULT_SCOPE.to_owned()
                } else {
                    items.join(" ")
                }
            }
        }
    }
}

impl From<&str> for Scopes {
    fn from(s: &str) -> Self {
        Scopes::String(s.to_owned())
    }
}

impl From<String> for Scopes {
    fn from(s: String) -> Self {
        Scopes::String(s)
    }
}

impl From<Vec<String>> for Scopes {
    fn from(items: Vec<String>) -> Self {
        Scopes::Array(items)
    }
}

/// Configuration for the OAuth2 client credentials strategy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientCredentialsConfig {
    /// The client ID issued for the application
    pub client_id: ClientId,

    /// The client secret issued for the application
    pub client_secret: ClientSecret,

    /// Overrides the token endpoint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,

    /// The scopes to request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Scopes>,
}

/// Configuration for the OAuth1 signed-request strategy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OAuth1Config {
    /// The consumer key identifying the application
    pub consumer_key: ConsumerKey,

    /// The consumer secret used to derive the signing key
    pub consumer_secret: ConsumerSecret,

    /// The access token for three-legged requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,

    /// The token secret paired with `access_token`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_secret: Option<TokenSecret>,
}

/// Credential configuration selecting one of the two supported strategies
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "config")]
pub enum AuthProvider {
    /// Authenticate with bearer tokens from the client credentials flow
    #[serde(rename = "client-credentials")]
    ClientCredentials(ClientCredentialsConfig),
    /// Authenticate by signing each request with OAuth1 HMAC-SHA1
    #[serde(rename = "oauth1")]
    OAuth1(OAuth1Config),
}

impl AuthProvider {
    /// The strategy this configuration selects
    pub fn strategy(&self) -> AuthStrategy {
        match self {
            AuthProvider::ClientCredentials(_) => AuthStrategy::ClientCredentials,
            AuthProvider::OAuth1(_) => AuthStrategy::OAuth1,
        }
    }
}

impl From<ClientCredentialsConfig> for AuthProvider {
    fn from(config: ClientCredentialsConfig) -> Self {
        AuthProvider::ClientCredentials(config)
    }
}

impl From<OAuth1Config> for AuthProvider {
    fn from(config: OAuth1Config) -> Self {
        AuthProvider::OAuth1(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_scopes_normalize_to_basic() {
        assert_eq!(Scopes::normalize(None), "basic");
    }

    #[test]
    fn empty_scope_list_normalizes_to_basic() {
        let scopes = Scopes::Array(Vec::new());
        assert_eq!(Scopes::normalize(Some(&scopes)), "basic");
    }

    #[test]
    fn blank_scope_string_normalizes_to_basic() {
        let scopes = Scopes::from("   ");
        assert_eq!(Scopes::normalize(Some(&scopes)), "basic");
    }

    #[test]
    fn scope_string_is_trimmed() {
        let scopes = Scopes::from("  premier barcode ");
        assert_eq!(Scopes::normalize(Some(&scopes)), "premier barcode");
    }

    #[test]
    fn scope_list_is_space_joined_verbatim() {
        let scopes = Scopes::Array(vec!["basic".to_owned(), "premier ".to_owned()]);
        assert_eq!(Scopes::normalize(Some(&scopes)), "basic premier ");
    }

    #[test]
    fn provider_round_trips_with_strategy_tag() {
        let provider = AuthProvider::ClientCredentials(ClientCredentialsConfig {
            client_id: ClientId::from_static("id"),
            client_secret: ClientSecret::from_static("secret"),
            token_url: None,
            scopes: None,
        });

        let json = serde_json::to_value(&provider).unwrap();
        assert_eq!(json["strategy"], "client-credentials");
        assert_eq!(json["config"]["client_id"], "id");

        let parsed: AuthProvider = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.strategy(), AuthStrategy::ClientCredentials);
    }

    #[test]
    fn oauth1_provider_deserializes() {
        let parsed: AuthProvider = serde_json::from_str(
            r#"{"strategy":"oauth1","config":{"consumer_key":"ck","consumer_secret":"cs"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.strategy(), AuthStrategy::OAuth1);
        assert!(matches!(
            parsed,
            AuthProvider::OAuth1(OAuth1Config {
                access_token: None,
                ..
            })
        ));
    }

    #[test]
    fn scopes_deserialize_from_string_or_array() {
        let single: Scopes = serde_json::from_str(r#""basic premier""#).unwrap();
        assert_eq!(single, Scopes::from("basic premier"));

        let many: Scopes = serde_json::from_str(r#"["basic","premier"]"#).unwrap();
        assert_eq!(
            many,
            Scopes::Array(vec!["basic".to_owned(), "premier".to_owned()])
        );
    }
}
