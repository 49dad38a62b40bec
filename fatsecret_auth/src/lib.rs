//! Authentication for the FatSecret Platform API
//!
//! The platform accepts two authentication schemes. Newer accounts use
//! OAuth2 bearer tokens obtained through the client credentials flow,
//! while older accounts sign every request with OAuth1 HMAC-SHA1. This
//! crate implements both behind [`AuthManager`], which turns a
//! request's method, URL, and query into the headers and query
//! parameters that authenticate it.
//!
//! Bearer tokens are cached in a pluggable storage backend and reused
//! until shortly before they expire, so steady-state requests do not
//! touch the token endpoint at all. OAuth1 signing is purely local and
//! never contacts an authority.
//!
//! ```
//! use std::sync::Arc;
//!
//! use fatsecret_auth::{
//!     AuthManager, AuthProvider, ClientCredentialsConfig, ClientId, ClientSecret,
//! };
//! use fatsecret_platform::{HttpMethod, MemoryStorage, ReqwestHttpClient, RingCrypto};
//!
//! let provider = AuthProvider::ClientCredentials(ClientCredentialsConfig {
//!     client_id: ClientId::from_static("my-client-id"),
//!     client_secret: ClientSecret::from_static("my-client-secret"),
//!     token_url: None,
//!     scopes: None,
//! });
//!
//! let manager = AuthManager::new(
//!     provider,
//!     Arc::new(ReqwestHttpClient::new()),
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(RingCrypto::new()),
//!     Some("https://oauth.fatsecret.com/connect/token".to_owned()),
//! );
//!
//! let query = std::collections::BTreeMap::new();
//! let auth = manager.get_auth(
//!     HttpMethod::Get,
//!     "https://platform.fatsecret.com/rest/server.api",
//!     &query,
//! )
//! # ;/* Commented out due to this trying to interact with the world.
//! .await?;
//!
//! for (name, value) in auth.headers.iter().flatten() {
//!     println!("{}: {}", name, value);
//! }
//! # */
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_numeric_casts,
    unsafe_code,
    unused_must_use
)]

mod braids;
pub mod client_credentials;
pub mod config;
mod error;
pub mod manager;
pub mod oauth1;
pub mod token_cache;

pub use braids::*;
pub use config::{
    AuthProvider, AuthStrategy, ClientCredentialsConfig, OAuth1Config, Scopes, DEFAULT_SCOPE,
};
pub use error::Error;
pub use manager::{AuthManager, AuthResult};
