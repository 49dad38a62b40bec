//! A typed client for the FatSecret Platform nutrition API
//!
//! The client covers the food, recipe, natural language, and image
//! recognition surfaces of the platform. Authentication is handled
//! transparently: configure either OAuth2 client credentials or legacy
//! OAuth1 consumer credentials and every request is decorated
//! accordingly, with bearer tokens fetched and cached behind the
//! scenes.
//!
//! ```
//! use fatsecret::{
//!     ClientCredentialsConfig, ClientId, ClientOptions, ClientSecret, FatSecretClient,
//! };
//! use fatsecret::types::FoodSearchRequest;
//!
//! let options = ClientOptions::new(ClientCredentialsConfig {
//!     client_id: ClientId::from_static("my-client-id"),
//!     client_secret: ClientSecret::from_static("my-client-secret"),
//!     token_url: None,
//!     scopes: None,
//! });
//!
//! let client = FatSecretClient::new(options);
//!
//! let request = FoodSearchRequest {
//!     search_expression: Some("apple".to_owned()),
//!     max_results: Some(3),
//!     ..Default::default()
//! };
//!
//! let foods = client.search_foods(request)
//! # ;/* Commented out due to this trying to interact with the world.
//! .await?;
//!
//! for food in &foods.foods_search.results.food {
//!     println!("{:?}", food.food_name);
//! }
//! # */
//! ```
//!
//! The token cache defaults to process memory. Hand
//! [`ClientOptions::with_storage`] a
//! [`FileStorage`][fatsecret_platform::FileStorage] to reuse tokens
//! across runs, or implement
//! [`StorageAdapter`][fatsecret_platform::StorageAdapter] for a shared
//! store such as Redis.

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

mod client;
mod environment;
mod error;
pub mod service;
pub mod types;

pub use client::{ClientOptions, FatSecretClient};
pub use environment::Environment;
pub use error::Error;

pub use fatsecret_auth::{
    AccessToken, AuthProvider, AuthStrategy, ClientCredentialsConfig, ClientId, ClientSecret,
    ConsumerKey, ConsumerSecret, OAuth1Config, Scopes, TokenSecret,
};
