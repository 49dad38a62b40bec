//! Platform adapters for the FatSecret Platform client
//!
//! The client core is written against a small set of host capabilities
//! rather than against concrete implementations: a clock, a key-value
//! store for persisted tokens, a crypto provider for request signing,
//! and an HTTP transport. This crate defines those seams and provides
//! the default implementations used by most applications.
//!
//! Every seam can be replaced for testing or for unusual hosts. The
//! client crates only ever see the traits defined here.
//!
//! # Features
//!
//! The following features are supported by this crate, all of which are
//! enabled by default:
//!
//! * `file`: Provides a [`storage::FileStorage`] adapter backed by the local
//!   filesystem.
//! * `reqwest`: Provides the default [`http::HttpClient`] implementation
//!   backed by [`reqwest`].

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

pub mod clock;
pub mod crypto;
pub mod http;
pub mod storage;

pub use clock::{Clock, System, TestClock, UnixMillis};
pub use crypto::{CryptoAdapter, CryptoError, RingCrypto};
pub use http::{HttpBody, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
pub use storage::{MemoryStorage, StorageAdapter};

#[cfg(feature = "reqwest")]
pub use http::ReqwestHttpClient;

#[cfg(feature = "file")]
pub use storage::FileStorage;
