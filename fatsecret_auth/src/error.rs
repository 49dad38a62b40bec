use fatsecret_platform::{CryptoError, HttpError};
use thiserror::Error;

/// An error raised while authenticating a request
#[derive(Debug, Error)]
pub enum Error {
    /// No token endpoint URL is configured for the client credentials flow
    #[error("no token endpoint url is configured")]
    MissingTokenUrl,
    /// The client ID or client secret is empty
    #[error("client credentials require a client id and client secret")]
    MissingCredentials,
    /// The token endpoint answered with a non-success status
    #[error("token endpoint returned status {status}")]
    TokenEndpointStatus {
        /// The HTTP status code returned by the token endpoint
        status: u16,
    },
    /// The token endpoint's response body could not be understood
    #[error("token endpoint returned a malformed response")]
    MalformedTokenResponse(#[source] serde_json::Error),
    /// A request URL could not be parsed for signing
    #[error("invalid request url: {url}")]
    InvalidUrl {
        /// The offending URL
        url: String,
    },
    /// The crypto provider was unable to produce nonce material
    #[error("crypto provider failure")]
    Crypto(#[from] CryptoError),
    /// The HTTP transport failed before a response was received
    #[error("error sending request to token endpoint")]
    Http(#[from] HttpError),
}
