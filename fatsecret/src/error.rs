//! Errors raised while talking to the platform

/// An error encountered while calling the platform API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication for the request could not be obtained
    #[error("unable to authenticate request")]
    Auth(#[from] fatsecret_auth::Error),

    /// The HTTP exchange itself failed
    #[error("http exchange with the platform failed")]
    Http(#[from] fatsecret_platform::HttpError),

    /// The platform answered with an unexpected HTTP status
    #[error("platform returned unexpected status: {status}")]
    Status {
        /// The HTTP status code of the response
        status: u16,
    },

    /// The platform answered 200 but reported an error payload
    #[error("platform error {code}: {message}")]
    Api {
        /// The platform's numeric error code
        code: u32,
        /// The platform's error message
        message: String,
    },

    /// A payload could not be translated to or from JSON
    #[error("malformed api payload")]
    Decode(#[from] serde_json::Error),
}
