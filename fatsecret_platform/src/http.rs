//! Pluggable HTTP transport
//!
//! The client describes every exchange as an [`HttpRequest`] and hands
//! it to an [`HttpClient`]. Transports complete the exchange and return
//! the response as-is; status policy stays with the caller, so a 500 is
//! a response here, not an error.

use std::{error, fmt};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// An HTTP method used by the client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// The GET method
    Get,
    /// The POST method
    Post,
}

impl HttpMethod {
    /// The canonical upper-case name of the method
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body
#[derive(Clone, Debug)]
pub enum HttpBody {
    /// No body
    Empty,
    /// URL-encoded form data
    Form(Vec<(String, String)>),
    /// A JSON document
    Json(serde_json::Value),
}

/// A request to be executed by an [`HttpClient`]
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The request method
    pub method: HttpMethod,
    /// The absolute request URL, without a query string
    pub url: String,
    /// Query parameters to append to the URL
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// The request body
    pub body: HttpBody,
}

impl HttpRequest {
    /// Constructs a bare request for the given method and URL
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: HttpBody::Empty,
        }
    }
}

/// A response produced by an [`HttpClient`]
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: u16,
    /// The raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Deserializes the response body as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON or does not match
    /// the expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// An error raised by an HTTP transport
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request URL could not be parsed
    #[error("invalid request url: {url}")]
    InvalidUrl {
        /// The offending URL
        url: String,
    },
    /// The transport was unable to complete the exchange
    #[error("error sending request")]
    Transport(#[source] Box<dyn error::Error + Send + Sync + 'static>),
}

impl HttpError {
    /// Wraps an underlying transport failure
    pub fn transport(err: impl Into<Box<dyn error::Error + Send + Sync + 'static>>) -> Self {
        HttpError::Transport(err.into())
    }
}

/// An asynchronous HTTP transport
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes the request and returns the completed response
    ///
    /// Implementations return every completed exchange, including those
    /// with non-success status codes.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// The default transport, backed by [`reqwest`]
#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
    /// Constructs a transport with a default client
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a transport around an already-configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = reqwest::Url::parse(&req.url).map_err(|_| HttpError::InvalidUrl {
            url: req.url.clone(),
        })?;

        let mut builder = match req.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        builder = match req.body {
            HttpBody::Empty => builder,
            HttpBody::Form(form) => builder.form(&form),
            HttpBody::Json(json) => builder.json(&json),
        };

        let resp = builder.send().await.map_err(HttpError::transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(HttpError::transport)?.to_vec();

        tracing::trace!(status, bytes = body.len(), "completed http exchange");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_are_upper_case() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn response_json_decodes_body() {
        let resp = HttpResponse {
            status: 200,
            body: br#"{"value":42}"#.to_vec(),
        };

        #[derive(serde::Deserialize)]
        struct Body {
            value: u32,
        }

        let body: Body = resp.json().unwrap();
        assert_eq!(body.value, 42);
    }
}
