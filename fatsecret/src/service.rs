//! Request plumbing shared by every API surface
//!
//! [`ApiService`] owns the merge of caller parameters with the
//! authentication decorations and the platform's error conventions: a
//! non-200 status is a transport-level failure, while a 200 carrying a
//! top-level `error` object is a platform-reported one.

use std::{collections::BTreeMap, fmt, sync::Arc};

use fatsecret_auth::AuthManager;
use fatsecret_platform::{HttpBody, HttpClient, HttpMethod, HttpRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{environment::Environment, error::Error};

/// Issues authenticated requests against the platform endpoints
pub struct ApiService {
    environment: Environment,
    auth: AuthManager,
    http: Arc<dyn HttpClient>,
}

impl ApiService {
    /// Constructs a service over the given environment and transport
    pub fn new(environment: Environment, auth: AuthManager, http: Arc<dyn HttpClient>) -> Self {
        Self {
            environment,
            auth,
            http,
        }
    }

    /// The endpoints this service talks to
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The authentication manager decorating requests
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Invokes a `server.api` method and decodes its response
    ///
    /// The query always pins `format=json`; authentication parameters
    /// are merged in last and replace caller parameters of the same
    /// name.
    #[tracing::instrument(skip(self, method, params), fields(api.method = method.as_ref()))]
    pub async fn call_method<T: DeserializeOwned>(
        &self,
        method: impl AsRef<str>,
        params: Vec<(String, String)>,
    ) -> Result<T, Error> {
        let url = format!("{}/server.api", self.environment.api_base_url);

        let mut query = BTreeMap::new();
        query.insert("method".to_owned(), method.as_ref().to_owned());
        query.insert("format".to_owned(), "json".to_owned());
        for (name, value) in params {
            query.insert(name, value);
        }

        let auth = self.auth.get_auth(HttpMethod::Get, &url, &query).await?;
        if let Some(overrides) = auth.query {
            query.extend(overrides);
        }

        let mut req = HttpRequest::new(HttpMethod::Get, url);
        req.query = query.into_iter().collect();
        if let Some(headers) = auth.headers {
            req.headers.extend(headers);
        }

        self.exchange(req).await
    }

    /// Posts a JSON body to one of the standalone endpoints
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<T, Error> {
        let auth = self
            .auth
            .get_auth(HttpMethod::Post, url, &BTreeMap::new())
            .await?;

        let mut req = HttpRequest::new(HttpMethod::Post, url);
        req.headers
            .push(("Content-Type".to_owned(), "application/json".to_owned()));
        if let Some(headers) = auth.headers {
            req.headers.extend(headers);
        }
        req.body = HttpBody::Json(body);

        self.exchange(req).await
    }

    async fn exchange<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, Error> {
        let resp = self.http.send(req).await?;

        tracing::debug!(response.status = resp.status, "received platform response");

        if resp.status != 200 {
            return Err(Error::Status {
                status: resp.status,
            });
        }

        let value: serde_json::Value = resp.json()?;

        if value.get("error").is_some() {
            let payload: ErrorPayload = serde_json::from_value(value)?;
            return Err(Error::Api {
                code: payload.error.code,
                message: payload
                    .error
                    .message
                    .unwrap_or_else(|| "unspecified platform error".to_owned()),
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Debug for ApiService {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ApiService")
            .field("environment", &self.environment)
            .field("auth", &self.auth)
            .finish()
    }
}

/// The error envelope the platform returns on a 200
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    message: Option<String>,
}

/// Flattens a request struct into `server.api` query parameters
///
/// Unset fields are dropped; scalars are rendered the way the platform
/// expects them, with booleans as `true`/`false`.
pub(crate) fn query_params<T: Serialize>(request: &T) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(request) {
        for (name, value) in fields {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(text) => params.push((name, text)),
                other => params.push((name, other.to_string())),
            }
        }
    }
    params
}
