//! HTTP access to the laboratory backend.
//!
//! [`ApiClient`] is the only place that talks to the network. The per-entity
//! wrappers live in the submodules as further `impl ApiClient` blocks.

mod admin;
mod auth;
mod catalog;
mod feedback;
mod media;
mod publications;
mod upload;

use std::sync::{Arc, RwLock};

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::models::Envelope;
use crate::token_store::TokenStore;

pub use upload::Upload;

/// Non-JSON responses are reported with this many leading characters.
const SNIPPET_LEN: usize = 100;

pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn json<T: Serialize + ?Sized>(method: Method, body: &T) -> Result<Self, ApiError> {
        Ok(Self {
            body: RequestBody::Json(serde_json::to_value(body)?),
            ..Self::new(method)
        })
    }

    pub fn multipart(method: Method, form: Form) -> Self {
        Self {
            body: RequestBody::Multipart(form),
            ..Self::new(method)
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<Url>,
    token: RwLock<Option<String>>,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Builds a client and picks up a previously persisted token.
    pub fn new(base_url: Url, store: Arc<dyn TokenStore>) -> Self {
        let token = store
            .load()
            .map_err(|err| warn!(error = %err, "failed to load stored token"))
            .ok()
            .flatten();
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::new(base_url),
            token: RwLock::new(token),
            store,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(err) = self.store.save(&token) {
            warn!(error = %err, "failed to persist token");
        }
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    pub fn clear_token(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear stored token");
        }
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        };
        Ok(Url::parse(&url)?)
    }

    /// Prepares the request `request` would send, without sending it.
    pub fn build_request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Request, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        let mut headers = options.headers;

        match options.body {
            RequestBody::Multipart(_) => {
                // reqwest supplies the boundary-carrying content type
                headers.remove(CONTENT_TYPE);
            }
            _ => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }

        match self.token() {
            Some(token) => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {token}"))?,
                );
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }

        let builder = self.http.request(options.method, url).headers(headers);
        let builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        Ok(builder.build()?)
    }

    /// Sends a request and decodes the JSON envelope.
    ///
    /// `success: false` is returned as-is; only transport failures, non-JSON
    /// responses and undecodable bodies are errors.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        let request = self.build_request(endpoint, options)?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.contains("application/json") {
            let body = response.text().await?;
            let snippet: String = body.chars().take(SNIPPET_LEN).collect();
            warn!(%status, content_type = %content_type, "non-JSON response");
            return Err(ApiError::NonJson {
                status,
                content_type,
                snippet,
            });
        }

        let bytes = response.bytes().await?;
        let mut envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        envelope.status = status.as_u16();
        if !envelope.success {
            debug!(%status, message = ?envelope.message, "request not successful");
        }
        Ok(envelope)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Envelope<T>, ApiError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::json(method, body)?)
            .await
    }

    async fn delete(&self, endpoint: &str) -> Result<Envelope, ApiError> {
        self.request(endpoint, RequestOptions::delete()).await
    }
}

/// Appends query parameters, skipping absent ones.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}
