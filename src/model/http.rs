/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{ARRAY_KEY_SUFFIX, USER_AGENT};
use crate::error::AppError;
use crate::model::form::value_text;
use crate::model::requests::{QueryParams, RequestBody, ResponseFormat};
use crate::model::responses::ApiResponse;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Hook run on every response or error before it reaches the caller
///
/// Interceptors run in registration order. Each one receives the outcome
/// produced by the previous one.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Called with every successful response
    async fn on_response(&self, response: ApiResponse) -> Result<ApiResponse, AppError> {
        Ok(response)
    }

    /// Called with every error
    async fn on_error(&self, error: AppError) -> Result<ApiResponse, AppError> {
        Err(error)
    }
}

/// Fully resolved request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL
    pub url: String,
    /// Headers to send
    pub headers: HeaderMap,
    /// Query string parameters
    pub query: Option<QueryParams>,
    /// Body to send
    pub body: Option<RequestBody>,
    /// Response decoding
    pub format: ResponseFormat,
    /// Timeout overriding the transport one
    pub timeout: Option<Duration>,
}

/// Configured HTTP client scoped to a base URL
///
/// Defaults (timeout, credentials, common headers, interceptors) are fixed
/// when the transport is built and never change afterwards.
pub struct Transport {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
    with_credentials: bool,
    default_headers: HeaderMap,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("with_credentials", &self.with_credentials)
            .field("default_headers", &self.default_headers)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl Transport {
    /// Starts building a transport for `base_url`
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder::new(base_url)
    }

    /// Base URL every relative path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default timeout, `None` when requests never time out
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// True when cookies are kept and sent back across requests
    #[must_use]
    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Headers sent with every request unless overridden
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Number of installed response interceptors
    #[must_use]
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Joins `path` to the base URL; absolute URLs are returned unchanged
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Sends a request and runs the outcome through the interceptors
    ///
    /// Non-success status codes are returned as [`AppError::Status`].
    pub async fn request(&self, request: TransportRequest) -> Result<ApiResponse, AppError> {
        let outcome = self.dispatch(request).await;
        self.intercept(outcome).await
    }

    async fn dispatch(&self, request: TransportRequest) -> Result<ApiResponse, AppError> {
        let id = request_id();
        let url = self.resolve_url(&request.url);
        debug!("[{}] {} {}", id, request.method, url);

        let mut headers = request.headers;
        for (name, value) in &self.default_headers {
            if !headers.contains_key(name) {
                headers.insert(name.clone(), value.clone());
            }
        }

        let mut builder = self.client.request(request.method, &url);
        if let Some(query) = &request.query {
            builder = builder.query(&encode_query(query));
        }
        if let Some(timeout) = request.timeout.or(self.timeout) {
            builder = builder.timeout(timeout);
        }
        let url_encoded = is_url_encoded(&headers);
        builder = builder.headers(headers);
        if let Some(body) = request.body {
            builder = attach_body(builder, body, url_encoded)?;
        }

        let response = builder.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let raw = response.bytes().await?;
        debug!("[{}] Response status: {}", id, status);

        if !status.is_success() {
            let body = String::from_utf8_lossy(&raw).into_owned();
            error!("[{}] Request failed with status {}: {}", id, status, body);
            return Err(AppError::Status { status, body });
        }

        Ok(ApiResponse::decode(
            status,
            response_headers,
            raw,
            request.format,
        ))
    }

    async fn intercept(
        &self,
        mut outcome: Result<ApiResponse, AppError>,
    ) -> Result<ApiResponse, AppError> {
        for interceptor in &self.interceptors {
            outcome = match outcome {
                Ok(response) => interceptor.on_response(response).await,
                Err(e) => interceptor.on_error(e).await,
            };
        }
        outcome
    }
}

fn is_url_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn attach_body(
    builder: RequestBuilder,
    body: RequestBody,
    url_encoded: bool,
) -> Result<RequestBuilder, AppError> {
    let builder = match body {
        RequestBody::Json(value) if url_encoded => attach_url_encoded(builder, value)?,
        RequestBody::Json(value) => builder.json(&value),
        RequestBody::Fields(fields) => {
            let value = fields.to_json()?;
            if url_encoded {
                attach_url_encoded(builder, value)?
            } else {
                builder.json(&value)
            }
        }
        RequestBody::Multipart(form) => builder.multipart(form.into_multipart()?),
        RequestBody::Binary(bytes) => builder.body(bytes),
        RequestBody::Text(text) => builder.body(text),
    };
    Ok(builder)
}

/// Objects are form encoded, strings are sent as already encoded text
fn attach_url_encoded(builder: RequestBuilder, value: Value) -> Result<RequestBuilder, AppError> {
    match value {
        Value::Object(map) => Ok(builder.form(&encode_query(&map))),
        Value::String(text) => Ok(builder.body(text)),
        other => Err(AppError::InvalidInput(format!(
            "cannot url-encode a non-object body: {other}"
        ))),
    }
}

/// Flattens parameters into `key=value` pairs
///
/// `null` values are dropped, arrays repeat the key with a `[]` suffix and
/// nested objects are sent as JSON text.
#[must_use]
pub fn encode_query(params: &QueryParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{key}{ARRAY_KEY_SUFFIX}");
                pairs.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(|item| (key.clone(), value_text(item))),
                );
            }
            other => pairs.push((key.clone(), value_text(other))),
        }
    }
    pairs
}

/// Builder for [`Transport`]
pub struct TransportBuilder {
    base_url: String,
    timeout: Option<Duration>,
    with_credentials: bool,
    default_headers: HeaderMap,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl TransportBuilder {
    /// Creates a builder with no timeout, no credentials and no interceptors
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            with_credentials: false,
            default_headers: HeaderMap::new(),
            interceptors: Vec::new(),
        }
    }

    /// Set the default timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keep cookies between requests
    #[must_use]
    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = with_credentials;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Add several common headers
    #[must_use]
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        for (name, value) in &headers {
            self.default_headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Register a response interceptor
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Builds the transport
    pub fn build(self) -> Result<Transport, AppError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(self.with_credentials);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Transport {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            with_credentials: self.with_credentials,
            default_headers: self.default_headers,
            interceptors: self.interceptors,
        })
    }
}
