/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::form::{FormData, FormFields};
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

/// Query parameters of a request, keyed by name
///
/// Numeric keys are represented by their string form.
pub type QueryParams = Map<String, Value>;

/// Content type tag of a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// `application/json`
    #[serde(rename = "application/json")]
    Json,
    /// `multipart/form-data`
    #[serde(rename = "multipart/form-data")]
    FormData,
    /// `application/x-www-form-urlencoded`
    #[serde(rename = "application/x-www-form-urlencoded")]
    UrlEncoded,
}

impl ContentType {
    /// MIME type of this tag
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::FormData => "multipart/form-data",
            ContentType::UrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the response body is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Parse the body as JSON (default)
    #[default]
    Json,
    /// Keep the body as UTF-8 text
    Text,
    /// Keep the raw bytes
    Bytes,
}

/// Body of a request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Any JSON value. Serialized by the transport.
    Json(Value),
    /// Ordered fields that may carry files
    Fields(FormFields),
    /// An already built multipart form
    Multipart(FormData),
    /// Opaque binary payload
    Binary(Bytes),
    /// Plain text payload
    Text(String),
}

impl RequestBody {
    /// Serializes any `Serialize` value into a JSON body
    pub fn json<T: Serialize>(value: &T) -> Result<Self, AppError> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    /// True for object-like bodies that can be turned into form entries
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            RequestBody::Json(Value::Object(_) | Value::Array(_)) | RequestBody::Fields(_)
        )
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<FormFields> for RequestBody {
    fn from(fields: FormFields) -> Self {
        RequestBody::Fields(fields)
    }
}

impl From<FormData> for RequestBody {
    fn from(form: FormData) -> Self {
        RequestBody::Multipart(form)
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Binary(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Binary(Bytes::from(bytes))
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

/// Transport options that can be set per call
///
/// Anything left unset falls back to the transport defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers for this call
    pub headers: HeaderMap,
    /// Timeout for this call
    pub timeout: Option<Duration>,
}

/// Description of a single request
///
/// Built fresh for each call. Every field except `path` is optional:
/// the method defaults to `GET` and the response format to JSON.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    /// Path relative to the transport base URL, or an absolute URL
    pub path: String,
    /// HTTP method
    pub method: Method,
    /// Content type tag of the body
    pub content_type: Option<ContentType>,
    /// Query string parameters
    pub query: Option<QueryParams>,
    /// Response decoding
    pub format: Option<ResponseFormat>,
    /// Request body
    pub body: Option<RequestBody>,
    /// Passthrough transport options
    pub options: RequestOptions,
}

impl RequestParams {
    /// Creates empty parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the content type tag
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Add a single query parameter
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the response format
    #[must_use]
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON body from any serializable value
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, AppError> {
        Ok(self.with_body(RequestBody::json(value)?))
    }

    /// Add a header, replacing any previous value with the same name
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options.headers.insert(name, value);
        self
    }

    /// Add a header from plain strings
    pub fn try_header(self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        Ok(self.with_header(name, value))
    }

    /// Set the timeout for this call
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }
}
