/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Request façade shared by API services
//!
//! [`HttpClient`] wraps a [`Transport`] and exposes one generic
//! [`HttpClient::request`] plus one shorthand per HTTP verb. Before handing a
//! request to the transport it:
//! - merges the transport default headers with the call headers
//! - converts structured bodies into multipart forms for `multipart/form-data`
//! - sets `Content-Type` for JSON and url-encoded bodies
//!
//! # Example
//! ```ignore
//! use api_base::prelude::*;
//!
//! let http = HttpClient::new(transport, HttpClientConfig::default());
//! let response = http
//!     .post("/pets", RequestParams::new().with_body(json!({"name": "rex"}))
//!         .with_content_type(ContentType::Json))
//!     .await?;
//! let pet: Pet = response.json()?;
//! ```

use crate::application::config::HttpClientConfig;
use crate::error::AppError;
use crate::model::form::FormData;
use crate::model::http::{Transport, TransportRequest};
use crate::model::requests::{ContentType, RequestBody, RequestOptions, RequestParams};
use crate::model::responses::ApiResponse;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::Arc;

/// Request façade over a shared [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    transport: Arc<Transport>,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Creates a façade over `transport`
    pub fn new(transport: Arc<Transport>, config: HttpClientConfig) -> Self {
        Self { transport, config }
    }

    /// The underlying transport
    #[must_use]
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// The configuration this façade was created with
    #[must_use]
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Overlays call options on the transport defaults
    ///
    /// Headers are merged key by key, call headers winning over the
    /// transport common headers. A call timeout replaces the transport one.
    #[must_use]
    pub fn merge_request_params(&self, options: RequestOptions) -> RequestOptions {
        let mut headers = self.transport.default_headers().clone();
        overlay_headers(&mut headers, &options.headers);
        RequestOptions {
            headers,
            timeout: options.timeout.or(self.transport.timeout()),
        }
    }

    /// Builds the multipart form for a structured body
    ///
    /// Returns `None` for bodies that are not structured.
    #[must_use]
    pub fn create_form_data(&self, body: &RequestBody) -> Option<FormData> {
        let brackets = self.config.add_square_brackets_to_form_data_array_keys;
        match body {
            RequestBody::Fields(fields) => Some(FormData::from_fields(fields, brackets)),
            RequestBody::Json(value) if body.is_structured() => {
                Some(FormData::from_value(value, brackets))
            }
            _ => None,
        }
    }

    /// Resolves a request descriptor into what the transport sends
    #[must_use]
    pub fn build_request(&self, params: RequestParams) -> TransportRequest {
        let RequestParams {
            path,
            method,
            content_type,
            query,
            format,
            body,
            options,
        } = params;
        let merged = self.merge_request_params(options);

        let body = match (content_type, body) {
            (Some(ContentType::FormData), Some(body)) => match self.create_form_data(&body) {
                Some(form) => Some(RequestBody::Multipart(form)),
                None => Some(body),
            },
            (_, body) => body,
        };

        // the multipart boundary is set by the transport
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type.filter(|c| *c != ContentType::FormData) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
        }
        overlay_headers(&mut headers, &merged.headers);

        TransportRequest {
            method,
            url: path,
            headers,
            query,
            body,
            format: format.unwrap_or_default(),
            timeout: merged.timeout,
        }
    }

    /// Sends a request
    pub async fn request(&self, params: RequestParams) -> Result<ApiResponse, AppError> {
        let request = self.build_request(params);
        self.transport.request(request).await
    }

    async fn request_with(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, AppError> {
        self.request(params.with_method(method).with_path(path))
            .await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(Method::GET, path, params).await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(Method::POST, path, params).await
    }

    /// Makes a PUT request
    pub async fn put(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(Method::PUT, path, params).await
    }

    /// Makes a PATCH request
    pub async fn patch(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(Method::PATCH, path, params).await
    }

    /// Makes a DELETE request
    pub async fn delete(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, AppError> {
        self.request_with(Method::DELETE, path, params).await
    }

    /// Makes a HEAD request
    pub async fn head(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(Method::HEAD, path, params).await
    }

    /// Makes an OPTIONS request
    pub async fn options(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, AppError> {
        self.request_with(Method::OPTIONS, path, params).await
    }

    /// Makes a LINK request
    pub async fn link(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(extension_method("LINK")?, path, params)
            .await
    }

    /// Makes an UNLINK request
    pub async fn unlink(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, AppError> {
        self.request_with(extension_method("UNLINK")?, path, params)
            .await
    }

    /// Makes a PURGE request
    pub async fn purge(&self, path: &str, params: RequestParams) -> Result<ApiResponse, AppError> {
        self.request_with(extension_method("PURGE")?, path, params)
            .await
    }
}

// Every value of an overriding header replaces all values of the same name.
fn overlay_headers(target: &mut HeaderMap, overrides: &HeaderMap) {
    for name in overrides.keys() {
        target.remove(name);
    }
    for (name, value) in overrides {
        target.append(name.clone(), value.clone());
    }
}

fn extension_method(name: &str) -> Result<Method, AppError> {
    Method::from_bytes(name.as_bytes())
        .map_err(|e| AppError::InvalidInput(format!("invalid method {name}: {e}")))
}
